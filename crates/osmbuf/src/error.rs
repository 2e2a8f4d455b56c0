// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for consumers of the item-type registry.

/// A tag value that type-checked as an `ItemType` but is not handled.
///
/// The registry's own conversions are total and never produce this; it is
/// raised by the strict decodes and by downstream dispatch code that
/// switches over all known tags and hits one it has no case for. Either way
/// it usually means buffer corruption or a version skew between producer
/// and consumer. It is an ordinary recoverable error: abort the current
/// decode, keep the process alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownItemType;

impl std::fmt::Display for UnknownItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown item type")
    }
}

impl std::error::Error for UnknownItemType {}

/// Result type for strict tag decoding.
pub type DecodeResult<T> = Result<T, UnknownItemType>;
