// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # osmbuf - OSM buffer type-tag registry
//!
//! The type tags that discriminate OSM-style geospatial records (and their
//! internal sub-structures) stored contiguously in untyped memory buffers,
//! with total conversions between the tag, its single-character wire form,
//! its long diagnostic name, and the dense NWR index used for array
//! dispatch over node/way/relation.
//!
//! This is the closed contract the buffer encoders, decoders and
//! dispatchers of the larger system agree on; the numeric codes and wire
//! characters defined here are byte-for-byte stable.
//!
//! ## Quick Start
//!
//! ```rust
//! use osmbuf::ItemType;
//!
//! // The tag round-trips through its compact wire character...
//! let tag = ItemType::from_char('w');
//! assert_eq!(tag, ItemType::Way);
//! assert_eq!(tag.to_string(), "w");
//!
//! // ...and its numeric code is the byte written into buffers.
//! assert_eq!(tag.to_u16(), 0x02);
//! assert_eq!(ItemType::from_u16(0x02), ItemType::Way);
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ItemType`] | Closed `repr(u16)` tag enumeration with all conversions |
//! | [`UnknownItemType`] | Recoverable error for tag values a consumer cannot handle |
//! | [`NwrArray`] | `[T; 3]` container indexed by node/way/relation tag |
//!
//! ## Strict vs Lenient Decoding
//!
//! The conversions on [`ItemType`] are total and collapse unrecognized
//! input onto the `Undefined` sentinel (`'X'` / `"undefined"` / `0x00`).
//! Code that must treat an unrecognized code as corruption uses the strict
//! path instead: `ItemType::try_from(raw)` or [`decode_type`], which fail
//! with [`UnknownItemType`].
//!
//! ## Features
//!
//! - `serde` - `Serialize`/`Deserialize` derives on [`ItemType`] (off by
//!   default; the wire contract is the numeric code, not a serde format).

pub mod error;
pub mod item_type;
pub mod nwr_array;

pub use error::{DecodeResult, UnknownItemType};
pub use item_type::{decode_type, ItemType};
pub use nwr_array::NwrArray;
