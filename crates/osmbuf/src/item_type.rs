// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item type tags for records stored in untyped memory buffers.
//!
//! Every record in a buffer starts with a type tag that tells the reading
//! side how to interpret the bytes that follow. The tag exists in four
//! representations, all convertible here:
//!
//! | Representation | Example (way) | Use |
//! |----------------|---------------|-----|
//! | numeric code (u16) | `0x02` | in-buffer/on-the-wire byte value |
//! | wire char | `'w'` | compact textual/log form, `Display` output |
//! | long name | `"way"` | human-facing diagnostics |
//! | NWR index | `1` | dense array dispatch over node/way/relation |
//!
//! # Wire Contract
//!
//! Numeric codes and wire chars are consumed by existing buffers and
//! external tools. They must never be renumbered or reassigned. The code
//! space is sparse on purpose: 0x1x codes are list sub-structures, 0x4x
//! codes are area ring geometry, 0x80 is the changeset discussion. Nothing
//! decodes that grouping; only the exact values matter.

use crate::error::{DecodeResult, UnknownItemType};

/// Type tag discriminating buffer records and their sub-structures.
///
/// A closed enumeration over a 16-bit code space. `Undefined` (0x00) is the
/// "no/unknown type" sentinel; every lenient conversion collapses
/// unrecognized input onto it rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
#[derive(Default)]
pub enum ItemType {
    /// Sentinel: no type / unknown type.
    #[default]
    Undefined = 0x00,

    // --- Primary entities (0x01-0x05) ---
    /// Node entity.
    Node = 0x01,
    /// Way entity.
    Way = 0x02,
    /// Relation entity.
    Relation = 0x03,
    /// Area entity (derived from ways/relations, not a wire primary).
    Area = 0x04,
    /// Changeset entity.
    Changeset = 0x05,

    // --- List sub-structures (0x1x) ---
    /// List of tags attached to an entity.
    TagList = 0x11,
    /// List of node references inside a way.
    WayNodeList = 0x12,
    /// List of relation members.
    RelationMemberList = 0x13,
    /// List of relation members with the member objects stored inline.
    RelationMemberListWithFullMembers = 0x23,

    // --- Ring sub-structures, area geometry (0x4x) ---
    /// Outer ring of an area.
    OuterRing = 0x40,
    /// Inner ring (hole) of an area.
    InnerRing = 0x41,

    // --- Discussion sub-structure (0x8x) ---
    /// Discussion thread attached to a changeset.
    ChangesetDiscussion = 0x80,
}

impl ItemType {
    /// Item type for an NWR index: 0 -> `Node`, 1 -> `Way`, 2 -> `Relation`.
    ///
    /// Precondition: `index <= 2`, checked by `debug_assert!` only. This is
    /// a hot-path helper for dispatch loops that already know the index is
    /// in range; release builds do not pay for a check, and an out-of-range
    /// index yields an unspecified NWR tag. Validate first if the index
    /// comes from outside.
    #[inline]
    #[must_use]
    pub const fn from_nwr_index(index: usize) -> Self {
        debug_assert!(index <= 2);
        match index {
            0 => Self::Node,
            1 => Self::Way,
            _ => Self::Relation,
        }
    }

    /// NWR index for this tag: `Node` -> 0, `Way` -> 1, `Relation` -> 2.
    ///
    /// Precondition: `self` is `Node`, `Way` or `Relation` (codes 1-3),
    /// checked by `debug_assert!` only. The index is `code - 1`; calling
    /// this on any other tag in a release build returns a garbage index.
    /// Callers that are not inside an NWR dispatch loop should test
    /// [`ItemType::is_nwr`] first.
    #[inline]
    #[must_use]
    pub const fn nwr_index(self) -> usize {
        let code = self as u16;
        debug_assert!(code >= 1 && code <= 3);
        (code as usize).wrapping_sub(1)
    }

    /// Item type for a wire character.
    ///
    /// Total: the 12 assigned characters map to their tags, every other
    /// character (including the `'X'` sentinel itself) maps to `Undefined`.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            'n' => Self::Node,
            'w' => Self::Way,
            'r' => Self::Relation,
            'a' => Self::Area,
            'c' => Self::Changeset,
            'T' => Self::TagList,
            'N' => Self::WayNodeList,
            'M' => Self::RelationMemberList,
            'F' => Self::RelationMemberListWithFullMembers,
            'O' => Self::OuterRing,
            'I' => Self::InnerRing,
            'D' => Self::ChangesetDiscussion,
            _ => Self::Undefined, // 'X'
        }
    }

    /// Canonical single-character wire encoding; `Undefined` -> `'X'`.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Node => 'n',
            Self::Way => 'w',
            Self::Relation => 'r',
            Self::Area => 'a',
            Self::Changeset => 'c',
            Self::TagList => 'T',
            Self::WayNodeList => 'N',
            Self::RelationMemberList => 'M',
            Self::RelationMemberListWithFullMembers => 'F',
            Self::OuterRing => 'O',
            Self::InnerRing => 'I',
            Self::ChangesetDiscussion => 'D',
            Self::Undefined => 'X',
        }
    }

    /// Long human-readable identifier; `Undefined` -> `"undefined"`.
    ///
    /// Diagnostics only, not part of the byte-level wire contract, but kept
    /// stable for existing logs and tooling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
            Self::Area => "area",
            Self::Changeset => "changeset",
            Self::TagList => "tag_list",
            Self::WayNodeList => "way_node_list",
            Self::RelationMemberList => "relation_member_list",
            Self::RelationMemberListWithFullMembers => {
                "relation_member_list_with_full_members"
            }
            Self::OuterRing => "outer_ring",
            Self::InnerRing => "inner_ring",
            Self::ChangesetDiscussion => "changeset_discussion",
            Self::Undefined => "undefined",
        }
    }

    /// Inverse of [`ItemType::name`]: parse a long identifier.
    ///
    /// Strict: returns `None` for anything that is not one of the 13 names
    /// (the 12 defined tags plus `"undefined"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "node" => Some(Self::Node),
            "way" => Some(Self::Way),
            "relation" => Some(Self::Relation),
            "area" => Some(Self::Area),
            "changeset" => Some(Self::Changeset),
            "tag_list" => Some(Self::TagList),
            "way_node_list" => Some(Self::WayNodeList),
            "relation_member_list" => Some(Self::RelationMemberList),
            "relation_member_list_with_full_members" => {
                Some(Self::RelationMemberListWithFullMembers)
            }
            "outer_ring" => Some(Self::OuterRing),
            "inner_ring" => Some(Self::InnerRing),
            "changeset_discussion" => Some(Self::ChangesetDiscussion),
            "undefined" => Some(Self::Undefined),
            _ => None,
        }
    }

    /// Lenient decode of a raw type code.
    ///
    /// Total: any code not in the table yields `Undefined`. Dispatchers that
    /// must distinguish "sentinel" from "corrupt" use the strict
    /// `TryFrom<u16>` impl or [`decode_type`] instead.
    #[must_use]
    pub const fn from_u16(value: u16) -> Self {
        match value {
            0x01 => Self::Node,
            0x02 => Self::Way,
            0x03 => Self::Relation,
            0x04 => Self::Area,
            0x05 => Self::Changeset,
            0x11 => Self::TagList,
            0x12 => Self::WayNodeList,
            0x13 => Self::RelationMemberList,
            0x23 => Self::RelationMemberListWithFullMembers,
            0x40 => Self::OuterRing,
            0x41 => Self::InnerRing,
            0x80 => Self::ChangesetDiscussion,
            _ => Self::Undefined,
        }
    }

    /// Canonical numeric code as written into buffers.
    #[inline]
    #[must_use]
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Returns true for the primary entity tags (codes 0x01-0x05).
    #[must_use]
    pub const fn is_entity(self) -> bool {
        matches!(
            self,
            Self::Node | Self::Way | Self::Relation | Self::Area | Self::Changeset
        )
    }

    /// Returns true for `Node`, `Way` and `Relation` -- the domain of the
    /// NWR index helpers.
    #[inline]
    #[must_use]
    pub const fn is_nwr(self) -> bool {
        matches!(self, Self::Node | Self::Way | Self::Relation)
    }

    /// Returns true for the area ring geometry tags (0x4x group).
    #[must_use]
    pub const fn is_ring(self) -> bool {
        matches!(self, Self::OuterRing | Self::InnerRing)
    }

    /// Returns true for everything except the `Undefined` sentinel.
    #[inline]
    #[must_use]
    pub const fn is_defined(self) -> bool {
        !matches!(self, Self::Undefined)
    }
}

/// Writes the single wire character, e.g. `w` for `Way`.
///
/// This is the canonical short textual form; use [`ItemType::name`] for the
/// long form.
impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<ItemType> for u16 {
    fn from(item_type: ItemType) -> Self {
        item_type.to_u16()
    }
}

/// Strict decode of a raw type code: unknown codes are an error instead of
/// collapsing onto `Undefined`. `0x00` itself decodes to `Undefined`.
impl TryFrom<u16> for ItemType {
    type Error = UnknownItemType;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match ItemType::from_u16(value) {
            ItemType::Undefined if value != 0 => Err(UnknownItemType),
            item_type => Ok(item_type),
        }
    }
}

/// Parses the long identifier form (`"way_node_list"`), not the wire char.
impl std::str::FromStr for ItemType {
    type Err = UnknownItemType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::from_name(s).ok_or(UnknownItemType)
    }
}

/// Strict decode of the type field of a record header.
///
/// Same semantics as `ItemType::try_from`, plus a debug log line naming the
/// offending code. An unknown code here almost always means buffer
/// corruption or a producer/consumer version skew; the caller should abort
/// the current decode and surface the error, not the whole process.
pub fn decode_type(raw: u16) -> DecodeResult<ItemType> {
    match ItemType::try_from(raw) {
        Ok(item_type) => Ok(item_type),
        Err(e) => {
            log::debug!("[ITEM-TYPE] Unknown type code in record header: 0x{raw:02x}");
            Err(e)
        }
    }
}
