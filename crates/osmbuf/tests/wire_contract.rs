// SPDX-License-Identifier: Apache-2.0 OR MIT
//
// Wire-contract pinning for the item-type registry.
//
// The numeric codes and wire characters here are read and written by
// existing buffers and external tools; these tests fix them against
// literals so no refactor can shift them silently. The long names are not
// byte-level wire data but are pinned too, for log/tooling compatibility.

use osmbuf::{decode_type, ItemType, UnknownItemType};

/// One row per defined tag: (tag, code, wire char, long name).
const CONTRACT: [(ItemType, u16, char, &str); 13] = [
    (ItemType::Undefined, 0x00, 'X', "undefined"),
    (ItemType::Node, 0x01, 'n', "node"),
    (ItemType::Way, 0x02, 'w', "way"),
    (ItemType::Relation, 0x03, 'r', "relation"),
    (ItemType::Area, 0x04, 'a', "area"),
    (ItemType::Changeset, 0x05, 'c', "changeset"),
    (ItemType::TagList, 0x11, 'T', "tag_list"),
    (ItemType::WayNodeList, 0x12, 'N', "way_node_list"),
    (ItemType::RelationMemberList, 0x13, 'M', "relation_member_list"),
    (
        ItemType::RelationMemberListWithFullMembers,
        0x23,
        'F',
        "relation_member_list_with_full_members",
    ),
    (ItemType::OuterRing, 0x40, 'O', "outer_ring"),
    (ItemType::InnerRing, 0x41, 'I', "inner_ring"),
    (ItemType::ChangesetDiscussion, 0x80, 'D', "changeset_discussion"),
];

#[test]
fn test_contract_table() {
    for (tag, code, wire_char, name) in CONTRACT {
        assert_eq!(tag.to_u16(), code, "code for {name}");
        assert_eq!(u16::from(tag), code, "From<ItemType> for {name}");
        assert_eq!(tag.to_char(), wire_char, "wire char for {name}");
        assert_eq!(tag.name(), name);
        assert_eq!(tag.to_string(), wire_char.to_string(), "Display for {name}");

        // Each representation decodes back to the same tag.
        assert_eq!(ItemType::from_u16(code), tag);
        assert_eq!(ItemType::try_from(code), Ok(tag));
        assert_eq!(ItemType::from_name(name), Some(tag));
        if tag != ItemType::Undefined {
            assert_eq!(ItemType::from_char(wire_char), tag);
        }
    }
}

#[test]
fn test_lenient_decode_is_total_over_u16() {
    let codes: Vec<u16> = CONTRACT.iter().map(|&(_, code, _, _)| code).collect();
    for raw in 0..=u16::MAX {
        let tag = ItemType::from_u16(raw);
        if codes.contains(&raw) {
            assert_eq!(tag.to_u16(), raw);
        } else {
            assert_eq!(tag, ItemType::Undefined, "code 0x{raw:04x} must be lenient");
            assert_eq!(ItemType::try_from(raw), Err(UnknownItemType));
        }
    }
}

#[test]
fn test_char_decode_is_total_over_ascii() {
    let wire_chars: Vec<char> = CONTRACT
        .iter()
        .filter(|&&(tag, ..)| tag != ItemType::Undefined)
        .map(|&(_, _, c, _)| c)
        .collect();
    for byte in 0u8..=0x7F {
        let c = byte as char;
        let tag = ItemType::from_char(c);
        if wire_chars.contains(&c) {
            assert_eq!(tag.to_char(), c);
        } else {
            assert_eq!(tag, ItemType::Undefined, "char {c:?} must be lenient");
        }
    }
}

#[test]
fn test_char_decode_is_lenient_for_arbitrary_unicode() {
    let mut rng = fastrand::Rng::with_seed(0x05_11_12_13);
    for _ in 0..10_000 {
        let c = rng.char(..);
        if c.is_ascii() {
            continue; // exhaustively covered above
        }
        assert_eq!(ItemType::from_char(c), ItemType::Undefined);
    }
}

#[test]
fn test_end_to_end_way() {
    // Encode side: way -> 'w', byte 0x02 lands in the buffer.
    let tag = ItemType::Way;
    assert_eq!(tag.to_char(), 'w');
    assert_eq!(tag.to_u16(), 0x02);

    // Decode side: both forms come back as way.
    assert_eq!(ItemType::from_char('w'), ItemType::Way);
    assert_eq!(decode_type(0x02), Ok(ItemType::Way));
}

#[test]
fn test_end_to_end_outer_ring() {
    let tag = ItemType::OuterRing;
    assert_eq!(tag.to_char(), 'O');
    assert_eq!(tag.name(), "outer_ring");
    assert_eq!(tag.to_u16(), 0x40);
    assert_eq!(decode_type(0x40), Ok(ItemType::OuterRing));
}

#[test]
fn test_decode_type_rejects_gap_codes() {
    // Codes in the gaps of the sparse table (e.g. between changeset 0x05
    // and tag_list 0x11) are corruption, not sentinels.
    for raw in [0x06, 0x10, 0x14, 0x22, 0x42, 0x7F, 0x81, 0xFF] {
        assert_eq!(decode_type(raw), Err(UnknownItemType));
    }
    // The sentinel code itself is valid on the strict path.
    assert_eq!(decode_type(0x00), Ok(ItemType::Undefined));
}

#[test]
fn test_unknown_item_type_message() {
    let err = decode_type(0x06).unwrap_err();
    assert_eq!(err.to_string(), "unknown item type");
}
