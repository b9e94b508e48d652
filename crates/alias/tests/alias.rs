use l2_alias::{
    apply_alias, decode, encode, undo_alias, validate, AliasCodec, ChecksumPolicy, Direction,
    InvalidAddressError, ADDRESS_ALIAS_OFFSET,
};
use proptest::prelude::*;

/// Render 20 bytes as an address, uppercasing hex letters where `upper` is
/// set, and optionally dropping the `0x` prefix.
fn render(bytes: [u8; 20], upper: &[bool], prefixed: bool) -> String {
    let digits: String = hex::encode(bytes)
        .chars()
        .zip(upper.iter().copied())
        .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
        .collect();
    if prefixed {
        format!("0x{digits}")
    } else {
        digits
    }
}

fn normalize(address: &str) -> String {
    format!("0x{}", address.strip_prefix("0x").unwrap_or(address).to_lowercase())
}

fn address_strategy() -> impl Strategy<Value = String> {
    (any::<[u8; 20]>(), proptest::collection::vec(any::<bool>(), 40), any::<bool>())
        .prop_map(|(bytes, upper, prefixed)| render(bytes, &upper, prefixed))
}

proptest! {
    #[test]
    fn undo_inverts_apply(address in address_strategy()) {
        let aliased = apply_alias(&address).unwrap();
        prop_assert_eq!(undo_alias(&aliased).unwrap(), normalize(&address));
    }

    #[test]
    fn apply_inverts_undo(address in address_strategy()) {
        let unaliased = undo_alias(&address).unwrap();
        prop_assert_eq!(apply_alias(&unaliased).unwrap(), normalize(&address));
    }

    #[test]
    fn decode_encode_normalizes(address in address_strategy()) {
        prop_assert!(validate(&address));
        prop_assert_eq!(encode(decode(&address).unwrap()), normalize(&address));
    }

    #[test]
    fn apply_adds_offset(address in address_strategy()) {
        let aliased = apply_alias(&address).unwrap();
        let expected = decode(&address).unwrap().wrapping_add(ADDRESS_ALIAS_OFFSET);
        prop_assert_eq!(decode(&aliased).unwrap(), expected);
    }

    #[test]
    fn wrong_length_rejected(digits in "[0-9a-f]{0,80}") {
        prop_assume!(digits.len() != 40);
        let address = format!("0x{digits}");
        prop_assert_eq!(apply_alias(&address), Err(InvalidAddressError::format(&address)));
        prop_assert_eq!(undo_alias(&address), Err(InvalidAddressError::format(&address)));
    }

    #[test]
    fn non_hex_rejected(
        address in address_strategy(),
        idx in 0usize..40,
        junk in "[g-zG-Z _!\\-]",
    ) {
        let digits = address.strip_prefix("0x").unwrap_or(&address);
        let mut bad = String::from("0x");
        bad.push_str(&digits[..idx]);
        bad.push_str(&junk);
        bad.push_str(&digits[idx + 1..]);
        prop_assert!(!validate(&bad));
        prop_assert!(apply_alias(&bad).is_err());
        prop_assert!(undo_alias(&bad).is_err());
    }

    #[test]
    fn validate_is_pure(input in ".*") {
        prop_assert_eq!(validate(&input), validate(&input));
    }
}

#[test]
fn boundary_values() {
    assert_eq!(
        undo_alias("0x0000000000000000000000000000000000000000").unwrap(),
        "0xeeeeffffffffffffffffffffffffffffffffeeef"
    );
    assert_eq!(
        apply_alias("0xffffffffffffffffffffffffffffffffffffffff").unwrap(),
        "0x1111000000000000000000000000000000001110"
    );
    assert_eq!(
        apply_alias("0x0000000000000000000000000000000000000001").unwrap(),
        "0x1111000000000000000000000000000000001112"
    );
}

#[test]
fn malformed_inputs() {
    for input in [
        "",
        "0x",
        "0x1111",
        "1111000000000000000000000000000000001111ff",
        "0x11110000000000000000000000000000000011.1",
        "0X1111000000000000000000000000000000001111",
        "XE7338O073KYGTWWZN0F2WZ0R8PX5ZPPZS",
    ] {
        let err = apply_alias(input).unwrap_err();
        assert_eq!(err.to_string(), format!("not a valid address: {input}"));
        assert_eq!(undo_alias(input).unwrap_err().input(), input);
    }
}

#[test]
fn strict_codec_round_trip() {
    let codec = AliasCodec::new(ChecksumPolicy::Eip55);
    let l1 = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    let l2 = codec.convert(Direction::L1ToL2, l1).unwrap();
    assert_eq!(codec.convert(Direction::L2ToL1, &l2).unwrap(), l1.to_lowercase());
}
