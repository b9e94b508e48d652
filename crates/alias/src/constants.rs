use alloy::primitives::{address, uint, Address, U160};

/// The offset added to an L1 address to produce its L2 alias.
pub const ADDRESS_ALIAS_OFFSET: U160 =
    uint!(0x1111_0000_0000_0000_0000_0000_0000_0000_0000_1111_U160);

/// [`ADDRESS_ALIAS_OFFSET`] rendered as an [`Address`].
pub const ALIAS_OFFSET_ADDRESS: Address = address!("0x1111000000000000000000000000000000001111");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_forms_agree() {
        assert_eq!(Address::from(ADDRESS_ALIAS_OFFSET), ALIAS_OFFSET_ADDRESS);
        assert_eq!(U160::from_be_bytes(**ALIAS_OFFSET_ADDRESS), ADDRESS_ALIAS_OFFSET);
    }
}
