use crate::{InvalidAddressError, ADDRESS_ALIAS_OFFSET};
use alloy::primitives::{Address, U160, U256};

/// Number of hex digits in an address.
const ADDRESS_HEX_LEN: usize = 40;

/// Strip the optional `0x` prefix.
fn digits(input: &str) -> &str {
    input.strip_prefix("0x").unwrap_or(input)
}

/// True if `input` is an optional `0x` prefix followed by exactly 40 hex
/// digits. Casing is not checked, see [`ChecksumPolicy`] for that.
///
/// [`ChecksumPolicy`]: crate::ChecksumPolicy
pub fn validate(input: &str) -> bool {
    let digits = digits(input);
    digits.len() == ADDRESS_HEX_LEN && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a validated address string.
pub(crate) fn parse(input: &str) -> Result<Address, InvalidAddressError> {
    if !validate(input) {
        return Err(InvalidAddressError::format(input));
    }
    hex::decode_to_array::<_, 20>(digits(input))
        .map(Address::from)
        .map_err(|_| InvalidAddressError::format(input))
}

/// Decode an address string into its big-endian 160-bit integer value.
pub fn decode(address: &str) -> Result<U160, InvalidAddressError> {
    parse(address).map(|address| U160::from_be_bytes(**address))
}

/// Render a 160-bit value as a `0x`-prefixed, zero-padded, lowercase address.
pub fn encode(value: U160) -> String {
    render(Address::from(value))
}

/// Render the low 160 bits of `value` as an address. Higher bits are
/// discarded, i.e. the value is reduced modulo 2^160.
pub fn encode_wide(value: U256) -> String {
    let bytes = value.to_be_bytes::<32>();
    render(Address::from_slice(&bytes[12..]))
}

fn render(address: Address) -> String {
    format!("0x{}", hex::encode(address))
}

/// Alias an address by adding the address alias offset.
pub fn alias_address(address: Address) -> Address {
    U160::from_be_bytes::<20>(**address).wrapping_add(ADDRESS_ALIAS_OFFSET).into()
}

/// Unalias an address by subtracting the address alias offset.
pub fn unalias_address(address: Address) -> Address {
    U160::from_be_bytes::<20>(**address).wrapping_sub(ADDRESS_ALIAS_OFFSET).into()
}

/// Compute the L2 alias of an L1 address.
///
/// Returns `(address + offset) mod 2^160` as a lowercase address string.
pub fn apply_alias(address: &str) -> Result<String, InvalidAddressError> {
    parse(address).map(alias_address).map(render)
}

/// Recover the L1 address behind an L2 alias.
///
/// Returns `(address - offset) mod 2^160` as a lowercase address string,
/// wrapping around on underflow.
pub fn undo_alias(address: &str) -> Result<String, InvalidAddressError> {
    parse(address).map(unalias_address).map(render)
}
