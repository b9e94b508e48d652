use crate::{codec, Direction, InvalidAddressError};

/// How strictly address casing is checked before aliasing.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChecksumPolicy {
    /// Only the `0x` + 40 hex digit format is checked.
    #[default]
    FormatOnly,
    /// Mixed-case input must carry a valid [EIP-55] checksum. All-lowercase
    /// and all-uppercase input is accepted as-is.
    ///
    /// [EIP-55]: https://eips.ethereum.org/EIPS/eip-55
    Eip55,
}

impl ChecksumPolicy {
    /// Check `input` against this policy.
    pub fn check(self, input: &str) -> Result<(), InvalidAddressError> {
        let address = codec::parse(input)?;
        if self == Self::FormatOnly {
            return Ok(());
        }

        let digits = input.strip_prefix("0x").unwrap_or(input);
        let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
        if !(has_lower && has_upper) {
            return Ok(());
        }

        let checksummed = address.to_checksum(None);
        if checksummed[2..] == *digits {
            Ok(())
        } else {
            Err(InvalidAddressError::checksum(input))
        }
    }
}

/// Render a valid address string in EIP-55 checksummed casing.
pub fn to_checksummed(address: &str) -> Result<String, InvalidAddressError> {
    codec::parse(address).map(|address| address.to_checksum(None))
}

/// Applies and undoes address aliases under a [`ChecksumPolicy`].
///
/// Output is always the lowercase encoding produced by [`apply_alias`] and
/// [`undo_alias`].
///
/// [`apply_alias`]: crate::apply_alias
/// [`undo_alias`]: crate::undo_alias
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AliasCodec {
    policy: ChecksumPolicy,
}

impl AliasCodec {
    /// Create a codec enforcing `policy`.
    pub const fn new(policy: ChecksumPolicy) -> Self {
        Self { policy }
    }

    /// Get the checksum policy.
    pub const fn policy(&self) -> ChecksumPolicy {
        self.policy
    }

    /// Compute the L2 alias of an L1 address.
    pub fn apply(&self, address: &str) -> Result<String, InvalidAddressError> {
        self.policy.check(address)?;
        codec::apply_alias(address)
    }

    /// Recover the L1 address behind an L2 alias.
    pub fn undo(&self, address: &str) -> Result<String, InvalidAddressError> {
        self.policy.check(address)?;
        codec::undo_alias(address)
    }

    /// Convert `address` in the given direction.
    pub fn convert(
        &self,
        direction: Direction,
        address: &str,
    ) -> Result<String, InvalidAddressError> {
        match direction {
            Direction::L1ToL2 => self.apply(address),
            Direction::L2ToL1 => self.undo(address),
        }
    }
}
