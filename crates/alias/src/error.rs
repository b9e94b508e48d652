/// Error returned when an input string is not an acceptable address.
///
/// Carries the offending input so callers can show it back to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAddressError {
    /// The input is not `0x` followed by 40 hex digits.
    #[error("not a valid address: {0}")]
    Format(String),
    /// The input is mixed-case but the casing is not a valid EIP-55 checksum.
    #[error("invalid address checksum: {0}")]
    Checksum(String),
}

impl InvalidAddressError {
    /// Malformed address string.
    pub fn format(input: &str) -> Self {
        Self::Format(input.to_string())
    }

    /// Bad EIP-55 checksum.
    pub fn checksum(input: &str) -> Self {
        Self::Checksum(input.to_string())
    }

    /// The input that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::Format(input) | Self::Checksum(input) => input,
        }
    }
}
