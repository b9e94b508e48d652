mod error;
pub use error::ConfigError;

pub mod env_utils;

use crate::{AliasCodec, ChecksumPolicy};

/// Environment variable enabling EIP-55 checksum enforcement.
pub const STRICT_CHECKSUM_ENV: &str = "L2_ALIAS_STRICT_CHECKSUM";

/// Environment variable enabling EIP-55 checksummed output.
pub const CHECKSUM_OUTPUT_ENV: &str = "L2_ALIAS_CHECKSUM_OUTPUT";

/// Configuration for converting addresses.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AliasConfig {
    /// How strictly input casing is checked.
    pub checksum_policy: ChecksumPolicy,
    /// Render results in EIP-55 checksummed casing instead of lowercase.
    pub checksum_output: bool,
}

impl AliasConfig {
    /// Load the configuration from the environment. Unset variables fall back
    /// to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let strict = env_utils::load_bool_opt(STRICT_CHECKSUM_ENV)?.unwrap_or_default();
        let checksum_output = env_utils::load_bool_opt(CHECKSUM_OUTPUT_ENV)?.unwrap_or_default();
        let config = Self {
            checksum_policy: if strict { ChecksumPolicy::Eip55 } else { ChecksumPolicy::FormatOnly },
            checksum_output,
        };
        tracing::debug!(?config, "loaded alias config from environment");
        Ok(config)
    }

    /// Build the codec this configuration describes.
    pub const fn codec(&self) -> AliasCodec {
        AliasCodec::new(self.checksum_policy)
    }
}
