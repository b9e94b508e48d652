/// Error type for [`crate::config`] module. Captures errors related to loading
/// configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Error parsing boolean environment variable
    #[error("failed to parse boolean environment variable {key}: {value}")]
    ParseBool {
        /// The variable name.
        key: String,
        /// The rejected value.
        value: String,
    },
}

impl ConfigError {
    /// Unparseable boolean env var.
    pub fn parse_bool(key: &str, value: impl Into<String>) -> Self {
        ConfigError::ParseBool { key: key.to_string(), value: value.into() }
    }
}
