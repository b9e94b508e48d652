use crate::{apply_alias, undo_alias, InvalidAddressError};
use std::{fmt, str::FromStr};

/// The accepted direction names as a string.
const KNOWN_DIRECTIONS: &str = "apply, l1-to-l2, undo, l2-to-l1";

/// Error type for parsing a [`Direction`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDirectionError {
    /// The direction name is not recognized.
    #[error("direction {0} is not parseable. supported directions: {KNOWN_DIRECTIONS}")]
    Unknown(String),
}

/// Which way an address crosses the bridge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// An L1 address becomes its L2 alias.
    L1ToL2,
    /// An L2 alias becomes the L1 address it stands for.
    L2ToL1,
}

impl Direction {
    /// The opposite direction.
    pub const fn inverse(self) -> Self {
        match self {
            Self::L1ToL2 => Self::L2ToL1,
            Self::L2ToL1 => Self::L1ToL2,
        }
    }

    /// Convert `address` in this direction.
    pub fn convert(self, address: &str) -> Result<String, InvalidAddressError> {
        match self {
            Self::L1ToL2 => apply_alias(address),
            Self::L2ToL1 => undo_alias(address),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L1ToL2 => f.write_str("l1-to-l2"),
            Self::L2ToL1 => f.write_str("l2-to-l1"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "apply" | "l1-to-l2" | "l1tol2" => Ok(Self::L1ToL2),
            "undo" | "l2-to-l1" | "l2tol1" => Ok(Self::L2ToL1),
            _ => Err(ParseDirectionError::Unknown(s)),
        }
    }
}
