//! L1 to L2 address aliasing.
//!
//! When a contract on the host chain (L1) sends a message through a rollup
//! bridge, the rollup (L2) sees the message as coming from an _aliased_
//! address: the L1 address plus [`ADDRESS_ALIAS_OFFSET`], modulo 2^160. This
//! lets L2 contracts tell direct L2 calls apart from calls relayed from L1.
//!
//! This crate validates address strings, converts them to and from 160-bit
//! integers, and applies or undoes the alias offset.
//!
//! ```
//! use l2_alias::{apply_alias, undo_alias};
//!
//! let alias = apply_alias("0x0000000000000000000000000000000000000001").unwrap();
//! assert_eq!(alias, "0x1111000000000000000000000000000000001112");
//! assert_eq!(undo_alias(&alias).unwrap(), "0x0000000000000000000000000000000000000001");
//! ```

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod checksum;
pub use checksum::{to_checksummed, AliasCodec, ChecksumPolicy};

mod codec;
pub use codec::{
    alias_address, apply_alias, decode, encode, encode_wide, unalias_address, undo_alias, validate,
};

mod config;
pub use config::{
    env_utils, AliasConfig, ConfigError, CHECKSUM_OUTPUT_ENV, STRICT_CHECKSUM_ENV,
};

mod constants;
pub use constants::{ADDRESS_ALIAS_OFFSET, ALIAS_OFFSET_ADDRESS};

mod direction;
pub use direction::{Direction, ParseDirectionError};

mod error;
pub use error::InvalidAddressError;
