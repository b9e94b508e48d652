//! `l2-alias`: print the L2 alias of an L1 address, or the L1 address behind
//! an L2 alias.

#![warn(missing_debug_implementations, missing_docs, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]

use clap::{Parser, Subcommand};
use eyre::Result;
use l2_alias::{to_checksummed, AliasConfig, ChecksumPolicy, Direction};

/// Compute rollup bridge address aliases.
#[derive(Debug, Parser)]
#[command(name = "l2-alias", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Reject mixed-case addresses whose EIP-55 checksum does not match.
    #[arg(long, global = true)]
    strict: bool,

    /// Print the result in EIP-55 checksummed casing.
    #[arg(long, global = true)]
    checksum: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Get the L2 alias of an L1 address.
    Apply {
        /// The L1 address.
        address: String,
    },
    /// Get the L1 address behind an L2 alias.
    Undo {
        /// The L2 alias.
        address: String,
    },
    /// Convert an address in the given direction.
    Convert {
        /// `apply`/`l1-to-l2` or `undo`/`l2-to-l1`.
        #[arg(short, long)]
        direction: Direction,
        /// The address to convert.
        address: String,
    },
}

impl Command {
    fn into_parts(self) -> (Direction, String) {
        match self {
            Self::Apply { address } => (Direction::L1ToL2, address),
            Self::Undo { address } => (Direction::L2ToL1, address),
            Self::Convert { direction, address } => (direction, address),
        }
    }
}

impl Cli {
    /// Flags set on the command line win over the environment.
    fn overlay(&self, mut config: AliasConfig) -> AliasConfig {
        if self.strict {
            config.checksum_policy = ChecksumPolicy::Eip55;
        }
        if self.checksum {
            config.checksum_output = true;
        }
        config
    }
}

fn run(cli: Cli, env: AliasConfig) -> Result<String> {
    let config = cli.overlay(env);
    let (direction, address) = cli.command.into_parts();
    tracing::debug!(%direction, %address, policy = ?config.checksum_policy, "converting address");

    let converted = config.codec().convert(direction, &address)?;
    if config.checksum_output {
        return Ok(to_checksummed(&converted)?);
    }
    Ok(converted)
}

/// Initialize tracing. Logs go to stderr so stdout carries only the result.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let env = AliasConfig::from_env()?;

    match run(cli, env) {
        Ok(converted) => {
            println!("{converted}");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(%err, "conversion failed");
            Err(err)
        }
    }
}
