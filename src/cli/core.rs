//! Command-line surface of `funsha1`: flags, startup validation and the
//! exit-status contract.

use clap::Parser;

use crate::common::error::ConfigError;
use crate::counter::ValueRange;
use crate::search::{Match, SearchConfig};
use crate::target::Target;

pub const TOOL_NAME: &str = "funsha1";

/// A match was found.
pub const EXIT_FOUND: i32 = 0;
/// Bad hash, bad range or unusable worker pool; nothing was searched.
pub const EXIT_CONFIG_ERROR: i32 = 1;
/// A bounded search exhausted `--max-len` without a match.
pub const EXIT_NOT_FOUND: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "funsha1",
    version,
    about = "Brute-force a SHA-1 preimage by exhaustive enumeration"
)]
pub struct Cli {
    /// Only try printable ASCII bytes (0x20-0x7e)
    #[arg(short = 'a', long = "only-ascii")]
    pub only_ascii: bool,

    /// Only try bytes in LOW-HIGH (decimal or 0x-prefixed hex bounds)
    #[arg(
        short = 'r',
        long = "range",
        value_name = "LOW-HIGH",
        conflicts_with = "only_ascii"
    )]
    pub range: Option<String>,

    /// Give up after exhausting all candidates of this length
    #[arg(short = 'm', long = "max-len", value_name = "N")]
    pub max_len: Option<usize>,

    /// Number of worker threads (default: one per CPU)
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    pub jobs: Option<usize>,

    /// Don't print a progress line after each round
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Log per-round diagnostics to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// SHA-1 digest to invert, as 40 hex digits
    pub hash: String,
}

impl Cli {
    /// Validate every input before any search work starts.
    pub fn configure(&self) -> Result<(Target, SearchConfig), ConfigError> {
        let target = Target::from_hex(&self.hash)?;

        let range = if self.only_ascii {
            ValueRange::ASCII
        } else if let Some(ref spec) = self.range {
            ValueRange::parse(spec)?
        } else {
            ValueRange::FULL
        };

        Ok((
            target,
            SearchConfig {
                range,
                max_len: self.max_len,
                threads: self.jobs,
            },
        ))
    }

    /// Default log level, overridden by `RUST_LOG`.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Process exit status for a finished search.
pub fn exit_status(found: &Option<Match>) -> i32 {
    match found {
        Some(_) => EXIT_FOUND,
        None => EXIT_NOT_FOUND,
    }
}
