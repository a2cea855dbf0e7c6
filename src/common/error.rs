use thiserror::Error;

/// Startup configuration errors. All of them are fatal and raised before
/// any search work begins.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid hash '{input}': {source}")]
    InvalidHex {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("invalid hash length: expected 20 bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid hash length: expected 40 hex digits, got {0}")]
    OddDigitCount(usize),

    #[error("invalid byte range '{0}': expected LOW-HIGH")]
    InvalidRange(String),

    #[error("empty byte range: low 0x{low:02x} is above high 0x{high:02x}")]
    EmptyRange { low: u8, high: u8 },

    #[error("cannot build worker pool: {0}")]
    ThreadPool(String),
}
