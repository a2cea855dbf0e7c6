use std::fmt;

use sha1::{Digest, Sha1};

use crate::common::error::ConfigError;

/// SHA-1 digest width in bytes.
pub const DIGEST_LEN: usize = 20;

/// Which orientation of the target a candidate matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Direct,
    /// The candidate hashes to the target with its bytes reversed.
    Reversed,
}

impl MatchKind {
    /// Suffix printed after a match.
    pub fn annotation(self) -> &'static str {
        match self {
            MatchKind::Direct => "",
            MatchKind::Reversed => " (reversed input)",
        }
    }
}

/// The digest to find, in both orientations.
///
/// A hash typed in by hand may have been transcribed in the wrong byte
/// order, so the reversed pattern is derived once up front and checked
/// alongside the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    digest: [u8; DIGEST_LEN],
    reversed: [u8; DIGEST_LEN],
}

impl Target {
    pub fn new(digest: [u8; DIGEST_LEN]) -> Self {
        let mut reversed = digest;
        reversed.reverse();
        Target { digest, reversed }
    }

    /// Decode a 40-digit hex string. Surrounding whitespace is ignored.
    pub fn from_hex(input: &str) -> Result<Self, ConfigError> {
        let trimmed = input.trim();
        let bytes = hex::decode(trimmed).map_err(|source| match source {
            // Odd digit count is a length problem, not a bad digit.
            hex::FromHexError::OddLength => ConfigError::OddDigitCount(trimmed.len()),
            source => ConfigError::InvalidHex {
                input: trimmed.to_string(),
                source,
            },
        })?;
        let digest: [u8; DIGEST_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::InvalidLength(bytes.len()))?;
        Ok(Target::new(digest))
    }

    /// Target whose direct pattern is the SHA-1 of `data`.
    pub fn of(data: &[u8]) -> Self {
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&Sha1::digest(data));
        Target::new(digest)
    }

    #[inline]
    pub fn digest(&self) -> &[u8; DIGEST_LEN] {
        &self.digest
    }

    #[inline]
    pub fn reversed(&self) -> &[u8; DIGEST_LEN] {
        &self.reversed
    }

    /// Compare a computed digest against both patterns, direct first.
    #[inline]
    pub fn compare(&self, digest: &[u8]) -> Option<MatchKind> {
        if digest == self.digest {
            Some(MatchKind::Direct)
        } else if digest == self.reversed {
            Some(MatchKind::Reversed)
        } else {
            None
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.digest))
    }
}

/// Hash `candidate` with a reusable hasher and check it against `target`.
/// The hasher is left reset for the next call.
#[inline]
pub fn evaluate(target: &Target, candidate: &[u8], hasher: &mut Sha1) -> Option<MatchKind> {
    hasher.update(candidate);
    let digest = hasher.finalize_reset();
    target.compare(&digest)
}
