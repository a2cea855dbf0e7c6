//! Bounded-radix candidate counter.
//!
//! A candidate is read as a big-endian number whose digits are the byte
//! values of a [`ValueRange`]; the last byte is the least significant digit.
//! Bytes below `low` are sentinels: they are never evaluated, and the next
//! [`advance`] snaps them into range instead of incrementing.
use std::fmt;

use crate::common::error::ConfigError;

/// Sentinel written into every byte when a length class is exhausted.
/// It is below any legal `low`, so the next advance normalizes it.
pub const SENTINEL: u8 = 0;

/// Inclusive range of byte values allowed in any position of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    low: u8,
    high: u8,
}

impl ValueRange {
    /// Every byte value, `[0x00, 0xFF]`.
    pub const FULL: ValueRange = ValueRange {
        low: 0x00,
        high: 0xFF,
    };

    /// Printable ASCII, `[0x20, 0x7E]`.
    pub const ASCII: ValueRange = ValueRange {
        low: 0x20,
        high: 0x7E,
    };

    pub fn new(low: u8, high: u8) -> Result<Self, ConfigError> {
        if low > high {
            return Err(ConfigError::EmptyRange { low, high });
        }
        Ok(ValueRange { low, high })
    }

    /// Parse `LOW-HIGH`, each bound decimal or `0x`-prefixed hex.
    pub fn parse(spec: &str) -> Result<Self, ConfigError> {
        let bad = || ConfigError::InvalidRange(spec.to_string());
        let (lo, hi) = spec.trim().split_once('-').ok_or_else(bad)?;
        let low = parse_bound(lo).ok_or_else(bad)?;
        let high = parse_bound(hi).ok_or_else(bad)?;
        ValueRange::new(low, high)
    }

    #[inline]
    pub fn low(self) -> u8 {
        self.low
    }

    #[inline]
    pub fn high(self) -> u8 {
        self.high
    }

    #[inline]
    pub fn contains(self, b: u8) -> bool {
        b >= self.low && b <= self.high
    }

    /// Number of distinct digit values (1..=256).
    #[inline]
    pub fn radix(self) -> u32 {
        self.high as u32 - self.low as u32 + 1
    }

    /// Number of candidates in a length class, saturating at `u128::MAX`.
    pub fn class_size(self, len: usize) -> u128 {
        let radix = self.radix() as u128;
        (0..len).fold(1u128, |acc, _| acc.saturating_mul(radix))
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        ValueRange::FULL
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}-0x{:02x}", self.low, self.high)
    }
}

fn parse_bound(s: &str) -> Option<u8> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16).ok()
    } else {
        s.parse::<u8>().ok()
    }
}

/// Snap every byte below `low` up to `low`.
/// Returns true if anything was snapped.
#[inline]
pub fn normalize(range: ValueRange, candidate: &mut [u8]) -> bool {
    let mut snapped = false;
    for b in candidate.iter_mut() {
        if *b < range.low {
            *b = range.low;
            snapped = true;
        }
    }
    snapped
}

/// Advance `candidate` to the next candidate of its length class.
///
/// Two phases:
/// 1. If any byte is below `low`, all such bytes are snapped to `low` and
///    that counts as the step.
/// 2. Otherwise the least significant digit below `high` is incremented and
///    the digits carried over restart at `low`.
///
/// Returns true on overflow: every digit was at `high`, all bytes are now
/// [`SENTINEL`], and the caller must grow the candidate by one byte.
#[inline]
pub fn advance(range: ValueRange, candidate: &mut [u8]) -> bool {
    if normalize(range, candidate) {
        return false;
    }
    for idx in (0..candidate.len()).rev() {
        if candidate[idx] < range.high {
            candidate[idx] += 1;
            for b in &mut candidate[idx + 1..] {
                *b = range.low;
            }
            return false;
        }
    }
    candidate.fill(SENTINEL);
    true
}

/// Grow an overflowed candidate by one leading byte and bring it to the
/// first candidate of the new length class.
pub fn grow(range: ValueRange, candidate: &mut Vec<u8>) {
    candidate.insert(0, SENTINEL);
    normalize(range, candidate);
}

/// First candidate of a length class: every digit at `low`.
pub fn first_of_class(range: ValueRange, len: usize) -> Vec<u8> {
    vec![range.low; len]
}
