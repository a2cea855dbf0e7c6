use super::*;
use crate::common::error::ConfigError;
use sha1::{Digest, Sha1};

const ABC_SHA1: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";
const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

fn reversed_hex(hex_str: &str) -> String {
    let mut bytes = hex::decode(hex_str).unwrap();
    bytes.reverse();
    hex::encode(bytes)
}

// ── Parsing ─────────────────────────────────────────────────────────

#[test]
fn test_from_hex_roundtrips_display() {
    let target = Target::from_hex(ABC_SHA1).unwrap();
    assert_eq!(target.to_string(), ABC_SHA1);
    assert_eq!(target.digest()[0], 0xa9);
    assert_eq!(target.digest()[19], 0x9d);
}

#[test]
fn test_from_hex_accepts_uppercase_and_whitespace() {
    let upper = format!("  {}\n", ABC_SHA1.to_uppercase());
    assert_eq!(
        Target::from_hex(&upper).unwrap(),
        Target::from_hex(ABC_SHA1).unwrap()
    );
}

#[test]
fn test_from_hex_rejects_short_digest() {
    // A 19-byte digest, as in a truncated copy-paste.
    let short = &ABC_SHA1[..38];
    assert_eq!(
        Target::from_hex(short),
        Err(ConfigError::InvalidLength(19))
    );
}

#[test]
fn test_from_hex_rejects_long_digest() {
    let long = format!("{}00", ABC_SHA1);
    assert_eq!(Target::from_hex(&long), Err(ConfigError::InvalidLength(21)));
}

#[test]
fn test_from_hex_rejects_odd_length() {
    let odd = &ABC_SHA1[..39];
    assert_eq!(Target::from_hex(odd), Err(ConfigError::OddDigitCount(39)));
}

#[test]
fn test_from_hex_odd_length_reports_digit_count() {
    // 41 digits must not read as "got 20" after "expected 20 bytes".
    let long = format!("{}0", ABC_SHA1);
    let err = Target::from_hex(&long).unwrap_err();
    assert_eq!(err, ConfigError::OddDigitCount(41));
    assert_eq!(
        err.to_string(),
        "invalid hash length: expected 40 hex digits, got 41"
    );
}

#[test]
fn test_from_hex_rejects_non_hex() {
    let bad = format!("zz{}", &ABC_SHA1[2..]);
    assert!(matches!(
        Target::from_hex(&bad),
        Err(ConfigError::InvalidHex { .. })
    ));
}

#[test]
fn test_from_hex_empty() {
    assert_eq!(Target::from_hex(""), Err(ConfigError::InvalidLength(0)));
}

#[test]
fn test_reversed_pattern() {
    let target = Target::from_hex(ABC_SHA1).unwrap();
    let mut expected = *target.digest();
    expected.reverse();
    assert_eq!(target.reversed(), &expected);
}

#[test]
fn test_of_matches_from_hex() {
    assert_eq!(Target::of(b"abc"), Target::from_hex(ABC_SHA1).unwrap());
    assert_eq!(Target::of(b""), Target::from_hex(EMPTY_SHA1).unwrap());
}

// ── evaluate ────────────────────────────────────────────────────────

#[test]
fn test_evaluate_direct() {
    let target = Target::from_hex(ABC_SHA1).unwrap();
    let mut hasher = Sha1::new();
    assert_eq!(
        evaluate(&target, b"abc", &mut hasher),
        Some(MatchKind::Direct)
    );
}

#[test]
fn test_evaluate_reversed_is_not_direct() {
    let target = Target::from_hex(&reversed_hex(ABC_SHA1)).unwrap();
    let mut hasher = Sha1::new();
    assert_eq!(
        evaluate(&target, b"abc", &mut hasher),
        Some(MatchKind::Reversed)
    );
}

#[test]
fn test_evaluate_no_match() {
    let target = Target::from_hex(ABC_SHA1).unwrap();
    let mut hasher = Sha1::new();
    assert_eq!(evaluate(&target, b"abd", &mut hasher), None);
    assert_eq!(evaluate(&target, b"", &mut hasher), None);
}

#[test]
fn test_evaluate_resets_hasher_between_calls() {
    let target = Target::from_hex(ABC_SHA1).unwrap();
    let mut hasher = Sha1::new();
    // A leftover "ab" in the hasher would turn the second call into "ababc".
    assert_eq!(evaluate(&target, b"ab", &mut hasher), None);
    assert_eq!(
        evaluate(&target, b"abc", &mut hasher),
        Some(MatchKind::Direct)
    );
}

#[test]
fn test_palindromic_digest_reports_direct() {
    let mut digest = [0u8; DIGEST_LEN];
    for i in 0..DIGEST_LEN / 2 {
        digest[i] = i as u8;
        digest[DIGEST_LEN - 1 - i] = i as u8;
    }
    let target = Target::new(digest);
    assert_eq!(target.compare(&digest), Some(MatchKind::Direct));
}

#[test]
fn test_annotation() {
    assert_eq!(MatchKind::Direct.annotation(), "");
    assert_eq!(MatchKind::Reversed.annotation(), " (reversed input)");
}
