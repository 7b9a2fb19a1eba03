//! Property-based tests for the formatter and validator.

use phone_mcp_server::validation::{NIGERIA, UNITED_KINGDOM, US_CANADA};
use phone_mcp_server::{extract_digits, format, is_valid};
use proptest::prelude::*;

/// Strategy for digit strings of a given length range.
fn digits(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..10, len)
        .prop_map(|ds| ds.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Strategy for messy user input: digits mixed with typical noise.
fn messy_input() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => (0u8..10).prop_map(|d| char::from(b'0' + d)),
            1 => prop::sample::select(vec![' ', '-', '(', ')', '+', '.', 'x', 'é', '٣']),
        ],
        0..30,
    )
    .prop_map(|cs| cs.into_iter().collect())
}

/// Property: output holds only digits and single spaces, and removing the
/// spaces gives the extracted digits truncated to 10.
#[test]
fn prop_format_shape() {
    proptest!(|(raw in any::<String>())| {
        let formatted = format(&raw);
        let out = formatted.as_str();

        prop_assert!(out.chars().all(|c| c.is_ascii_digit() || c == ' '));
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));

        let expected: String = extract_digits(&raw).as_str().chars().take(10).collect();
        prop_assert_eq!(out.replace(' ', ""), expected);
    });
}

/// Property: formatting its own output reproduces the same output.
#[test]
fn prop_format_idempotent() {
    proptest!(|(raw in messy_input())| {
        let once = format(&raw);
        let twice = format(once.as_str());
        prop_assert_eq!(once, twice);
    });
}

/// Property: Nigeria accepts exactly the 10-digit strings not starting with 0.
#[test]
fn prop_nigeria_rule() {
    proptest!(|(ds in digits(0..=16))| {
        let expected = ds.len() == 10 && !ds.starts_with('0');
        prop_assert_eq!(is_valid(&ds, NIGERIA), expected);
    });
}

/// Property: US/Canada accepts exactly 10 digits, any leading digit.
#[test]
fn prop_us_canada_rule() {
    proptest!(|(ds in digits(0..=16))| {
        prop_assert_eq!(is_valid(&ds, US_CANADA), ds.len() == 10);
    });
}

/// Property: UK accepts 10 or 11 digits.
#[test]
fn prop_uk_rule() {
    proptest!(|(ds in digits(0..=16))| {
        prop_assert_eq!(is_valid(&ds, UNITED_KINGDOM), ds.len() == 10 || ds.len() == 11);
    });
}

/// Property: unknown codes accept 7 to 15 digits inclusive.
#[test]
fn prop_default_rule() {
    proptest!(|(ds in digits(0..=20), code in "\\+[5-8][0-9]{2}")| {
        prop_assert_eq!(is_valid(&ds, &code), (7..=15).contains(&ds.len()));
    });
}

/// Property: validation only sees digits, so noise never changes the verdict.
#[test]
fn prop_noise_does_not_change_verdict() {
    proptest!(|(raw in messy_input())| {
        let ds = extract_digits(&raw);
        for code in [NIGERIA, US_CANADA, UNITED_KINGDOM, "+999"] {
            prop_assert_eq!(is_valid(&raw, code), is_valid(ds.as_str(), code));
        }
    });
}
