//! Sector (CZ-NACE division) code extraction.
//!
//! Any two-digit numeral counts, so inline fragments can pick up unrelated
//! numbers such as truncated years or list indices. That over-capture is
//! inherited from the source layout and kept as is.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{2})(?:\.[0-9]+)?\b").unwrap());
static LONG_NUMERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]{3,}\b").unwrap());

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeScan {
    pub codes: Vec<String>,
    /// Numerals that looked like codes but fall outside 1..=99.
    pub rejected: Vec<String>,
}

/// Two-digit codes in `fragment`, subdivisions dropped, 1..=99 only,
/// first occurrence order.
pub fn extract_codes(fragment: &str) -> Vec<String> {
    scan_codes(fragment).codes
}

pub fn scan_codes(fragment: &str) -> CodeScan {
    let mut rejected = Vec::new();
    let codes = CODE_RE
        .captures_iter(fragment)
        .map(|caps| caps[1].to_string())
        .filter(|code| {
            let valid = code.parse::<u8>().is_ok_and(|v| (1..=99).contains(&v));
            if !valid {
                rejected.push(code.clone());
            }
            valid
        })
        .unique()
        .collect();

    rejected.extend(LONG_NUMERAL_RE.find_iter(fragment).map(|m| m.as_str().to_string()));

    CodeScan { codes, rejected }
}

// ── Tests ──
