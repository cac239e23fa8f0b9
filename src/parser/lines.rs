//! Predicates and cleanups shared by every region grammar.

use std::sync::LazyLock;

use regex::Regex;

static PAGE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,3}$").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub const ROUND_BULLETS: &[char] = &['•', '●'];
pub const BULLETS_AND_DASH: &[char] = &['•', '●', '–'];
pub const BULLETS_AND_DASHES: &[char] = &['•', '●', '–', '-'];

/// Glyphs removed from the front of a bullet line.
pub const STRIP_ALL: &[char] = &['•', '●', '–', '-', ' '];
pub const STRIP_NO_HYPHEN: &[char] = &['•', '●', '–', ' '];

pub fn is_page_marker(line: &str) -> bool {
    let line = line.trim();
    line.starts_with("=== PAGE") || PAGE_NUMBER_RE.is_match(line)
}

/// OCR leftovers: very short lines, or long lines that are mostly spaces.
pub fn is_garbage(line: &str) -> bool {
    let line = line.trim();
    let len = line.chars().count();
    if len < 3 {
        return true;
    }
    if len > 10 && line.chars().any(char::is_alphabetic) {
        let spaces = line.chars().filter(|c| *c == ' ').count();
        if spaces as f64 / len as f64 > 0.4 {
            return true;
        }
    }
    false
}

pub fn is_noise(line: &str, reject_garbage: bool) -> bool {
    line.trim().is_empty() || is_page_marker(line) || (reject_garbage && is_garbage(line))
}

pub fn strip_glyphs<'a>(line: &'a str, glyphs: &[char]) -> &'a str {
    line.trim_start_matches(glyphs).trim()
}

pub fn starts_upper(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
}

pub fn char_len(line: &str) -> usize {
    line.chars().count()
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Trailing commas, then trailing dots, then whitespace runs.
pub fn clean_domain_name(name: &str) -> String {
    let name = name.trim().trim_end_matches(',').trim_end_matches('.');
    collapse_whitespace(name)
}

/// Split `Name – description` on the first en dash, or on a minus sign when
/// there is no en dash.
pub fn split_dash(text: &str) -> (&str, &str) {
    let split = text.split_once('–').or_else(|| text.split_once('−'));
    match split {
        Some((name, desc)) => (name.trim(), desc.trim()),
        None => (text.trim(), ""),
    }
}

pub fn contains_any(line: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| line.contains(n))
}

// ── Tests ──
