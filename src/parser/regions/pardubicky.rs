//! Plain headers over narrative paragraphs; `Stěžejní CZ NACE pro tuto
//! doménu` closes a domain.

use std::sync::LazyLock;

use regex::Regex;

use super::{capture_tail, domains_heading};
use crate::parser::classify::{looks_like_title, Grammar, TitleContext, TitleLine};
use crate::parser::lines::{contains_any, BULLETS_AND_DASH, STRIP_ALL};

static CODES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Stěžejní\s+CZ\s*-?NACE\s+pro\s+tuto\s+doménu[:\s]*(.*)").unwrap()
});

/// Lowercased words marking field labels rather than headers.
const NOT_TITLES: &[&str] = &["zaměření", "stěžejní", "preferované"];

pub static GRAMMAR: Grammar = Grammar {
    skip: domains_heading,
    annotation: codes_line,
    bullets: BULLETS_AND_DASH,
    strip: STRIP_ALL,
    title,
    ..Grammar::BASE
};

fn codes_line(line: &str) -> Option<&str> {
    capture_tail(&CODES_RE, line)
}

fn title(line: &str, ctx: &TitleContext) -> Option<TitleLine> {
    let label = contains_any(&line.to_lowercase(), NOT_TITLES);
    (!label && looks_like_title(line, &ctx.bounds)).then(|| TitleLine::plain(line))
}
