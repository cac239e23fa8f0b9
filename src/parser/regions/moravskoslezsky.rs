//! Numbered domains (`3. Energetika`). An intro runs up to the first
//! numbered line; each domain's description only starts after its
//! `Zaměření domény:` line, and a `Hlavní vazby na CZ-NACE` line closes it.

use std::sync::LazyLock;

use regex::Regex;

use super::capture_tail;
use crate::parser::classify::{Grammar, Marker, TitleContext, TitleLine};
use crate::parser::lines::contains_any;

static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.+)").unwrap());
static CODES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Hlavní vazby na CZ[\-\s]?NACE\s*[\-–:]\s*(.*)").unwrap());

/// Narrative sentences from the strategy text around the domain list.
const INTRO: &[&str] = &[
    "Tematická specializace",
    "Z hlediska EDP",
    "Z pohledu koncových",
    "Z pohledu technologických",
    "byly formulovány",
    "prioritám při rozvoji",
    "aktualizaci RIS MSK",
    "Současně s tím",
    "příležitosti pro více",
    "specializace vychází",
    "vzájemně propojených",
];

pub static GRAMMAR: Grammar = Grammar {
    preamble_exit: Some(numbered),
    skip: intro,
    marker,
    annotation: codes_line,
    bullets: &[],
    title,
    awaits_body: true,
    ..Grammar::BASE
};

fn numbered(line: &str) -> bool {
    NUMBERED_RE.is_match(line)
}

fn intro(line: &str) -> bool {
    contains_any(line, INTRO)
}

fn marker(line: &str) -> Option<Marker> {
    if line.contains("Zaměření domény") {
        return Some(Marker::BeginBody);
    }
    // numbered lines are titles even inside the emerging part
    if numbered(line) {
        return None;
    }
    if line.contains("Emerging domén") || line.contains("Emerging oblasti") {
        return Some(Marker::Break);
    }
    None
}

fn codes_line(line: &str) -> Option<&str> {
    capture_tail(&CODES_RE, line)
}

fn title(line: &str, _: &TitleContext) -> Option<TitleLine> {
    if line.contains("Zaměření") {
        return None;
    }
    NUMBERED_RE.captures(line).map(|caps| TitleLine::plain(&caps[2]))
}
