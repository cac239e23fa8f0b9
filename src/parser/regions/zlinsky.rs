//! Two domain lists. Vertical domains sit under numbered tier headers
//! (`1) …`); horizontal ones form their own section and all share one tier.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::classify::{looks_like_title, Grammar, Marker, TitleContext, TitleLine};
use crate::parser::lines::{contains_any, BULLETS_AND_DASH, STRIP_ALL};

static TIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d)\)\s+(.+)").unwrap());

const TIER_CHARS: usize = 50;

/// Lowercased phrases of tier explanations that wrap onto header-like lines.
const SECTOR_NOTES: &[&str] = &["odvetví", "odvetvích", "jsou přitom", "tato odvětvová"];

pub static GRAMMAR: Grammar = Grammar {
    skip: vertical_heading,
    marker: tier,
    bullets: BULLETS_AND_DASH,
    strip: STRIP_ALL,
    attach: sector_note,
    title: vertical_title,
    ..Grammar::BASE
};

/// Runs even when the vertical section is missing.
pub static HORIZONTAL: Grammar = Grammar {
    skip: horizontal_heading,
    bullets: BULLETS_AND_DASH,
    strip: STRIP_ALL,
    initial_tier: Some("horizontální"),
    ..Grammar::BASE
};

fn vertical_heading(line: &str) -> bool {
    contains_any(line, &["Odvětvové (aplikační)", "Tematické priority"])
}

fn horizontal_heading(line: &str) -> bool {
    line.contains("Horizontální")
}

fn tier(line: &str) -> Option<Marker> {
    TIER_RE
        .captures(line)
        .map(|caps| Marker::Tier(caps[2].chars().take(TIER_CHARS).collect()))
}

fn sector_note(line: &str) -> bool {
    contains_any(&line.to_lowercase(), SECTOR_NOTES)
}

fn vertical_title(line: &str, ctx: &TitleContext) -> Option<TitleLine> {
    (!sector_note(line) && looks_like_title(line, &ctx.bounds)).then(|| TitleLine::plain(line))
}
