//! Lettered domains `A.`–`D.`; every other line belongs to the current
//! letter, and a letter is kept even when nothing follows it.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::classify::{FlushRule, Grammar, TitleContext, TitleLine};
use crate::parser::lines::{BULLETS_AND_DASHES, STRIP_ALL};

static LETTERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-D]\.\s+(.+)").unwrap());

pub static GRAMMAR: Grammar = Grammar {
    bullets: BULLETS_AND_DASHES,
    strip: STRIP_ALL,
    title: lettered,
    min_fragment_chars: 4,
    flush: FlushRule::Always,
    ..Grammar::BASE
};

fn lettered(line: &str, _: &TitleContext) -> Option<TitleLine> {
    LETTERED_RE.captures(line).map(|caps| TitleLine::plain(&caps[1]))
}
