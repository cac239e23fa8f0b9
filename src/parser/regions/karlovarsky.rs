//! Plain headers with a quirk: while the current domain has no description
//! yet, the next non-bullet line replaces its name whatever its shape. Once
//! a description exists, only short capitalized lines start a new domain.

use super::{domains_heading, link_codes};
use crate::parser::classify::{looks_like_title, Grammar, TitleContext, TitleLine};
use crate::parser::config::TitleBounds;
use crate::parser::lines::{BULLETS_AND_DASH, STRIP_ALL};

/// Title window once the current domain has a description.
const NEXT_TITLE: TitleBounds = TitleBounds::below(80);

pub static GRAMMAR: Grammar = Grammar {
    skip: domains_heading,
    annotation: link_codes,
    bullets: BULLETS_AND_DASH,
    strip: STRIP_ALL,
    title,
    ..Grammar::BASE
};

fn title(line: &str, ctx: &TitleContext) -> Option<TitleLine> {
    if ctx.active && !ctx.active_has_description {
        return Some(TitleLine::plain(line));
    }
    let bounds = if ctx.active { NEXT_TITLE } else { ctx.bounds };
    looks_like_title(line, &bounds).then(|| TitleLine::plain(line))
}

// ── Tests ──
