//! OCR-noisy pages: garbage lines are dropped before classification.

use super::{domain_link_codes, domains_heading};
use crate::parser::classify::{looks_like_title, Grammar, TitleContext, TitleLine};
use crate::parser::lines::{contains_any, BULLETS_AND_DASH, STRIP_ALL};

/// Capitalized narrative lines that are not headers.
const NOT_TITLES: &[&str] = &["Informuje", "předpokládat", "perspektiv"];

pub static GRAMMAR: Grammar = Grammar {
    reject_garbage: true,
    skip: domains_heading,
    annotation: domain_link_codes,
    bullets: BULLETS_AND_DASH,
    strip: STRIP_ALL,
    title,
    ..Grammar::BASE
};

fn title(line: &str, ctx: &TitleContext) -> Option<TitleLine> {
    (looks_like_title(line, &ctx.bounds) && !contains_any(line, NOT_TITLES)).then(|| TitleLine::plain(line))
}
