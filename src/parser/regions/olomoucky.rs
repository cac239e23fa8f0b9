//! One bullet per domain, `Name – description`. No codes.

use super::{dash_record, domains_heading};
use crate::parser::classify::{no_title, BulletMode, Grammar};
use crate::parser::lines::{ROUND_BULLETS, STRIP_NO_HYPHEN};

pub static GRAMMAR: Grammar = Grammar {
    skip: domains_heading,
    bullets: ROUND_BULLETS,
    strip: STRIP_NO_HYPHEN,
    bullet_mode: BulletMode::Record(dash_record),
    title: no_title,
    keep_continuation: false,
    ..Grammar::BASE
};
