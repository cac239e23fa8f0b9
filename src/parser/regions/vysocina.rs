//! Plain headers; codes appear inline as `(NACE 10, 11)` or `(CZ-NACE …)`
//! in bullets and continuation lines and are cut out of the description.

use std::sync::LazyLock;

use regex::Regex;

use super::domains_heading;
use crate::parser::classify::Grammar;
use crate::parser::codes::{scan_codes, CodeScan};
use crate::parser::lines::{BULLETS_AND_DASH, STRIP_ALL};

static INLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((?:CZ-)?NACE\s+([\d,. a]+)\)").unwrap());
static INLINE_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((?:CZ-)?NACE[^)]+\)").unwrap());

pub static GRAMMAR: Grammar = Grammar {
    skip: domains_heading,
    bullets: BULLETS_AND_DASH,
    strip: STRIP_ALL,
    inline_codes: Some(split_inline),
    ..Grammar::BASE
};

fn split_inline(text: &str) -> (String, CodeScan) {
    let mut scan = CodeScan::default();
    for caps in INLINE_RE.captures_iter(text) {
        let found = scan_codes(&caps[1]);
        scan.codes.extend(found.codes);
        scan.rejected.extend(found.rejected);
    }
    (INLINE_STRIP_RE.replace_all(text, "").trim().to_string(), scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::region::RegionId;
    use crate::parser::regions::classify_with;

    #[test]
    fn inline_codes_leave_description() {
        let text = "Domény specializace Kraje Vysočina\n\
                    Dřevozpracující průmysl\n\
                    • výroba nábytku (NACE 31)\n\
                    • (CZ-NACE 16.2)\n\
                    a navazující služby (NACE 02 a 16)\n\
                    Strojírenství a doprava\n\
                    • komponenty (NACE 28, 29)";
        let out = classify_with(RegionId::Vysocina, "domains", text);
        assert_eq!(out.drafts.len(), 2);
        assert_eq!(out.drafts[0].lines, vec!["výroba nábytku", "a navazující služby"]);
        assert_eq!(out.drafts[0].codes, vec!["31", "16", "02", "16"]);
        assert_eq!(out.drafts[1].codes, vec!["28", "29"]);
    }

    #[test]
    fn codes_alone_keep_a_domain() {
        let out = classify_with(RegionId::Vysocina, "domains", "Dřevozpracující průmysl\n• (NACE 16)");
        assert_eq!(out.drafts.len(), 1);
        assert!(out.drafts[0].lines.is_empty());
        assert_eq!(out.drafts[0].codes, vec!["16"]);
    }
}
