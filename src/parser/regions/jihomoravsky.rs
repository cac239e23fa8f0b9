//! One bullet per domain, codes inline as `(těžiště v CZ-NACE …)`. Bullets
//! without that reference belong to the cluster diagram and are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::classify::{no_title, BulletMode, Grammar};
use crate::parser::codes::extract_codes;
use crate::parser::lines::{char_len, clean_domain_name, STRIP_NO_HYPHEN};
use crate::parser::record::DomainDraft;

static FOCUS_CODES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(těžišt[eě]\s+v\s+CZ-NACE\s+([\d,. ačásti]+)\)").unwrap());
static FOCUS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\(těžišt[eě][^)]+\)").unwrap());

pub static GRAMMAR: Grammar = Grammar {
    bullets: &['•'],
    strip: STRIP_NO_HYPHEN,
    bullet_mode: BulletMode::Record(focus_record),
    title: no_title,
    keep_continuation: false,
    ..Grammar::BASE
};

fn focus_record(text: &str) -> Option<DomainDraft> {
    if !text.contains("CZ-NACE") {
        return None;
    }
    let codes = FOCUS_CODES_RE
        .captures(text)
        .map(|caps| extract_codes(&caps[1]))
        .unwrap_or_default();
    let name = FOCUS_RE.replace_all(text, "");
    let name = name.trim();
    if char_len(name) <= 3 {
        return None;
    }
    let mut draft = DomainDraft::new(clean_domain_name(name), None);
    draft.codes = codes;
    Some(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::region::RegionId;
    use crate::parser::regions::classify_with;

    #[test]
    fn each_bullet_is_a_domain() {
        let text = "Domény specializace kraje/ Klíčová odvětví\n\
                    • Strojírenství (těžiště v CZ-NACE 28, 29)\n\
                    • Software a IT služby (těžiště v CZ-NACE 62 a 63)\n\
                    • Uzel diagramu bez kódu\n\
                    popisný odstavec";
        let out = classify_with(RegionId::Jihomoravsky, "domains", text);
        let names: Vec<_> = out.drafts.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Strojírenství", "Software a IT služby"]);
        assert_eq!(out.drafts[0].codes, vec!["28", "29"]);
        assert_eq!(out.drafts[1].codes, vec!["62", "63"]);
        assert!(out.drafts.iter().all(|d| d.lines.is_empty()));
    }

    #[test]
    fn focus_phrase_variants() {
        let draft = focus_record("Zdravotnictví (těžište v CZ-NACE 86)").unwrap();
        assert_eq!(draft.name, "Zdravotnictví");
        assert_eq!(draft.codes, vec!["86"]);

        // OCR-mangled phrase: the parenthetical stays in the name, no codes
        let draft = focus_record("Zdraví (tezište v CZ-NACE 21)").unwrap();
        assert!(draft.name.contains("CZ-NACE"));
        assert!(draft.codes.is_empty());
    }
}
