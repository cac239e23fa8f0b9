//! A header carries its codes inline: `Name (CZ-NACE 10, 11)`. Footnotes
//! (`12 viz: …`) are dropped.

use std::sync::LazyLock;

use regex::Regex;

use super::domains_heading;
use crate::parser::classify::{Grammar, TitleContext, TitleLine};
use crate::parser::codes::extract_codes;
use crate::parser::lines::{ROUND_BULLETS, STRIP_NO_HYPHEN};

static FOOTNOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s+viz:").unwrap());
static TITLE_CODES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(CZ-NACE\s+([\d,.\s]+)\)").unwrap());
static TITLE_CODES_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(CZ-NACE[^)]+\)").unwrap());

pub static GRAMMAR: Grammar = Grammar {
    skip,
    bullets: ROUND_BULLETS,
    strip: STRIP_NO_HYPHEN,
    title,
    ..Grammar::BASE
};

fn skip(line: &str) -> bool {
    domains_heading(line) || FOOTNOTE_RE.is_match(line)
}

fn title(line: &str, _: &TitleContext) -> Option<TitleLine> {
    let caps = TITLE_CODES_RE.captures(line)?;
    Some(TitleLine {
        name: TITLE_CODES_STRIP_RE.replace_all(line, "").trim().to_string(),
        codes: extract_codes(&caps[1]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::region::RegionId;
    use crate::parser::regions::classify_with;

    #[test]
    fn headers_carry_codes() {
        let text = "Domény specializace kraje (vertikální)\n\
                    Automotive (CZ-NACE 29, 30.9)\n\
                    • výroba vozidel\n\
                    Kontext a návaznosti na dodavatele\n\
                    12 viz: https://example.cz\n\
                    Bioekonomika (CZ-NACE 01, 02, 10)\n\
                    Životní vědy (CZ-NACE 21)";
        let out = classify_with(RegionId::Stredocesky, "domains", text);
        let names: Vec<_> = out.drafts.iter().map(|d| d.name.as_str()).collect();
        // a header with codes but no description still counts as content
        assert_eq!(names, vec!["Automotive", "Bioekonomika", "Životní vědy"]);
        assert_eq!(out.drafts[0].codes, vec!["29", "30"]);
        assert_eq!(
            out.drafts[0].lines,
            vec!["výroba vozidel", "Kontext a návaznosti na dodavatele"]
        );
        assert_eq!(out.drafts[1].codes, vec!["01", "02", "10"]);
    }
}
