//! Plain headers; short `…:` sub-headers stay inside the current domain.

use super::{domain_link_codes, domains_heading};
use crate::parser::classify::Grammar;
use crate::parser::lines::{char_len, BULLETS_AND_DASH, STRIP_ALL};

pub static GRAMMAR: Grammar = Grammar {
    skip: domains_heading,
    annotation: domain_link_codes,
    bullets: BULLETS_AND_DASH,
    strip: STRIP_ALL,
    attach: sub_header,
    ..Grammar::BASE
};

fn sub_header(line: &str) -> bool {
    line.ends_with(':') && char_len(line) < 50
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::region::RegionId;
    use crate::parser::regions::classify_with;

    #[test]
    fn sub_headers_attach_to_domain() {
        let text = "Domény specializace kraje\n\
                    Zdravé stárnutí\n\
                    Činnost institucí:\n\
                    • zdravotní péče\n\
                    Tradiční činnosti:\n\
                    • lázeňství\n\
                    Vazba domény na CZ-NACE: 86; 87; 88\n\
                    Vyspělé materiály\n\
                    Vazby domén na CZ NACE: 20, 22";
        let out = classify_with(RegionId::Kralovehradecky, "domains", text);
        assert_eq!(out.drafts.len(), 2);
        assert_eq!(
            out.drafts[0].lines,
            vec!["Činnost institucí:", "zdravotní péče", "Tradiční činnosti:", "lázeňství"]
        );
        assert_eq!(out.drafts[0].codes, vec!["86", "87", "88"]);
        // code line closes a domain even without description
        assert_eq!(out.drafts[1].name, "Vyspělé materiály");
        assert_eq!(out.drafts[1].codes, vec!["20", "22"]);
    }
}
