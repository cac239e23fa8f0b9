//! Plain capitalized headers, bullet descriptions, and a
//! `Vazba na CZ-NACE` line closing each domain.

use super::{domains_heading, link_codes};
use crate::parser::classify::Grammar;
use crate::parser::lines::{BULLETS_AND_DASHES, STRIP_ALL};

pub static GRAMMAR: Grammar = Grammar {
    skip: domains_heading,
    annotation: link_codes,
    bullets: BULLETS_AND_DASHES,
    strip: STRIP_ALL,
    ..Grammar::BASE
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::region::RegionId;
    use crate::parser::regions::classify_with;

    #[test]
    fn code_line_closes_domain() {
        let text = "Domény specializace Jihočeského kraje\n\
                    Digitální ekonomika\n\
                    • vývoj software\n\
                    - datová analytika\n\
                    Vazba na CZ-NACE: 62, 63.1\n\
                    Zemědělství a potraviny\n\
                    • precizní zemědělství\n\
                    vazba na cz nace: hlavní vazby: 01, 10";
        let out = classify_with(RegionId::Jihocesky, "domains", text);
        assert_eq!(out.drafts.len(), 2);
        assert_eq!(out.drafts[0].name, "Digitální ekonomika");
        assert_eq!(out.drafts[0].lines, vec!["vývoj software", "datová analytika"]);
        assert_eq!(out.drafts[0].codes, vec!["62", "63"]);
        assert_eq!(out.drafts[1].codes, vec!["01", "10"]);
    }

    #[test]
    fn long_lines_continue_description() {
        let long = "Toto je velmi dlouhý řádek popisu, který začíná velkým písmenem a přesahuje sto znaků, takže není nadpisem.";
        let text = format!("Biotechnologie\n{long}\nVazba na CZ-NACE: 21");
        let out = classify_with(RegionId::Jihocesky, "domains", &text);
        assert_eq!(out.drafts.len(), 1);
        assert_eq!(out.drafts[0].lines, vec![long]);
    }
}
