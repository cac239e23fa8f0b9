//! Plain headers with dash bullets. Codes sit in a `Související odvětví
//! (CZ-NACE)` block of dash lines; the first line after the block closes
//! the domain.

use super::priorities_heading;
use crate::parser::classify::{CodeBlock, Grammar};

pub static GRAMMAR: Grammar = Grammar {
    skip,
    code_block: Some(CodeBlock {
        opens: block_header,
        item: dash_line,
    }),
    bullets: &['-', '–'],
    strip: &['-', '–', ' '],
    ..Grammar::BASE
};

fn skip(line: &str) -> bool {
    priorities_heading(line) || line.contains("Preferované perspektivní")
}

fn block_header(line: &str) -> bool {
    line.contains("Související odvětví") && line.contains("CZ-NACE")
}

fn dash_line(line: &str) -> bool {
    line.starts_with(['-', '–'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::region::RegionId;
    use crate::parser::regions::classify_with;

    #[test]
    fn code_block_closes_domain() {
        let text = "Tematické priority\n\
                    Pokročilá výroba a materiály\n\
                    Preferované perspektivní směry:\n\
                    - aditivní výroba\n\
                    – kompozity\n\
                    Související odvětví (CZ-NACE):\n\
                    - 22 pryž a plasty\n\
                    - 25.6 kovoobrábění\n\
                    Doprava a logistika\n\
                    - elektromobilita\n\
                    Související odvětví (CZ-NACE):\n\
                    - 29, 30";
        let out = classify_with(RegionId::Plzensky, "domains", text);
        let names: Vec<_> = out.drafts.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Pokročilá výroba a materiály", "Doprava a logistika"]);
        assert_eq!(out.drafts[0].lines, vec!["aditivní výroba", "kompozity"]);
        assert_eq!(out.drafts[0].codes, vec!["22", "25"]);
        assert_eq!(out.drafts[1].codes, vec!["29", "30"]);
    }

    #[test]
    fn repeated_block_header_keeps_collecting() {
        let text = "Doprava a logistika\n\
                    - elektromobilita\n\
                    Související odvětví (CZ-NACE):\n\
                    - 22 plasty\n\
                    Související odvětví (CZ-NACE):\n\
                    - 29, 30";
        let out = classify_with(RegionId::Plzensky, "domains", text);
        assert_eq!(out.drafts.len(), 1);
        assert_eq!(out.drafts[0].name, "Doprava a logistika");
        assert_eq!(out.drafts[0].lines, vec!["elektromobilita"]);
        assert_eq!(out.drafts[0].codes, vec!["22", "29", "30"]);
    }
}
