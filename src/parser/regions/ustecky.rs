//! Three tiers of bullet domains, each introduced by a tier header line.

use super::{dash_record, priorities_heading};
use crate::parser::classify::{no_title, BulletMode, Grammar, Marker};
use crate::parser::lines::{ROUND_BULLETS, STRIP_ALL};

const TIERS: &[(&str, &str)] = &[
    ("Hlavní oblasti specializace", "hlavní"),
    ("KETs (průřezové)", "KETs"),
    ("Užší subdomény", "subdomény"),
];

pub static GRAMMAR: Grammar = Grammar {
    skip: priorities_heading,
    marker: tier,
    bullets: ROUND_BULLETS,
    strip: STRIP_ALL,
    bullet_mode: BulletMode::Record(dash_record),
    title: no_title,
    keep_continuation: false,
    ..Grammar::BASE
};

fn tier(line: &str) -> Option<Marker> {
    TIERS
        .iter()
        .find(|(header, _)| line.contains(header))
        .map(|(_, label)| Marker::Tier(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::region::RegionId;
    use crate::parser::regions::classify_with;

    #[test]
    fn bullets_take_current_tier() {
        let text = "Tematické priority:\n\
                    • Bez úrovně – před první hlavičkou\n\
                    Hlavní oblasti specializace\n\
                    • Energetika – transformace uhelného regionu\n\
                    KETs (průřezové)\n\
                    • Pokročilé materiály\n\
                    Užší subdomény\n\
                    • Vodík − skladování";
        let out = classify_with(RegionId::Ustecky, "domains", text);
        let tiers: Vec<_> = out.drafts.iter().map(|d| (d.name.as_str(), d.tier.as_deref())).collect();
        assert_eq!(
            tiers,
            vec![
                ("Bez úrovně", None),
                ("Energetika", Some("hlavní")),
                ("Pokročilé materiály", Some("KETs")),
                ("Vodík", Some("subdomény")),
            ]
        );
        assert_eq!(out.drafts[1].lines, vec!["transformace uhelného regionu"]);
    }
}
