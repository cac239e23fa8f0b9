//! One line grammar per region, and the dispatch from region to grammar.
//!
//! Every region runs the same pipeline: locate each configured domain
//! section, classify its lines with the region's grammar, finalize the
//! drafts, then run the emerging pass over the whole slice.

mod jihocesky;
mod jihomoravsky;
mod karlovarsky;
mod kralovehradecky;
mod liberecky;
mod moravskoslezsky;
mod olomoucky;
mod pardubicky;
mod plzensky;
mod praha;
mod stredocesky;
mod ustecky;
mod vysocina;
mod zlinsky;

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use super::classify::{classify_section, Grammar, LineClassifier, LineRole};
use super::config::{FinalizeRules, RegionConfig};
use super::emerging::extract_emerging;
use super::lines::{char_len, clean_domain_name, split_dash};
use super::record::{finalize, DomainDraft, DomainRecord};
use super::region::RegionId;
use super::sections::locate;
use crate::error::Degradation;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Vazba na CZ[- ]?NACE[:\s]*(.*)").unwrap());
static DOMAIN_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Vazb[ay]\s+dom[eé]n[yě]?\s+na\s+CZ[- ]?NACE[:\s]*(.*)").unwrap()
});

/// Grammar for one domain section of a region.
pub fn grammar(region: RegionId, section: &str) -> Option<&'static Grammar> {
    let grammar = match (region, section) {
        (RegionId::Jihocesky, "domains") => &jihocesky::GRAMMAR,
        (RegionId::Jihomoravsky, "domains") => &jihomoravsky::GRAMMAR,
        (RegionId::Karlovarsky, "domains") => &karlovarsky::GRAMMAR,
        (RegionId::Kralovehradecky, "domains") => &kralovehradecky::GRAMMAR,
        (RegionId::Liberecky, "domains") => &liberecky::GRAMMAR,
        (RegionId::Moravskoslezsky, "domains") => &moravskoslezsky::GRAMMAR,
        (RegionId::Olomoucky, "domains") => &olomoucky::GRAMMAR,
        (RegionId::Pardubicky, "domains") => &pardubicky::GRAMMAR,
        (RegionId::Plzensky, "domains") => &plzensky::GRAMMAR,
        (RegionId::Praha, "domains") => &praha::GRAMMAR,
        (RegionId::Stredocesky, "domains") => &stredocesky::GRAMMAR,
        (RegionId::Ustecky, "domains") => &ustecky::GRAMMAR,
        (RegionId::Vysocina, "domains") => &vysocina::GRAMMAR,
        (RegionId::Zlinsky, "domains") => &zlinsky::GRAMMAR,
        (RegionId::Zlinsky, "horizontal") => &zlinsky::HORIZONTAL,
        _ => return None,
    };
    Some(grammar)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionOutcome {
    pub region: RegionId,
    pub domains: Vec<DomainRecord>,
    pub emerging: Vec<String>,
    pub degradations: Vec<Degradation>,
}

/// Extract one region slice. Never fails: missing sections and rejected
/// records come back as degradations next to whatever could be extracted.
pub fn extract(region: RegionId, slice: &str, config: &RegionConfig, rules: &FinalizeRules) -> RegionOutcome {
    let mut degradations = Vec::new();
    let mut domains = Vec::new();

    // Sections and the emerging pass run independently: a missing vertical
    // list does not suppress the horizontal one or the emerging labels.
    for section in &config.domains {
        let Some(grammar) = grammar(region, section.spec.label) else {
            debug!(%region, section = section.spec.label, "no grammar for section");
            continue;
        };
        let Some(located) = locate(slice, &section.spec, 0) else {
            degradations.push(Degradation::EmptySection {
                region,
                section: section.spec.label,
            });
            continue;
        };

        let out = classify_section(located.text, grammar, section.title);
        degradations.extend(
            out.malformed_tokens
                .into_iter()
                .map(|token| Degradation::MalformedCodeToken { region, token }),
        );
        for draft in out.drafts {
            let name = draft.name.clone();
            match finalize(draft, rules) {
                Ok(record) => domains.push(record),
                Err(reason) => degradations.push(Degradation::RejectedRecord { region, name, reason }),
            }
        }
    }

    let emerging = match &config.emerging {
        Some(spec) => extract_emerging(slice, spec).unwrap_or_else(|| {
            degradations.push(Degradation::EmptySection {
                region,
                section: spec.section.label,
            });
            Vec::new()
        }),
        None => Vec::new(),
    };

    info!(
        %region,
        domains = domains.len(),
        emerging = emerging.len(),
        degradations = degradations.len(),
        "region extracted"
    );

    RegionOutcome {
        region,
        domains,
        emerging,
        degradations,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTrace<'a> {
    pub label: &'static str,
    /// `None` when the section start marker is absent.
    pub lines: Option<Vec<(&'a str, LineRole)>>,
}

/// Role of every line in each domain section, for inspecting a grammar.
pub fn trace<'a>(region: RegionId, slice: &'a str, config: &RegionConfig) -> Vec<SectionTrace<'a>> {
    config
        .domains
        .iter()
        .filter_map(|section| {
            let grammar = grammar(region, section.spec.label)?;
            let lines = locate(slice, &section.spec, 0).map(|located| {
                let mut classifier = LineClassifier::new(grammar, section.title);
                located
                    .text
                    .lines()
                    .map(|line| (line, classifier.feed(line)))
                    .collect()
            });
            Some(SectionTrace {
                label: section.spec.label,
                lines,
            })
        })
        .collect()
}

// Shared line predicates.

fn domains_heading(line: &str) -> bool {
    line.starts_with("Domény specializace")
}

fn priorities_heading(line: &str) -> bool {
    line.starts_with("Tematické priority")
}

fn capture_tail<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

/// `Vazba na CZ-NACE: …`
fn link_codes(line: &str) -> Option<&str> {
    capture_tail(&LINK_RE, line)
}

/// `Vazba domény na CZ-NACE: …` and its declensions.
fn domain_link_codes(line: &str) -> Option<&str> {
    capture_tail(&DOMAIN_LINK_RE, line)
}

/// `Name – description` bullet as a complete record.
fn dash_record(text: &str) -> Option<DomainDraft> {
    let (name, description) = split_dash(text);
    if char_len(name) <= 3 {
        return None;
    }
    let mut draft = DomainDraft::new(clean_domain_name(name), None);
    if !description.is_empty() {
        draft.lines.push(description.to_string());
    }
    Some(draft)
}

#[cfg(test)]
pub(crate) fn classify_with(region: RegionId, label: &str, text: &str) -> super::classify::ClassifierOutput {
    let config = super::config::ExtractorConfig::nris3();
    let section = config
        .region(region)
        .and_then(|r| r.section(label))
        .expect("configured section");
    classify_section(text, grammar(region, label).expect("grammar"), section.title)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejectReason;
    use crate::parser::config::ExtractorConfig;

    #[test]
    fn every_configured_section_has_a_grammar() {
        let config = ExtractorConfig::nris3();
        for region in &config.regions {
            for section in &region.domains {
                assert!(
                    grammar(region.region, section.spec.label).is_some(),
                    "{} / {}",
                    region.region,
                    section.spec.label
                );
            }
        }
    }

    #[test]
    fn missing_sections_degrade_to_empty() {
        let config = ExtractorConfig::nris3();
        let region = config.region(RegionId::Jihocesky).unwrap();
        let outcome = extract(RegionId::Jihocesky, "Jihočeský kraj\nnic", region, &config.finalize);
        assert!(outcome.domains.is_empty());
        assert!(outcome.emerging.is_empty());
        let sections: Vec<_> = outcome
            .degradations
            .iter()
            .filter_map(|d| match d {
                Degradation::EmptySection { section, .. } => Some(*section),
                _ => None,
            })
            .collect();
        assert_eq!(sections, vec!["domains", "emerging"]);
    }

    #[test]
    fn regions_without_emerging_do_not_report_it() {
        let config = ExtractorConfig::nris3();
        let region = config.region(RegionId::Olomoucky).unwrap();
        let outcome = extract(RegionId::Olomoucky, "", region, &config.finalize);
        assert_eq!(outcome.degradations.len(), 1);
    }

    #[test]
    fn rejected_drafts_are_reported() {
        let config = ExtractorConfig::nris3();
        let region = config.region(RegionId::Praha).unwrap();
        let slice = "Praha\nTematické priority – Domény\nA. Zaměření na inovace\n● popis priority";
        let outcome = extract(RegionId::Praha, slice, region, &config.finalize);
        assert!(outcome.domains.is_empty());
        assert!(outcome.degradations.contains(&Degradation::RejectedRecord {
            region: RegionId::Praha,
            name: "Zaměření na inovace".into(),
            reason: RejectReason::FalsePositivePrefix,
        }));
    }

    #[test]
    fn annotation_codes_reach_the_record() {
        let config = ExtractorConfig::nris3();
        let region = config.region(RegionId::Jihocesky).unwrap();
        let slice = "Domény specializace Jihočeského kraje\nDigitální ekonomika\n• software\nVazba na CZ-NACE: 62, 63.1\n";
        let outcome = extract(RegionId::Jihocesky, slice, region, &config.finalize);
        assert_eq!(outcome.domains.len(), 1);
        assert_eq!(outcome.domains[0].codes, vec!["62", "63"]);
        assert_eq!(outcome.domains[0].embedding_text, "Digitální ekonomika: software");
    }

    #[test]
    fn trace_reports_roles_per_line() {
        let config = ExtractorConfig::nris3();
        let region = config.region(RegionId::Jihocesky).unwrap();
        let slice = "Domény specializace Jihočeského kraje\nDigitální ekonomika\n• software";
        let traced = trace(RegionId::Jihocesky, slice, region);
        assert_eq!(traced.len(), 1);
        let roles: Vec<_> = traced[0].lines.as_ref().unwrap().iter().map(|(_, r)| *r).collect();
        assert_eq!(roles, vec![LineRole::Boilerplate, LineRole::Title, LineRole::Bullet]);
    }

    #[test]
    fn long_numerals_in_annotation_are_reported() {
        let config = ExtractorConfig::nris3();
        let region = config.region(RegionId::Jihocesky).unwrap();
        let slice = "Domény specializace Jihočeského kraje\nDigitální ekonomika\n• software\nVazba na CZ-NACE: 62, 2021\n";
        let outcome = extract(RegionId::Jihocesky, slice, region, &config.finalize);
        assert_eq!(outcome.domains[0].codes, vec!["62"]);
        assert!(outcome.degradations.contains(&Degradation::MalformedCodeToken {
            region: RegionId::Jihocesky,
            token: "2021".into(),
        }));
    }

    #[test]
    fn bullet_never_classifies_as_title() {
        let config = ExtractorConfig::nris3();
        let candidates = [
            "1. Energetika a chemie",
            "A. Digitální Praha",
            "Digitální ekonomika",
            "Strojírenství (CZ-NACE 28)",
        ];
        for region in &config.regions {
            for section in &region.domains {
                let g = grammar(region.region, section.spec.label).unwrap();
                // no bullet glyphs at all, nothing to check
                let Some(glyph) = g.bullets.first() else { continue };
                let mut classifier = LineClassifier::new(g, section.title);
                for line in candidates {
                    classifier.feed(line);
                }
                let bullet = format!("{glyph} Pokročilé materiály");
                assert_ne!(
                    classifier.feed(&bullet),
                    LineRole::Title,
                    "{} / {}",
                    region.region,
                    section.spec.label
                );
            }
        }
    }

    #[test]
    fn missing_vertical_list_keeps_other_passes() {
        let config = ExtractorConfig::nris3();
        let region = config.region(RegionId::Zlinsky).unwrap();
        let slice = "Zlínský kraj\n\
                     Horizontální průřezové domény\n\
                     Digitalizace a Průmysl 4.0\n\
                     • automatizace výroby\n\
                     Opatření pro průmyslovou transformaci\n\
                     Vznikající domény\n\
                     Biomateriály pro medicínu\n\
                     Chytré textilie a senzory\n\
                     Realizace krajské RIS3\n";
        let outcome = extract(RegionId::Zlinsky, slice, region, &config.finalize);
        assert_eq!(outcome.domains.len(), 1);
        assert_eq!(outcome.domains[0].name, "Digitalizace a Průmysl 4.0");
        assert_eq!(outcome.domains[0].tier.as_deref(), Some("horizontální"));
        assert_eq!(outcome.emerging, vec!["Biomateriály pro medicínu", "Chytré textilie a senzory"]);
        assert_eq!(
            outcome.degradations,
            vec![Degradation::EmptySection {
                region: RegionId::Zlinsky,
                section: "domains",
            }]
        );
    }
}
