//! Static extraction tables: where each region starts, where its sections
//! start and end, and the thresholds its classifier uses.
//!
//! Built once per run and passed by reference into every extraction call.

use super::region::RegionId;

/// End-marker margin for sections that do not need a tighter one.
pub const DEFAULT_MARGIN: usize = 50;

const EMERGING_START: &[&str] = &["Vznikající", "Emerging"];
const EMERGING_END: &[&str] = &["Realizace krajské", "Realizace Krajské", "Instituce s hlavní"];
const EMERGING_END_SHORT: &[&str] = &["Realizace krajské", "Realizace Krajské"];
const DOMAINS_END: &[&str] = &["Vznikající", "Emerging", "Realizace krajské"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionAnchor {
    pub marker: &'static str,
    pub region: RegionId,
}

/// Start/end markers bounding a sub-section of a region slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub label: &'static str,
    pub start: &'static [&'static str],
    pub end: &'static [&'static str],
    /// Characters after the start offset in which end markers are ignored.
    pub margin: usize,
}

/// Title length window, exclusive on both ends, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleBounds {
    pub longer_than: usize,
    pub shorter_than: usize,
}

impl TitleBounds {
    pub const fn below(shorter_than: usize) -> Self {
        TitleBounds {
            longer_than: 0,
            shorter_than,
        }
    }

    pub const fn between(longer_than: usize, shorter_than: usize) -> Self {
        TitleBounds {
            longer_than,
            shorter_than,
        }
    }

    pub fn admits(&self, line: &str) -> bool {
        let len = line.chars().count();
        len > self.longer_than && len < self.shorter_than
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSection {
    pub spec: SectionSpec,
    pub title: TitleBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmergingMode {
    /// Only lines opening with one of `glyphs`; glyphs in `strip` are removed.
    Bullets {
        glyphs: &'static [char],
        strip: &'static [char],
        longer_than: usize,
    },
    /// Every line except noise and restatements of the section heading.
    Lines {
        longer_than: usize,
        reject_garbage: bool,
    },
    /// `N. label` items anywhere in the section.
    Numbered {
        longer_than: usize,
        exclude: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergingSpec {
    pub section: SectionSpec,
    pub mode: EmergingMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionConfig {
    pub region: RegionId,
    /// Extracted in this order; records keep it.
    pub domains: Vec<DomainSection>,
    pub emerging: Option<EmergingSpec>,
}

#[cfg(test)]
impl RegionConfig {
    pub fn section(&self, label: &str) -> Option<&DomainSection> {
        self.domains.iter().find(|s| s.spec.label == label)
    }

    /// The vertical domain list every region has.
    pub fn primary(&self) -> Option<&DomainSection> {
        self.section("domains")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalizeRules {
    pub min_name_chars: usize,
    pub false_positive_prefixes: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub anchors: Vec<RegionAnchor>,
    pub regions: Vec<RegionConfig>,
    pub finalize: FinalizeRules,
}

impl ExtractorConfig {
    pub fn region(&self, id: RegionId) -> Option<&RegionConfig> {
        self.regions.iter().find(|r| r.region == id)
    }

    /// Tables for the NRIS3 annex 2 (version 08) layout.
    pub fn nris3() -> Self {
        let anchors = vec![
            anchor("Jihočeský kraj\nKrajská RIS3", RegionId::Jihocesky),
            anchor("Jihomoravský kraj\nKrajská RIS3", RegionId::Jihomoravsky),
            anchor("Karlovarský kraj\nKrajská RIS3", RegionId::Karlovarsky),
            anchor("Královéhradecký kraj\nKrajská RIS3", RegionId::Kralovehradecky),
            anchor("Liberecký kraj\nKrajská RIS3", RegionId::Liberecky),
            anchor("Moravskoslezský kraj\nKrajská RIS3", RegionId::Moravskoslezsky),
            anchor("Olomoucký kraj\nKrajská RIS3", RegionId::Olomoucky),
            anchor("Pardubický kraj\nKrajská RIS3", RegionId::Pardubicky),
            anchor("Plzeňský kraj\nKrajská RIS3", RegionId::Plzensky),
            anchor("Praha\nNázev a schválení", RegionId::Praha),
            anchor("Středočeský kraj\nKrajská RIS3", RegionId::Stredocesky),
            anchor("Ústecký kraj\nKrajská RIS3", RegionId::Ustecky),
            anchor("Kraj Vysočina\nKrajská RIS3", RegionId::Vysocina),
            anchor("Zlínský kraj\nKrajská RIS3", RegionId::Zlinsky),
        ];

        let regions = vec![
            RegionConfig {
                region: RegionId::Jihocesky,
                domains: vec![domains(
                    &["Domény specializace Jihočeského kraje"],
                    DOMAINS_END,
                    TitleBounds::below(100),
                )],
                emerging: Some(bullets(&['•', '●', '–'], &['•', '●', '–', '-', ' '], 5)),
            },
            RegionConfig {
                region: RegionId::Jihomoravsky,
                domains: vec![domains(
                    &["Domény specializace kraje/ Klíčová", "Domény specializace kraje/"],
                    &["Vznikající", "Emerging"],
                    TitleBounds::below(100),
                )],
                emerging: Some(bullets(&['•', '●'], &['•', '●', '–', ' '], 5)),
            },
            RegionConfig {
                region: RegionId::Karlovarsky,
                domains: vec![domains(
                    &["Domény specializace kraje"],
                    DOMAINS_END,
                    TitleBounds::below(100),
                )],
                emerging: Some(bullets(&['•', '●'], &['•', '●', '–', ' '], 10)),
            },
            RegionConfig {
                region: RegionId::Kralovehradecky,
                domains: vec![domains(
                    &["Domény specializace kraje"],
                    DOMAINS_END,
                    TitleBounds::below(100),
                )],
                emerging: Some(bullets(&['•', '●'], &['•', '●', '–', ' '], 5)),
            },
            RegionConfig {
                region: RegionId::Liberecky,
                domains: vec![domains(
                    &["Domény specializace Libereckého kraje"],
                    &["Vznikající", "Emerging", "Realizace krajské", "Realiza"],
                    TitleBounds::between(10, 120),
                )],
                emerging: Some(EmergingSpec {
                    section: emerging_section(&["Realizace krajské", "Realizace Krajské", "Realiza"]),
                    mode: EmergingMode::Lines {
                        longer_than: 10,
                        reject_garbage: true,
                    },
                }),
            },
            RegionConfig {
                region: RegionId::Moravskoslezsky,
                domains: vec![domains(
                    &["Tematická specializace RIS MSK", "Z pohledu koncových trhů"],
                    &["Realizace krajské", "Instituce s hlavní výkonnou"],
                    TitleBounds::below(usize::MAX),
                )],
                emerging: Some(EmergingSpec {
                    section: SectionSpec {
                        label: "emerging",
                        start: &["Emerging domén"],
                        end: &["Realiza", "Instituce s hlavní"],
                        margin: 1,
                    },
                    mode: EmergingMode::Numbered {
                        longer_than: 5,
                        exclude: "Zaměření",
                    },
                }),
            },
            RegionConfig {
                region: RegionId::Olomoucky,
                domains: vec![domains(
                    &["Domény specializace kraje:"],
                    &["RIS3 mise", "Realizace krajské", "Realizace Krajské", "Instituce s hlavní"],
                    TitleBounds::below(usize::MAX),
                )],
                emerging: None,
            },
            RegionConfig {
                region: RegionId::Pardubicky,
                domains: vec![domains(
                    &["Domény specializace kraje"],
                    &["Vznikající", "Emerging", "Realizace krajské", "směřuje budoucí"],
                    TitleBounds::between(10, 100),
                )],
                emerging: Some(lines(10)),
            },
            RegionConfig {
                region: RegionId::Plzensky,
                domains: vec![domains(
                    &["Tematické priority"],
                    EMERGING_END,
                    TitleBounds::between(10, 80),
                )],
                emerging: None,
            },
            RegionConfig {
                region: RegionId::Praha,
                domains: vec![domains(
                    &[
                        "Tematické priority – Domény",
                        "Tematické priority — Domény",
                        "Tematické priority:",
                    ],
                    &["V následující aktualizaci", "Realizace krajské"],
                    TitleBounds::below(usize::MAX),
                )],
                emerging: Some(EmergingSpec {
                    section: SectionSpec {
                        label: "emerging",
                        start: &["V následující aktualizaci"],
                        end: EMERGING_END_SHORT,
                        margin: DEFAULT_MARGIN,
                    },
                    mode: EmergingMode::Bullets {
                        glyphs: &['•', '●'],
                        strip: &['•', '●', '–', ' '],
                        longer_than: 5,
                    },
                }),
            },
            RegionConfig {
                region: RegionId::Stredocesky,
                domains: vec![domains(
                    &["Domény specializace kraje (vertikální", "Domény specializace kraje"],
                    DOMAINS_END,
                    TitleBounds::below(usize::MAX),
                )],
                emerging: Some(EmergingSpec {
                    section: emerging_section(EMERGING_END_SHORT),
                    mode: EmergingMode::Bullets {
                        glyphs: &['•', '●'],
                        strip: &['•', '●', '–', ' '],
                        longer_than: 5,
                    },
                }),
            },
            RegionConfig {
                region: RegionId::Ustecky,
                domains: vec![domains(
                    &["Tematické priority:"],
                    EMERGING_END,
                    TitleBounds::below(usize::MAX),
                )],
                emerging: None,
            },
            RegionConfig {
                region: RegionId::Vysocina,
                domains: vec![domains(
                    &["Domény specializace Kraje Vysočina"],
                    DOMAINS_END,
                    TitleBounds::between(10, 80),
                )],
                emerging: Some(lines(10)),
            },
            RegionConfig {
                region: RegionId::Zlinsky,
                // horizontal records come first in the output
                domains: vec![
                    DomainSection {
                        spec: SectionSpec {
                            label: "horizontal",
                            start: &["Horizontální průřezové domény", "horizontální průřezové domény"],
                            end: &["Opatření pro průmyslovou", "Mezinárodní aktivity", "Tematické priority"],
                            margin: 20,
                        },
                        title: TitleBounds::between(10, 80),
                    },
                    domains(
                        &["Odvětvové (aplikační) domény", "Tematické priority:"],
                        DOMAINS_END,
                        TitleBounds::between(10, 100),
                    ),
                ],
                emerging: Some(lines(10)),
            },
        ];

        ExtractorConfig {
            anchors,
            regions,
            finalize: FinalizeRules {
                min_name_chars: 4,
                false_positive_prefixes: &["Zaměření"],
            },
        }
    }
}

fn anchor(marker: &'static str, region: RegionId) -> RegionAnchor {
    RegionAnchor { marker, region }
}

fn domains(
    start: &'static [&'static str],
    end: &'static [&'static str],
    title: TitleBounds,
) -> DomainSection {
    DomainSection {
        spec: SectionSpec {
            label: "domains",
            start,
            end,
            margin: DEFAULT_MARGIN,
        },
        title,
    }
}

fn emerging_section(end: &'static [&'static str]) -> SectionSpec {
    SectionSpec {
        label: "emerging",
        start: EMERGING_START,
        end,
        margin: DEFAULT_MARGIN,
    }
}

fn bullets(glyphs: &'static [char], strip: &'static [char], longer_than: usize) -> EmergingSpec {
    EmergingSpec {
        section: emerging_section(EMERGING_END),
        mode: EmergingMode::Bullets {
            glyphs,
            strip,
            longer_than,
        },
    }
}

fn lines(longer_than: usize) -> EmergingSpec {
    EmergingSpec {
        section: emerging_section(EMERGING_END_SHORT),
        mode: EmergingMode::Lines {
            longer_than,
            reject_garbage: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_anchor_and_profile() {
        let cfg = ExtractorConfig::nris3();
        for id in RegionId::ALL {
            assert!(cfg.anchors.iter().any(|a| a.region == id), "{id} has no anchor");
            let region = cfg.region(id).expect("profile");
            assert!(region.primary().is_some(), "{id} has no domain section");
        }
    }

    #[test]
    fn title_bounds_are_exclusive() {
        let b = TitleBounds::between(3, 6);
        assert!(!b.admits("abc"));
        assert!(b.admits("abcd"));
        assert!(b.admits("abcde"));
        assert!(!b.admits("abcdef"));
        // counted in characters, not bytes
        assert!(b.admits("ščřž"));
    }

    #[test]
    fn zlin_has_horizontal_section() {
        let cfg = ExtractorConfig::nris3();
        let zlin = cfg.region(RegionId::Zlinsky).unwrap();
        let horizontal = zlin.section("horizontal").unwrap();
        assert_eq!(horizontal.spec.margin, 20);
        assert_eq!(zlin.domains[0].spec.label, "horizontal");
        assert_eq!(zlin.primary().unwrap().spec.label, "domains");
    }
}
