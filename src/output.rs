//! JSON writers for the catalog and its derived summary, plus the
//! cross-check against a reference text copy.
//!
//! Keys are Czech because the map frontend reads these files as they are.
//! Every map is serialized from an ordered sequence, so output order is the
//! configuration order and two runs produce identical bytes.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tracing::{info, warn};

use crate::error::OutputError;
use crate::parser::config::ExtractorConfig;
use crate::parser::record::DomainRecord;
use crate::parser::region::RegionId;
use crate::parser::regions::RegionOutcome;

pub const CATALOG_FILE: &str = "domeny_plne_texty.json";
pub const SUMMARY_FILE: &str = "domeny_kraje.json";

const SOURCE: &str = "Příloha 2 NRIS3 v08 (MPO, prosinec 2025)";
const NOTE: &str =
    "Extrahováno z PDF automatickým parserem. NACE kódy pouze tam, kde jsou v dokumentu explicitně uvedeny.";
const SHORT_DESCRIPTION_CHARS: usize = 200;

/// A map serialized in the order of its entries.
struct Ordered<K, V>(Vec<(K, V)>);

impl<K: Serialize, V: Serialize> Serialize for Ordered<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

/// Records keyed by their position: `{"0": …, "1": …}`.
struct Indexed<'a>(&'a [DomainRecord]);

impl Serialize for Indexed<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().enumerate().map(|(i, r)| (i.to_string(), r)))
    }
}

/// Derived per-region diagnostics; never authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    #[serde(rename = "pocet_domen")]
    pub domains: usize,
    #[serde(rename = "pocet_s_nace")]
    pub with_codes: usize,
    /// Mean description length in characters, halves rounded to even.
    #[serde(rename = "prumerna_delka_popisu")]
    pub mean_description_chars: usize,
}

impl RegionSummary {
    pub fn of(records: &[DomainRecord]) -> Self {
        let total_chars: usize = records.iter().map(|r| r.description.chars().count()).sum();
        let mean = total_chars as f64 / records.len().max(1) as f64;
        RegionSummary {
            domains: records.len(),
            with_codes: records.iter().filter(|r| !r.codes.is_empty()).count(),
            mean_description_chars: mean.round_ties_even() as usize,
        }
    }
}

#[derive(Serialize)]
struct Meta {
    zdroj: &'static str,
    parser: &'static str,
    poznamka: &'static str,
}

#[derive(Serialize)]
struct ShortDomain<'a> {
    nazev: &'a str,
    popis: String,
    cz_nace: &'a [String],
}

#[derive(Serialize)]
struct RegionEntry<'a> {
    domeny: Vec<ShortDomain<'a>>,
    emerging: &'a [String],
}

#[derive(Serialize)]
struct SummaryFile<'a> {
    meta: Meta,
    kraje: Ordered<&'static str, RegionEntry<'a>>,
    statistika: Ordered<&'static str, RegionSummary>,
}

/// `{ region: { "0": record, … } }`
pub fn render_catalog(regions: &[RegionOutcome]) -> Result<String, OutputError> {
    let catalog = Ordered(
        regions
            .iter()
            .map(|o| (o.region.name(), Indexed(&o.domains)))
            .collect(),
    );
    Ok(serde_json::to_string_pretty(&catalog)?)
}

/// `{ meta, kraje: { region: { domeny, emerging } }, statistika }`
pub fn render_summary(regions: &[RegionOutcome]) -> Result<String, OutputError> {
    let kraje = regions
        .iter()
        .map(|o| {
            let domeny = o
                .domains
                .iter()
                .map(|d| ShortDomain {
                    nazev: &d.name,
                    popis: d.description.chars().take(SHORT_DESCRIPTION_CHARS).collect(),
                    cz_nace: &d.codes,
                })
                .collect();
            (
                o.region.name(),
                RegionEntry {
                    domeny,
                    emerging: &o.emerging,
                },
            )
        })
        .collect();
    let statistika = regions
        .iter()
        .map(|o| (o.region.name(), RegionSummary::of(&o.domains)))
        .collect();

    let file = SummaryFile {
        meta: Meta {
            zdroj: SOURCE,
            parser: concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")),
            poznamka: NOTE,
        },
        kraje: Ordered(kraje),
        statistika: Ordered(statistika),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub catalog: PathBuf,
    pub summary: PathBuf,
}

pub fn write_outputs(regions: &[RegionOutcome], out_dir: &Path) -> Result<WrittenFiles, OutputError> {
    std::fs::create_dir_all(out_dir).map_err(|source| OutputError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let files = WrittenFiles {
        catalog: out_dir.join(CATALOG_FILE),
        summary: out_dir.join(SUMMARY_FILE),
    };
    write_file(&files.catalog, &render_catalog(regions)?)?;
    write_file(&files.summary, &render_summary(regions)?)?;

    info!(catalog = ?files.catalog, summary = ?files.summary, "outputs written");
    Ok(files)
}

fn write_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    std::fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_text(path: &Path) -> Result<String, OutputError> {
    std::fs::read_to_string(path).map_err(|source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// What a reference copy of the document lacks compared to the primary text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReferenceReport {
    pub missing_anchors: Vec<RegionId>,
    pub missing_domains: Vec<(RegionId, String)>,
}

impl ReferenceReport {
    pub fn is_clean(&self) -> bool {
        self.missing_anchors.is_empty() && self.missing_domains.is_empty()
    }
}

/// Cross-check anchors and extracted names against a reference text. Only
/// logs; the reference never changes the extracted catalog.
pub fn cross_check(reference: &str, config: &ExtractorConfig, regions: &[RegionOutcome]) -> ReferenceReport {
    let flat = collapse(reference);
    let mut report = ReferenceReport::default();

    for anchor in &config.anchors {
        if !reference.contains(anchor.marker) {
            warn!(region = %anchor.region, "anchor missing from reference text");
            report.missing_anchors.push(anchor.region);
        }
    }
    for outcome in regions {
        for record in &outcome.domains {
            if !flat.contains(&collapse(&record.name)) {
                warn!(region = %outcome.region, name = %record.name, "domain name missing from reference text");
                report.missing_domains.push((outcome.region, record.name.clone()));
            }
        }
    }
    report
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Tests ──
