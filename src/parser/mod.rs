pub mod classify;
pub mod codes;
pub mod config;
pub mod emerging;
pub mod lines;
pub mod record;
pub mod region;
pub mod regions;
pub mod sections;
pub mod segment;

use config::{ExtractorConfig, FinalizeRules, RegionConfig};
use regions::RegionOutcome;
use segment::{segment_regions, RegionSlice};

use crate::error::Degradation;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Everything extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// One entry per region whose anchor was found, in configuration order.
    pub regions: Vec<RegionOutcome>,
    /// Document-level degradations (missing anchors).
    pub degradations: Vec<Degradation>,
}

impl Extraction {
    pub fn all_degradations(&self) -> impl Iterator<Item = &Degradation> {
        self.degradations
            .iter()
            .chain(self.regions.iter().flat_map(|r| r.degradations.iter()))
    }
}

/// Segment → per-region classification → merge.
pub fn process_document(document: &str, config: &ExtractorConfig) -> Extraction {
    let segmentation = segment_regions(document, &config.anchors);

    let jobs: Vec<(RegionSlice, &RegionConfig)> = segmentation
        .slices
        .iter()
        .filter_map(|slice| config.region(slice.region).map(|rc| (*slice, rc)))
        .collect();

    let mut regions = extract_regions(document, &jobs, &config.finalize);
    regions.sort_by_key(|outcome| {
        config
            .regions
            .iter()
            .position(|rc| rc.region == outcome.region)
    });

    Extraction {
        regions,
        degradations: segmentation.degradations,
    }
}

#[cfg(feature = "rayon")]
fn extract_regions(
    document: &str,
    jobs: &[(RegionSlice, &RegionConfig)],
    rules: &FinalizeRules,
) -> Vec<RegionOutcome> {
    jobs.par_iter()
        .map(|(slice, rc)| regions::extract(slice.region, slice.text(document), rc, rules))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn extract_regions(
    document: &str,
    jobs: &[(RegionSlice, &RegionConfig)],
    rules: &FinalizeRules,
) -> Vec<RegionOutcome> {
    jobs.iter()
        .map(|(slice, rc)| regions::extract(slice.region, slice.text(document), rc, rules))
        .collect()
}

// ── Tests ──
