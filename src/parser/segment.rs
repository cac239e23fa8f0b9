//! Splits the full document text into one slice per region.

use tracing::warn;

use super::config::RegionAnchor;
use super::region::RegionId;
use crate::error::Degradation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSlice {
    pub region: RegionId,
    pub start: usize,
    pub end: usize,
}

impl RegionSlice {
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Debug, Default)]
pub struct Segmentation {
    pub slices: Vec<RegionSlice>,
    pub degradations: Vec<Degradation>,
}

/// Locate each anchor's first literal occurrence and cut the document at
/// those offsets, in document order. The last slice runs to the end of the
/// text. Missing anchors are reported and skipped.
pub fn segment_regions(document: &str, anchors: &[RegionAnchor]) -> Segmentation {
    let mut found: Vec<(usize, RegionId)> = Vec::with_capacity(anchors.len());
    let mut degradations = Vec::new();

    for anchor in anchors {
        match document.find(anchor.marker) {
            Some(offset) => found.push((offset, anchor.region)),
            None => {
                warn!(region = %anchor.region, "region anchor not found");
                degradations.push(Degradation::MissingAnchor {
                    region: anchor.region,
                    marker: anchor.marker,
                });
            }
        }
    }

    if found.is_empty() {
        warn!("no region anchors found, nothing to segment");
    }

    // stable: equal offsets keep configuration order
    found.sort_by_key(|(offset, _)| *offset);

    let slices = found
        .iter()
        .enumerate()
        .map(|(i, &(start, region))| RegionSlice {
            region,
            start,
            end: found.get(i + 1).map_or(document.len(), |(next, _)| *next),
        })
        .collect();

    Segmentation {
        slices,
        degradations,
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> Vec<RegionAnchor> {
        vec![
            RegionAnchor {
                marker: "Zlínský kraj\nKrajská RIS3",
                region: RegionId::Zlinsky,
            },
            RegionAnchor {
                marker: "Praha\nNázev a schválení",
                region: RegionId::Praha,
            },
            RegionAnchor {
                marker: "Ústecký kraj\nKrajská RIS3",
                region: RegionId::Ustecky,
            },
        ]
    }

    const DOC: &str = "Úvod dokumentu\nPraha\nNázev a schválení\nobsah prahy\n\nZlínský kraj\nKrajská RIS3\nobsah zlína\n";

    #[test]
    fn slices_follow_document_order() {
        let seg = segment_regions(DOC, &anchors());
        let regions: Vec<_> = seg.slices.iter().map(|s| s.region).collect();
        assert_eq!(regions, vec![RegionId::Praha, RegionId::Zlinsky]);
        assert!(seg.slices[0].text(DOC).starts_with("Praha\nNázev"));
        assert!(seg.slices[1].text(DOC).ends_with("obsah zlína\n"));
    }

    #[test]
    fn slices_cover_tail_without_gaps() {
        let seg = segment_regions(DOC, &anchors());
        let first = seg.slices.first().unwrap().start;
        let joined: String = seg.slices.iter().map(|s| s.text(DOC)).collect();
        assert_eq!(joined, &DOC[first..]);
        for pair in seg.slices.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(seg.slices.last().unwrap().end, DOC.len());
    }

    #[test]
    fn missing_anchor_is_reported_not_fatal() {
        let seg = segment_regions(DOC, &anchors());
        assert_eq!(seg.degradations.len(), 1);
        assert!(matches!(
            seg.degradations[0],
            Degradation::MissingAnchor {
                region: RegionId::Ustecky,
                ..
            }
        ));
    }

    #[test]
    fn no_anchors_yields_empty_segmentation() {
        let seg = segment_regions("nothing to see here", &anchors());
        assert!(seg.slices.is_empty());
        assert_eq!(seg.degradations.len(), 3);
    }

    #[test]
    fn anchor_is_literal_not_pattern() {
        let anchors = vec![RegionAnchor {
            marker: "Hl. m.",
            region: RegionId::Praha,
        }];
        let seg = segment_regions("Hl, m, Hl. m. Praha", &anchors);
        assert_eq!(seg.slices[0].start, 7);
    }
}
