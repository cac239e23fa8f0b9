use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::db;
use crate::error::Degradation;

/// Counts and logs every degradation of a run so none goes unnoticed.
pub struct DegradationTracker {
    run_id: String,
    seen: Vec<Degradation>,
    counts: BTreeMap<&'static str, usize>,
}

impl DegradationTracker {
    pub fn new(run_id: String) -> Self {
        DegradationTracker {
            run_id,
            seen: Vec::new(),
            counts: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, degradation: &Degradation) {
        match degradation {
            Degradation::MissingAnchor { .. } | Degradation::EmptySection { .. } => {
                warn!(kind = degradation.kind(), "{degradation}")
            }
            Degradation::RejectedRecord { .. } | Degradation::MalformedCodeToken { .. } => {
                debug!(kind = degradation.kind(), "{degradation}")
            }
        }
        *self.counts.entry(degradation.kind()).or_default() += 1;
        self.seen.push(degradation.clone());
    }

    pub fn record_all<'a>(&mut self, degradations: impl IntoIterator<Item = &'a Degradation>) {
        for degradation in degradations {
            self.record(degradation);
        }
    }

    /// Per-kind totals, sorted by kind.
    pub fn counts(&self) -> &BTreeMap<&'static str, usize> {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.seen.len()
    }

    pub fn persist(&self, conn: &Connection) -> rusqlite::Result<()> {
        for degradation in &self.seen {
            db::insert_degradation(conn, &self.run_id, degradation)?;
        }
        Ok(())
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

pub fn new_run_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("run-{}", now)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejectReason;
    use crate::parser::region::RegionId;

    #[test]
    fn counts_by_kind() {
        let mut tracker = DegradationTracker::new("run-test".into());
        tracker.record_all(&[
            Degradation::MissingAnchor {
                region: RegionId::Praha,
                marker: "Praha\nNázev a schválení",
            },
            Degradation::RejectedRecord {
                region: RegionId::Olomoucky,
                name: "IT".into(),
                reason: RejectReason::NameTooShort,
            },
            Degradation::RejectedRecord {
                region: RegionId::Praha,
                name: "Zaměření".into(),
                reason: RejectReason::FalsePositivePrefix,
            },
        ]);
        assert_eq!(tracker.total(), 3);
        assert_eq!(tracker.counts().get("rejected_record"), Some(&2));
        assert_eq!(tracker.counts().get("missing_anchor"), Some(&1));
        assert_eq!(tracker.counts().get("empty_section"), None);
    }

    #[test]
    fn run_id_has_prefix() {
        assert!(new_run_id().starts_with("run-"));
    }
}
