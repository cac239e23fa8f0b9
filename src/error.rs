use std::path::PathBuf;

use thiserror::Error;

use crate::parser::region::RegionId;

/// Non-fatal conditions met while extracting. The core never aborts on these;
/// they travel next to the results and end up in the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Degradation {
    #[error("anchor {marker:?} for {region} not found in document")]
    MissingAnchor { region: RegionId, marker: &'static str },

    #[error("{region}: no start marker for the {section} section")]
    EmptySection { region: RegionId, section: &'static str },

    #[error("{region}: record {name:?} rejected ({reason})")]
    RejectedRecord {
        region: RegionId,
        name: String,
        reason: RejectReason,
    },

    #[error("{region}: code token {token:?} is not a valid sector code")]
    MalformedCodeToken { region: RegionId, token: String },
}

impl Degradation {
    pub fn kind(&self) -> &'static str {
        match self {
            Degradation::MissingAnchor { .. } => "missing_anchor",
            Degradation::EmptySection { .. } => "empty_section",
            Degradation::RejectedRecord { .. } => "rejected_record",
            Degradation::MalformedCodeToken { .. } => "malformed_code_token",
        }
    }

    pub fn region(&self) -> RegionId {
        match self {
            Degradation::MissingAnchor { region, .. }
            | Degradation::EmptySection { region, .. }
            | Degradation::RejectedRecord { region, .. }
            | Degradation::MalformedCodeToken { region, .. } => *region,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NameTooShort,
    FalsePositivePrefix,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NameTooShort => f.write_str("name too short"),
            RejectReason::FalsePositivePrefix => f.write_str("sub-header prefix"),
        }
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize catalog")]
    Json(#[from] serde_json::Error),

    #[error("database error")]
    Db(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings")]
    Config(#[from] config::ConfigError),

    #[error("no input text given (use --input or RIS3_INPUT)")]
    MissingInput,
}
