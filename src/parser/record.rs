use itertools::Itertools;
use serde::Serialize;

use super::config::FinalizeRules;
use super::lines::collapse_whitespace;
use crate::error::RejectReason;

/// A record while its lines are still being collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainDraft {
    pub name: String,
    pub lines: Vec<String>,
    pub codes: Vec<String>,
    pub tier: Option<String>,
}

impl DomainDraft {
    pub fn new(name: impl Into<String>, tier: Option<String>) -> Self {
        DomainDraft {
            name: name.into(),
            tier,
            ..Default::default()
        }
    }

    pub fn has_content(&self) -> bool {
        !self.lines.is_empty() || !self.codes.is_empty()
    }
}

/// The persisted shape. Field names follow the published JSON consumed by
/// the map frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRecord {
    #[serde(rename = "nazev")]
    pub name: String,
    #[serde(rename = "popis")]
    pub description: String,
    #[serde(rename = "nace")]
    pub codes: Vec<String>,
    #[serde(rename = "text_pro_embedding")]
    pub embedding_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

pub fn finalize(draft: DomainDraft, rules: &FinalizeRules) -> Result<DomainRecord, RejectReason> {
    let name = draft.name;
    if name.chars().count() < rules.min_name_chars {
        return Err(RejectReason::NameTooShort);
    }
    if rules
        .false_positive_prefixes
        .iter()
        .any(|p| name.starts_with(p))
    {
        return Err(RejectReason::FalsePositivePrefix);
    }

    let description = collapse_whitespace(&draft.lines.join(" "));
    let codes = draft.codes.into_iter().unique().collect();
    let embedding_text = if description.is_empty() {
        name.clone()
    } else {
        format!("{}: {}", name, description)
    };

    Ok(DomainRecord {
        name,
        description,
        codes,
        embedding_text,
        tier: draft.tier.filter(|t| !t.is_empty()),
    })
}

// ── Tests ──
