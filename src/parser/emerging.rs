//! Second, simpler pass: flat labels of prospective ("emerging") domains.

use std::sync::LazyLock;

use regex::Regex;

use super::config::{EmergingMode, EmergingSpec};
use super::lines::{char_len, is_garbage, is_page_marker, strip_glyphs};
use super::sections::locate;

static NUMBERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s+([^\n]+)").unwrap());

/// Lines that merely restate the section heading.
const HEADING_PREFIXES: &[&str] = &["Vznikající", "Emerging"];

/// Emerging labels of one region slice, in document order. `None` when the
/// section start marker is absent.
pub fn extract_emerging(slice: &str, spec: &EmergingSpec) -> Option<Vec<String>> {
    let section = locate(slice, &spec.section, 0)?;
    Some(collect_items(section.text, &spec.mode))
}

pub fn collect_items(section: &str, mode: &EmergingMode) -> Vec<String> {
    match *mode {
        EmergingMode::Bullets {
            glyphs,
            strip,
            longer_than,
        } => section
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with(glyphs))
            .map(|line| strip_glyphs(line, strip))
            .filter(|label| char_len(label) > longer_than)
            .map(str::to_string)
            .collect(),

        EmergingMode::Lines {
            longer_than,
            reject_garbage,
        } => section
            .lines()
            .map(str::trim)
            .filter(|line| char_len(line) > longer_than)
            .filter(|line| !is_page_marker(line))
            .filter(|line| !(reject_garbage && is_garbage(line)))
            .filter(|line| !HEADING_PREFIXES.iter().any(|p| line.starts_with(p)))
            .map(str::to_string)
            .collect(),

        EmergingMode::Numbered {
            longer_than,
            exclude,
        } => NUMBERED_ITEM_RE
            .captures_iter(section)
            .map(|caps| caps[1].trim().to_string())
            .filter(|label| !label.contains(exclude) && char_len(label) > longer_than)
            .collect(),
    }
}

// ── Tests ──
