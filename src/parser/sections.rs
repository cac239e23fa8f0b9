use super::config::SectionSpec;

/// A sub-section of a region slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub text: &'a str,
    /// Byte offset of `text` within the searched text.
    pub offset: usize,
}

/// Bound a sub-section of `text`.
///
/// The first start marker (in list order) found at or after `from` wins. The
/// section ends at the earliest end marker found at least `spec.margin`
/// characters after the start, or at the end of `text`. `None` means the
/// region has nothing of this kind, not an error.
pub fn locate<'a>(text: &'a str, spec: &SectionSpec, from: usize) -> Option<Section<'a>> {
    let from = ceil_char_boundary(text, from);
    let start = spec
        .start
        .iter()
        .find_map(|marker| text[from..].find(marker).map(|idx| from + idx))?;

    let search_from = advance_chars(text, start, spec.margin);
    let end = spec
        .end
        .iter()
        .filter_map(|marker| text[search_from..].find(marker).map(|idx| search_from + idx))
        .min()
        .unwrap_or(text.len());

    Some(Section {
        text: &text[start..end],
        offset: start,
    })
}

fn advance_chars(text: &str, start: usize, chars: usize) -> usize {
    text[start..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(idx, _)| start + idx)
}

fn ceil_char_boundary(text: &str, mut idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(start: &'static [&'static str], end: &'static [&'static str], margin: usize) -> SectionSpec {
        SectionSpec {
            label: "domains",
            start,
            end,
            margin,
        }
    }

    #[test]
    fn first_listed_start_marker_wins() {
        let text = "B intro A body";
        let s = locate(text, &spec(&["A", "B"], &[], 0), 0).unwrap();
        assert_eq!(s.offset, 8);
        assert_eq!(s.text, "A body");
    }

    #[test]
    fn earliest_end_marker_wins() {
        let text = "START one END2 two END1 three";
        let s = locate(text, &spec(&["START"], &["END1", "END2"], 0), 0).unwrap();
        assert_eq!(s.text, "START one ");
    }

    #[test]
    fn margin_skips_end_marker_inside_start() {
        let text = "Domény specializace kraje Emerging\nPrvní doména\nVznikající domény";
        let s = locate(text, &spec(&["Domény specializace"], &["Emerging", "Vznikající"], 30), 0).unwrap();
        assert!(s.text.contains("První doména"));
        assert!(!s.text.contains("Vznikající"));
    }

    #[test]
    fn missing_start_is_none() {
        assert!(locate("nothing here", &spec(&["START"], &["END"], 0), 0).is_none());
    }

    #[test]
    fn missing_end_runs_to_text_end() {
        let s = locate("xx START tail", &spec(&["START"], &["END"], 0), 0).unwrap();
        assert_eq!(s.text, "START tail");
    }

    #[test]
    fn respects_from_offset_and_char_boundaries() {
        let text = "žž START a START b";
        // offset 1 sits inside the first 'ž'
        let s = locate(text, &spec(&["START"], &[], 0), 1).unwrap();
        assert_eq!(s.offset, 5);
        let later = locate(text, &spec(&["START"], &[], 6), 6).unwrap();
        assert_eq!(later.text, "START b");
    }

    #[test]
    fn margin_counts_characters() {
        let text = "Sřř END";
        let s = locate(text, &spec(&["S"], &["END"], 3), 0).unwrap();
        assert_eq!(s.text, "Sřř ");
        // margin past the end of the text
        let s = locate(text, &spec(&["S"], &["END"], 40), 0).unwrap();
        assert_eq!(s.text, text);
    }
}
