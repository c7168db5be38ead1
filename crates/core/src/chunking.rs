use crate::error::CoreError;
use regex::Regex;

/// Splits `text` into size-bounded segments along natural boundaries.
///
/// Units are delimited by runs of two or more line breaks and by heading
/// markers (`#` at line start). Units are packed greedily in document order:
/// a unit joins the current segment while the segment stays at or below
/// `max_chars` (counting the two-character join separator once the segment is
/// non-empty), otherwise the segment is flushed and a new one starts.
///
/// `max_chars` is a packing target, not a truncation limit: a single unit
/// longer than the bound is emitted whole. Segments are trimmed and empty
/// segments dropped. The output is deterministic; re-chunking the joined
/// output yields the same or fewer segments (original separator variants are
/// not preserved).
pub fn chunk(text: &str, max_chars: usize) -> Result<Vec<String>, CoreError> {
    if max_chars == 0 {
        return Err(CoreError::InvalidConfiguration(
            "max_chars must be positive".to_string(),
        ));
    }

    let boundary = Regex::new(r"(?m)\n{2,}|^#+\s")?;

    let mut segments = Vec::new();
    let mut buffer = String::new();

    for unit in boundary.split(text) {
        let separator_cost = if buffer.is_empty() { 0 } else { 2 };

        if buffer.len() + separator_cost + unit.len() <= max_chars {
            if !buffer.is_empty() {
                buffer.push_str("\n\n");
            }
            buffer.push_str(unit);
        } else {
            if !buffer.is_empty() {
                segments.push(buffer.clone());
            }
            buffer.clear();
            buffer.push_str(unit);
        }
    }

    if !buffer.is_empty() {
        segments.push(buffer);
    }

    Ok(segments
        .into_iter()
        .map(|segment| segment.trim().to_string())
        .filter(|segment| !segment.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::chunk;

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(chunk("", 100).expect("chunking should succeed").is_empty());
        assert!(chunk("  \n\n \n\n ", 100)
            .expect("chunking should succeed")
            .is_empty());
    }

    #[test]
    fn zero_bound_is_rejected() {
        assert!(chunk("some text", 0).is_err());
    }

    #[test]
    fn small_units_pack_into_one_segment() {
        let segments = chunk("one\n\ntwo\n\nthree", 100).expect("chunking should succeed");
        assert_eq!(segments, vec!["one\n\ntwo\n\nthree".to_string()]);
    }

    #[test]
    fn segments_respect_the_bound() {
        let text = "alpha beta gamma\n\ndelta epsilon\n\nzeta eta theta\n\niota kappa";
        let segments = chunk(text, 40).expect("chunking should succeed");

        assert!(segments.len() > 1);
        for segment in &segments {
            assert!(segment.len() <= 40, "segment too long: {segment:?}");
        }
    }

    #[test]
    fn oversized_unit_is_emitted_whole() {
        let long = "a".repeat(100);
        let segments = chunk(&long, 20).expect("chunking should succeed");
        assert_eq!(segments, vec![long]);
    }

    #[test]
    fn heading_markers_start_new_units() {
        let segments = chunk("# Alpha\n\n# Beta", 3).expect("chunking should succeed");
        assert_eq!(segments, vec!["Alpha".to_string(), "Beta".to_string()]);
    }

    #[test]
    fn two_long_sections_become_two_segments() {
        // 3200-character markdown document with two blank-line-separated
        // sections, each individually above the 1500 bound.
        let first = "a".repeat(1_590);
        let second = "b".repeat(1_590);
        let text = format!("{first}\n\n{second}");
        assert!(text.len() >= 3_100);

        let segments = chunk(&text, 1_500).expect("chunking should succeed");
        assert_eq!(segments, vec![first, second]);
    }

    #[test]
    fn rechunking_joined_output_does_not_grow() {
        let text = "# Intro\nShort intro.\n\n\n\nMiddle part with some words.\n\n# End\nClosing.";
        let segments = chunk(text, 30).expect("chunking should succeed");
        let rejoined = segments.join("\n\n");
        let again = chunk(&rejoined, 30).expect("chunking should succeed");
        assert!(again.len() <= segments.len());
    }

    #[test]
    fn chunking_is_deterministic() {
        let text = "First paragraph.\n\nSecond paragraph.\n\n# Heading\nBody.";
        let first = chunk(text, 25).expect("chunking should succeed");
        let second = chunk(text, 25).expect("chunking should succeed");
        assert_eq!(first, second);
    }
}
