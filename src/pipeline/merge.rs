/// Longest overlap prefix considered, in bytes
const MAX_OVERLAP_SCAN: usize = 500;

/// Find the longest prefix of `next` that is also a suffix of `merged`.
///
/// The scan runs longest-first from `min(500, len(merged), len(next))` down
/// to one byte, so the first hit wins. Matching is literal: a segment the
/// model reworded at the boundary will not be caught.
pub fn find_overlap<'a>(merged: &str, next: &'a str) -> &'a str {
    let limit = MAX_OVERLAP_SCAN.min(merged.len()).min(next.len());

    for len in (1..=limit).rev() {
        if !next.is_char_boundary(len) {
            continue;
        }
        if merged.ends_with(&next[..len]) {
            return &next[..len];
        }
    }

    ""
}

/// Fold processed segments into one document, deduplicating the
/// intentionally overlapping chunk boundaries.
///
/// The first segment is taken verbatim. Each later segment has its detected
/// overlap with the text merged so far stripped (plus surrounding
/// whitespace) and is appended after a blank line.
pub fn merge_segments(segments: &[String]) -> String {
    let Some(first) = segments.first() else {
        return String::new();
    };

    let mut merged = first.clone();

    for segment in &segments[1..] {
        let mut piece = segment.as_str();
        let overlap = find_overlap(&merged, piece);
        if !overlap.is_empty() {
            piece = piece[overlap.len()..].trim();
        }
        merged.push_str("\n\n");
        merged.push_str(piece);
    }

    merged
}
