use crate::models::{Chunk, ChunkConfig};

/// Split a transcript into bounded, overlapping chunks.
///
/// Lines are never split: a chunk accumulates whole lines while the sum of
/// their lengths (separators excluded) stays within `max_chunk_chars`. When
/// the next line would overflow, the chunk is closed and the next one is
/// seeded with a suffix of the closed chunk's lines totalling at least
/// `overlap_chars`, in original order.
///
/// A single line longer than `max_chunk_chars` is emitted alone in its own
/// chunk, untruncated, and is never reused as overlap. If the overlap
/// suffix would cover an entire chunk, nothing is seeded, so no chunk is
/// ever wholly re-emitted.
pub fn chunk_transcript(text: &str, config: &ChunkConfig) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current: Vec<(usize, &str)> = Vec::new();
    let mut current_len = 0usize;

    for (line_no, line) in text.lines().enumerate() {
        if line.len() > config.max_chunk_chars {
            // Oversized line: flush whatever is accumulated, then emit the
            // line as a chunk of its own and start over without overlap.
            if !current.is_empty() {
                push_chunk(&mut chunks, &current);
            }
            push_chunk(&mut chunks, &[(line_no, line)]);
            current.clear();
            current_len = 0;
            continue;
        }

        if !current.is_empty() && current_len + line.len() > config.max_chunk_chars {
            push_chunk(&mut chunks, &current);
            current = overlap_suffix(&current, config.overlap_chars);
            current_len = current.iter().map(|(_, l)| l.len()).sum();
        }

        current.push((line_no, line));
        current_len += line.len();
    }

    // The final partial chunk is always emitted if non-empty
    if !current.is_empty() {
        push_chunk(&mut chunks, &current);
    }

    chunks
}

fn push_chunk(chunks: &mut Vec<Chunk>, lines: &[(usize, &str)]) {
    let text = lines
        .iter()
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n");

    chunks.push(Chunk {
        index: chunks.len(),
        text,
        start_line: lines[0].0,
        end_line: lines[lines.len() - 1].0,
    });
}

/// Walk backward from the end of a closed chunk, accumulating lines until
/// their total length reaches `overlap_chars` (inclusive of the crossing
/// line). Returns the suffix in original order, or nothing if the suffix
/// would be the whole chunk.
fn overlap_suffix<'a>(lines: &[(usize, &'a str)], overlap_chars: usize) -> Vec<(usize, &'a str)> {
    let mut accumulated = 0usize;
    let mut start = lines.len();

    while start > 0 && accumulated < overlap_chars {
        start -= 1;
        accumulated += lines[start].1.len();
    }

    if start == 0 {
        return Vec::new();
    }

    lines[start..].to_vec()
}
