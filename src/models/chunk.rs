use serde::{Deserialize, Serialize};

/// Configuration for transcript chunking
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Maximum chunk size in characters (line separators excluded)
    pub max_chunk_chars: usize,
    /// Minimum overlap carried between adjacent chunks, in characters
    pub overlap_chars: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: 3000,
            overlap_chars: 500,
        }
    }
}

/// A contiguous slice of the input transcript with a stable ordinal index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Position of this chunk in the transcript, starting at 0
    pub index: usize,
    /// Raw chunk text, line separators included
    pub text: String,
    /// First input line covered by this chunk (0-based)
    pub start_line: usize,
    /// Last input line covered by this chunk (inclusive)
    pub end_line: usize,
}

impl Chunk {
    /// Number of input lines covered by this chunk
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Result of processing one chunk, keyed by the originating chunk's index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedChunk {
    /// Index of the chunk this result came from
    pub index: usize,
    /// Cleaned text, or the original chunk text when processing failed
    pub processed_text: String,
    /// Speakers the model identified in this chunk
    pub speakers: Vec<String>,
    /// Topical highlights carried forward as context for later chunks
    pub context_points: Vec<String>,
}

impl ProcessedChunk {
    /// Pass-through result for a chunk whose processing failed
    pub fn fallback(chunk: &Chunk) -> Self {
        Self {
            index: chunk.index,
            processed_text: chunk.text.clone(),
            speakers: Vec::new(),
            context_points: Vec::new(),
        }
    }
}
