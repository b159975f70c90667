pub mod error;
pub mod io;
pub mod llm;
pub mod models;
pub mod pipeline;

pub use error::LlmError;
pub use io::{read_transcript, write_transcript, RunReport};
pub use llm::{LanguageModel, LlmClient, LlmConfig, DEFAULT_MODEL};
pub use models::{
    Chunk, ChunkConfig, CorrectedSegment, ProcessedChunk, QaAssessment, QaReport,
};
pub use pipeline::{
    chunk_transcript, dispatch_chunks, find_overlap, merge_segments, CleanerConfig,
    CleaningOutcome, ContextConfig, ContextTracker, DispatchResult, TranscriptCleaner,
};
