use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::llm::LanguageModel;
use crate::models::{ChunkConfig, QaReport};
use crate::pipeline::chunker::chunk_transcript;
use crate::pipeline::context::{ContextConfig, ContextTracker};
use crate::pipeline::dispatch::dispatch_chunks;
use crate::pipeline::merge::merge_segments;

/// Configuration for a transcript cleaning run
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    pub chunking: ChunkConfig,
    pub context: ContextConfig,
    /// Number of chunks processed concurrently
    pub workers: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            chunking: ChunkConfig::default(),
            context: ContextConfig::default(),
            workers: 4,
        }
    }
}

/// Result of a full cleaning run
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    /// Identifier correlating log lines and the run report
    pub run_id: String,
    /// The reassembled transcript
    pub cleaned_text: String,
    /// Number of chunks the transcript was split into
    pub chunk_count: usize,
    /// Chunks that fell back to their original text
    pub fallback_count: usize,
    /// Final quality check, if the checker succeeded
    pub quality: Option<QaReport>,
}

/// Orchestrates the cleaning pipeline:
/// chunk → dispatch → sort → merge → quality check.
///
/// Per-chunk failures degrade to pass-through text and a failed quality
/// check is only logged; neither discards the merged transcript.
pub struct TranscriptCleaner<P> {
    config: CleanerConfig,
    processor: Arc<P>,
}

impl<P: LanguageModel + 'static> TranscriptCleaner<P> {
    pub fn new(processor: Arc<P>, config: CleanerConfig) -> Self {
        Self { config, processor }
    }

    /// Clean an entire transcript
    pub async fn clean(&self, transcript_text: &str) -> CleaningOutcome {
        let run_id = Uuid::new_v4().to_string();
        info!(run_id = %run_id, "Starting transcript cleaning");

        let chunks = chunk_transcript(transcript_text, &self.config.chunking);
        let chunk_count = chunks.len();
        info!("Created {} chunks", chunk_count);

        info!("Processing chunks with {} workers", self.config.workers);
        let tracker = Arc::new(Mutex::new(ContextTracker::new(self.config.context.clone())));
        let dispatched = dispatch_chunks(
            chunks,
            tracker,
            Arc::clone(&self.processor),
            self.config.workers,
        )
        .await;

        if dispatched.failures > 0 {
            warn!(
                "{} of {} chunks fell back to their original text",
                dispatched.failures, chunk_count
            );
        }

        // Output order is by chunk index, never completion order
        let mut processed = dispatched.chunks;
        processed.sort_by_key(|c| c.index);

        info!("Assembling final transcript");
        let segments: Vec<String> = processed.into_iter().map(|c| c.processed_text).collect();
        let cleaned_text = merge_segments(&segments);

        info!("Performing final quality check");
        let quality = match self
            .processor
            .quality_check(transcript_text, &cleaned_text)
            .await
        {
            Ok(report) => {
                info!(
                    "Quality score {}, {} issues, content loss: {}",
                    report.quality_score,
                    report.issues.len(),
                    report.content_loss_detected
                );
                Some(report)
            }
            Err(e) => {
                warn!("Quality check failed: {}", e);
                None
            }
        };

        info!(run_id = %run_id, "Transcript cleaning completed");

        CleaningOutcome {
            run_id,
            cleaned_text,
            chunk_count,
            fallback_count: dispatched.failures,
            quality,
        }
    }
}
