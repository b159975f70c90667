use std::sync::Arc;

use tokio::sync::{Mutex, Semaphore};
use tracing::warn;

use crate::llm::LanguageModel;
use crate::models::{Chunk, ProcessedChunk};
use crate::pipeline::context::ContextTracker;

/// Result of dispatching all chunks through the worker pool
#[derive(Debug)]
pub struct DispatchResult {
    /// One entry per input chunk, in no particular order
    pub chunks: Vec<ProcessedChunk>,
    /// Number of chunks that fell back to their original text
    pub failures: usize,
}

/// Fan chunk processing out across a bounded worker pool.
///
/// Every chunk is spawned as a task; a semaphore with `workers` permits
/// bounds how many run at once. Each task reads the tracker's current
/// context for its index, calls the model, and records the resulting
/// context points back into the tracker, so what a chunk observes depends
/// on which earlier chunks have already completed, not on index order.
///
/// A chunk whose processing fails in any way is passed through with its
/// original text; dispatch itself never fails.
pub async fn dispatch_chunks<P>(
    chunks: Vec<Chunk>,
    tracker: Arc<Mutex<ContextTracker>>,
    processor: Arc<P>,
    workers: usize,
) -> DispatchResult
where
    P: LanguageModel + 'static,
{
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));
    let mut handles = Vec::with_capacity(chunks.len());

    for chunk in &chunks {
        let chunk = chunk.clone();
        let semaphore = Arc::clone(&semaphore);
        let tracker = Arc::clone(&tracker);
        let processor = Arc::clone(&processor);

        handles.push(tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await.ok();
            process_chunk(chunk, tracker, processor).await
        }));
    }

    let mut processed = Vec::with_capacity(chunks.len());
    let mut failures = 0;

    for (handle, chunk) in handles.into_iter().zip(chunks) {
        match handle.await {
            Ok((result, fell_back)) => {
                if fell_back {
                    failures += 1;
                }
                processed.push(result);
            }
            Err(e) => {
                warn!("Chunk {} task aborted: {}", chunk.index, e);
                tracker.lock().await.record(chunk.index, Vec::new());
                processed.push(ProcessedChunk::fallback(&chunk));
                failures += 1;
            }
        }
    }

    DispatchResult {
        chunks: processed,
        failures,
    }
}

/// Process one chunk and record its context points
async fn process_chunk<P: LanguageModel>(
    chunk: Chunk,
    tracker: Arc<Mutex<ContextTracker>>,
    processor: Arc<P>,
) -> (ProcessedChunk, bool) {
    let context = tracker.lock().await.context_for(chunk.index);

    let (result, fell_back) = match processor.correct_segment(&chunk.text, &context).await {
        Ok(segment) => {
            let processed_text = if segment.has_text() {
                segment.processed_text
            } else {
                chunk.text.clone()
            };
            (
                ProcessedChunk {
                    index: chunk.index,
                    processed_text,
                    speakers: segment.speakers_identified,
                    context_points: segment.key_context_points,
                },
                false,
            )
        }
        Err(e) => {
            warn!("Chunk {} failed, keeping original text: {}", chunk.index, e);
            (ProcessedChunk::fallback(&chunk), true)
        }
    };

    tracker
        .lock()
        .await
        .record(result.index, result.context_points.clone());

    (result, fell_back)
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::error::LlmError;
    use crate::models::{CorrectedSegment, QaReport};
    use crate::pipeline::context::ContextConfig;

    /// Cleans every segment, failing only those containing a marker
    struct MarkerModel {
        fail_marker: Option<String>,
    }

    #[async_trait]
    impl LanguageModel for MarkerModel {
        async fn correct_segment(
            &self,
            segment: &str,
            _context: &str,
        ) -> Result<CorrectedSegment, LlmError> {
            if let Some(marker) = &self.fail_marker {
                if segment.contains(marker) {
                    return Err(LlmError::EmptyResponse);
                }
            }
            Ok(CorrectedSegment {
                processed_text: format!("cleaned: {segment}"),
                speakers_identified: vec!["Speaker 1".to_string()],
                key_context_points: vec![format!("topic of {segment}")],
                processing_notes: None,
            })
        }

        async fn quality_check(
            &self,
            _original: &str,
            _processed: &str,
        ) -> Result<QaReport, LlmError> {
            Err(LlmError::EmptyResponse)
        }
    }

    fn make_chunks(texts: &[&str]) -> Vec<Chunk> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| Chunk {
                index,
                text: text.to_string(),
                start_line: index,
                end_line: index,
            })
            .collect()
    }

    fn new_tracker() -> Arc<Mutex<ContextTracker>> {
        Arc::new(Mutex::new(ContextTracker::new(ContextConfig::default())))
    }

    #[tokio::test]
    async fn test_all_chunks_come_back() {
        let chunks = make_chunks(&["one", "two", "three", "four"]);
        let model = Arc::new(MarkerModel { fail_marker: None });

        let result = dispatch_chunks(chunks, new_tracker(), model, 4).await;

        assert_eq!(result.chunks.len(), 4);
        assert_eq!(result.failures, 0);

        let mut sorted = result.chunks;
        sorted.sort_by_key(|c| c.index);
        for (i, chunk) in sorted.iter().enumerate() {
            assert_eq!(chunk.index, i);
            assert!(chunk.processed_text.starts_with("cleaned: "));
        }
    }

    #[tokio::test]
    async fn test_failed_chunk_falls_back_to_original() {
        let chunks = make_chunks(&["zero", "one", "bad two", "three"]);
        let model = Arc::new(MarkerModel {
            fail_marker: Some("bad".to_string()),
        });

        let result = dispatch_chunks(chunks, new_tracker(), model, 2).await;

        assert_eq!(result.chunks.len(), 4);
        assert_eq!(result.failures, 1);

        let mut sorted = result.chunks;
        sorted.sort_by_key(|c| c.index);
        let fallback = &sorted[2];
        assert_eq!(fallback.index, 2);
        assert_eq!(fallback.processed_text, "bad two");
        assert!(fallback.speakers.is_empty());
        assert!(fallback.context_points.is_empty());
    }

    #[tokio::test]
    async fn test_context_points_are_recorded() {
        let chunks = make_chunks(&["alpha", "beta"]);
        let tracker = new_tracker();
        let model = Arc::new(MarkerModel { fail_marker: None });

        dispatch_chunks(chunks, Arc::clone(&tracker), model, 1).await;

        let tracker = tracker.lock().await;
        assert_eq!(tracker.len(), 2);
        // Context for a later chunk reflects what was recorded for earlier ones
        let context = tracker.context_for(2);
        assert!(context.contains("topic of"));
    }

    #[tokio::test]
    async fn test_fallback_records_empty_context() {
        let chunks = make_chunks(&["bad only"]);
        let tracker = new_tracker();
        let model = Arc::new(MarkerModel {
            fail_marker: Some("bad".to_string()),
        });

        dispatch_chunks(chunks, Arc::clone(&tracker), model, 1).await;

        let tracker = tracker.lock().await;
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.context_for(1), "");
    }
}
