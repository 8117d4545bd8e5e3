use log::debug;

use crate::SummaryOptions;
use crate::chunk::chunk_text;
use crate::error::Error;
use crate::gemini::TextGenerator;
use crate::prompt::{chunk_prompt, merge_prompt};

/// Returned in place of an empty terminal generation
pub const EMPTY_SUMMARY_PLACEHOLDER: &str = "No summary generated.";

/// Chunk → per-chunk summarize → merge pipeline.
///
/// Chunks are summarized strictly in order, one LLM call at a time. A
/// multi-chunk transcript costs one extra call to merge the partial
/// summaries; a single-chunk transcript returns its partial directly.
pub struct SummaryPipeline<G> {
    generator: G,
    chunk_size: usize,
}

impl<G: TextGenerator> SummaryPipeline<G> {
    pub fn new(generator: G, chunk_size: usize) -> Self {
        SummaryPipeline { generator, chunk_size }
    }

    /// Produce the final summary for a transcript.
    ///
    /// Any generator failure aborts the run; no partial result is kept and
    /// the caller must restart from scratch if desired.
    pub async fn summarize(&self, transcript: &str, opts: &SummaryOptions) -> Result<String, Error> {
        if transcript.trim().is_empty() {
            return Err(Error::Validation("Transcript is empty".to_string()));
        }

        let chunks = chunk_text(transcript, self.chunk_size);
        debug!("Transcript split into {} chunk(s)", chunks.len());

        let mut partials = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let prompt = chunk_prompt(chunk, opts);
            partials.push(self.generator.generate(&prompt).await?);
        }

        let summary = if partials.len() > 1 {
            debug!("Merging {} partial summaries", partials.len());
            self.generator.generate(&merge_prompt(&partials)).await?
        } else {
            partials.pop().unwrap() // safe: a non-empty transcript yields at least one chunk
        };

        // Empty partials flow into the merge untouched; only the terminal
        // result gets the placeholder.
        if summary.trim().is_empty() {
            Ok(EMPTY_SUMMARY_PLACEHOLDER.to_string())
        } else {
            Ok(summary)
        }
    }
}
