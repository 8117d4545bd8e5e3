use std::sync::{Arc, Mutex};

use ytsum::error::Error;
use ytsum::youtube::TranscriptProvider;

/// Transcript provider test double. Records every video ID it is asked for.
#[derive(Clone)]
pub struct MockTranscriptProvider {
    transcript: String,
    unavailable: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockTranscriptProvider {
    pub fn new(transcript: &str) -> Self {
        MockTranscriptProvider {
            transcript: transcript.to_string(),
            unavailable: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always report that the video has no captions
    pub fn unavailable() -> Self {
        MockTranscriptProvider {
            transcript: String::new(),
            unavailable: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl TranscriptProvider for MockTranscriptProvider {
    async fn fetch_transcript(&self, video_id: &str) -> Result<String, Error> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if self.unavailable {
            return Err(Error::TranscriptUnavailable);
        }
        Ok(self.transcript.clone())
    }
}
