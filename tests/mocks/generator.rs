use std::sync::{Arc, Mutex};

use ytsum::error::Error;
use ytsum::gemini::TextGenerator;

/// Text generator test double. Records every prompt it receives and replies
/// from a fixed script, one response per call.
#[derive(Clone)]
pub struct MockGenerator {
    responses: Vec<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
    fail_with: Option<String>,
}

impl MockGenerator {
    /// Reply with the same text on every call
    pub fn new(output: &str) -> Self {
        Self::with_responses(&[output])
    }

    /// Reply with `responses[i]` on call `i`; the last entry repeats
    pub fn with_responses(responses: &[&str]) -> Self {
        MockGenerator {
            responses: responses.iter().map(|s| s.to_string()).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        MockGenerator {
            responses: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let call_index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(prompt.to_string());
            calls.len() - 1
        };

        if let Some(ref msg) = self.fail_with {
            return Err(Error::Generation(msg.clone()));
        }

        let response = self
            .responses
            .get(call_index)
            .or_else(|| self.responses.last())
            .cloned()
            .unwrap_or_default();
        Ok(response)
    }
}
