pub mod chunk;
pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod server;
pub mod summarize;
pub mod youtube;

/// Presentation options for a summary request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Free-form style label, passed into the prompt verbatim
    pub style: String,
    /// Free-form length label, passed into the prompt verbatim
    pub length: String,
    /// Target natural language of the summary
    pub language: String,
    /// Bullet points instead of paragraph form
    pub bulleted: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            style: "Normal".to_string(),
            length: "Short".to_string(),
            language: "Burmese".to_string(),
            bulleted: false,
        }
    }
}

/// Extract video ID from various YouTube URL formats
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    // youtu.be/ID — trailing path segment
    if let Some(caps) = regex::Regex::new(r"youtu\.be/([^/?&#]+)")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    // youtube.com/watch?v=ID — value runs up to the next parameter
    if let Some(caps) = regex::Regex::new(r"[?&]v=([^&#]+)").unwrap().captures(input) {
        return Some(caps[1].to_string());
    }

    // youtube.com/embed/ID
    if let Some(caps) = regex::Regex::new(r"youtube\.com/embed/([^/?&#]+)")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    // youtube.com/shorts/ID
    if let Some(caps) = regex::Regex::new(r"youtube\.com/shorts/([^/?&#]+)")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    None
}
