use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;

/// Service error taxonomy, mapped onto HTTP statuses at the request boundary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed request: missing body, missing URL, bad URL, empty transcript
    #[error("{0}")]
    Validation(String),

    /// The video has captions disabled or no caption track
    #[error("No subtitles available for this video")]
    TranscriptUnavailable,

    /// The LLM call failed during chunk summarization or merge
    #[error("{0}")]
    Generation(String),

    /// Unexpected upstream response while retrieving the transcript
    #[error("{0}")]
    Scrape(String),

    /// Transport failure talking to an upstream service
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::TranscriptUnavailable => StatusCode::BAD_REQUEST,
            Error::Generation(_) | Error::Scrape(_) | Error::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {self:?}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
