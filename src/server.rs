use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use log::info;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::error::Error;
use crate::gemini::TextGenerator;
use crate::summarize::SummaryPipeline;
use crate::youtube::TranscriptProvider;
use crate::{SummaryOptions, extract_video_id};

/// Per-process state shared by all requests
pub struct AppState<P, G> {
    pub provider: P,
    pub pipeline: SummaryPipeline<G>,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_length")]
    pub length: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default, rename = "bullet")]
    pub bulleted: bool,
}

fn default_style() -> String {
    "Normal".to_string()
}

fn default_length() -> String {
    "Short".to_string()
}

fn default_language() -> String {
    "Burmese".to_string()
}

impl SummarizeRequest {
    fn options(&self) -> SummaryOptions {
        SummaryOptions {
            style: self.style.clone(),
            length: self.length.clone(),
            language: self.language.clone(),
            bulleted: self.bulleted,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

pub fn router<P, G>(state: AppState<P, G>) -> Router
where
    P: TranscriptProvider + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/summarize", post(summarize_video::<P, G>))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

async fn summarize_video<P, G>(
    State(state): State<Arc<AppState<P, G>>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, Error>
where
    P: TranscriptProvider,
    G: TextGenerator,
{
    let Json(request) = payload.map_err(|_| Error::Validation("Invalid JSON body".to_string()))?;
    let response = process_request(&state, request).await?;
    Ok(Json(response))
}

/// Validate the request, retrieve the transcript, and run the pipeline.
///
/// Validation happens before either collaborator is touched: a missing or
/// unparseable URL never triggers a transcript fetch, and a transcript
/// failure never triggers an LLM call.
pub async fn process_request<P, G>(
    state: &AppState<P, G>,
    request: SummarizeRequest,
) -> Result<SummarizeResponse, Error>
where
    P: TranscriptProvider,
    G: TextGenerator,
{
    if request.url.trim().is_empty() {
        return Err(Error::Validation("Video URL is required".to_string()));
    }

    let video_id = extract_video_id(&request.url)
        .ok_or_else(|| Error::Validation("Invalid YouTube URL".to_string()))?;

    info!("Summarizing video {video_id}");

    let transcript = state.provider.fetch_transcript(&video_id).await?;
    let summary = state.pipeline.summarize(&transcript, &request.options()).await?;

    Ok(SummarizeResponse { summary })
}
