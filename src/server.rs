use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::{captions, extract_video_id, fetch, innertube, timedtext};

/// Shared per-request state: an HTTP client with a bounded timeout plus
/// the immutable server config. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(client: reqwest::Client, config: Config) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TranscriptQuery {
    video_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub transcript: String,
    pub original_language: String,
}

#[derive(Serialize)]
struct HomeResponse {
    message: &'static str,
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/transcript", get(transcript))
        .route("/transcript-api", get(transcript_api))
        .with_state(state)
}

async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "YouTube Transcript API is running!",
    })
}

/// Fetch a transcript using the default track selection policy: manually
/// authored subtitles preferred over auto-generated captions, first
/// available language, first track.
async fn transcript(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> Result<Json<TranscriptResponse>> {
    let video_id = parse_query(&query)?;

    let availability = innertube::list_caption_tracks(&state.client, &video_id).await?;
    let (language, track) = availability.preferred().ok_or(Error::NoTranscript)?;
    let language = language.to_string();
    info!("Serving transcript for {video_id} (lang={language})");

    let document_json = fetch::fetch_json(&state.client, &track.json3_url()).await?;
    let document = captions::CaptionsDocument::from_value(document_json)?;

    Ok(Json(TranscriptResponse {
        transcript: captions::reduce(&document),
        original_language: language,
    }))
}

/// Fetch a transcript via the timedtext XML path, restricted to the
/// configured language preference.
async fn transcript_api(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> Result<Json<TranscriptResponse>> {
    let video_id = parse_query(&query)?;
    let lang = state.config.api_lang.as_str();

    let availability = innertube::list_caption_tracks(&state.client, &video_id).await?;
    let (language, track) = availability.for_language(lang).ok_or(Error::NoTranscript)?;
    let language = language.to_string();
    info!("Serving timedtext transcript for {video_id} (lang={language})");

    let xml = fetch::fetch_text(&state.client, &track.url).await?;
    let snippets = timedtext::parse_caption_xml(&xml)?;

    Ok(Json(TranscriptResponse {
        transcript: timedtext::to_transcript(&snippets),
        original_language: language,
    }))
}

fn parse_query(query: &TranscriptQuery) -> Result<String> {
    let video_url = query.video_url.as_deref().ok_or(Error::MissingVideoUrl)?;
    debug!("Resolving video URL: {video_url}");
    extract_video_id(video_url).ok_or_else(|| Error::InvalidVideoUrl(video_url.to_string()))
}
