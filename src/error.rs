use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing 'video_url' parameter")]
    MissingVideoUrl,

    #[error("could not extract video ID from: {0}")]
    InvalidVideoUrl(String),

    #[error("No transcript available")]
    NoTranscript,

    #[error("could not extract InnerTube API key from watch page")]
    ApiKeyNotFound,

    #[error("malformed caption data: {0}")]
    MalformedCaptions(String),

    #[error("error parsing caption XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingVideoUrl | Error::InvalidVideoUrl(_) => StatusCode::BAD_REQUEST,
            Error::NoTranscript => StatusCode::NOT_FOUND,
            Error::ApiKeyNotFound
            | Error::MalformedCaptions(_)
            | Error::Xml(_)
            | Error::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
