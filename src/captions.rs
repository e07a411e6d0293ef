use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// A JSON3 captions document: an ordered list of timed caption events.
///
/// Event order defines transcript order; nothing here is sorted or
/// deduplicated.
#[derive(Debug, Default, Deserialize)]
pub struct CaptionsDocument {
    #[serde(default)]
    pub events: Vec<CaptionEvent>,
}

#[derive(Debug, Deserialize)]
pub struct CaptionEvent {
    pub segs: Option<Vec<Seg>>,
}

/// The smallest text unit within a caption event. Timing metadata on the
/// wire is ignored; the `utf8` field is strict — a segment without it is
/// malformed data, not an empty segment.
#[derive(Debug, Deserialize)]
pub struct Seg {
    pub utf8: String,
}

impl CaptionsDocument {
    /// Build a document from an untrusted JSON value.
    ///
    /// A non-object top level, or an object without an `events` field,
    /// yields an empty document. A segment list that is present but
    /// missing `utf8` text is a hard error.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| Error::MalformedCaptions(e.to_string()))
    }
}

/// Flatten a captions document into a single transcript string.
///
/// Segments within an event are joined with single spaces, each
/// contributing event is followed by one space, and the final result is
/// trimmed. Events without a `segs` field contribute nothing.
pub fn reduce(document: &CaptionsDocument) -> String {
    let mut transcript = String::new();
    for event in &document.events {
        if let Some(segs) = &event.segs {
            let joined = segs.iter().map(|s| s.utf8.as_str()).collect::<Vec<_>>().join(" ");
            transcript.push_str(&joined);
            transcript.push(' ');
        }
    }
    transcript.trim().to_string()
}
