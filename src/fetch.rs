use log::debug;
use serde_json::Value;

use crate::error::Result;

pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// GET a URL and parse the body as JSON. Timeouts are bounded by the
/// client; there is no retry.
pub async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<Value> {
    debug!("GET (json) {url}");
    let value = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(value)
}

/// GET a URL and return the body as text.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!("GET (text) {url}");
    let body = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}
