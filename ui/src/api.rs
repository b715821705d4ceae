use gloo_net::http::Request;
use serde::Serialize;

/// Server route that answers prompts.
pub const ANALYSE_PATH: &str = "/api/dataAnalyst/analyse";

#[derive(Debug, Serialize)]
pub struct AnalyseRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Analyse endpoint. Same-origin unless the bundle was built with
/// `DATA_ANALYST_API_BASE` pointing at a separate API host.
pub fn endpoint() -> String {
    endpoint_for(option_env!("DATA_ANALYST_API_BASE"))
}

pub fn endpoint_for(base: Option<&str>) -> String {
    match base.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) => format!("{}{ANALYSE_PATH}", base.trim_end_matches('/')),
        None => ANALYSE_PATH.to_string(),
    }
}

/// Prompt text as sent: the textarea value without surrounding whitespace.
pub fn prompt_from_input(raw: &str) -> String {
    raw.trim().to_string()
}

/// Only 2xx counts as success.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// POST `{"prompt": ...}` and return the plain-text (markdown) answer.
pub async fn analyse(prompt: &str) -> Result<String, ApiError> {
    let url = endpoint();
    log::debug!("posting prompt to {url} ({} chars)", prompt.chars().count());

    let response = Request::post(&url)
        .json(&AnalyseRequest { prompt })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(response.status())?;

    response
        .text()
        .await
        .map_err(|e| ApiError::Body(e.to_string()))
}
