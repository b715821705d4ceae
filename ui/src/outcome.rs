use crate::api::ApiError;
use crate::markdown;

/// Shown while the request is in flight.
pub const LOADING_MESSAGE: &str = "💡 Generating insight";
/// Shown for every failure, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to generate insight. Please try again.";

/// What the response box currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Loading,
    /// Sanitized HTML, safe for `innerHTML`.
    Rendered(String),
    Failed,
}

impl Outcome {
    /// Plain-text message for the non-HTML states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Loading => Some(LOADING_MESSAGE),
            Outcome::Failed => Some(FAILURE_MESSAGE),
            Outcome::Rendered(_) => None,
        }
    }
}

/// Turn a finished request into what the page shows, logging failures to
/// the console.
pub fn settle(result: Result<String, ApiError>) -> Outcome {
    settle_with(result, |e| log::error!("analysis request failed: {e}"))
}

pub fn settle_with(result: Result<String, ApiError>, report: impl FnOnce(&ApiError)) -> Outcome {
    match result {
        Ok(text) => Outcome::Rendered(markdown::render(&text)),
        Err(e) => {
            report(&e);
            Outcome::Failed
        }
    }
}
