use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use super::server::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyseRequest {
    pub prompt: String,
}

/// `POST /api/dataAnalyst/analyse`: answer a prompt with plain-text markdown.
///
/// Only a blank prompt is rejected. Upstream failures still answer 200 with
/// the analyst's fallback text.
pub async fn handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyseRequest>,
) -> Response {
    let request_id = Uuid::new_v4().to_string();

    if request.prompt.trim().is_empty() {
        warn!(%request_id, "rejected empty prompt");
        return (StatusCode::BAD_REQUEST, "prompt must not be empty").into_response();
    }

    let span = info_span!("analyse", %request_id);
    let text = state
        .analyst
        .generate_content(&request.prompt)
        .instrument(span)
        .await;

    ([("x-request-id", request_id)], text).into_response()
}
