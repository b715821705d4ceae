use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{ANALYSE_PATH, analyse};
use crate::analyst::{Analyst, GeminiClient};
use crate::config::AnalystConfig;

pub struct AppState {
    pub analyst: Analyst,
    pub config: AnalystConfig,
}

impl AppState {
    pub fn new(config: AnalystConfig, analyst: Analyst) -> Self {
        Self { analyst, config }
    }
}

pub async fn run(config: AnalystConfig) -> anyhow::Result<()> {
    crate::config::validate(&config)?;

    let client = GeminiClient::from_config(&config.gemini)?;
    info!(api_url = %config.gemini.api_url, "gemini client configured");

    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let state = Arc::new(AppState::new(config, Analyst::new(Arc::new(client))));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("data-analyst listening on {addr}");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Build the HTTP routes: the analyse API, a health check, and the UI bundle
/// with `index.html` as fallback for client-side routes.
pub fn router(state: Arc<AppState>) -> Router {
    let ui_dir = PathBuf::from(&state.config.server.ui_dir);
    if !ui_dir.join("index.html").exists() {
        warn!(
            ui_dir = %ui_dir.display(),
            "UI bundle not found; build it with `trunk build` in ui/"
        );
    }
    let ui = ServeDir::new(&ui_dir).fallback(ServeFile::new(ui_dir.join("index.html")));

    let cors = cors_layer(&state.config.server.cors_origins);

    Router::new()
        .route(ANALYSE_PATH, post(analyse::handler))
        .route("/health", get(health))
        .fallback_service(ui)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(%origin, "ignoring invalid CORS origin: {e}");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
