#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use podium_core::canonical::stable_json_hash_hex;
use podium_model::RoadmapDocument;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;

mod config;
mod content;
mod gate;
mod http;
mod metrics;
mod middleware;

pub use config::ApiConfig;
pub use content::{load_document, ContentError};
pub use gate::{
    mint_session_token, MemorySessionStore, SessionGate, SessionStore, GATE_PASSWORD,
    GATE_USERNAME, SESSION_COOKIE,
};

pub const CRATE_NAME: &str = "podium-server";

#[derive(Clone)]
pub struct AppState {
    pub document: Arc<RoadmapDocument>,
    pub content_epoch: String,
    pub gate: Arc<SessionGate>,
    pub api: ApiConfig,
    pub ready: Arc<AtomicBool>,
    pub(crate) metrics: Arc<metrics::RequestMetrics>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(document: RoadmapDocument) -> Self {
        Self::with_config(document, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(document: RoadmapDocument, api: ApiConfig) -> Self {
        let content_epoch = stable_json_hash_hex(&document).unwrap_or_default();
        Self {
            document: Arc::new(document),
            content_epoch,
            gate: Arc::new(SessionGate::new(Arc::new(MemorySessionStore::default()))),
            api,
            ready: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(metrics::RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }

    #[must_use]
    pub fn with_gate(mut self, gate: SessionGate) -> Self {
        self.gate = Arc::new(gate);
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    let gated = Router::new()
        .route("/v1/roadmap", get(http::handlers::roadmap_handler))
        .route("/v1/horizons/:key", get(http::handlers::horizon_handler))
        .route(
            "/v1/horizons/:key/sections/:section",
            get(http::handlers::section_handler),
        )
        .route(
            "/v1/horizons/:key/diagram",
            get(http::handlers::diagram_handler),
        )
        .route(
            "/v1/horizons/:key/cost-impact",
            get(http::handlers::cost_impact_handler),
        )
        .route("/v1/trajectory", get(http::handlers::trajectory_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::session_gate::session_gate_middleware,
        ));

    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/readyz", get(http::handlers::readyz_handler))
        .route("/metrics", get(http::handlers::metrics_handler))
        .route("/v1/version", get(http::handlers::version_handler))
        .route("/v1/openapi", get(http::handlers::openapi_handler))
        .route(
            "/v1/session",
            get(http::handlers::session_status_handler).post(http::handlers::sign_in_handler),
        )
        .merge(gated)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
