// src/presentation/http/routes.rs
use crate::presentation::http::controllers::report;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Router, routing::get};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(report::show_dashboard))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
