// src/presentation/http/controllers/report.rs
use crate::application::report::ReportQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::views;
use axum::{Extension, extract::Query, response::Html};
use serde::Deserialize;

/// Raw query-string parameters. Browsers submit empty strings for
/// untouched pickers, so both fields stay stringly typed here and are
/// normalized by the report service.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

pub async fn show_dashboard(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ReportParams>,
) -> HttpResult<Html<String>> {
    let report = state
        .reports
        .build_report(ReportQuery {
            start_date: params.start_date,
            end_date: params.end_date,
        })
        .await
        .into_http()?;

    Ok(Html(views::render_page(&state.page, &report)))
}
