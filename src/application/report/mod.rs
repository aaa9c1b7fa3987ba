// src/application/report/mod.rs
mod transform;
mod window;

pub use transform::filter_and_format;
pub use window::{compute_default_window, dataset_bounds};

use crate::application::dto::Report;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::article::ArticleRepository;
use chrono::NaiveDate;
use std::sync::Arc;

/// Raw date-range overrides as they arrive from the query string.
/// Absent or blank values fall back to the default window.
#[derive(Debug, Default, Clone)]
pub struct ReportQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Assembles one full report: load everything, derive the window,
/// filter and project. Runs from scratch on every interaction; there is
/// no cache to invalidate.
pub struct ReportService {
    repo: Arc<dyn ArticleRepository>,
    clock: Arc<dyn Clock>,
}

impl ReportService {
    pub fn new(repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn build_report(&self, query: ReportQuery) -> ApplicationResult<Report> {
        let articles = self.repo.load_all().await?;

        let bounds = dataset_bounds(&articles)?;
        let (default_start, default_end) = compute_default_window(&articles)?;

        let start = match normalize_param(query.start_date.as_deref()) {
            Some(raw) => parse_date_param("start_date", raw)?,
            None => default_start,
        };
        let end = match normalize_param(query.end_date.as_deref()) {
            Some(raw) => parse_date_param("end_date", raw)?,
            None => default_end,
        };

        let rows = filter_and_format(&articles, start, end);
        tracing::debug!(
            total = articles.len(),
            shown = rows.len(),
            %start,
            %end,
            "report assembled"
        );

        Ok(Report {
            rows,
            start,
            end,
            bounds,
            generated_at: self.clock.now().date_naive(),
        })
    }
}

fn normalize_param(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_date_param(name: &str, raw: &str) -> ApplicationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApplicationError::validation(format!("{name} must be YYYY-MM-DD, got {raw:?}")))
}
