// src/presentation/http/state.rs
use crate::application::report::ReportService;
use crate::presentation::views::PageConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub reports: Arc<ReportService>,
    pub page: Arc<PageConfig>,
}
