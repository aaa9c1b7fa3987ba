// tests/support/mod.rs
pub mod mocks;

use std::sync::Arc;
use substack_dashboard::application::ports::time::Clock;
use substack_dashboard::application::report::ReportService;
use substack_dashboard::domain::article::{Article, ArticleRepository};
use substack_dashboard::presentation::http::routes::build_router;
use substack_dashboard::presentation::http::state::HttpState;
use substack_dashboard::presentation::views::PageConfig;

pub fn test_page_config() -> PageConfig {
    PageConfig {
        title: "\u{1F4DA} Substack Article Dashboard".into(),
        logo_url: "https://example.com/logo.png".into(),
    }
}

pub fn make_service(repo: Arc<dyn ArticleRepository>) -> ReportService {
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock::at(2025, 1, 11));
    ReportService::new(repo, clock)
}

pub fn make_test_router(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    let state = HttpState {
        reports: Arc::new(make_service(repo)),
        page: Arc::new(test_page_config()),
    };
    build_router(state)
}

/// Ten articles, one per day over 2025-01-01..=2025-01-10.
pub fn sample_articles() -> Vec<Article> {
    (1..=10)
        .map(|day| {
            Article::from_raw(
                format!("Article {day}"),
                format!("Substack {}", day % 3),
                &format!("2025-01-{day:02} 08:30:00"),
                format!("https://example.com/post/{day}"),
            )
            .unwrap()
        })
        .collect()
}
