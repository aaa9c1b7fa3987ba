// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use substack_dashboard::application::ports::time::Clock;
use substack_dashboard::domain::article::{Article, ArticleRepository};
use substack_dashboard::domain::errors::{ReportError, ReportResult};

/* -------------------------------- ArticleRepository -------------------------------- */

/// In-memory repository serving a fixed snapshot.
pub struct StaticArticleRepo {
    articles: Vec<Article>,
}

impl StaticArticleRepo {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl ArticleRepository for StaticArticleRepo {
    async fn load_all(&self) -> ReportResult<Vec<Article>> {
        Ok(self.articles.clone())
    }
}

/// Repository whose every load fails with the configured error kind.
#[derive(Clone, Copy)]
pub enum FailureKind {
    Connection,
    Query,
}

pub struct FailingArticleRepo(pub FailureKind);

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn load_all(&self) -> ReportResult<Vec<Article>> {
        Err(match self.0 {
            FailureKind::Connection => ReportError::Connection("connection refused".into()),
            FailureKind::Query => ReportError::Query("table 'monkey_insider' doesn't exist".into()),
        })
    }
}

/* -------------------------------- Clock -------------------------------- */

/// Clock pinned to a known instant so "Last updated" is assertable.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(y: i32, m: u32, d: u32) -> Self {
        Self(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
