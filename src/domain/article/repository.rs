use crate::domain::article::entity::Article;
use crate::domain::errors::ReportResult;
use async_trait::async_trait;

/// Read path over the article source table. The dashboard is strictly a
/// consumer: one full-table load per run, no filtering pushed down.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn load_all(&self) -> ReportResult<Vec<Article>>;
}
