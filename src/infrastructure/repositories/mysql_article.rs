// src/infrastructure/repositories/mysql_article.rs
use super::error::map_sqlx;
use crate::domain::article::{Article, ArticleRepository};
use crate::domain::errors::{ReportError, ReportResult};
use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool};

#[derive(Clone)]
pub struct MySqlArticleRepository {
    pool: MySqlPool,
    table: String,
}

impl MySqlArticleRepository {
    /// `table` must already be validated as a bare SQL identifier; the
    /// config layer enforces that before we ever get here.
    pub fn new(pool: MySqlPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    title: String,
    substack: String,
    #[sqlx(rename = "pubDate")]
    pub_date: String,
    link: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = ReportError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Article::from_raw(row.title, row.substack, &row.pub_date, row.link)
    }
}

#[async_trait]
impl ArticleRepository for MySqlArticleRepository {
    async fn load_all(&self) -> ReportResult<Vec<Article>> {
        let sql = format!(
            "SELECT title, substack, pubDate, link FROM `{}`",
            self.table
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
