// src/domain/article/entity.rs
use crate::domain::errors::{ReportError, ReportResult};
use chrono::{NaiveDate, NaiveDateTime};

/// Publish-date layouts accepted from the source table, tried in order.
/// The column is RSS-origin text, so both RFC flavours and the plain
/// MySQL datetime/date forms show up in practice.
const PUB_DATE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d"];

/// One record from the article source table. Rows are read-only
/// snapshots; nothing in this service mutates, inserts or deletes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub substack: String,
    pub pub_date: NaiveDateTime,
    pub link: String,
}

impl Article {
    /// Build an article from raw table cells, parsing the publish date
    /// eagerly. One bad date fails the whole load rather than silently
    /// dropping the row.
    pub fn from_raw(
        title: impl Into<String>,
        substack: impl Into<String>,
        pub_date: &str,
        link: impl Into<String>,
    ) -> ReportResult<Self> {
        Ok(Self {
            title: title.into(),
            substack: substack.into(),
            pub_date: parse_pub_date(pub_date)?,
            link: link.into(),
        })
    }

    /// Date component used for range filtering and display.
    pub fn pub_day(&self) -> NaiveDate {
        self.pub_date.date()
    }
}

pub fn parse_pub_date(raw: &str) -> ReportResult<NaiveDateTime> {
    let value = raw.trim();

    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_utc());
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc2822(value) {
        return Ok(parsed.naive_utc());
    }
    for format in PUB_DATE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
            if let Some(midnight) = parsed.and_hms_opt(0, 0, 0) {
                return Ok(midnight);
            }
        }
    }

    Err(ReportError::DateParse(raw.to_string()))
}
