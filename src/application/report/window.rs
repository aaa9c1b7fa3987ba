use crate::application::dto::DateBounds;
use crate::domain::article::Article;
use crate::domain::errors::{ReportError, ReportResult};
use chrono::{Duration, NaiveDate};

/// Days looked back from the latest article for the initial view.
const DEFAULT_WINDOW_DAYS: i64 = 4;

/// Initial date range shown before any user interaction: the latest
/// publish date and the four days leading up to it.
pub fn compute_default_window(articles: &[Article]) -> ReportResult<(NaiveDate, NaiveDate)> {
    let end = articles
        .iter()
        .map(Article::pub_day)
        .max()
        .ok_or(ReportError::EmptyDataset)?;
    let start = end - Duration::days(DEFAULT_WINDOW_DAYS);
    Ok((start, end))
}

/// Earliest and latest publish dates across the whole dataset, for the
/// date-picker bounds.
pub fn dataset_bounds(articles: &[Article]) -> ReportResult<DateBounds> {
    let mut days = articles.iter().map(Article::pub_day);
    let first = days.next().ok_or(ReportError::EmptyDataset)?;
    let (earliest, latest) = days.fold((first, first), |(lo, hi), day| {
        (lo.min(day), hi.max(day))
    });
    Ok(DateBounds { earliest, latest })
}
