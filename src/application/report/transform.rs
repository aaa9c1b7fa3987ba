use crate::application::dto::DisplayRow;
use crate::domain::article::Article;
use chrono::NaiveDate;

/// Select articles inside `[start, end]` (inclusive both ends) and
/// project them into display rows, newest first. An inverted range
/// yields an empty result rather than an error.
///
/// Rows are sorted by the underlying timestamp, not the formatted
/// string, with the title as tie-break so identical input always
/// produces identical output.
pub fn filter_and_format(articles: &[Article], start: NaiveDate, end: NaiveDate) -> Vec<DisplayRow> {
    let mut selected: Vec<&Article> = articles
        .iter()
        .filter(|article| {
            let day = article.pub_day();
            start <= day && day <= end
        })
        .collect();

    selected.sort_by(|a, b| {
        b.pub_date
            .cmp(&a.pub_date)
            .then_with(|| a.title.cmp(&b.title))
    });

    selected
        .into_iter()
        .map(|article| DisplayRow {
            blog_title: article.title.clone(),
            substack: article.substack.clone(),
            published_on: format_pub_date(article.pub_day()),
            link_html: make_clickable(&article.link),
        })
        .collect()
}

/// "Jan 05, 2025" style rendering of a publish date.
fn format_pub_date(day: NaiveDate) -> String {
    day.format("%b %d, %Y").to_string()
}

/// Anchor markup opening the article in a new tab. The visible text is
/// always "Read Here"; only the target varies.
fn make_clickable(url: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener">Read Here</a>"#,
        escape_attr(url)
    )
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
