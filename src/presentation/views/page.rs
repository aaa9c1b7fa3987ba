//! Dashboard page rendering.
//!
//! Emits a self-contained HTML document: header band with logo and
//! refresh date, sidebar with the two date pickers, summary line and the
//! article table. No client-side framework; changing either picker
//! resubmits the GET form and the whole pipeline re-runs.

use crate::application::dto::Report;
use crate::presentation::views::escape::escape_text;

/// Page-level chrome handed to the renderer at construction. Explicit
/// value object rather than process-wide mutable setup.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub title: String,
    pub logo_url: String,
}

pub fn render_page(page: &PageConfig, report: &Report) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
{header}
<div class="layout">
{sidebar}
<main class="content">
{summary}
{table}
</main>
</div>
</body>
</html>"#,
        title = escape_text(&page.title),
        css = inline_css(),
        header = render_header(page, report),
        sidebar = render_sidebar(report),
        summary = render_summary(report),
        table = render_table(report),
    )
}

pub fn render_error_page(reason: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Dashboard error</title>
<style>{css}</style>
</head>
<body>
<div class="error-box">
<h1>Something went wrong</h1>
<p class="error-reason">{reason}</p>
<p>{message}</p>
<p>Reload the page to try again.</p>
</div>
</body>
</html>"#,
        css = inline_css(),
        reason = escape_text(reason),
        message = escape_text(message),
    )
}

fn render_header(page: &PageConfig, report: &Report) -> String {
    let last_refreshed = report.generated_at.format("%B %d, %Y");
    format!(
        r#"<div class="header-container">
<div class="logo-column"><img class="logo" src="{logo}" alt="logo"></div>
<div class="title-column">
<h1>{title}</h1>
<p>Last updated: {last_refreshed}</p>
</div>
</div>"#,
        logo = escape_text(&page.logo_url),
        title = escape_text(&page.title),
    )
}

fn render_sidebar(report: &Report) -> String {
    format!(
        r#"<aside class="sidebar">
<form method="get" action="/">
<h3>&#x1F5D3;&#xFE0F; Filter by Date</h3>
<label for="start_date">Select Start Date</label>
<input type="date" id="start_date" name="start_date" value="{start}" min="{earliest}" max="{latest}" onchange="this.form.submit()">
<label for="end_date">Select End Date</label>
<input type="date" id="end_date" name="end_date" value="{end}" min="{start}" max="{latest}" onchange="this.form.submit()">
</form>
</aside>"#,
        start = report.start,
        end = report.end,
        earliest = report.bounds.earliest,
        latest = report.bounds.latest,
    )
}

fn render_summary(report: &Report) -> String {
    format!(
        r#"<h3 class="summary">&#x1F4DD; Found {count} articles in the time range <strong>{start}</strong> to <strong>{end}</strong></h3>"#,
        count = report.rows.len(),
        start = report.start,
        end = report.end,
    )
}

fn render_table(report: &Report) -> String {
    let mut body = String::new();
    for row in &report.rows {
        // link_html is produced by the transform layer and must stay
        // live markup, so it is the one unescaped cell.
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_text(&row.blog_title),
            escape_text(&row.substack),
            escape_text(&row.published_on),
            row.link_html,
        ));
    }

    format!(
        r#"<table class="articles">
<thead>
<tr><th>Blog Title</th><th>Substack</th><th>Date of Publishing</th><th>Link</th></tr>
</thead>
<tbody>
{body}</tbody>
</table>"#
    )
}

fn inline_css() -> &'static str {
    r#"@import url('https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;600&display=swap');
html, body { font-family: 'Poppins', sans-serif; font-size: 14px; margin: 0; }
.header-container { display: flex; flex-direction: row; width: 100%; margin-bottom: 20px; }
.logo-column { width: 20%; background-color: #ffffff; padding: 20px; display: flex; justify-content: center; align-items: center; }
.logo-column img { height: 50px; }
.title-column { width: 80%; background-color: #0f74ba; color: white; padding: 20px 30px; display: flex; flex-direction: column; justify-content: center; }
.title-column h1 { font-size: 2.2rem; margin: 0; }
.title-column p { font-size: 1rem; margin: 5px 0 0; opacity: 0.85; }
.layout { display: flex; gap: 24px; padding: 0 24px 24px; }
.sidebar { width: 220px; flex-shrink: 0; }
.sidebar h3 { margin-top: 0; }
.sidebar label { display: block; margin: 12px 0 4px; }
.sidebar input[type=date] { width: 100%; padding: 4px; }
.content { flex-grow: 1; }
table.articles { width: 100%; border-collapse: collapse; }
table.articles thead th { background-color: #F5F5F5; color: #333; font-weight: bold; position: sticky; top: 0; z-index: 1; text-align: left; padding: 8px; }
table.articles tbody td { padding: 8px; text-align: left; }
table.articles tr:nth-child(odd) { background-color: #f9f9f9; }
table.articles tr:nth-child(even) { background-color: #ffffff; }
table.articles tbody tr:hover { background-color: #e1e1e1; }
.error-box { max-width: 640px; margin: 80px auto; padding: 24px; border: 1px solid #e1e1e1; }
.error-reason { font-weight: bold; }
"#
}
