// src/application/dto.rs
use chrono::NaiveDate;

/// Display projection of one article. `published_on` is the already
/// formatted "Mon DD, YYYY" string and `link_html` is the ready-to-embed
/// anchor markup; the view layer injects it unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub blog_title: String,
    pub substack: String,
    pub published_on: String,
    pub link_html: String,
}

/// Earliest/latest publish dates across the full dataset. Drives the
/// date-picker bounds, so it is computed from the untouched originals,
/// never from the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

/// Everything one page render needs. Built fresh on every interaction.
#[derive(Debug, Clone)]
pub struct Report {
    pub rows: Vec<DisplayRow>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub bounds: DateBounds,
    pub generated_at: NaiveDate,
}
