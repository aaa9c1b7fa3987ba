// tests/report_service.rs
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use substack_dashboard::application::error::ApplicationError;
use substack_dashboard::application::report::ReportQuery;
use substack_dashboard::domain::errors::ReportError;

mod support;

use support::mocks::StaticArticleRepo;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn default_window_is_the_last_five_days() {
    let service = support::make_service(Arc::new(StaticArticleRepo::new(
        support::sample_articles(),
    )));

    let report = service.build_report(ReportQuery::default()).await.unwrap();

    assert_eq!(report.start, date(2025, 1, 6));
    assert_eq!(report.end, date(2025, 1, 10));
    // Inclusive window over the 6th..10th keeps exactly five rows.
    assert_eq!(report.rows.len(), 5);
    assert_eq!(report.rows[0].blog_title, "Article 10");
    assert_eq!(report.rows[4].blog_title, "Article 6");
}

#[tokio::test]
async fn bounds_cover_the_whole_dataset_not_the_filtered_view() {
    let service = support::make_service(Arc::new(StaticArticleRepo::new(
        support::sample_articles(),
    )));

    let report = service
        .build_report(ReportQuery {
            start_date: Some("2025-01-09".into()),
            end_date: Some("2025-01-10".into()),
        })
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.bounds.earliest, date(2025, 1, 1));
    assert_eq!(report.bounds.latest, date(2025, 1, 10));
}

#[tokio::test]
async fn user_overrides_replace_the_default_window() {
    let service = support::make_service(Arc::new(StaticArticleRepo::new(
        support::sample_articles(),
    )));

    let report = service
        .build_report(ReportQuery {
            start_date: Some("2025-01-02".into()),
            end_date: Some("2025-01-03".into()),
        })
        .await
        .unwrap();

    assert_eq!(report.start, date(2025, 1, 2));
    assert_eq!(report.end, date(2025, 1, 3));
    assert_eq!(report.rows.len(), 2);
}

#[tokio::test]
async fn missing_end_date_falls_back_to_the_latest_day() {
    let service = support::make_service(Arc::new(StaticArticleRepo::new(
        support::sample_articles(),
    )));

    let report = service
        .build_report(ReportQuery {
            start_date: Some("2025-01-01".into()),
            end_date: None,
        })
        .await
        .unwrap();

    assert_eq!(report.start, date(2025, 1, 1));
    assert_eq!(report.end, date(2025, 1, 10));
    assert_eq!(report.rows.len(), 10);
}

#[tokio::test]
async fn blank_params_behave_like_absent_ones() {
    let service = support::make_service(Arc::new(StaticArticleRepo::new(
        support::sample_articles(),
    )));

    let report = service
        .build_report(ReportQuery {
            start_date: Some("".into()),
            end_date: Some("  ".into()),
        })
        .await
        .unwrap();

    assert_eq!(report.start, date(2025, 1, 6));
    assert_eq!(report.end, date(2025, 1, 10));
}

#[tokio::test]
async fn inverted_range_gives_an_empty_table_not_an_error() {
    let service = support::make_service(Arc::new(StaticArticleRepo::new(
        support::sample_articles(),
    )));

    let report = service
        .build_report(ReportQuery {
            start_date: Some("2025-01-09".into()),
            end_date: Some("2025-01-02".into()),
        })
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 0);
}

#[tokio::test]
async fn malformed_dates_are_rejected_as_validation_errors() {
    let service = support::make_service(Arc::new(StaticArticleRepo::new(
        support::sample_articles(),
    )));

    let err = service
        .build_report(ReportQuery {
            start_date: Some("last tuesday".into()),
            end_date: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn empty_dataset_is_a_loud_failure() {
    let service = support::make_service(Arc::new(StaticArticleRepo::new(vec![])));

    let err = service.build_report(ReportQuery::default()).await.unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Report(ReportError::EmptyDataset)
    ));
}

#[tokio::test]
async fn generated_at_comes_from_the_clock_not_the_data() {
    let service = support::make_service(Arc::new(StaticArticleRepo::new(
        support::sample_articles(),
    )));

    let report = service.build_report(ReportQuery::default()).await.unwrap();

    assert_eq!(report.generated_at, date(2025, 1, 11));
}
