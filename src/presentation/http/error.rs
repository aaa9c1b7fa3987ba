use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::ReportError;
use crate::presentation::views;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Presentation-side failure: a status code plus a message rendered as a
/// visible error page, never a silent blank table.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::Report(report_err) => {
                let status = match &report_err {
                    ReportError::Connection(_) => StatusCode::BAD_GATEWAY,
                    ReportError::Query(_)
                    | ReportError::EmptyDataset
                    | ReportError::DateParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                Self::new(status, report_err.to_string())
            }
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let reason = self.status.canonical_reason().unwrap_or("error");
        let page = views::render_error_page(reason, &self.message);
        (self.status, Html(page)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
