use crate::domain::errors::ReportError;

/// Split sqlx failures into "the store is unreachable" versus "the read
/// itself failed". Transport-level problems come back as `Connection`;
/// everything the server answered with is a `Query` failure.
pub fn map_sqlx(err: sqlx::Error) -> ReportError {
    match &err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => ReportError::Connection(err.to_string()),
        sqlx::Error::Database(db_err) => ReportError::Query(db_err.message().to_string()),
        _ => ReportError::Query(err.to_string()),
    }
}
