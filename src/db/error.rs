use thiserror::Error;

/// Failure raised by the data access layer.
///
/// Storage faults are not classified further: connectivity, constraint violations
/// (such as a duplicate category name) and unreadable rows all surface as `Sqlite`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("cannot prepare database location: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
