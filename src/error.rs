use thiserror::Error;

/// Error type shared by the proxy, its hooks and every underlying driver.
///
/// The proxy never wraps or translates these: whatever a hook or driver
/// returns is what the caller sees.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SqlProxyError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Prepare failed: {0}")]
    PrepareFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Connection is closed")]
    ConnectionClosed,

    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    #[error("Query rejected by hook: {0}")]
    HookRejected(String),

    #[error("Expected {expected} row(s), got {actual}")]
    UnexpectedRowCount { expected: usize, actual: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Destination has {actual} slot(s), row has {expected} column(s)")]
    DestinationMismatch { expected: usize, actual: usize },
}

/// Result type alias for sqlproxy operations
pub type Result<T> = std::result::Result<T, SqlProxyError>;
