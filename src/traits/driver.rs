use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ExecResult, SqlValue};

/// Trait for database driver implementations.
/// A driver is a factory for connections; it is registered under a name and
/// looked up by that name when a connection is opened.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Open a new connection to the given data source.
    /// The format of `data_source` is defined by the driver.
    async fn open(&self, data_source: &str) -> Result<Box<dyn Connection>>;
}

/// An open connection to a database.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Prepare a statement for later execution.
    async fn prepare(&self, query: &str) -> Result<Box<dyn Statement>>;

    /// Start a transaction on this connection.
    async fn begin(&self) -> Result<Box<dyn Transaction>>;

    /// Release the connection. Calls after close fail.
    async fn close(&mut self) -> Result<()>;
}

/// A prepared statement bound to the connection that created it.
#[async_trait]
pub trait Statement: Send + Sync {
    /// Number of placeholders, or `None` when the driver can't tell.
    fn num_input(&self) -> Option<usize>;

    /// Execute a statement that doesn't return rows (INSERT, UPDATE, ...).
    async fn execute(&self, args: &[SqlValue]) -> Result<ExecResult>;

    /// Execute a statement that returns rows.
    async fn query(&self, args: &[SqlValue]) -> Result<Box<dyn Rows>>;

    async fn close(&mut self) -> Result<()>;
}

/// A forward-only cursor over a result set.
#[async_trait]
pub trait Rows: Send {
    /// Column names, in order.
    fn columns(&self) -> &[String];

    /// Copy the next row into `dest`, which must have one slot per column.
    /// Returns `Ok(false)` once the cursor is exhausted.
    async fn next(&mut self, dest: &mut [SqlValue]) -> Result<bool>;

    async fn close(&mut self) -> Result<()>;
}

#[async_trait]
pub trait Transaction: Send + Sync {
    async fn commit(&mut self) -> Result<()>;
    async fn rollback(&mut self) -> Result<()>;
}
