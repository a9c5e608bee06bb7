use std::sync::Arc;

use crate::error::Result;
use crate::registry;
use crate::traits::{Connection, Driver, Rows, Statement, Transaction};
use crate::types::{ExecResult, QueryResult, RawQueryResult, SqlValue};

/// Main entry point for running queries over a single connection.
/// One-off `exec` and `query` calls prepare, run and close a statement,
/// so hooks on a [`ProxyDriver`](crate::ProxyDriver) see them too.
pub struct Database {
    conn: Box<dyn Connection>,
}

impl Database {
    /// Open a connection with the driver registered under `driver_name`.
    ///
    /// # Example
    /// ```ignore
    /// let db = Database::open("postgres-with-logging", "host=localhost user=postgres").await?;
    /// let result = db.query("SELECT 1", &[]).await?;
    /// ```
    pub async fn open(driver_name: &str, data_source: &str) -> Result<Self> {
        let conn = registry::open(driver_name, data_source).await?;
        Ok(Self { conn })
    }

    /// Open a connection with a driver that is not registered.
    pub async fn open_with(driver: Arc<dyn Driver>, data_source: &str) -> Result<Self> {
        let conn = driver.open(data_source).await?;
        Ok(Self { conn })
    }

    pub async fn prepare(&self, query: &str) -> Result<Box<dyn Statement>> {
        self.conn.prepare(query).await
    }

    pub async fn begin(&self) -> Result<Box<dyn Transaction>> {
        self.conn.begin().await
    }

    /// Run a statement that doesn't return rows.
    pub async fn exec(&self, query: &str, args: &[SqlValue]) -> Result<ExecResult> {
        let mut stmt = self.conn.prepare(query).await?;
        let result = stmt.execute(args).await;
        let closed = stmt.close().await;
        let result = result?;
        closed?;
        Ok(result)
    }

    /// Run a query and collect every row it returns.
    pub async fn query(&self, query: &str, args: &[SqlValue]) -> Result<QueryResult> {
        let mut stmt = self.conn.prepare(query).await?;
        let collected = match stmt.query(args).await {
            Ok(mut rows) => {
                let drained = drain(rows.as_mut()).await;
                let closed = rows.close().await;
                drained.and_then(|raw| closed.map(|_| raw))
            }
            Err(e) => Err(e),
        };
        let closed = stmt.close().await;
        let raw = collected?;
        closed?;
        Ok(QueryResult::from_raw(raw))
    }

    pub async fn close(mut self) -> Result<()> {
        self.conn.close().await
    }
}

/// Read the remaining rows of a cursor into memory.
async fn drain(rows: &mut dyn Rows) -> Result<RawQueryResult> {
    let columns = rows.columns().to_vec();
    let mut dest = vec![SqlValue::Null; columns.len()];
    let mut collected = Vec::new();
    while rows.next(&mut dest).await? {
        collected.push(dest.clone());
    }
    Ok(RawQueryResult::new(columns, collected))
}
