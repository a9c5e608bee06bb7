//! The proxy driver.
//!
//! Every call is forwarded to the proxied driver. Two hooks from
//! [`ProxyConfig`] run on the way: `before_prepare` ahead of each prepare, and
//! `before_query` ahead of each execution. Results and errors come back
//! untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::Result;
use crate::hooks::ProxyConfig;
use crate::registry::{self, DriverRegistry};
use crate::traits::{Connection, Driver, Rows, Statement, Transaction};
use crate::types::{ExecResult, SqlValue};

/// Driver that adds hooks to another, already registered driver.
///
/// # Example
/// ```ignore
/// // assumes a "postgres" driver is already registered
/// sqlproxy::registry::register(
///     "postgres-with-logging",
///     Arc::new(ProxyDriver::new(
///         ProxyConfig::new("postgres")
///             .before_query(|query, args| tracing::info!("SQL: {} {:?}", query, args)),
///     )),
/// );
/// ```
pub struct ProxyDriver {
    config: Arc<ProxyConfig>,
    registry: Arc<DriverRegistry>,
}

impl ProxyDriver {
    /// Proxy a driver from the process-wide registry.
    pub fn new(config: ProxyConfig) -> Self {
        Self::with_registry(config, registry::global())
    }

    /// Proxy a driver from `registry`.
    pub fn with_registry(config: ProxyConfig, registry: Arc<DriverRegistry>) -> Self {
        Self {
            config: Arc::new(config),
            registry,
        }
    }
}

#[async_trait]
impl Driver for ProxyDriver {
    async fn open(&self, data_source: &str) -> Result<Box<dyn Connection>> {
        let name = self.config.proxied_driver_name();
        debug!(driver = %name, "opening proxied connection");
        let inner = self.registry.open(name, data_source).await?;
        Ok(Box::new(ProxyConnection {
            inner,
            config: Arc::clone(&self.config),
        }))
    }
}

/// Connection handed out by [`ProxyDriver`].
pub struct ProxyConnection {
    inner: Box<dyn Connection>,
    config: Arc<ProxyConfig>,
}

#[async_trait]
impl Connection for ProxyConnection {
    async fn prepare(&self, query: &str) -> Result<Box<dyn Statement>> {
        let rewritten = self.config.run_before_prepare(query)?;
        if rewritten != query {
            debug!(original = %query, rewritten = %rewritten, "query rewritten");
        }
        let inner = self.inner.prepare(&rewritten).await?;
        debug!(query = %rewritten, "prepared statement");
        Ok(Box::new(ProxyStatement {
            inner,
            query: rewritten,
            config: Arc::clone(&self.config),
        }))
    }

    async fn begin(&self) -> Result<Box<dyn Transaction>> {
        debug!("beginning transaction");
        self.inner.begin().await
    }

    async fn close(&mut self) -> Result<()> {
        self.inner.close().await
    }
}

/// Prepared statement handed out by [`ProxyConnection`].
/// Keeps the final query text so `before_query` sees what was prepared.
pub struct ProxyStatement {
    inner: Box<dyn Statement>,
    query: String,
    config: Arc<ProxyConfig>,
}

impl ProxyStatement {
    fn before_query(&self, args: &[SqlValue]) {
        trace!(query = %self.query, args = ?args, "executing statement");
        self.config.run_before_query(&self.query, args);
    }
}

#[async_trait]
impl Statement for ProxyStatement {
    fn num_input(&self) -> Option<usize> {
        self.inner.num_input()
    }

    async fn execute(&self, args: &[SqlValue]) -> Result<ExecResult> {
        self.before_query(args);
        self.inner.execute(args).await
    }

    async fn query(&self, args: &[SqlValue]) -> Result<Box<dyn Rows>> {
        self.before_query(args);
        let inner = self.inner.query(args).await?;
        Ok(Box::new(ProxyRows { inner }))
    }

    async fn close(&mut self) -> Result<()> {
        self.inner.close().await
    }
}

/// Cursor handed out by [`ProxyStatement`].
pub struct ProxyRows {
    inner: Box<dyn Rows>,
}

#[async_trait]
impl Rows for ProxyRows {
    fn columns(&self) -> &[String] {
        self.inner.columns()
    }

    async fn next(&mut self, dest: &mut [SqlValue]) -> Result<bool> {
        self.inner.next(dest).await
    }

    async fn close(&mut self) -> Result<()> {
        self.inner.close().await
    }
}
