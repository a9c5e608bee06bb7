//! sqlproxy - a database driver that adds hooks to an existing driver
//!
//! A [`ProxyDriver`] wraps a driver registered under some name and forwards
//! every call to it, running two optional hooks on the way: `before_prepare`
//! may reject or rewrite query text, `before_query` observes the final text
//! and arguments of each execution.
//!
//! This is a development aid. It only implements the basic driver
//! capability set and hides any advanced features of the proxied driver.
//!
//! # Example
//! ```ignore
//! use std::sync::Arc;
//! use sqlproxy::{registry, Database, ProxyConfig, ProxyDriver, TokioPostgresDriver};
//!
//! registry::register("postgres", Arc::new(TokioPostgresDriver::new()));
//! registry::register(
//!     "postgres-with-logging",
//!     Arc::new(ProxyDriver::new(
//!         ProxyConfig::new("postgres")
//!             .before_query(|query, args| tracing::info!("SQL: {} {:?}", query, args)),
//!     )),
//! );
//!
//! let db = Database::open("postgres-with-logging", "host=localhost user=postgres").await?;
//! let row = db.query("SELECT $1::INT4 AS n", &[5.into()]).await?.single_row()?;
//! ```

pub mod drivers;
pub mod error;
pub mod hooks;
pub mod proxy;
pub mod registry;
pub mod traits;
pub mod types;

mod client;

// Re-export main types for convenient access
pub use client::Database;
pub use drivers::TokioPostgresDriver;
pub use error::{Result, SqlProxyError};
pub use hooks::{BeforePrepareHook, BeforeQueryHook, ProxyConfig};
pub use proxy::{ProxyConnection, ProxyDriver, ProxyRows, ProxyStatement};
pub use registry::DriverRegistry;
pub use traits::{Connection, Driver, Rows, Statement, Transaction};
pub use types::{ExecResult, QueryResult, RawQueryResult, Row, SqlValue};
