//! Driver registry
//!
//! Drivers are registered under a name at startup and looked up by that name
//! when a connection is opened. A process-wide registry backs the free
//! functions [`register`] and [`open`]; separate [`DriverRegistry`] instances
//! can be created where global state is unwanted.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::{Result, SqlProxyError};
use crate::traits::{Connection, Driver};

static GLOBAL: Lazy<Arc<DriverRegistry>> = Lazy::new(|| Arc::new(DriverRegistry::new()));

/// Named collection of drivers.
pub struct DriverRegistry {
    drivers: RwLock<HashMap<String, Arc<dyn Driver>>>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self {
            drivers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a driver. A driver already registered under `name` is replaced.
    pub fn register(&self, name: impl Into<String>, driver: Arc<dyn Driver>) {
        let name = name.into();
        if self.drivers.write().insert(name.clone(), driver).is_some() {
            warn!(driver = %name, "replaced previously registered driver");
        } else {
            debug!(driver = %name, "registered driver");
        }
    }

    /// Gets a driver by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Driver>> {
        self.drivers.read().get(name).cloned()
    }

    /// Lists registered driver names, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.drivers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.drivers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.read().is_empty()
    }

    /// Opens a connection using the driver registered under `name`.
    pub async fn open(&self, name: &str, data_source: &str) -> Result<Box<dyn Connection>> {
        let driver = self
            .get(name)
            .ok_or_else(|| SqlProxyError::DriverNotFound(name.to_string()))?;
        driver.open(data_source).await
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide registry.
pub fn global() -> Arc<DriverRegistry> {
    Arc::clone(&GLOBAL)
}

/// Registers a driver in the process-wide registry.
pub fn register(name: impl Into<String>, driver: Arc<dyn Driver>) {
    GLOBAL.register(name, driver);
}

/// Opens a connection through the process-wide registry.
pub async fn open(name: &str, data_source: &str) -> Result<Box<dyn Connection>> {
    GLOBAL.open(name, data_source).await
}
