use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::types::SqlValue;

/// Runs before a query is prepared. The returned text replaces the original;
/// an error aborts the prepare and is handed to the caller as is.
pub type BeforePrepareHook = Arc<dyn Fn(&str) -> Result<String> + Send + Sync>;

/// Runs just before a prepared statement is executed, with the final query
/// text and the caller's arguments.
pub type BeforeQueryHook = Arc<dyn Fn(&str, &[SqlValue]) + Send + Sync>;

/// Configuration for a [`ProxyDriver`](crate::ProxyDriver).
///
/// # Example
/// ```
/// use sqlproxy::ProxyConfig;
///
/// let config = ProxyConfig::new("postgres")
///     .before_query(|query, args| println!("SQL: {} {:?}", query, args));
/// assert_eq!(config.proxied_driver_name(), "postgres");
/// ```
#[derive(Clone)]
pub struct ProxyConfig {
    proxied_driver_name: String,
    before_prepare: Option<BeforePrepareHook>,
    before_query: Option<BeforeQueryHook>,
}

impl ProxyConfig {
    /// `proxied_driver_name` identifies the registered driver which
    /// actually performs the queries.
    pub fn new(proxied_driver_name: impl Into<String>) -> Self {
        Self {
            proxied_driver_name: proxied_driver_name.into(),
            before_prepare: None,
            before_query: None,
        }
    }

    /// Set the hook that may reject or rewrite query text before prepare.
    pub fn before_prepare<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        self.before_prepare = Some(Arc::new(hook));
        self
    }

    /// Set the hook that observes every execution.
    pub fn before_query<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &[SqlValue]) + Send + Sync + 'static,
    {
        self.before_query = Some(Arc::new(hook));
        self
    }

    pub fn proxied_driver_name(&self) -> &str {
        &self.proxied_driver_name
    }

    pub(crate) fn run_before_prepare(&self, query: &str) -> Result<String> {
        match &self.before_prepare {
            Some(hook) => hook(query),
            None => Ok(query.to_string()),
        }
    }

    pub(crate) fn run_before_query(&self, query: &str, args: &[SqlValue]) {
        if let Some(hook) = &self.before_query {
            hook(query, args);
        }
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("proxied_driver_name", &self.proxied_driver_name)
            .field("before_prepare", &self.before_prepare.is_some())
            .field("before_query", &self.before_query.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqlProxyError;
    use std::sync::Mutex;

    #[test]
    fn test_no_hooks_is_identity() {
        let config = ProxyConfig::new("mem");
        assert_eq!(config.run_before_prepare("SELECT 1").unwrap(), "SELECT 1");
        config.run_before_query("SELECT 1", &[]);
    }

    #[test]
    fn test_before_prepare_rewrites_and_rejects() {
        let config = ProxyConfig::new("mem").before_prepare(|query| {
            if query.starts_with("DROP") {
                Err(SqlProxyError::HookRejected(query.to_string()))
            } else {
                Ok(query.to_lowercase())
            }
        });

        assert_eq!(config.run_before_prepare("SELECT X").unwrap(), "select x");
        assert_eq!(
            config.run_before_prepare("DROP TABLE t").unwrap_err(),
            SqlProxyError::HookRejected("DROP TABLE t".to_string())
        );
    }

    #[test]
    fn test_before_query_sees_text_and_args() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let config = ProxyConfig::new("mem").before_query(move |query, args| {
            sink.lock().unwrap().push((query.to_string(), args.to_vec()));
        });

        config.run_before_query("SELECT ?", &[SqlValue::Int32(7)]);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![("SELECT ?".to_string(), vec![SqlValue::Int32(7)])]
        );
    }

    #[test]
    fn test_debug_hides_closures() {
        let config = ProxyConfig::new("mem").before_prepare(|q| Ok(q.to_string()));
        let debug = format!("{:?}", config);
        assert!(debug.contains("before_prepare: true"));
        assert!(debug.contains("before_query: false"));
    }
}
