use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::{Result, SqlProxyError};
use crate::traits::Rows;
use crate::types::{RawQueryResult, SqlValue};

/// A cursor over rows that have already been fetched into memory.
/// Drivers that read a whole result set up front hand this out from `query`.
#[derive(Debug)]
pub struct BufferedRows {
    columns: Vec<String>,
    rows: VecDeque<Vec<SqlValue>>,
    closed: bool,
}

impl BufferedRows {
    pub fn new(result: RawQueryResult) -> Self {
        Self {
            columns: result.columns,
            rows: result.rows.into(),
            closed: false,
        }
    }
}

#[async_trait]
impl Rows for BufferedRows {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    async fn next(&mut self, dest: &mut [SqlValue]) -> Result<bool> {
        if self.closed {
            return Ok(false);
        }
        let Some(width) = self.rows.front().map(Vec::len) else {
            return Ok(false);
        };
        if dest.len() != width {
            return Err(SqlProxyError::DestinationMismatch {
                expected: width,
                actual: dest.len(),
            });
        }
        let Some(row) = self.rows.pop_front() else {
            return Ok(false);
        };
        for (slot, value) in dest.iter_mut().zip(row) {
            *slot = value;
        }
        Ok(true)
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        self.rows.clear();
        Ok(())
    }
}
