use std::collections::HashMap;

use crate::error::{Result, SqlProxyError};
use crate::types::SqlValue;

/// Driver-agnostic raw result set: column names plus rows of values in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawQueryResult {
    /// Column names in order
    pub columns: Vec<String>,
    /// Rows, where each row is a vector of values in column order
    pub rows: Vec<Vec<SqlValue>>,
}

impl RawQueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// Outcome of a statement that does not return rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub rows_affected: u64,
}

impl ExecResult {
    pub fn new(rows_affected: u64) -> Self {
        Self { rows_affected }
    }
}

/// A single materialized row, values accessed by column name.
#[derive(Debug, Clone)]
pub struct Row {
    values: HashMap<String, SqlValue>,
}

impl Row {
    /// Creates a new Row from column names and values.
    pub(crate) fn new(columns: &[String], values: Vec<SqlValue>) -> Self {
        let values = columns
            .iter()
            .zip(values.into_iter())
            .map(|(col, val)| (col.clone(), val))
            .collect();
        Self { values }
    }

    /// Gets a value by column name.
    pub fn get(&self, column: &str) -> Result<&SqlValue> {
        self.values
            .get(column)
            .ok_or_else(|| SqlProxyError::ColumnNotFound(column.to_string()))
    }

    /// Returns all column names in this row.
    pub fn columns(&self) -> Vec<&str> {
        self.values.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of a query drained from a cursor, containing zero or more rows.
#[derive(Debug)]
pub struct QueryResult {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl QueryResult {
    /// Creates a QueryResult from a RawQueryResult.
    pub fn from_raw(raw: RawQueryResult) -> Self {
        let rows = raw
            .rows
            .into_iter()
            .map(|values| Row::new(&raw.columns, values))
            .collect();
        Self {
            columns: raw.columns,
            rows,
        }
    }

    /// Extracts a single row from the result.
    /// Returns an error if the result contains zero or more than one row.
    pub fn single_row(self) -> Result<Row> {
        let actual = self.rows.len();
        let mut rows = self.rows.into_iter();
        match (rows.next(), rows.next()) {
            (Some(row), None) => Ok(row),
            _ => Err(SqlProxyError::UnexpectedRowCount {
                expected: 1,
                actual,
            }),
        }
    }

    /// Returns all rows from the result.
    pub fn rows(self) -> Vec<Row> {
        self.rows
    }

    /// Returns a reference to the rows without consuming the result.
    pub fn rows_ref(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the column names from this result.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
