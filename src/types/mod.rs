mod buffered_rows;
mod row;
mod sql_value;

pub use buffered_rows::BufferedRows;
pub use row::{ExecResult, QueryResult, RawQueryResult, Row};
pub use sql_value::SqlValue;
