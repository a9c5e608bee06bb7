mod driver;

pub use driver::{Connection, Driver, Rows, Statement, Transaction};
