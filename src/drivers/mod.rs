mod tokio_postgres;

pub use self::in_memory_test::{
    InMemoryTestDriver, InMemoryTestResponseBuilder, RecordedQuery, TransactionEvent,
};
pub use self::tokio_postgres::TokioPostgresDriver;
