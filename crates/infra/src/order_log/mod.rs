//! Durable order history.

pub mod csv_file;
pub mod in_memory;
pub mod schema;
pub mod r#trait;

pub use csv_file::CsvOrderLog;
pub use in_memory::InMemoryOrderLog;
pub use schema::{SchemaVersion, TIMESTAMP_FORMAT};
pub use r#trait::{OrderLog, PersistenceError};
