use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use lemonpos_sales::Order;

/// Order log operation error.
///
/// These are **infrastructure errors** (file access, encoding, schema) as
/// opposed to checkout validation errors. None of them is retried.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cannot access order log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in order log {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("order log {} has an unrecognised header: {found}", path.display())]
    SchemaMismatch { path: PathBuf, found: String },

    #[error("refusing to export order log onto itself: {}", path.display())]
    ExportOntoLog { path: PathBuf },

    #[error("order log row {row} is corrupt: {reason}")]
    Corrupt { row: u64, reason: String },

    #[error("failed to encode order items: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("order log unavailable: {0}")]
    Unavailable(String),
}

/// Append-only log of placed orders.
///
/// ## Append Semantics
///
/// `append()` makes the order durable: once it returns `Ok`, a subsequent
/// `load_all()` (from this or any other handle on the same backing store)
/// includes it as the last entry.
///
/// ## Load Semantics
///
/// `load_all()` returns every order in append order. A log that was never
/// written to is empty, not an error.
pub trait OrderLog {
    fn append(&self, order: &Order) -> Result<(), PersistenceError>;

    fn load_all(&self) -> Result<Vec<Order>, PersistenceError>;
}

impl<L> OrderLog for Arc<L>
where
    L: OrderLog + ?Sized,
{
    fn append(&self, order: &Order) -> Result<(), PersistenceError> {
        (**self).append(order)
    }

    fn load_all(&self) -> Result<Vec<Order>, PersistenceError> {
        (**self).load_all()
    }
}

impl<L> OrderLog for &L
where
    L: OrderLog + ?Sized,
{
    fn append(&self, order: &Order) -> Result<(), PersistenceError> {
        (**self).append(order)
    }

    fn load_all(&self) -> Result<Vec<Order>, PersistenceError> {
        (**self).load_all()
    }
}
