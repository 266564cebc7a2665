use std::sync::RwLock;

use lemonpos_sales::Order;

use super::r#trait::{OrderLog, PersistenceError};

/// In-memory order log.
///
/// Intended for tests/dev. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryOrderLog {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.read().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderLog for InMemoryOrderLog {
    fn append(&self, order: &Order) -> Result<(), PersistenceError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| PersistenceError::Unavailable("lock poisoned".to_string()))?;
        orders.push(order.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Order>, PersistenceError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| PersistenceError::Unavailable("lock poisoned".to_string()))?;
        Ok(orders.clone())
    }
}
