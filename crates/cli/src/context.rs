use std::sync::Arc;

use chrono::NaiveDateTime;

use lemonpos_analytics::Aggregator;
use lemonpos_core::SessionId;
use lemonpos_infra::{CheckoutService, ConfigError, CsvOrderLog, PosConfig};
use lemonpos_products::Catalog;
use lemonpos_sales::Cart;

/// Process-wide wiring shared by every command handler.
///
/// Immutable once built; all per-customer state lives in [`Session`].
#[derive(Debug)]
pub struct AppContext {
    catalog: Catalog,
    log: Arc<CsvOrderLog>,
    checkout: CheckoutService<Arc<CsvOrderLog>>,
    analytics: Aggregator<Arc<CsvOrderLog>>,
    max_line_quantity: u32,
}

impl AppContext {
    pub fn new(catalog: Catalog, log: CsvOrderLog, max_line_quantity: u32) -> Self {
        let log = Arc::new(log);
        Self {
            catalog,
            checkout: CheckoutService::new(log.clone()),
            analytics: Aggregator::new(log.clone()),
            log,
            max_line_quantity,
        }
    }

    pub fn from_config(cfg: &PosConfig, started_at: NaiveDateTime) -> Result<Self, ConfigError> {
        let catalog = cfg.build_catalog()?;
        let log = CsvOrderLog::new(cfg.order_log_path(started_at));
        Ok(Self::new(catalog, log, cfg.max_line_quantity))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn log(&self) -> &CsvOrderLog {
        &self.log
    }

    pub fn checkout(&self) -> &CheckoutService<Arc<CsvOrderLog>> {
        &self.checkout
    }

    pub fn analytics(&self) -> &Aggregator<Arc<CsvOrderLog>> {
        &self.analytics
    }

    pub fn new_session(&self) -> Session {
        Session::new(self.max_line_quantity)
    }
}

/// State of one customer interaction at the till.
///
/// Lives exactly as long as the shell; nothing in here is persisted.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    pub cart: Cart,
    pub customer_name: String,
    pub phone: String,
}

impl Session {
    pub fn new(max_line_quantity: u32) -> Self {
        Self {
            id: SessionId::new(),
            cart: Cart::with_max_line_quantity(max_line_quantity),
            customer_name: String::new(),
            phone: String::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Empty the cart and the customer form, ready for the next customer.
    pub fn reset(&mut self) {
        self.cart.clear();
        self.customer_name.clear();
        self.phone.clear();
    }
}
