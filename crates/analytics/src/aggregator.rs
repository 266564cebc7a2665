use lemonpos_infra::{OrderLog, PersistenceError};

use crate::report::SalesReport;

/// Computes sales reports from an order log.
///
/// Every call re-reads the full log; there is no caching or incremental
/// state, so a report always reflects the latest appended order.
#[derive(Debug)]
pub struct Aggregator<L> {
    log: L,
}

impl<L> Aggregator<L>
where
    L: OrderLog,
{
    pub fn new(log: L) -> Self {
        Self { log }
    }

    pub fn compute(&self) -> Result<SalesReport, PersistenceError> {
        let orders = self.log.load_all()?;
        let report = SalesReport::from_orders(&orders);
        tracing::debug!(
            orders = report.order_count,
            revenue = %report.total_revenue,
            products = report.bestsellers.len(),
            "sales report computed"
        );
        Ok(report)
    }
}
