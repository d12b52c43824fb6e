//! Server application state

use std::sync::Arc;

use cukur_core::{OrderRepository, PriceTable};

/// Application state shared across handlers
///
/// Storage is held behind the [`OrderRepository`] trait so handlers never
/// reach a concrete database directly.
#[derive(Clone)]
pub struct AppState {
    orders: Arc<dyn OrderRepository>,
    prices: Arc<PriceTable>,
}

impl AppState {
    /// Create a new AppState with the standard price list
    pub fn new(orders: impl OrderRepository + 'static) -> Self {
        Self::with_prices(orders, PriceTable::standard())
    }

    pub fn with_prices(orders: impl OrderRepository + 'static, prices: PriceTable) -> Self {
        Self {
            orders: Arc::new(orders),
            prices: Arc::new(prices),
        }
    }

    /// Get a reference to the order repository
    pub fn orders(&self) -> &dyn OrderRepository {
        self.orders.as_ref()
    }

    /// Get a reference to the price table
    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }
}
