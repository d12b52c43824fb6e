//! Repository trait for order storage
//!
//! Handlers depend on this trait rather than on a concrete database, so the
//! server can be tested against any implementation.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewOrder, Order};
use crate::types::OrderId;

/// Repository for order operations
///
/// Each method is a single independent statement. Storage errors are
/// returned unchanged; there is no retry.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order, returning its generated id
    async fn insert(&self, order: &NewOrder) -> Result<OrderId>;

    /// List every order in insertion order
    async fn list(&self) -> Result<Vec<Order>>;

    /// Number of stored orders
    async fn count(&self) -> Result<i64>;

    /// Replace the mutable fields of an order.
    ///
    /// Returns `false` when no order has this id; that is not an error.
    async fn update(&self, id: OrderId, order: &NewOrder) -> Result<bool>;

    /// Delete an order, returning `false` when no order has this id
    async fn delete(&self, id: OrderId) -> Result<bool>;
}
