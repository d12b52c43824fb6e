pub mod error;
pub mod models;
pub mod pricing;
pub mod repository;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
pub use models::{NewOrder, Order, OrderInput};
pub use pricing::{estimate_minutes, parse_distance, PriceTable, Quote};
pub use repository::OrderRepository;
pub use types::*;
