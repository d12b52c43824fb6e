//! Price and travel-time estimation for an order
//!
//! Prices are looked up by exact model name, falling back to a default.
//! The estimated time depends only on the distance to the customer.

use std::collections::BTreeMap;

/// Travel minutes estimated per kilometer
pub const MINUTES_PER_KM: f64 = 30.0;

/// Price charged for any model without its own entry
pub const DEFAULT_PRICE: i64 = 25_000;

/// Derived price and estimated time for one order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub price: i64,
    pub estimated_minutes: i64,
}

/// Mapping from hair-style model name to price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    prices: BTreeMap<String, i64>,
    default_price: i64,
}

impl PriceTable {
    /// An empty table where every model costs `default_price`
    pub fn new(default_price: i64) -> Self {
        Self {
            prices: BTreeMap::new(),
            default_price,
        }
    }

    /// The service's standard price list
    pub fn standard() -> Self {
        Self::new(DEFAULT_PRICE)
            .with_price("fade", 30_000)
            .with_price("undercut", 35_000)
            .with_price("gundul", 20_000)
    }

    pub fn with_price(mut self, model: impl Into<String>, price: i64) -> Self {
        self.prices.insert(model.into(), price);
        self
    }

    /// Price for a model; matching is exact and case-sensitive
    pub fn price_for(&self, model: &str) -> i64 {
        self.prices.get(model).copied().unwrap_or(self.default_price)
    }

    pub fn default_price(&self) -> i64 {
        self.default_price
    }

    /// Models with their own price, in name order
    pub fn models(&self) -> impl Iterator<Item = (&str, i64)> {
        self.prices.iter().map(|(model, price)| (model.as_str(), *price))
    }

    pub fn quote(&self, model: &str, distance_km: f64) -> Quote {
        Quote {
            price: self.price_for(model),
            estimated_minutes: estimate_minutes(distance_km),
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Estimated travel time in whole minutes, truncated
pub fn estimate_minutes(distance_km: f64) -> i64 {
    // `as` truncates toward zero and maps NaN to 0
    (distance_km * MINUTES_PER_KM) as i64
}

/// Parse a distance typed by a user. Anything unparsable counts as 0 km.
pub fn parse_distance(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .unwrap_or(0.0)
}
