//! Order entity models
//!
//! [`Order`] is the read model returned by the repository. [`OrderInput`] is
//! what a client submits, and [`NewOrder`] is the write model carrying the
//! derived price and estimated time.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::pricing::PriceTable;
use crate::types::OrderId;

/// A stored haircut order
///
/// JSON keys are the PascalCase field names (`ID`, `NamaPelanggan`, ...);
/// client input in [`OrderInput`] stays snake_case.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    #[serde(rename = "ID")]
    pub id: OrderId,
    pub nama_pelanggan: String,
    pub jarak_km: f64,
    pub model_rambut: String,
    pub harga: i64,
    pub perkiraan_waktu: i64,
    pub metode_pembayaran: String,
    /// Path of the proof-of-payment file under the static directory, or empty
    pub bukti_pembayaran: String,
    /// Empty when storage did not assign a timestamp
    pub created_at: String,
}

/// Client-supplied order fields, shared by the HTML form and the JSON API
///
/// Every field defaults so that a partial or empty submission still yields a
/// usable input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderInput {
    pub nama_pelanggan: String,
    pub jarak_km: f64,
    pub model_rambut: String,
    pub metode_pembayaran: String,
}

impl OrderInput {
    /// Derive the write model, computing price and estimated time
    pub fn priced(self, prices: &PriceTable) -> NewOrder {
        let quote = prices.quote(&self.model_rambut, self.jarak_km);
        NewOrder {
            nama_pelanggan: self.nama_pelanggan,
            jarak_km: self.jarak_km,
            model_rambut: self.model_rambut,
            harga: quote.price,
            perkiraan_waktu: quote.estimated_minutes,
            metode_pembayaran: self.metode_pembayaran,
        }
    }
}

/// Input for inserting or replacing an order
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub nama_pelanggan: String,
    pub jarak_km: f64,
    pub model_rambut: String,
    pub harga: i64,
    pub perkiraan_waktu: i64,
    pub metode_pembayaran: String,
}
