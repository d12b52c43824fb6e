//! SQLite database implementation for Cukur
//!
//! This crate provides the [`Database`] struct which implements the
//! [`OrderRepository`] trait from `cukur-core`, backed by SQLite.

mod repositories;

// Re-export the domain types the repository works with
pub use cukur_core::{NewOrder, Order, OrderId, OrderRepository};

use cukur_core::{schema, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Database file used when no other path is configured
pub const DEFAULT_DB_FILE: &str = "cukur_panggilan.db";

/// SQLite database connection and repository implementation
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to a specific database file, creating it if missing
    pub async fn connect_to(path: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(path)
            .map_err(cukur_core::Error::Database)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        tracing::debug!(path, "connected to database");
        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` gets its own database, so the
    /// pool is capped at a single connection.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str(":memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Check whether a database file exists at `path`
    pub fn exists_at(path: &str) -> bool {
        Path::new(path).exists()
    }

    /// Initialize the database schema
    pub async fn init_schema(&self) -> Result<()> {
        schema::init_schema(&self.pool).await?;
        Ok(())
    }

    /// Get a reference to the underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cukur_core::{OrderInput, PriceTable};

    async fn setup_test_db() -> Database {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();
        db
    }

    fn new_order(name: &str, distance: f64, model: &str, payment: &str) -> NewOrder {
        OrderInput {
            nama_pelanggan: name.to_string(),
            jarak_km: distance,
            model_rambut: model.to_string(),
            metode_pembayaran: payment.to_string(),
        }
        .priced(&PriceTable::standard())
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let db = setup_test_db().await;

        let id = db
            .insert(&new_order("Andi", 2.0, "fade", "cash"))
            .await
            .unwrap();
        assert!(id.0 > 0);

        let orders = db.list().await.unwrap();
        assert_eq!(orders.len(), 1);

        let order = &orders[0];
        assert_eq!(order.id, id);
        assert_eq!(order.nama_pelanggan, "Andi");
        assert_eq!(order.jarak_km, 2.0);
        assert_eq!(order.model_rambut, "fade");
        assert_eq!(order.harga, 30000);
        assert_eq!(order.perkiraan_waktu, 60);
        assert_eq!(order.metode_pembayaran, "cash");
        assert_eq!(order.bukti_pembayaran, "");
        assert!(!order.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let db = setup_test_db().await;

        for name in ["Citra", "Andi", "Budi"] {
            db.insert(&new_order(name, 1.0, "undercut", "transfer"))
                .await
                .unwrap();
        }

        assert_eq!(db.count().await.unwrap(), 3);

        let names: Vec<_> = db
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.nama_pelanggan)
            .collect();
        assert_eq!(names, vec!["Citra", "Andi", "Budi"]);
    }

    #[tokio::test]
    async fn test_list_maps_null_columns_to_empty() {
        let db = setup_test_db().await;

        sqlx::query(
            "INSERT INTO orders (nama_pelanggan, jarak_km, model_rambut, harga, perkiraan_waktu, metode_pembayaran, bukti_pembayaran, created_at) VALUES (?, ?, ?, ?, ?, ?, NULL, NULL)",
        )
        .bind("Dewi")
        .bind(0.5_f64)
        .bind("gundul")
        .bind(20000_i64)
        .bind(15_i64)
        .bind("cash")
        .execute(db.pool())
        .await
        .unwrap();

        let orders = db.list().await.unwrap();
        assert_eq!(orders[0].bukti_pembayaran, "");
        assert_eq!(orders[0].created_at, "");
    }

    #[tokio::test]
    async fn test_update_replaces_mutable_fields() {
        let db = setup_test_db().await;

        let id = db
            .insert(&new_order("Andi", 2.0, "fade", "cash"))
            .await
            .unwrap();

        sqlx::query("UPDATE orders SET bukti_pembayaran = ? WHERE id = ?")
            .bind("bukti/andi.jpg")
            .bind(id.0)
            .execute(db.pool())
            .await
            .unwrap();

        let before = db.list().await.unwrap().remove(0);

        let updated = db
            .update(id, &new_order("Andi S.", 1.0, "gundul", "transfer"))
            .await
            .unwrap();
        assert!(updated);

        let after = db.list().await.unwrap().remove(0);
        assert_eq!(after.id, id);
        assert_eq!(after.nama_pelanggan, "Andi S.");
        assert_eq!(after.jarak_km, 1.0);
        assert_eq!(after.model_rambut, "gundul");
        assert_eq!(after.harga, 20000);
        assert_eq!(after.perkiraan_waktu, 30);
        assert_eq!(after.metode_pembayaran, "transfer");
        assert_eq!(after.bukti_pembayaran, "bukti/andi.jpg");
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let db = setup_test_db().await;

        let updated = db
            .update(OrderId(999), &new_order("Nobody", 1.0, "fade", "cash"))
            .await
            .unwrap();

        assert!(!updated);
        assert_eq!(db.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = setup_test_db().await;

        let keep = db
            .insert(&new_order("Andi", 1.0, "fade", "cash"))
            .await
            .unwrap();
        let gone = db
            .insert(&new_order("Budi", 1.0, "fade", "cash"))
            .await
            .unwrap();

        assert!(db.delete(gone).await.unwrap());

        let orders = db.list().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, keep);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let db = setup_test_db().await;

        assert!(!db.delete(OrderId(999)).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let db = setup_test_db().await;

        let first = db
            .insert(&new_order("Andi", 1.0, "fade", "cash"))
            .await
            .unwrap();
        db.delete(first).await.unwrap();

        let second = db
            .insert(&new_order("Budi", 1.0, "fade", "cash"))
            .await
            .unwrap();
        assert!(second.0 > first.0);
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let db = setup_test_db().await;
        db.insert(&new_order("Andi", 1.0, "fade", "cash"))
            .await
            .unwrap();

        db.init_schema().await.unwrap();

        assert_eq!(db.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_storage_errors_are_surfaced() {
        let db = setup_test_db().await;
        sqlx::query("DROP TABLE orders")
            .execute(db.pool())
            .await
            .unwrap();

        let err = db.list().await.unwrap_err();
        assert!(err.is_database());
        assert!(err.to_string().contains("no such table"));
    }
}
