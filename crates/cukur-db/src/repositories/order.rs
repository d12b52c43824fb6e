//! OrderRepository implementation for SQLite

use async_trait::async_trait;
use cukur_core::{NewOrder, Order, OrderId, OrderRepository, Result};

use crate::Database;

const LIST_ORDERS: &str = r#"
    SELECT
        id, nama_pelanggan, jarak_km, model_rambut, harga, perkiraan_waktu,
        metode_pembayaran,
        COALESCE(bukti_pembayaran, '') AS bukti_pembayaran,
        COALESCE(created_at, '') AS created_at
    FROM orders
    ORDER BY id
"#;

#[async_trait]
impl OrderRepository for Database {
    async fn insert(&self, order: &NewOrder) -> Result<OrderId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO orders
                (nama_pelanggan, jarak_km, model_rambut, harga, perkiraan_waktu, metode_pembayaran)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&order.nama_pelanggan)
        .bind(order.jarak_km)
        .bind(&order.model_rambut)
        .bind(order.harga)
        .bind(order.perkiraan_waktu)
        .bind(&order.metode_pembayaran)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, harga = order.harga, "inserted order");
        Ok(OrderId(id))
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(LIST_ORDERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(orders)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn update(&self, id: OrderId, order: &NewOrder) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET nama_pelanggan = ?, jarak_km = ?, model_rambut = ?, harga = ?,
                perkiraan_waktu = ?, metode_pembayaran = ?
            WHERE id = ?
            "#,
        )
        .bind(&order.nama_pelanggan)
        .bind(order.jarak_km)
        .bind(&order.model_rambut)
        .bind(order.harga)
        .bind(order.perkiraan_waktu)
        .bind(&order.metode_pembayaran)
        .bind(id.0)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: OrderId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
