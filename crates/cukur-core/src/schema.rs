use sqlx::SqlitePool;

use crate::error::Error;

/// SQL schema for initializing the database
pub const SCHEMA: &str = r#"
-- Haircut orders with derived price and estimated time
CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nama_pelanggan TEXT NOT NULL,
    jarak_km REAL NOT NULL,
    model_rambut TEXT NOT NULL,
    harga INTEGER NOT NULL,
    perkiraan_waktu INTEGER NOT NULL,
    metode_pembayaran TEXT NOT NULL,
    bukti_pembayaran TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

/// Initialize the database schema
pub async fn init_schema(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
