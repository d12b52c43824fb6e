//! List all orders

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use console::style;
use cukur_db::{Database, OrderRepository, DEFAULT_DB_FILE};

/// Print all orders
#[derive(Args)]
pub struct ListCommand {
    /// SQLite database file
    #[arg(long, default_value = DEFAULT_DB_FILE)]
    pub database: String,
}

impl ListCommand {
    pub async fn run(self) -> Result<()> {
        if !Database::exists_at(&self.database) {
            return Err(eyre!(
                "Database not found. Run {} first.",
                style("cukur init").yellow()
            ));
        }

        let db = Database::connect_to(&self.database).await?;
        let orders = db.list().await?;

        if orders.is_empty() {
            println!("No orders found.");
            return Ok(());
        }

        // Print table header
        println!(
            "{:<5} {:<20} {:>8} {:<12} {:>8} {:>7} {:<10} {:<19}",
            "ID", "Name", "Km", "Model", "Price", "Minutes", "Payment", "Created At"
        );
        println!("{}", "-".repeat(96));

        let mut total = 0;
        for o in &orders {
            println!(
                "{:<5} {:<20} {:>8.2} {:<12} {:>8} {:>7} {:<10} {:<19}",
                o.id,
                o.nama_pelanggan,
                o.jarak_km,
                o.model_rambut,
                o.harga,
                o.perkiraan_waktu,
                o.metode_pembayaran,
                o.created_at
            );
            total += o.harga;
        }

        println!();
        println!(
            "Total: {} order(s), Rp {}",
            orders.len(),
            style(total).bold()
        );

        Ok(())
    }
}
