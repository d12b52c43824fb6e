//! Create the order database

use clap::Args;
use color_eyre::eyre::Result;
use console::style;
use cukur_db::{Database, DEFAULT_DB_FILE};

/// Create the database and its schema
#[derive(Args)]
pub struct InitCommand {
    /// SQLite database file
    #[arg(long, default_value = DEFAULT_DB_FILE)]
    pub database: String,
}

impl InitCommand {
    pub async fn run(self) -> Result<()> {
        let existed = Database::exists_at(&self.database);

        let db = Database::connect_to(&self.database).await?;
        db.init_schema().await?;
        tracing::debug!(database = %self.database, existed, "schema applied");

        if existed {
            println!(
                "{} Database {} already exists, schema is up to date",
                style("✓").green(),
                style(&self.database).cyan()
            );
        } else {
            println!(
                "{} Created database {}",
                style("✓").green(),
                style(&self.database).cyan()
            );
        }

        println!();
        println!("Next step:");
        println!("  Run {} to start taking orders", style("cukur serve").cyan());

        Ok(())
    }
}
