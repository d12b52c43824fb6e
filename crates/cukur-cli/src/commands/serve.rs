//! Start the web server

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use console::style;
use cukur_db::Database;

use crate::config::Config;
use crate::server::{AppState, ServerConfig};

/// Start the web server for the order page and JSON API
#[derive(Args)]
pub struct ServeCommand {
    /// Configuration file (defaults to cukur.toml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short)]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(long)]
    pub database: Option<String>,

    /// Directory served under /static
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl ServeCommand {
    /// Apply command-line overrides on top of the loaded configuration
    fn resolve(self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(database) = self.database {
            config.database = database;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        Ok(config)
    }

    pub async fn run(self) -> Result<()> {
        let config = self.resolve()?;

        let db = Database::connect_to(&config.database).await?;
        db.init_schema().await?;

        if !config.static_dir.is_dir() {
            tracing::warn!(
                static_dir = %config.static_dir.display(),
                "static directory not found, /static will answer 404"
            );
        }

        println!("{} Starting Cukur server...", style("→").blue());
        println!();
        println!(
            "  {} Orders page: {}",
            style("◆").cyan(),
            style(format!("http://{}/", config.bind_addr()))
                .underlined()
                .cyan()
        );
        println!(
            "  {} API:         {}",
            style("◆").cyan(),
            style(format!("http://{}/orders", config.bind_addr()))
                .underlined()
                .cyan()
        );
        println!("  {} Database:    {}", style("◆").cyan(), config.database);
        println!();
        println!("  Press {} to stop the server", style("Ctrl+C").yellow());
        println!();

        let server_config = ServerConfig {
            host: config.host,
            port: config.port,
            static_dir: config.static_dir,
        };

        crate::server::run_server(AppState::new(db), server_config)
            .await
            .map_err(|e| eyre!("Server error: {}", e))?;

        Ok(())
    }
}
