//! CLI commands for cukur

use clap::Subcommand;
use color_eyre::eyre::Result;

pub mod init;
pub mod list;
pub mod serve;

/// All available CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Create the database and its schema
    Init(init::InitCommand),

    /// Print all orders
    List(list::ListCommand),

    /// Start the web server for the order page and JSON API
    Serve(serve::ServeCommand),
}

impl Command {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Command::Init(cmd) => cmd.run().await,
            Command::List(cmd) => cmd.run().await,
            Command::Serve(cmd) => cmd.run().await,
        }
    }
}
