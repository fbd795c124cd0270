use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{init_database, serve};

#[derive(Parser)]
#[command(name = "bankrust")]
#[command(about = "Bank user registration and login API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply pending migrations and start the web server
    Serve {
        /// Database URL
        ///
        /// For SQLite databases, use:
        ///   - sqlite://relative/path.db?mode=rwc (created if missing)
        ///   - sqlite:///absolute/path/to/database.sqlite?mode=rwc
        #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite://bankrust.db?mode=rwc")]
        database_url: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8080, 127.0.0.1:3000)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:8080")]
        bind_address: String,
    },
    /// Initialize the database using migrations
    ///
    /// Example:
    ///   SQLite: sqlite:///path/to/database.sqlite?mode=rwc
    InitDb {
        /// Database URL
        #[arg(short, long, env = "DATABASE_URL")]
        database_url: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { database_url, bind_address } => {
                serve(&database_url, &bind_address).await?;
            }
            Commands::InitDb { database_url } => {
                init_database(&database_url).await?;
            }
        }
        Ok(())
    }
}
