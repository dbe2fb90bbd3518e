use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::db::default_db_path;

/// Runtime configuration assembled from command-line flags, with environment
/// variables as fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "book-catalog")]
#[command(about = "A small web catalog for books")]
#[command(version)]
pub struct Config {
    /// SQLite database file. Defaults to `library.db` in the platform data
    /// directory.
    #[arg(long, value_name = "PATH", env = "BOOK_CATALOG_DB")]
    pub database: Option<PathBuf>,

    /// Address the HTTP server binds to.
    #[arg(
        long,
        value_name = "ADDR",
        env = "BOOK_CATALOG_BIND",
        default_value = "127.0.0.1:5000"
    )]
    pub bind: SocketAddr,

    /// Skip loading the demo books into an empty catalog.
    #[arg(long)]
    pub no_seed: bool,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// The SQLite file to open: the explicit `--database` value when given,
    /// otherwise the platform default from `default_db_path`.
    pub fn database_path(&self) -> PathBuf {
        self.database.clone().unwrap_or_else(default_db_path)
    }
}
