//! Process bootstrap: open storage, seed it, then serve HTTP until shutdown.

use std::future::Future;
use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::{ensure_schema, BookStore, SqliteBookStore};
use crate::seed::seed_if_empty;
use crate::web::{create_router, AppState};

/// Open the configured database and wrap it in the shared store, seeding demo
/// data unless disabled.
pub fn open_store(config: &Config) -> Result<Arc<dyn BookStore>> {
    let db_path = config.database_path();
    let conn = ensure_schema(&db_path)?;
    info!(path = %db_path.display(), "database ready");

    let store = SqliteBookStore::new(conn);
    if !config.no_seed {
        seed_if_empty(&store)?;
    }

    Ok(Arc::new(store))
}

pub async fn run(config: Config) -> Result<()> {
    let store = open_store(&config)?;
    let router = create_router(AppState::new(store));

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %config.bind, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

/// Resolve once `signal` fires. If the signal cannot be listened for, a
/// warning is logged and the future never resolves, so the server keeps
/// running until the process is killed.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(err) = signal.await {
        warn!("failed to install Ctrl-C handler: {err}");
        std::future::pending::<()>().await;
    }
}
