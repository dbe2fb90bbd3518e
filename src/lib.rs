//! Core library surface for the book catalog web application.
//!
//! The binary only parses configuration and calls [`run`]; everything else is
//! exposed here so integration tests can build a router over their own store.
pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod seed;
pub mod web;

/// Convenience re-exports for the persistence layer.
pub use db::{ensure_schema, open_in_memory, BookStore, SqliteBookStore, StoreError};

pub use app::{open_store, run};
pub use config::Config;
pub use models::{Book, NewBook};
pub use seed::{seed_if_empty, SEED_BOOKS};
pub use web::{create_router, AppState};
