//! HTTP front end: axum routes rendering server-side HTML over the storage
//! layer.

mod error;
mod forms;
mod handlers;
mod router;
mod state;
pub mod views;

pub use error::AppError;
pub use forms::{coerce_year, BookForm};
pub use router::create_router;
pub use state::AppState;
