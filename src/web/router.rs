use axum::routing::get;
use axum::Router;

use super::handlers;
use super::state::AppState;

/// Build the application router with every catalog route attached.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/books", get(handlers::list_books))
        .route("/add", get(handlers::add_book_form).post(handlers::add_book))
        .route("/book/{id}", get(handlers::book_detail))
        .route(
            "/edit/{id}",
            get(handlers::edit_book_form).post(handlers::edit_book),
        )
        .route(
            "/delete/{id}",
            get(handlers::confirm_delete).post(handlers::delete_book),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}
