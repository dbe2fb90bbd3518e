//! Route handlers. Each one adapts a request into a single storage call and
//! picks the view to render.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use tracing::info;

use super::error::AppError;
use super::forms::BookForm;
use super::state::AppState;
use super::views::{self, FormTarget};

/// Every successful mutation lands back on the book list.
const LIST_PATH: &str = "/books";

/// Path ids only match non-negative integers; anything else is treated like
/// an unknown book.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound);
    }
    raw.parse().map_err(|_| AppError::NotFound)
}

/// `GET /`: static welcome page.
pub async fn home() -> Html<String> {
    Html(views::home())
}

/// `GET /books`: every record in the catalog.
pub async fn list_books(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let books = state.store.list()?;
    Ok(Html(views::book_list(&books)))
}

/// `GET /add`: blank form posting back to `/add`.
pub async fn add_book_form() -> Html<String> {
    Html(views::book_form(FormTarget::Add))
}

/// `POST /add`: insert the submitted book and redirect to the list. A body
/// that is not a urlencoded form answers 400 like a missing field.
pub async fn add_book(
    State(state): State<AppState>,
    form: Result<Form<BookForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(form) = form?;
    let book = form.parse_inputs()?;
    let id = state.store.create(&book)?;
    info!(id, title = %book.title, "created book");
    Ok(Redirect::to(LIST_PATH))
}

/// `GET /book/{id}`: one record, or 404.
pub async fn book_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let book = state.store.get(parse_id(&raw_id)?)?;
    Ok(Html(views::book_detail(&book)))
}

/// `GET /edit/{id}`: form pre-filled with the stored values, or 404.
pub async fn edit_book_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let book = state.store.get(parse_id(&raw_id)?)?;
    Ok(Html(views::book_form(FormTarget::Edit(&book))))
}

/// `POST /edit/{id}`: overwrite title, author and year, then redirect to the
/// list. The row is left untouched when the form is rejected.
pub async fn edit_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    form: Result<Form<BookForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&raw_id)?;
    // Unknown ids answer 404 before the form is looked at.
    let previous = state.store.get(id)?;
    let Form(form) = form?;
    let book = form.parse_inputs()?;
    state.store.update(id, &book)?;
    info!(id, previous = %previous, "updated book");
    Ok(Redirect::to(LIST_PATH))
}

/// `GET /delete/{id}`: confirmation page whose form posts the deletion.
pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let book = state.store.get(parse_id(&raw_id)?)?;
    Ok(Html(views::confirm_delete(&book)))
}

/// `POST /delete/{id}`: remove the record and redirect to the list.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&raw_id)?;
    state.store.delete(id)?;
    info!(id, "deleted book");
    Ok(Redirect::to(LIST_PATH))
}

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for known paths requested with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
