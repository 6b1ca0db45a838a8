use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;

use crate::books::dto::{BookDraft, BookDto};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{parse_json, ApiError, AppState};

// Request bodies are accumulated in full before parsing; this bound keeps a
// misbehaving client from holding memory hostage.
const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books",
               get(list_books).post(add_book))
        .route("/books/:isbn",
               get(find_book_by_isbn).put(update_book).patch(update_book).delete(remove_book))
        .fallback(endpoint_not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<Vec<BookDto>>, ApiError> {
    let res = ListBooksCommand::new(state.catalog).execute(ListBooksCommandRequest {}).await?;
    Ok(Json(res.books))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<BookDto>, ApiError> {
    let res = GetBookCommand::new(state.catalog).execute(GetBookCommandRequest::new(isbn)).await?;
    Ok(Json(res.book))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<(StatusCode, Json<AddBookCommandResponse>), ApiError> {
    let draft: BookDraft = parse_json(&body)?;
    let res = AddBookCommand::new(state.catalog).execute(AddBookCommandRequest::new(draft)).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    body: Bytes) -> Result<Json<UpdateBookCommandResponse>, ApiError> {
    let patch: BookDraft = parse_json(&body)?;
    let res = UpdateBookCommand::new(state.catalog).execute(UpdateBookCommandRequest::new(isbn, patch)).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ApiError> {
    let res = RemoveBookCommand::new(state.catalog).execute(RemoveBookCommandRequest::new(isbn)).await?;
    Ok(Json(res))
}

pub(crate) async fn endpoint_not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}
