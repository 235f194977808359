//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// List all books in the catalog
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = [Book])
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    let books = state.books.find_all().await;
    Json(books)
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state
        .books
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("book {}", id)))?;

    Ok(Json(book))
}

/// Add a book to the catalog.
///
/// The supplied identifier is not checked for uniqueness; the store keeps
/// whatever it is given. Answers 200 with the stored record, or 406 should
/// the store ever reject an insert.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book added", body = Book),
        (status = 406, description = "Book rejected by the store")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> AppResult<Json<Book>> {
    let created = state.books.add(book).await.map_err(|_| {
        AppError::Rejected("book was not accepted by the catalog store".to_string())
    })?;

    tracing::info!(id = created.id, title = %created.title, "book added to catalog");

    Ok(Json(created))
}
