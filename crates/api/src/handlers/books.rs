//! Handlers for the `/api/books` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Datelike, Utc};
use konige_core::book::validate_new_book;
use konige_core::error::CoreError;
use konige_core::types::DbId;
use konige_db::models::book::{Book, CreateBook};
use konige_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::response::{ItemResponse, ListResponse};
use crate::state::AppState;

/// GET /api/books
///
/// All books, newest first. Always an array (possibly empty) plus its count.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<Book>>> {
    let books = BookRepo::list_all(&state.pool).await?;
    Ok(Json(ListResponse::new(books)))
}

/// POST /api/books
///
/// Validation runs before any datastore call, so a rejected request has no
/// partial side effects. The year upper bound follows the server's clock at
/// call time.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<ItemResponse<Book>>)> {
    let current_year = Utc::now().year();
    let new_book = validate_new_book(
        input.titulo.as_deref(),
        input.autor.as_deref(),
        input.ano.as_ref(),
        current_year,
    )?;

    let book = BookRepo::create(&state.pool, &new_book).await?;

    tracing::info!(book_id = book.id, titulo = %book.titulo, "Book registered");

    Ok((
        StatusCode::CREATED,
        Json(ItemResponse::new(book, "Book registered successfully!")),
    ))
}

/// PUT /api/books/{id}/toggle-read
pub async fn toggle_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemResponse<Book>>> {
    let book = BookRepo::toggle_read(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;

    tracing::info!(book_id = id, lido = book.lido, "Read flag toggled");

    let message = if book.lido {
        "Book marked as read!"
    } else {
        "Book marked as unread!"
    };
    Ok(Json(ItemResponse::new(book, message)))
}

/// PUT /api/books/{id}/toggle-favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemResponse<Book>>> {
    let book = BookRepo::toggle_favorite(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;

    tracing::info!(book_id = id, favorito = book.favorito, "Favorite flag toggled");

    let message = if book.favorito {
        "Book added to favorites!"
    } else {
        "Book removed from favorites!"
    };
    Ok(Json(ItemResponse::new(book, message)))
}

/// DELETE /api/books/{id}
///
/// Permanent. The response carries the deleted book's last-known state.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemResponse<Book>>> {
    let book = BookRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;

    tracing::info!(book_id = id, "Book removed");

    Ok(Json(ItemResponse::new(book, "Book removed successfully!")))
}
