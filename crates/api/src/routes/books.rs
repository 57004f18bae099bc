//! Route definitions for the books resource, mounted at `/api/books`.
//!
//! ```text
//! GET    /                       -> list
//! POST   /                       -> create
//! PUT    /{id}/toggle-read       -> toggle_read
//! PUT    /{id}/toggle-favorite   -> toggle_favorite
//! DELETE /{id}                   -> delete
//! ```

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list).post(books::create))
        .route("/{id}/toggle-read", put(books::toggle_read))
        .route("/{id}/toggle-favorite", put(books::toggle_favorite))
        .route("/{id}", delete(books::delete))
}
