//! Repository for the `books` table.

use konige_core::book::NewBook;
use konige_core::types::DbId;
use sqlx::PgPool;

use crate::models::book::Book;

/// Column list for `books` queries.
const BOOK_COLUMNS: &str = "id, titulo, autor, ano, lido, favorito, created_at";

/// Provides CRUD and toggle operations for books.
pub struct BookRepo;

impl BookRepo {
    /// List all books, newest first. The `id` tie-breaker keeps the order
    /// stable when two rows share a creation timestamp.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query =
            format!("SELECT {BOOK_COLUMNS} FROM books ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Insert a validated book. Both flags start false; `id` and
    /// `created_at` are assigned by the database.
    pub async fn create(pool: &PgPool, new: &NewBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (titulo, autor, ano) \
             VALUES ($1, $2, $3) \
             RETURNING {BOOK_COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&new.titulo)
            .bind(&new.autor)
            .bind(new.ano)
            .fetch_one(pool)
            .await
    }

    /// Find a book by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip the read flag in a single conditional update.
    ///
    /// The negation is evaluated by PostgreSQL under the row lock, so two
    /// concurrent toggles on the same id serialize into a net double-flip
    /// instead of racing a read against a write.
    ///
    /// Returns `None` if no book with the given ID exists.
    pub async fn toggle_read(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET lido = NOT lido WHERE id = $1 RETURNING {BOOK_COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip the favorite flag. Same single-statement semantics as
    /// [`BookRepo::toggle_read`]; the two flags never touch each other.
    pub async fn toggle_favorite(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET favorito = NOT favorito WHERE id = $1 RETURNING {BOOK_COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a book permanently, returning its last-known state.
    ///
    /// Returns `None` if no book with the given ID exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("DELETE FROM books WHERE id = $1 RETURNING {BOOK_COLUMNS}");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
