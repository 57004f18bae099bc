//! Book row model and request DTO.
//!
//! Field names match the wire contract the frontend already speaks
//! (`titulo`, `autor`, `ano`, `lido`, `favorito`), so no serde renames.

use konige_core::book::YearInput;
use konige_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub titulo: String,
    pub autor: String,
    pub ano: i32,
    pub lido: bool,
    pub favorito: bool,
    pub created_at: Timestamp,
}

/// Raw creation payload as received from the client.
///
/// Every field is optional and `ano` may be a number or a string; the
/// handler runs this through `konige_core::book::validate_new_book` so
/// bad input fails with the API's own error shape instead of a serde
/// rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub ano: Option<YearInput>,
}
