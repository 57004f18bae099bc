//! Shared response envelope types for API handlers.
//!
//! The frontend expects every success body to carry `success: true` plus
//! either the collection and its count (list) or the affected row and a
//! human-readable message (create/toggle/delete). Typed envelopes instead
//! of ad-hoc `serde_json::json!` keep the shape consistent.

use serde::Serialize;

/// `{ "success": true, "data": [...], "count": N }` for collection responses.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count,
        }
    }
}

/// `{ "success": true, "data": {...}, "message": "..." }` for single-row responses.
#[derive(Debug, Serialize)]
pub struct ItemResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ItemResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}
