//! Request handlers for the books resource.
//!
//! Handlers validate input at the boundary, delegate to the repository in
//! `konige_db`, and map errors via [`crate::error::AppError`].

pub mod books;
