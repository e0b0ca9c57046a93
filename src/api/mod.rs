//! Data access layer for the remote figure collection.
//!
//! Every call returns `Result<T, ApiError>`; `{"error": ...}` payloads are
//! classified here so callers never inspect response bodies.

mod client;
mod error;

pub use client::{CatalogClient, UpdateMode, API_KEY_HEADER};
pub use error::ApiError;
