//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, storage, search and input validation
//! - Categorization of transport failures into search errors
//!
//! A search error never escapes the resolver: it becomes an `ApiError` outcome
//! for the keyword and the batch moves on. Input errors are raised before any
//! request is made.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, truncate_error_message};
pub use types::{DatabaseError, InitializationError, InputError, SearchError};
