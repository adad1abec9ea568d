//! Core error types for the cardfolio engine.
//!
//! Missing or non-positive price data is never an error: metric
//! computations degrade to `None` so the presentation layer can render an
//! explicit "No data" placeholder. Errors are reserved for structurally
//! invalid input, such as a reorder sequence that is not a permutation of
//! the collection.

use thiserror::Error;

use crate::reorder::ReorderError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Reorder failed: {0}")]
    Reorder(#[from] ReorderError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
