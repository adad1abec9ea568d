//! Cardfolio Core - Derived metrics, filtering, sorting and reordering for
//! a card collection tracker.
//!
//! This crate contains the pure computation layer behind the collection and
//! want-list views. It is I/O-free and stateless: records are supplied whole
//! by the caller (a data layer), and every operation returns new derived
//! values or orderings without mutating its input.

pub mod cards;
pub mod constants;
pub mod errors;
pub mod filters;
pub mod metrics;
pub mod reorder;
pub mod sorting;
pub mod summary;
pub mod utils;
pub mod views;

// Re-export common types from the card and view modules
pub use cards::*;
pub use views::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
