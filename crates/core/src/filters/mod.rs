//! Filtering - reduces a collection to the subset matching a query.

mod filters_model;
mod filters_service;

pub use filters_model::*;
pub use filters_service::*;
