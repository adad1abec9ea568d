//! Manual reordering - explicit user-defined orderings, decoupled from
//! the sort comparator.

mod reorder_model;
mod reorder_service;

pub use reorder_model::*;
pub use reorder_service::*;

#[cfg(test)]
mod reorder_service_tests;
