//! Sorting - total orders over card collections by selectable keys.

mod sorting_model;
mod sorting_service;

pub use sorting_model::*;
pub use sorting_service::*;
