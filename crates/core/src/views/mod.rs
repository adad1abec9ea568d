//! Display-ready view rows: filter, sort and per-row metrics in one pass.

mod views_model;
mod views_service;

pub use views_model::*;
pub use views_service::*;
