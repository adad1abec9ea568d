//! Portfolio-level summary totals for the dashboard KPI strip.

mod summary_model;
mod summary_service;

pub use summary_model::*;
pub use summary_service::*;
