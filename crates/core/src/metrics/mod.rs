//! Derived financial metrics - profit/loss, last-sale return, discount.

mod metrics_calculator;
mod metrics_model;

pub use metrics_calculator::*;
pub use metrics_model::*;
