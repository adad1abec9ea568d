//! Card records - the unit of the collection and the want list.

mod cards_model;

pub use cards_model::*;
