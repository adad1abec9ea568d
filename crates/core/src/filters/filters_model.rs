use serde::{Deserialize, Serialize};

/// Set-name selector: match every set, or one exact set name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SetFilter {
    #[default]
    All,
    Named(String),
}

/// Graded-status selector.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum GradedFilter {
    #[default]
    All,
    Graded,
    Raw,
}

/// A user-specified filter over the collection.
///
/// The default filter matches every card. All three legs must pass for a
/// card to be included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardFilter {
    /// Free-text search, case-insensitive substring match against set name,
    /// parallel/rarity and grading company. Empty means no constraint.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub set: SetFilter,
    #[serde(default)]
    pub graded: GradedFilter,
}

impl CardFilter {
    /// True when any leg constrains the collection.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.set != SetFilter::All || self.graded != GradedFilter::All
    }
}
