use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sort keys for the owned-collection view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum OwnedSortKey {
    /// Composite display name: set name plus parallel/rarity.
    SetName,
    CostBasis,
    /// Estimated value, falling back to cost basis.
    EstimatedValue,
    /// Profit/loss percent via the metrics calculator.
    PlPercent,
    Avg30DayPrice,
}

/// Sort keys for the want-list view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WantSortKey {
    SetName,
    Avg30DayPrice,
    LowestActivePrice,
    /// Discount to the 30-day average via the metrics calculator.
    Discount,
}

/// A selected sort key with its direction.
///
/// `select` carries the header-click semantics: re-selecting the current
/// key flips direction, selecting a new key resets to descending (the
/// default bias toward highest value first).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: PartialEq + Copy> SortSpec<K> {
    pub fn new(key: K, direction: SortDirection) -> Self {
        SortSpec { key, direction }
    }

    pub fn select(&mut self, key: K) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Desc;
        }
    }
}

impl Default for SortSpec<OwnedSortKey> {
    fn default() -> Self {
        SortSpec::new(OwnedSortKey::EstimatedValue, SortDirection::Desc)
    }
}

impl Default for SortSpec<WantSortKey> {
    fn default() -> Self {
        SortSpec::new(WantSortKey::Discount, SortDirection::Desc)
    }
}
