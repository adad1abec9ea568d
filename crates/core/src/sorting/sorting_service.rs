use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::cards::Card;
use crate::metrics::MetricsCalculator;

use super::{OwnedSortKey, SortDirection, SortSpec, WantSortKey};

// Missing-value fallbacks, one per sort key. Price-like keys treat missing
// data as zero; the want-list keys instead push rows with no data to one
// extreme of the ordering rather than mid-ranking them among cheap cards.

/// Missing cost basis sorts as zero.
pub const MISSING_COST_BASIS: Decimal = Decimal::ZERO;
/// Missing estimated value and cost basis sort as zero.
pub const MISSING_ESTIMATED_VALUE: Decimal = Decimal::ZERO;
/// Unknown profit/loss sorts as flat.
pub const MISSING_PL_PERCENT: Decimal = Decimal::ZERO;
/// Missing 30-day average sorts as zero.
pub const MISSING_AVG_30_DAY_PRICE: Decimal = Decimal::ZERO;
/// No active listing sorts to the bottom when ascending by lowest price.
pub const MISSING_LOWEST_ACTIVE_PRICE: Decimal = Decimal::MAX;
/// No discount data sorts to the bottom when descending by discount.
pub const MISSING_DISCOUNT: Decimal = Decimal::MIN;

enum SortValue {
    Text(String),
    Number(Decimal),
}

impl SortValue {
    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.cmp(b),
            // A single key always yields a single variant
            _ => Ordering::Equal,
        }
    }
}

fn owned_sort_value(card: &Card, key: OwnedSortKey, calculator: &MetricsCalculator) -> SortValue {
    match key {
        OwnedSortKey::SetName => SortValue::Text(card.display_name()),
        OwnedSortKey::CostBasis => {
            SortValue::Number(card.cost_basis.unwrap_or(MISSING_COST_BASIS))
        }
        OwnedSortKey::EstimatedValue => {
            SortValue::Number(card.display_value().unwrap_or(MISSING_ESTIMATED_VALUE))
        }
        OwnedSortKey::PlPercent => SortValue::Number(
            calculator
                .profit_loss(card)
                .percent
                .unwrap_or(MISSING_PL_PERCENT),
        ),
        OwnedSortKey::Avg30DayPrice => {
            SortValue::Number(card.avg_30_day_price.unwrap_or(MISSING_AVG_30_DAY_PRICE))
        }
    }
}

fn want_sort_value(card: &Card, key: WantSortKey, calculator: &MetricsCalculator) -> SortValue {
    match key {
        WantSortKey::SetName => SortValue::Text(card.display_name()),
        WantSortKey::Avg30DayPrice => {
            SortValue::Number(card.avg_30_day_price.unwrap_or(MISSING_AVG_30_DAY_PRICE))
        }
        WantSortKey::LowestActivePrice => SortValue::Number(
            card.lowest_active_price
                .unwrap_or(MISSING_LOWEST_ACTIVE_PRICE),
        ),
        WantSortKey::Discount => {
            SortValue::Number(calculator.discount(card).unwrap_or(MISSING_DISCOUNT))
        }
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Sorts an owned-collection slice in place.
///
/// The sort is stable with card id as an explicit final tie-break, so equal
/// keys always produce a deterministic order. The tie-break is not affected
/// by the direction flag.
pub fn sort_owned(cards: &mut [Card], spec: &SortSpec<OwnedSortKey>, calculator: &MetricsCalculator) {
    cards.sort_by(|a, b| {
        let ordering = owned_sort_value(a, spec.key, calculator)
            .compare(&owned_sort_value(b, spec.key, calculator));
        directed(ordering, spec.direction).then_with(|| a.id.cmp(&b.id))
    });
}

/// Sorts a want-list slice in place. Same contract as [`sort_owned`].
pub fn sort_want_list(
    cards: &mut [Card],
    spec: &SortSpec<WantSortKey>,
    calculator: &MetricsCalculator,
) {
    cards.sort_by(|a, b| {
        let ordering = want_sort_value(a, spec.key, calculator)
            .compare(&want_sort_value(b, spec.key, calculator));
        directed(ordering, spec.direction).then_with(|| a.id.cmp(&b.id))
    });
}
