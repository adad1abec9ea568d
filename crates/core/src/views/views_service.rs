use log::debug;

use crate::cards::Card;
use crate::filters::CardFilter;
use crate::metrics::MetricsCalculator;
use crate::sorting::{sort_owned, sort_want_list, OwnedSortKey, SortSpec, WantSortKey};

use super::{CardView, WantListView};

/// Builds the owned-collection view: filter, sort, then attach per-row
/// profit/loss metrics.
pub fn build_owned_view(
    cards: &[Card],
    filter: &CardFilter,
    sort: &SortSpec<OwnedSortKey>,
    calculator: &MetricsCalculator,
) -> Vec<CardView> {
    let mut filtered = filter.apply(cards);
    sort_owned(&mut filtered, sort, calculator);
    debug!(
        "Built owned view: {} of {} cards, sorted by {:?} {:?}",
        filtered.len(),
        cards.len(),
        sort.key,
        sort.direction
    );

    filtered
        .into_iter()
        .map(|card| {
            let profit_loss = calculator.profit_loss(&card);
            let last_sale_return = calculator.last_sale_return(&card);
            CardView {
                card,
                profit_loss,
                last_sale_return,
            }
        })
        .collect()
}

/// Builds the want-list view: filter, sort, then attach the discount and
/// buying-opportunity classification per row.
pub fn build_want_list_view(
    cards: &[Card],
    filter: &CardFilter,
    sort: &SortSpec<WantSortKey>,
    calculator: &MetricsCalculator,
) -> Vec<WantListView> {
    let mut filtered = filter.apply(cards);
    sort_want_list(&mut filtered, sort, calculator);
    debug!(
        "Built want-list view: {} of {} cards, sorted by {:?} {:?}",
        filtered.len(),
        cards.len(),
        sort.key,
        sort.direction
    );

    filtered
        .into_iter()
        .map(|card| {
            let discount = calculator.discount(&card);
            let buying_opportunity = calculator.is_buying_opportunity(&card);
            WantListView {
                card,
                discount,
                buying_opportunity,
            }
        })
        .collect()
}
