use log::debug;

use crate::cards::Card;

use super::{CardFilter, GradedFilter, SetFilter};

impl CardFilter {
    /// Decides whether a single card matches this filter.
    pub fn matches(&self, card: &Card) -> bool {
        self.matches_search(card) && self.matches_set(card) && self.matches_graded(card)
    }

    /// Applies the filter to a collection, preserving relative order.
    ///
    /// Idempotent: filtering an already-filtered result with the same
    /// filter yields the identical collection.
    pub fn apply(&self, cards: &[Card]) -> Vec<Card> {
        let filtered: Vec<Card> = cards
            .iter()
            .filter(|card| self.matches(card))
            .cloned()
            .collect();
        if self.is_active() {
            debug!(
                "Filter matched {} of {} cards",
                filtered.len(),
                cards.len()
            );
        }
        filtered
    }

    fn matches_search(&self, card: &Card) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let query = self.search.to_lowercase();
        card.set_name.to_lowercase().contains(&query)
            || card.parallel_rarity.to_lowercase().contains(&query)
            || card
                .grading_company
                .as_ref()
                .is_some_and(|company| company.to_lowercase().contains(&query))
    }

    fn matches_set(&self, card: &Card) -> bool {
        match &self.set {
            SetFilter::All => true,
            SetFilter::Named(set_name) => card.set_name == *set_name,
        }
    }

    fn matches_graded(&self, card: &Card) -> bool {
        match self.graded {
            GradedFilter::All => true,
            GradedFilter::Graded => card.is_graded,
            GradedFilter::Raw => !card.is_graded,
        }
    }
}

/// Distinct set names across a collection, sorted, for the set selector.
pub fn distinct_sets(cards: &[Card]) -> Vec<String> {
    let mut sets: Vec<String> = cards.iter().map(|card| card.set_name.clone()).collect();
    sets.sort();
    sets.dedup();
    sets
}
