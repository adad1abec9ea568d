use std::collections::HashSet;

use log::debug;

use crate::cards::{Card, CardId};
use crate::errors::Result;

use super::{CardOrder, ReorderError};

/// Builds the id-to-position mapping for a user-supplied id sequence.
///
/// The sequence must be exactly a permutation of the collection's ids:
/// every id known, none repeated, none missing.
pub fn order_from_ids(ids: &[CardId], cards: &[Card]) -> Result<Vec<CardOrder>> {
    let known: HashSet<CardId> = cards.iter().map(|card| card.id).collect();

    let mut seen = HashSet::with_capacity(ids.len());
    for &id in ids {
        if !known.contains(&id) {
            return Err(ReorderError::UnknownCard(id).into());
        }
        if !seen.insert(id) {
            return Err(ReorderError::DuplicateCard(id).into());
        }
    }
    if seen.len() != known.len() {
        return Err(ReorderError::IncompleteOrder {
            expected: known.len(),
            got: seen.len(),
        }
        .into());
    }

    Ok(ids
        .iter()
        .enumerate()
        .map(|(position, &card_id)| CardOrder {
            card_id,
            position: position as i32,
        })
        .collect())
}

/// An explicit-ordering edit session.
///
/// Entering reorder mode snapshots the current display order into a local
/// working copy; each drag relocates one card; committing produces the
/// complete mapping for the persistence collaborator in one piece. Dropping
/// the session without committing discards the edit.
#[derive(Debug, Clone)]
pub struct ReorderSession {
    cards: Vec<Card>,
}

impl ReorderSession {
    pub fn new(cards: &[Card]) -> Self {
        ReorderSession {
            cards: cards.to_vec(),
        }
    }

    /// The current working order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Moves `active_id` to the position currently held by `over_id`,
    /// shifting the cards in between. No-op when the ids are equal or
    /// either id is unknown.
    pub fn move_card(&mut self, active_id: CardId, over_id: CardId) {
        if active_id == over_id {
            return;
        }
        let (Some(from), Some(to)) = (self.index_of(active_id), self.index_of(over_id)) else {
            debug!(
                "Ignoring move of card {} over card {}: not in session",
                active_id, over_id
            );
            return;
        };

        let card = self.cards.remove(from);
        self.cards.insert(to, card);
    }

    /// Consumes the session into the complete id-to-position mapping.
    pub fn commit(self) -> Vec<CardOrder> {
        self.cards
            .iter()
            .enumerate()
            .map(|(position, card)| CardOrder {
                card_id: card.id,
                position: position as i32,
            })
            .collect()
    }

    fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }
}
