use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardId;

/// One entry of an explicit ordering: a card id and its zero-based position.
///
/// A complete reorder is handed to the persistence collaborator as one
/// atomic `Vec<CardOrder>` covering every card in the collection.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardOrder {
    pub card_id: CardId,
    pub position: i32,
}

/// Errors for structurally invalid reorder input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReorderError {
    #[error("Card {0} is not part of the collection being reordered")]
    UnknownCard(CardId),

    #[error("Card {0} appears more than once in the reorder sequence")]
    DuplicateCard(CardId),

    #[error("Reorder sequence covers {got} of {expected} cards")]
    IncompleteOrder { expected: usize, got: usize },
}
