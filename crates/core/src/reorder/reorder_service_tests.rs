//! Unit tests for reordering.

use super::*;
use crate::cards::{Card, CardId};
use crate::errors::Error;

fn card(id: CardId) -> Card {
    Card {
        id,
        set_name: "Prizm".to_string(),
        parallel_rarity: "Base".to_string(),
        is_graded: false,
        grading_company: None,
        grade: None,
        cost_basis: None,
        estimated_value: None,
        avg_30_day_price: None,
        last_sale_price: None,
        lowest_active_price: None,
        num_sales_30_day: None,
        population: None,
        price_trend: None,
        date_acquired: None,
        last_sale_date: None,
        ebay_sold_url: None,
        ebay_active_url: None,
        lowest_active_url: None,
        sort_order: None,
    }
}

fn collection() -> Vec<Card> {
    vec![card(1), card(2), card(3)]
}

fn positions(order: &[CardOrder]) -> Vec<(CardId, i32)> {
    order.iter().map(|o| (o.card_id, o.position)).collect()
}

#[test]
fn order_from_ids_maps_zero_based_positions() {
    let order = order_from_ids(&[3, 1, 2], &collection()).unwrap();
    assert_eq!(positions(&order), vec![(3, 0), (1, 1), (2, 2)]);
}

#[test]
fn order_from_ids_rejects_unknown_ids() {
    let err = order_from_ids(&[1, 2, 99], &collection()).unwrap_err();
    assert!(matches!(
        err,
        Error::Reorder(ReorderError::UnknownCard(99))
    ));
}

#[test]
fn order_from_ids_rejects_duplicates() {
    let err = order_from_ids(&[1, 2, 2], &collection()).unwrap_err();
    assert!(matches!(
        err,
        Error::Reorder(ReorderError::DuplicateCard(2))
    ));
}

#[test]
fn order_from_ids_rejects_incomplete_sequences() {
    let err = order_from_ids(&[1, 2], &collection()).unwrap_err();
    assert!(matches!(
        err,
        Error::Reorder(ReorderError::IncompleteOrder {
            expected: 3,
            got: 2
        })
    ));
}

#[test]
fn session_moves_card_forward_and_back() {
    let mut session = ReorderSession::new(&collection());

    session.move_card(1, 3);
    let order: Vec<CardId> = session.cards().iter().map(|c| c.id).collect();
    assert_eq!(order, vec![2, 3, 1]);

    session.move_card(1, 2);
    let order: Vec<CardId> = session.cards().iter().map(|c| c.id).collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn session_ignores_self_and_unknown_moves() {
    let mut session = ReorderSession::new(&collection());
    session.move_card(2, 2);
    session.move_card(2, 42);
    session.move_card(42, 2);

    let order: Vec<CardId> = session.cards().iter().map(|c| c.id).collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn commit_produces_complete_mapping() {
    let mut session = ReorderSession::new(&collection());
    session.move_card(3, 1);

    let order = session.commit();
    assert_eq!(positions(&order), vec![(3, 0), (1, 1), (2, 2)]);
}

#[test]
fn dropping_a_session_leaves_the_source_untouched() {
    let cards = collection();
    {
        let mut session = ReorderSession::new(&cards);
        session.move_card(1, 3);
    }
    let order: Vec<CardId> = cards.iter().map(|c| c.id).collect();
    assert_eq!(order, vec![1, 2, 3]);
}
