use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::cards::Card;
use crate::metrics::MetricsCalculator;

use super::{PortfolioSummary, WantListSummary};

impl PortfolioSummary {
    /// Aggregates an owned collection into KPI totals.
    ///
    /// Totals sum whatever data is present; the gain/loss pair is `None`
    /// only when no card contributes a cost basis, so a fresh collection
    /// shows "no data" rather than a misleading zero.
    pub fn calculate(cards: &[Card]) -> Self {
        let total_cost_basis: Decimal = cards.iter().filter_map(|card| card.cost_basis).sum();
        let total_value: Decimal = cards.iter().filter_map(|card| card.display_value()).sum();

        let (total_gain_loss_amount, total_gain_loss_percent) = if total_cost_basis > Decimal::ZERO
        {
            let amount = total_value - total_cost_basis;
            (Some(amount), Some(amount / total_cost_basis * dec!(100)))
        } else {
            (None, None)
        };

        PortfolioSummary {
            card_count: cards.len(),
            graded_count: cards.iter().filter(|card| card.is_graded).count(),
            total_cost_basis,
            total_value,
            total_gain_loss_amount,
            total_gain_loss_percent,
        }
    }
}

impl WantListSummary {
    /// Aggregates a want list into KPI totals.
    pub fn calculate(cards: &[Card], calculator: &MetricsCalculator) -> Self {
        WantListSummary {
            card_count: cards.len(),
            opportunity_count: cards
                .iter()
                .filter(|card| calculator.is_buying_opportunity(card))
                .count(),
            total_lowest_active: cards
                .iter()
                .filter_map(|card| card.lowest_active_price)
                .sum(),
        }
    }
}
