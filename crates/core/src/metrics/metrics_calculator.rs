use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::cards::Card;
use crate::constants::BUYING_OPPORTUNITY_THRESHOLD;

use super::ProfitLoss;

/// Computes derived metrics from raw card price fields.
///
/// All computations are pure and total: any missing or non-positive input
/// degrades the affected metric to `None` instead of erroring, so no
/// division by zero or meaningless cost basis is ever attempted.
#[derive(Debug, Clone)]
pub struct MetricsCalculator {
    /// Minimum discount (percent) for [`MetricsCalculator::is_buying_opportunity`].
    opportunity_threshold: Decimal,
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        MetricsCalculator {
            opportunity_threshold: BUYING_OPPORTUNITY_THRESHOLD,
        }
    }
}

impl MetricsCalculator {
    pub fn new(opportunity_threshold: Decimal) -> Self {
        MetricsCalculator {
            opportunity_threshold,
        }
    }

    pub fn opportunity_threshold(&self) -> Decimal {
        self.opportunity_threshold
    }

    /// Profit/loss of an owned card against its cost basis.
    ///
    /// The compared value is the estimated value, falling back to the cost
    /// basis when no estimate exists (in which case P/L is flat).
    pub fn profit_loss(&self, card: &Card) -> ProfitLoss {
        Self::gain_against_cost(card.display_value(), card.cost_basis)
    }

    /// Return the card would have realized at its most recent recorded sale.
    pub fn last_sale_return(&self, card: &Card) -> ProfitLoss {
        Self::gain_against_cost(card.last_sale_price, card.cost_basis)
    }

    /// Percentage by which the lowest active listing undercuts the 30-day
    /// average sale price. Positive means the listing is below the average.
    ///
    /// `None` unless both prices are present and positive.
    pub fn discount(&self, card: &Card) -> Option<Decimal> {
        let avg = positive(card.avg_30_day_price)?;
        let lowest = positive(card.lowest_active_price)?;
        Some((avg - lowest) / avg * dec!(100))
    }

    /// True when the card's discount is known and meets the threshold.
    pub fn is_buying_opportunity(&self, card: &Card) -> bool {
        match self.discount(card) {
            Some(discount) if discount >= self.opportunity_threshold => {
                debug!(
                    "Card {} flagged as buying opportunity ({:.1}% below 30-day average)",
                    card.id, discount
                );
                true
            }
            _ => false,
        }
    }

    fn gain_against_cost(value: Option<Decimal>, cost_basis: Option<Decimal>) -> ProfitLoss {
        let (Some(cost), Some(value)) = (positive(cost_basis), positive(value)) else {
            return ProfitLoss::empty();
        };

        let amount = value - cost;
        ProfitLoss {
            amount: Some(amount),
            percent: Some(amount / cost * dec!(100)),
        }
    }
}

fn positive(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| v.is_sign_positive() && !v.is_zero())
}
