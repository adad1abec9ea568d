use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::decimal_serde_option_round_display;

/// Profit/loss in dollars and as a percentage of cost basis.
///
/// Both fields are `None` when the inputs are missing or non-positive -
/// "insufficient data", which the presentation layer renders as an explicit
/// placeholder rather than a zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLoss {
    #[serde(with = "decimal_serde_option_round_display")]
    pub amount: Option<Decimal>,
    #[serde(with = "decimal_serde_option_round_display")]
    pub percent: Option<Decimal>,
}

impl ProfitLoss {
    /// The "insufficient data" result.
    pub fn empty() -> Self {
        ProfitLoss {
            amount: None,
            percent: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.percent.is_none()
    }
}
