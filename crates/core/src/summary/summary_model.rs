use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::{
    decimal_serde_option_round_display, decimal_serde_round_display,
};

/// Aggregated totals over an owned collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub card_count: usize,
    pub graded_count: usize,
    /// Sum of present cost bases.
    #[serde(with = "decimal_serde_round_display")]
    pub total_cost_basis: Decimal,
    /// Sum of display values (estimated value falling back to cost basis).
    #[serde(with = "decimal_serde_round_display")]
    pub total_value: Decimal,
    /// None when no cost basis exists to measure against.
    #[serde(with = "decimal_serde_option_round_display")]
    pub total_gain_loss_amount: Option<Decimal>,
    #[serde(with = "decimal_serde_option_round_display")]
    pub total_gain_loss_percent: Option<Decimal>,
}

/// Aggregated totals over a want list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WantListSummary {
    pub card_count: usize,
    /// Cards currently classified as buying opportunities.
    pub opportunity_count: usize,
    /// Sum of present lowest active listing prices.
    #[serde(with = "decimal_serde_round_display")]
    pub total_lowest_active: Decimal,
}
