use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::metrics::ProfitLoss;
use crate::utils::decimal_serde::decimal_serde_option_round_display;

/// One row of the owned-collection table: the card plus its derived
/// performance metrics.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    #[serde(flatten)]
    pub card: Card,
    pub profit_loss: ProfitLoss,
    pub last_sale_return: ProfitLoss,
}

/// One row of the want-list table: the card plus its discount to market
/// and buying-opportunity classification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WantListView {
    #[serde(flatten)]
    pub card: Card,
    #[serde(with = "decimal_serde_option_round_display")]
    pub discount: Option<Decimal>,
    pub buying_opportunity: bool,
}
