use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::LOW_POPULATION_THRESHOLD;

/// Unique, stable card identifier assigned by the data layer.
pub type CardId = i64;

/// Direction of the 30-day price trend reported by the market data layer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PriceTrend {
    Up,
    Down,
    Neutral,
}

/// One tracked collectible unit, owned or wanted.
///
/// Supplied whole by the data layer per render cycle. Derived metrics
/// (profit/loss, discount) are never stored here - they are recomputed from
/// the raw price fields on every call, so they cannot desynchronize from
/// their inputs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    // Core identification
    pub id: CardId,
    pub set_name: String,
    pub parallel_rarity: String,

    // Grading status
    pub is_graded: bool,
    #[serde(default)]
    pub grading_company: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,

    // Valuation. When present, cost_basis is non-negative.
    #[serde(default)]
    pub cost_basis: Option<Decimal>,
    #[serde(default)]
    pub estimated_value: Option<Decimal>,
    #[serde(default)]
    pub avg_30_day_price: Option<Decimal>,
    #[serde(default)]
    pub last_sale_price: Option<Decimal>,
    #[serde(default)]
    pub lowest_active_price: Option<Decimal>,

    // Market metadata
    #[serde(default)]
    pub num_sales_30_day: Option<i32>,
    /// None or zero means unlimited / ungraded population.
    #[serde(default)]
    pub population: Option<i32>,
    #[serde(default)]
    pub price_trend: Option<PriceTrend>,

    // Provenance
    #[serde(default)]
    pub date_acquired: Option<NaiveDate>,
    #[serde(default)]
    pub last_sale_date: Option<NaiveDate>,

    // External references
    #[serde(default)]
    pub ebay_sold_url: Option<String>,
    #[serde(default)]
    pub ebay_active_url: Option<String>,
    #[serde(default)]
    pub lowest_active_url: Option<String>,

    // Explicit manual position, used only in reorder mode
    #[serde(default)]
    pub sort_order: Option<i32>,
}

impl Card {
    /// Composite display label: set name plus parallel/rarity.
    ///
    /// This is the string the set-name sort key compares and one of the
    /// fields the text search scans.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.set_name, self.parallel_rarity)
    }

    /// Current display value: estimated value, falling back to cost basis.
    pub fn display_value(&self) -> Option<Decimal> {
        self.estimated_value.or(self.cost_basis)
    }

    /// True when the graded population is known and scarce.
    pub fn is_low_population(&self) -> bool {
        matches!(self.population, Some(pop) if pop > 0 && pop <= LOW_POPULATION_THRESHOLD)
    }
}
