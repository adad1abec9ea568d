use rust_decimal::Decimal;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Minimum discount (percent) for a want-list card to count as a buying
/// opportunity
pub const BUYING_OPPORTUNITY_THRESHOLD: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Population at or below which a card is considered low-population
pub const LOW_POPULATION_THRESHOLD: i32 = 25;
