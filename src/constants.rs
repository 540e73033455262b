/// Decimal precision for per-goal contribution amounts
pub const MONEY_DECIMAL_PRECISION: u32 = 2;
