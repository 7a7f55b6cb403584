use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A contiguous monthly income range taxed at a single marginal rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    /// `None` for the top bracket.
    pub upper_bound: Option<Decimal>,
    /// Marginal rate as a fraction (e.g. `0.10` for 10%).
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        lower_bound: Decimal,
        upper_bound: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            rate,
        }
    }

    /// Width of the bracket, or `None` when it is unbounded.
    pub fn width(&self) -> Option<Decimal> {
        self.upper_bound.map(|upper| upper - self.lower_bound)
    }
}
