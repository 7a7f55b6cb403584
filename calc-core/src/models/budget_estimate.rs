use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AutomationTier;

/// One line of the equipment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl EquipmentItem {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Itemized smart-home budget for one tier and room count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEstimate {
    pub tier: AutomationTier,
    pub room_count: u32,
    pub items: Vec<EquipmentItem>,
    /// Sum of all line totals, in shekels.
    pub total: Decimal,
    /// Rough dollar equivalent of `total`, rounded to whole dollars.
    pub total_usd: Decimal,
}
