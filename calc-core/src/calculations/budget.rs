//! Smart-home equipment budget for a given room count and automation tier.
//!
//! | Item                    | Quantity                | Tiers |
//! |-------------------------|-------------------------|-------|
//! | Smart Hub / Controller  | 1                       | all |
//! | Smart Lights (per room) | rooms                   | all |
//! | Motion Sensors          | ⌈rooms / 2⌉             | all |
//! | Smart Plugs             | min(rooms, 4)           | all |
//! | Security Camera         | 2 on advanced, else 1   | when priced |
//! | Smart AC Controller     | ⌈rooms / 2⌉             | when priced |
//! | Smart Door Lock         | 1                       | when priced |
//! | Robot Vacuum            | 1                       | when priced |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::{AutomationTier, TierPriceTable};
//! use calc_core::calculations::{BudgetEstimator, BudgetInput};
//!
//! let prices = TierPriceTable::default();
//! let estimate = BudgetEstimator::new(&prices).calculate(&BudgetInput {
//!     room_count: 3,
//!     tier: AutomationTier::Basic,
//! });
//!
//! assert_eq!(estimate.items.len(), 4);
//! assert_eq!(estimate.total, dec!(950));
//! assert_eq!(estimate.total_usd, dec!(260));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::common::{div_ceil, round_whole};
use crate::{AutomationTier, BudgetEstimate, EquipmentItem, TierPriceTable};

/// Room count used when the form value is missing or not positive.
pub const DEFAULT_ROOM_COUNT: u32 = 3;

const MAX_PLUGS: u32 = 4;

/// Values collected from the budget form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetInput {
    pub room_count: u32,
    pub tier: AutomationTier,
}

impl Default for BudgetInput {
    fn default() -> Self {
        Self {
            room_count: DEFAULT_ROOM_COUNT,
            tier: AutomationTier::Basic,
        }
    }
}

/// Builds the itemized equipment list from a tier price table.
#[derive(Debug, Clone)]
pub struct BudgetEstimator<'a> {
    prices: &'a TierPriceTable,
}

impl<'a> BudgetEstimator<'a> {
    pub fn new(prices: &'a TierPriceTable) -> Self {
        Self { prices }
    }

    /// Produces the equipment list and totals. A zero room count falls back
    /// to [`DEFAULT_ROOM_COUNT`].
    pub fn calculate(
        &self,
        input: &BudgetInput,
    ) -> BudgetEstimate {
        let rooms = if input.room_count == 0 {
            warn!("room count of 0 replaced with {DEFAULT_ROOM_COUNT}");
            DEFAULT_ROOM_COUNT
        } else {
            input.room_count
        };

        let items = self.items(rooms, input.tier);
        let total: Decimal = items.iter().map(EquipmentItem::line_total).sum();
        let total_usd = self.to_usd(total);

        debug!(
            tier = input.tier.as_str(),
            rooms,
            items = items.len(),
            total = %total,
            "budget estimate calculated"
        );

        BudgetEstimate {
            tier: input.tier,
            room_count: rooms,
            items,
            total,
            total_usd,
        }
    }

    fn items(
        &self,
        rooms: u32,
        tier: AutomationTier,
    ) -> Vec<EquipmentItem> {
        let prices = self.prices.prices(tier);
        let half_rooms = div_ceil(rooms, 2);

        let mut items = vec![
            EquipmentItem::new("Smart Hub / Controller", 1, prices.hub),
            EquipmentItem::new("Smart Lights (per room)", rooms, prices.light_per_room),
            EquipmentItem::new("Motion Sensors", half_rooms, prices.sensor),
            EquipmentItem::new("Smart Plugs", rooms.min(MAX_PLUGS), prices.plug),
        ];

        if let Some(price) = prices.camera {
            let cameras = if tier == AutomationTier::Advanced { 2 } else { 1 };
            items.push(EquipmentItem::new("Security Camera", cameras, price));
        }
        if let Some(price) = prices.thermostat {
            items.push(EquipmentItem::new("Smart AC Controller", half_rooms, price));
        }
        if let Some(price) = prices.lock {
            items.push(EquipmentItem::new("Smart Door Lock", 1, price));
        }
        if let Some(price) = prices.vacuum {
            items.push(EquipmentItem::new("Robot Vacuum", 1, price));
        }

        items
    }

    fn to_usd(
        &self,
        total: Decimal,
    ) -> Decimal {
        if self.prices.ils_per_usd <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        round_whole(total / self.prices.ils_per_usd)
    }
}
