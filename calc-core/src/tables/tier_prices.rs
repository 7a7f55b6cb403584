use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AutomationTier;

/// Errors reported by [`TierPriceTable::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TierPriceTableError {
    #[error("{tier} tier: {item} price must be non-negative, got {value}")]
    NegativePrice {
        tier: AutomationTier,
        item: &'static str,
        value: Decimal,
    },

    #[error("shekels per dollar must be positive, got {0}")]
    InvalidExchangeRate(Decimal),
}

/// Unit prices (in shekels) for one automation tier.
///
/// Optional items are only offered when the tier prices them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPrices {
    pub hub: Decimal,
    pub light_per_room: Decimal,
    pub sensor: Decimal,
    pub plug: Decimal,
    #[serde(default)]
    pub camera: Option<Decimal>,
    #[serde(default)]
    pub thermostat: Option<Decimal>,
    #[serde(default)]
    pub lock: Option<Decimal>,
    #[serde(default)]
    pub vacuum: Option<Decimal>,
}

/// Price lists for every tier plus the shekel/dollar rate used for the
/// approximate dollar total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPriceTable {
    pub basic: TierPrices,
    pub intermediate: TierPrices,
    pub advanced: TierPrices,
    /// Shekels per dollar.
    pub ils_per_usd: Decimal,
}

impl TierPrices {
    fn validate(
        &self,
        tier: AutomationTier,
    ) -> Result<(), TierPriceTableError> {
        let required = [
            ("hub", Some(self.hub)),
            ("light_per_room", Some(self.light_per_room)),
            ("sensor", Some(self.sensor)),
            ("plug", Some(self.plug)),
        ];
        let optional = [
            ("camera", self.camera),
            ("thermostat", self.thermostat),
            ("lock", self.lock),
            ("vacuum", self.vacuum),
        ];

        for (item, price) in required.into_iter().chain(optional) {
            if let Some(value) = price.filter(|p| *p < Decimal::ZERO) {
                return Err(TierPriceTableError::NegativePrice { tier, item, value });
            }
        }
        Ok(())
    }
}

impl TierPriceTable {
    /// # Errors
    ///
    /// Returns [`TierPriceTableError`] if any price is negative or the
    /// exchange rate is not positive.
    pub fn validate(&self) -> Result<(), TierPriceTableError> {
        for tier in AutomationTier::all() {
            self.prices(*tier).validate(*tier)?;
        }
        if self.ils_per_usd <= Decimal::ZERO {
            return Err(TierPriceTableError::InvalidExchangeRate(self.ils_per_usd));
        }
        Ok(())
    }

    pub fn prices(
        &self,
        tier: AutomationTier,
    ) -> &TierPrices {
        match tier {
            AutomationTier::Basic => &self.basic,
            AutomationTier::Intermediate => &self.intermediate,
            AutomationTier::Advanced => &self.advanced,
        }
    }
}

impl Default for TierPriceTable {
    fn default() -> Self {
        Self {
            basic: TierPrices {
                hub: dec!(250),
                light_per_room: dec!(120),
                sensor: dec!(80),
                plug: dec!(60),
                camera: None,
                thermostat: None,
                lock: None,
                vacuum: None,
            },
            intermediate: TierPrices {
                hub: dec!(450),
                light_per_room: dec!(250),
                sensor: dec!(120),
                plug: dec!(100),
                camera: Some(dec!(350)),
                thermostat: Some(dec!(500)),
                lock: None,
                vacuum: None,
            },
            advanced: TierPrices {
                hub: dec!(700),
                light_per_room: dec!(400),
                sensor: dec!(150),
                plug: dec!(120),
                camera: Some(dec!(550)),
                thermostat: Some(dec!(700)),
                lock: Some(dec!(800)),
                vacuum: Some(dec!(2500)),
            },
            ils_per_usd: dec!(3.65),
        }
    }
}
