//! Immutable reference data for the calculators.
//!
//! Tables are built once at startup (from the defaults, a TOML settings file
//! or CSV loaders) and passed by reference into each calculator.

mod providers;
mod salary_rates;
mod tier_prices;

use serde::{Deserialize, Serialize};

pub use providers::{ProviderTable, ProviderTableError, TransferProvider};
pub use salary_rates::{SalaryRates, SalaryRatesError, TwoTierLevy, validate_brackets};
pub use tier_prices::{TierPriceTable, TierPriceTableError, TierPrices};

/// All reference tables in one place.
///
/// Missing sections fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    pub salary: SalaryRates,
    pub budget: TierPriceTable,
    pub transfer: ProviderTable,
}

/// Errors returned by [`ReferenceTables::validate`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReferenceTablesError {
    #[error("invalid salary rates: {0}")]
    Salary(#[from] SalaryRatesError),

    #[error("invalid budget price table: {0}")]
    Budget(#[from] TierPriceTableError),

    #[error("invalid provider table: {0}")]
    Transfer(#[from] ProviderTableError),
}

impl ReferenceTables {
    pub fn validate(&self) -> Result<(), ReferenceTablesError> {
        self.salary.validate()?;
        self.budget.validate()?;
        self.transfer.validate()?;
        Ok(())
    }
}
