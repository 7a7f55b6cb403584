//! Glue between parsed form input, the calculators and the analytics sink.

use calc_core::calculations::{BudgetEstimator, SalaryCalculator, TransferComparator};
use calc_core::input::{BudgetForm, SalaryForm, TransferForm};
use calc_core::{
    AnalyticsSink, BudgetEstimate, DeductionResult, ProviderTable, ReferenceTables,
    TransferComparison, TransferProvider, analytics,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("unknown transfer provider '{0}'")]
    UnknownProvider(String),

    #[error("'{0}' has no referral link")]
    NoReferralLink(String),
}

pub fn salary(
    tables: &ReferenceTables,
    form: &SalaryForm,
) -> DeductionResult {
    SalaryCalculator::new(&tables.salary).calculate(&form.to_input())
}

pub fn budget(
    tables: &ReferenceTables,
    form: &BudgetForm,
) -> BudgetEstimate {
    BudgetEstimator::new(&tables.budget).calculate(&form.to_input())
}

pub fn transfer(
    tables: &ReferenceTables,
    form: &TransferForm,
) -> TransferComparison {
    TransferComparator::new(&tables.transfer).calculate(&form.to_input())
}

/// Follows a provider's referral link, recording an affiliate click.
///
/// Nothing is recorded when the provider is unknown or has no link.
pub fn open_provider<'t>(
    table: &'t ProviderTable,
    name: &str,
    category: Option<&str>,
    sink: &dyn AnalyticsSink,
) -> Result<&'t TransferProvider, AppError> {
    let provider = table
        .find(name)
        .ok_or_else(|| AppError::UnknownProvider(name.to_string()))?;

    if provider.referral_url.is_empty() {
        return Err(AppError::NoReferralLink(provider.name.clone()));
    }

    analytics::track_affiliate_click(Some(sink), &provider.name, category);
    Ok(provider)
}
