use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly salary breakdown produced by the salary calculator.
///
/// Every monetary field is rounded to whole shekels. `net_salary` is derived
/// from the rounded `gross` and `total_deductions`, so the two always add up.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeductionResult {
    pub gross: Decimal,
    pub income_tax: Decimal,
    pub national_insurance: Decimal,
    pub health_insurance: Decimal,
    pub pension_deduction: Decimal,
    pub voluntary_fund_deduction: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,

    /// Total deductions as a percentage of gross, one decimal place.
    pub effective_rate: Decimal,

    pub employer_total_cost: Decimal,
    pub annual_gross: Decimal,
    pub annual_net: Decimal,
}
