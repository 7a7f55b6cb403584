//! Monthly salary breakdown: income tax, payroll levies, pension and
//! employer cost.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Pension deduction: gross × pension% |
//! | 2    | Voluntary fund deduction: gross × fund% (only when opted in) |
//! | 3    | Taxable income: gross − pension × benefit% / pension% |
//! | 4    | Income tax from the progressive bracket schedule |
//! | 5    | Tax after credits: tax − credit points × point value (minimum 0) |
//! | 6    | National insurance (two-tier, capped) |
//! | 7    | Health insurance (two-tier, uncapped) |
//! | 8    | Total deductions and net salary |
//! | 9    | Employer cost: gross + pension + severance + employer NI |
//! | 10   | Effective rate: total deductions / gross × 100 |
//!
//! Step 3 assumes a flat 35% benefit on the pension contribution regardless
//! of the bracket the income actually falls in. The benefit term is skipped
//! when the pension percentage is 0.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::SalaryRates;
//! use calc_core::calculations::{SalaryCalculator, SalaryInput};
//!
//! let rates = SalaryRates::default();
//! let calculator = SalaryCalculator::new(&rates);
//!
//! let result = calculator.calculate(&SalaryInput {
//!     gross_monthly_income: dec!(10000),
//!     ..SalaryInput::default()
//! });
//!
//! assert_eq!(result.income_tax, dec!(106));
//! assert_eq!(result.total_deductions, dec!(1378));
//! assert_eq!(result.net_salary, dec!(8622));
//! assert_eq!(result.employer_total_cost, dec!(12011));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::DeductionResult;
use crate::SalaryRates;
use crate::calculations::common::{round_dp, round_whole};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Largest monthly gross the calculator accepts; larger values are clamped.
pub const MAX_GROSS_INCOME: Decimal = dec!(1000000000);

/// Values collected from the salary form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Gross monthly salary in shekels. Negative values are treated as 0 and
    /// values above [`MAX_GROSS_INCOME`] as that maximum.
    pub gross_monthly_income: Decimal,

    /// Number of tax credit points.
    pub credit_points: Decimal,

    /// Employee pension contribution, as a percentage of gross.
    pub pension_percent: Decimal,

    /// Whether the employee contributes to a voluntary study fund.
    pub includes_voluntary_fund: bool,
}

impl Default for SalaryInput {
    fn default() -> Self {
        Self {
            gross_monthly_income: Decimal::ZERO,
            credit_points: dec!(2.25),
            pension_percent: dec!(6.5),
            includes_voluntary_fund: false,
        }
    }
}

/// Unrounded intermediate figures.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Breakdown {
    gross: Decimal,
    income_tax: Decimal,
    national_insurance: Decimal,
    health_insurance: Decimal,
    pension: Decimal,
    voluntary_fund: Decimal,
    employer_cost: Decimal,
}

impl Breakdown {
    fn total_deductions(&self) -> Decimal {
        self.income_tax
            + self.national_insurance
            + self.health_insurance
            + self.pension
            + self.voluntary_fund
    }
}

/// Calculator for the salary breakdown.
#[derive(Debug, Clone)]
pub struct SalaryCalculator<'a> {
    rates: &'a SalaryRates,
}

impl<'a> SalaryCalculator<'a> {
    /// Creates a calculator over `rates`.
    ///
    /// The bracket schedule is expected to have passed
    /// [`SalaryRates::validate`]; the default rates always do.
    pub fn new(rates: &'a SalaryRates) -> Self {
        Self { rates }
    }

    /// Calculates the full salary breakdown.
    ///
    /// Never fails: gross is clamped into `[0, MAX_GROSS_INCOME]`, negative
    /// credit points to 0 and the pension percentage into
    /// `[0, max_pension_percent]`.
    pub fn calculate(
        &self,
        input: &SalaryInput,
    ) -> DeductionResult {
        let gross = self.clamp_gross(input.gross_monthly_income);
        let credit_points = input.credit_points.max(Decimal::ZERO);
        let pension_percent = input
            .pension_percent
            .min(self.rates.max_pension_percent)
            .max(Decimal::ZERO);

        let pension = self.pension_deduction(gross, pension_percent);
        let voluntary_fund = self.voluntary_fund_deduction(gross, input.includes_voluntary_fund);

        let taxable_income = self.taxable_income(gross, pension, pension_percent);
        let income_tax =
            self.tax_after_credits(self.progressive_tax(taxable_income), credit_points);

        let breakdown = Breakdown {
            gross,
            income_tax,
            national_insurance: self.rates.national_insurance.apply(gross),
            health_insurance: self.rates.health_insurance.apply(gross),
            pension,
            voluntary_fund,
            employer_cost: self.employer_cost(gross),
        };

        debug!(
            gross = %gross,
            taxable_income = %taxable_income,
            income_tax = %income_tax,
            total_deductions = %breakdown.total_deductions(),
            "salary breakdown calculated"
        );

        self.to_result(&breakdown)
    }

    fn clamp_gross(
        &self,
        gross: Decimal,
    ) -> Decimal {
        if gross < Decimal::ZERO {
            warn!(gross = %gross, "negative gross salary clamped to 0");
            return Decimal::ZERO;
        }
        if gross > MAX_GROSS_INCOME {
            warn!(gross = %gross, "gross salary clamped to {MAX_GROSS_INCOME}");
            return MAX_GROSS_INCOME;
        }
        gross
    }

    /// Step 1.
    fn pension_deduction(
        &self,
        gross: Decimal,
        pension_percent: Decimal,
    ) -> Decimal {
        gross * pension_percent / Decimal::ONE_HUNDRED
    }

    /// Step 2.
    fn voluntary_fund_deduction(
        &self,
        gross: Decimal,
        included: bool,
    ) -> Decimal {
        if included {
            gross * self.rates.voluntary_fund_percent / Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    }

    /// Step 3. Multiplies before dividing so common inputs stay exact.
    fn taxable_income(
        &self,
        gross: Decimal,
        pension: Decimal,
        pension_percent: Decimal,
    ) -> Decimal {
        if pension_percent.is_zero() {
            return gross;
        }
        let benefit = pension * self.rates.pension_benefit_percent / pension_percent;
        (gross - benefit).max(Decimal::ZERO)
    }

    /// Step 4. Walks the schedule from the bottom, taxing each slice at its
    /// bracket's rate.
    fn progressive_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        let mut remaining = taxable_income;
        let mut tax = Decimal::ZERO;

        for bracket in &self.rates.brackets {
            if remaining <= Decimal::ZERO {
                break;
            }
            let slice = match bracket.width() {
                Some(width) => remaining.min(width),
                None => remaining,
            };
            tax += slice * bracket.rate;
            remaining -= slice;
        }

        tax
    }

    /// Step 5.
    fn tax_after_credits(
        &self,
        tax: Decimal,
        credit_points: Decimal,
    ) -> Decimal {
        // Credit points come straight from the form; saturate rather than overflow.
        let credit = credit_points
            .checked_mul(self.rates.credit_point_value)
            .unwrap_or(Decimal::MAX);
        (tax - credit).max(Decimal::ZERO)
    }

    /// Step 9.
    fn employer_cost(
        &self,
        gross: Decimal,
    ) -> Decimal {
        let pension = gross * self.rates.employer_pension_percent / Decimal::ONE_HUNDRED;
        let severance = gross * self.rates.employer_severance_percent / Decimal::ONE_HUNDRED;
        let national_insurance = self.rates.employer_national_insurance.apply(gross);

        gross + pension + severance + national_insurance
    }

    /// Step 10.
    fn effective_rate(
        &self,
        total_deductions: Decimal,
        gross: Decimal,
    ) -> Decimal {
        if gross.is_zero() {
            return Decimal::ZERO;
        }
        round_dp(total_deductions * Decimal::ONE_HUNDRED / gross, 1)
    }

    fn to_result(
        &self,
        breakdown: &Breakdown,
    ) -> DeductionResult {
        let total = breakdown.total_deductions();
        let gross = round_whole(breakdown.gross);
        let total_deductions = round_whole(total);

        DeductionResult {
            gross,
            income_tax: round_whole(breakdown.income_tax),
            national_insurance: round_whole(breakdown.national_insurance),
            health_insurance: round_whole(breakdown.health_insurance),
            pension_deduction: round_whole(breakdown.pension),
            voluntary_fund_deduction: round_whole(breakdown.voluntary_fund),
            total_deductions,
            net_salary: gross - total_deductions,
            effective_rate: self.effective_rate(total, breakdown.gross),
            employer_total_cost: round_whole(breakdown.employer_cost),
            annual_gross: round_whole(breakdown.gross * MONTHS_PER_YEAR),
            annual_net: round_whole((breakdown.gross - total) * MONTHS_PER_YEAR),
        }
    }
}
