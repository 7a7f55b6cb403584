//! Payroll reference data for the salary calculator.
//!
//! The defaults are the 2025 Israeli monthly figures: the income tax bracket
//! schedule, the credit point value, the national and health insurance
//! levies and the employer-side contribution percentages.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TaxBracket;

/// Errors reported by [`SalaryRates::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SalaryRatesError {
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    #[error("first tax bracket must start at 0, got {0}")]
    FirstBracketNotAtZero(Decimal),

    #[error("tax bracket {index} starts at {found}, expected {expected}")]
    BracketGap {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("tax bracket {index} is empty or inverted")]
    EmptyBracket { index: usize },

    #[error("tax bracket {index} is unbounded but is not the last bracket")]
    UnboundedBeforeLast { index: usize },

    #[error("last tax bracket must be unbounded, got upper bound {0}")]
    LastBracketBounded(Decimal),

    #[error("tax bracket {index} rate {rate} is lower than the previous bracket")]
    DecreasingRate { index: usize, rate: Decimal },

    #[error("{field} must be between 0 and 1, got {value}")]
    InvalidRate { field: &'static str, value: Decimal },

    #[error("{field} must be between 0 and 100, got {value}")]
    InvalidPercent { field: &'static str, value: Decimal },

    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
}

/// A payroll levy charged at a reduced rate up to `threshold` and at the
/// full rate above it, optionally on income capped at `cap`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoTierLevy {
    pub threshold: Decimal,
    pub reduced_rate: Decimal,
    pub full_rate: Decimal,
    /// Maximum insurable income; `None` means uncapped.
    #[serde(default)]
    pub cap: Option<Decimal>,
}

impl TwoTierLevy {
    /// Levy owed on `income`. Unrounded.
    pub fn apply(
        &self,
        income: Decimal,
    ) -> Decimal {
        let insurable = match self.cap {
            Some(cap) => income.min(cap),
            None => income,
        }
        .max(Decimal::ZERO);

        let reduced_part = insurable.min(self.threshold);
        let full_part = (insurable - self.threshold).max(Decimal::ZERO);

        reduced_part * self.reduced_rate + full_part * self.full_rate
    }

    fn validate(
        &self,
        name: &'static str,
    ) -> Result<(), SalaryRatesError> {
        check_rate(name, self.reduced_rate)?;
        check_rate(name, self.full_rate)?;
        check_non_negative(name, self.threshold)?;
        if let Some(cap) = self.cap {
            check_non_negative(name, cap)?;
        }
        Ok(())
    }
}

/// Every constant the salary calculator needs.
///
/// Values named `*_rate` are fractions, values named `*_percent` are
/// percentages, matching how the salary form presents them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRates {
    /// Monthly income tax schedule, ordered by `lower_bound`.
    pub brackets: Vec<TaxBracket>,

    /// Monthly tax reduction granted per credit point.
    pub credit_point_value: Decimal,

    /// Marginal rate assumed when converting the pension contribution into a
    /// taxable income reduction.
    pub pension_benefit_percent: Decimal,

    /// Employee contribution to the voluntary study fund, when opted in.
    pub voluntary_fund_percent: Decimal,

    /// Upper clamp for the pension contribution taken from the form.
    pub max_pension_percent: Decimal,

    pub national_insurance: TwoTierLevy,
    pub health_insurance: TwoTierLevy,
    pub employer_national_insurance: TwoTierLevy,

    pub employer_pension_percent: Decimal,
    pub employer_severance_percent: Decimal,
}

impl Default for SalaryRates {
    fn default() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(7010)), dec!(0.10)),
                TaxBracket::new(dec!(7010), Some(dec!(10060)), dec!(0.14)),
                TaxBracket::new(dec!(10060), Some(dec!(16150)), dec!(0.20)),
                TaxBracket::new(dec!(16150), Some(dec!(22440)), dec!(0.31)),
                TaxBracket::new(dec!(22440), Some(dec!(46690)), dec!(0.35)),
                TaxBracket::new(dec!(46690), Some(dec!(60130)), dec!(0.47)),
                TaxBracket::new(dec!(60130), None, dec!(0.50)),
            ],
            credit_point_value: dec!(242),
            pension_benefit_percent: dec!(35),
            voluntary_fund_percent: dec!(2.5),
            max_pension_percent: dec!(50),
            national_insurance: TwoTierLevy {
                threshold: dec!(7522),
                reduced_rate: dec!(0.0104),
                full_rate: dec!(0.07),
                cap: Some(dec!(50695)),
            },
            health_insurance: TwoTierLevy {
                threshold: dec!(7522),
                reduced_rate: dec!(0.0323),
                full_rate: dec!(0.0517),
                cap: None,
            },
            employer_national_insurance: TwoTierLevy {
                threshold: dec!(7522),
                reduced_rate: dec!(0.0451),
                full_rate: dec!(0.076),
                cap: Some(dec!(50695)),
            },
            employer_pension_percent: dec!(6.5),
            employer_severance_percent: dec!(8.33),
        }
    }
}

impl SalaryRates {
    /// Checks the bracket schedule and every rate.
    ///
    /// Brackets must start at 0, be contiguous, have non-decreasing rates and
    /// end with a single unbounded bracket.
    ///
    /// # Errors
    ///
    /// Returns the first [`SalaryRatesError`] found.
    pub fn validate(&self) -> Result<(), SalaryRatesError> {
        validate_brackets(&self.brackets)?;

        check_non_negative("credit_point_value", self.credit_point_value)?;
        check_percent("pension_benefit_percent", self.pension_benefit_percent)?;
        check_percent("voluntary_fund_percent", self.voluntary_fund_percent)?;
        check_percent("max_pension_percent", self.max_pension_percent)?;
        check_percent("employer_pension_percent", self.employer_pension_percent)?;
        check_percent(
            "employer_severance_percent",
            self.employer_severance_percent,
        )?;

        self.national_insurance.validate("national_insurance")?;
        self.health_insurance.validate("health_insurance")?;
        self.employer_national_insurance
            .validate("employer_national_insurance")?;

        Ok(())
    }
}

/// Validates an ordered bracket schedule on its own.
pub fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), SalaryRatesError> {
    let first = brackets.first().ok_or(SalaryRatesError::NoTaxBrackets)?;
    if first.lower_bound != Decimal::ZERO {
        return Err(SalaryRatesError::FirstBracketNotAtZero(first.lower_bound));
    }

    let last_index = brackets.len() - 1;
    for (index, bracket) in brackets.iter().enumerate() {
        check_rate("bracket rate", bracket.rate)?;

        match bracket.upper_bound {
            Some(upper) if upper <= bracket.lower_bound => {
                return Err(SalaryRatesError::EmptyBracket { index });
            }
            Some(upper) if index == last_index => {
                return Err(SalaryRatesError::LastBracketBounded(upper));
            }
            None if index != last_index => {
                return Err(SalaryRatesError::UnboundedBeforeLast { index });
            }
            _ => {}
        }

        if index > 0 {
            let previous = &brackets[index - 1];
            // Checked above: every bracket before the last is bounded.
            let expected = previous.upper_bound.unwrap_or(Decimal::MAX);
            if bracket.lower_bound != expected {
                return Err(SalaryRatesError::BracketGap {
                    index,
                    expected,
                    found: bracket.lower_bound,
                });
            }
            if bracket.rate < previous.rate {
                return Err(SalaryRatesError::DecreasingRate {
                    index,
                    rate: bracket.rate,
                });
            }
        }
    }

    Ok(())
}

fn check_rate(
    field: &'static str,
    value: Decimal,
) -> Result<(), SalaryRatesError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(SalaryRatesError::InvalidRate { field, value });
    }
    Ok(())
}

fn check_percent(
    field: &'static str,
    value: Decimal,
) -> Result<(), SalaryRatesError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(SalaryRatesError::InvalidPercent { field, value });
    }
    Ok(())
}

fn check_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), SalaryRatesError> {
    if value < Decimal::ZERO {
        return Err(SalaryRatesError::NegativeAmount { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn levy() -> TwoTierLevy {
        TwoTierLevy {
            threshold: dec!(1000),
            reduced_rate: dec!(0.01),
            full_rate: dec!(0.10),
            cap: Some(dec!(5000)),
        }
    }

    // =========================================================================
    // TwoTierLevy tests
    // =========================================================================

    #[test]
    fn levy_below_threshold_uses_reduced_rate() {
        assert_eq!(levy().apply(dec!(800)), dec!(8.00));
    }

    #[test]
    fn levy_above_threshold_splits_income() {
        // 1000 * 0.01 + 2000 * 0.10
        assert_eq!(levy().apply(dec!(3000)), dec!(210.00));
    }

    #[test]
    fn levy_stops_at_cap() {
        assert_eq!(levy().apply(dec!(9000)), levy().apply(dec!(5000)));
        assert_eq!(levy().apply(dec!(9000)), dec!(410.00));
    }

    #[test]
    fn levy_without_cap_keeps_growing() {
        let uncapped = TwoTierLevy { cap: None, ..levy() };

        assert_eq!(uncapped.apply(dec!(9000)), dec!(810.00));
    }

    #[test]
    fn levy_on_zero_or_negative_income_is_zero() {
        assert_eq!(levy().apply(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(levy().apply(dec!(-500)), Decimal::ZERO);
    }

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn default_rates_are_valid() {
        assert_eq!(SalaryRates::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_schedule() {
        let rates = SalaryRates {
            brackets: vec![],
            ..SalaryRates::default()
        };

        assert_eq!(rates.validate(), Err(SalaryRatesError::NoTaxBrackets));
    }

    #[test]
    fn validate_rejects_schedule_not_starting_at_zero() {
        let brackets = vec![TaxBracket::new(dec!(100), None, dec!(0.10))];

        assert_eq!(
            validate_brackets(&brackets),
            Err(SalaryRatesError::FirstBracketNotAtZero(dec!(100)))
        );
    }

    #[test]
    fn validate_rejects_gap_between_brackets() {
        let brackets = vec![
            TaxBracket::new(dec!(0), Some(dec!(1000)), dec!(0.10)),
            TaxBracket::new(dec!(1200), None, dec!(0.20)),
        ];

        assert_eq!(
            validate_brackets(&brackets),
            Err(SalaryRatesError::BracketGap {
                index: 1,
                expected: dec!(1000),
                found: dec!(1200),
            })
        );
    }

    #[test]
    fn validate_rejects_bounded_last_bracket() {
        let brackets = vec![
            TaxBracket::new(dec!(0), Some(dec!(1000)), dec!(0.10)),
            TaxBracket::new(dec!(1000), Some(dec!(2000)), dec!(0.20)),
        ];

        assert_eq!(
            validate_brackets(&brackets),
            Err(SalaryRatesError::LastBracketBounded(dec!(2000)))
        );
    }

    #[test]
    fn validate_rejects_unbounded_middle_bracket() {
        let brackets = vec![
            TaxBracket::new(dec!(0), None, dec!(0.10)),
            TaxBracket::new(dec!(1000), None, dec!(0.20)),
        ];

        assert_eq!(
            validate_brackets(&brackets),
            Err(SalaryRatesError::UnboundedBeforeLast { index: 0 })
        );
    }

    #[test]
    fn validate_rejects_regressive_rates() {
        let brackets = vec![
            TaxBracket::new(dec!(0), Some(dec!(1000)), dec!(0.20)),
            TaxBracket::new(dec!(1000), None, dec!(0.10)),
        ];

        assert_eq!(
            validate_brackets(&brackets),
            Err(SalaryRatesError::DecreasingRate {
                index: 1,
                rate: dec!(0.10),
            })
        );
    }

    #[test]
    fn validate_rejects_inverted_bracket() {
        let brackets = vec![
            TaxBracket::new(dec!(0), Some(dec!(0)), dec!(0.10)),
            TaxBracket::new(dec!(0), None, dec!(0.20)),
        ];

        assert_eq!(
            validate_brackets(&brackets),
            Err(SalaryRatesError::EmptyBracket { index: 0 })
        );
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let rates = SalaryRates {
            health_insurance: TwoTierLevy {
                full_rate: dec!(5.17),
                ..SalaryRates::default().health_insurance
            },
            ..SalaryRates::default()
        };

        assert_eq!(
            rates.validate(),
            Err(SalaryRatesError::InvalidRate {
                field: "health_insurance",
                value: dec!(5.17),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_credit_point_value() {
        let rates = SalaryRates {
            credit_point_value: dec!(-1),
            ..SalaryRates::default()
        };

        assert_eq!(
            rates.validate(),
            Err(SalaryRatesError::NegativeAmount {
                field: "credit_point_value",
                value: dec!(-1),
            })
        );
    }
}
