//! Form input parsing.
//!
//! Form fields arrive as raw strings. Every field has a documented default
//! that is used when the value is missing, unparsable or out of range, so
//! parsing never fails.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

use crate::AutomationTier;
use crate::calculations::budget::DEFAULT_ROOM_COUNT;
use crate::calculations::transfer::DEFAULT_TRANSFER_AMOUNT;
use crate::calculations::{BudgetInput, SalaryInput, TransferInput};

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`], falling back to `default`.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Empty input
/// silently yields the default; non-empty input that does not parse logs a
/// warning first.
pub fn parse_decimal_or(
    field: &str,
    s: &str,
    default: Decimal,
) -> Decimal {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return default;
    }
    normalized.parse().unwrap_or_else(|e| {
        warn!(field, input = %s, %default, "invalid number, using default: {}", e);
        default
    })
}

/// Parses a leading whole number the way browsers read `<input type=number>`
/// room counts: `"4"` and `"4.7"` both give 4.
///
/// Returns `None` for empty, unparsable, negative or oversized input.
pub fn parse_count(s: &str) -> Option<u32> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return None;
    }
    normalized
        .parse::<Decimal>()
        .ok()
        .and_then(|value| value.trunc().to_u32())
}

/// Raw salary form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SalaryForm {
    pub gross_income: String,
    pub credit_points: String,
    pub pension_percent: String,
    pub voluntary_fund: bool,
}

impl SalaryForm {
    /// Gross defaults to 0, credit points to 2.25 and pension to 6.5%.
    /// A negative gross is clamped to 0.
    pub fn to_input(&self) -> SalaryInput {
        let defaults = SalaryInput::default();

        let gross = parse_decimal_or("gross_income", &self.gross_income, Decimal::ZERO);
        let gross_monthly_income = if gross < Decimal::ZERO {
            warn!(gross = %gross, "negative gross income clamped to 0");
            Decimal::ZERO
        } else {
            gross
        };

        SalaryInput {
            gross_monthly_income,
            credit_points: parse_decimal_or(
                "credit_points",
                &self.credit_points,
                defaults.credit_points,
            ),
            pension_percent: parse_decimal_or(
                "pension_percent",
                &self.pension_percent,
                defaults.pension_percent,
            ),
            includes_voluntary_fund: self.voluntary_fund,
        }
    }
}

/// Raw budget form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BudgetForm {
    pub room_count: String,
    pub tier: String,
}

impl BudgetForm {
    /// Rooms default to 3 when missing, unparsable or not positive; unknown
    /// tiers fall back to basic.
    pub fn to_input(&self) -> BudgetInput {
        let room_count = match parse_count(&self.room_count) {
            Some(rooms) if rooms > 0 => rooms,
            _ => {
                if !self.room_count.trim().is_empty() {
                    warn!(input = %self.room_count, "invalid room count, using {DEFAULT_ROOM_COUNT}");
                }
                DEFAULT_ROOM_COUNT
            }
        };

        let tier = AutomationTier::parse(&self.tier).unwrap_or_else(|| {
            if !self.tier.trim().is_empty() {
                warn!(input = %self.tier, "unknown automation tier, using basic");
            }
            AutomationTier::Basic
        });

        BudgetInput { room_count, tier }
    }
}

/// Raw transfer form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransferForm {
    pub amount: String,
}

impl TransferForm {
    /// The amount defaults to 1000 when missing, unparsable or not positive.
    pub fn to_input(&self) -> TransferInput {
        let amount = parse_decimal_or("amount", &self.amount, DEFAULT_TRANSFER_AMOUNT);
        if amount <= Decimal::ZERO {
            warn!(amount = %amount, "non-positive transfer amount, using default");
            return TransferInput::default();
        }
        TransferInput { amount }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_decimal_or tests
    // =========================================================================

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal_or("x", "1,234.56", Decimal::ZERO), dec!(1234.56));
        assert_eq!(parse_decimal_or("x", "1,234,567.89", Decimal::ZERO), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_trims_whitespace() {
        assert_eq!(parse_decimal_or("x", "  123.45  ", Decimal::ZERO), dec!(123.45));
    }

    #[test]
    fn parse_decimal_empty_uses_default() {
        assert_eq!(parse_decimal_or("x", "", dec!(2.25)), dec!(2.25));
        assert_eq!(parse_decimal_or("x", "   ", dec!(2.25)), dec!(2.25));
    }

    #[test]
    fn parse_decimal_invalid_uses_default() {
        assert_eq!(parse_decimal_or("x", "abc", dec!(6.5)), dec!(6.5));
    }

    // =========================================================================
    // parse_count tests
    // =========================================================================

    #[test]
    fn parse_count_truncates_fractions() {
        assert_eq!(parse_count("4"), Some(4));
        assert_eq!(parse_count("4.7"), Some(4));
    }

    #[test]
    fn parse_count_rejects_bad_input() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("many"), None);
        assert_eq!(parse_count("-2"), None);
    }

    // =========================================================================
    // form tests
    // =========================================================================

    #[test]
    fn salary_form_defaults() {
        let input = SalaryForm::default().to_input();

        assert_eq!(input, SalaryInput::default());
        assert_eq!(input.pension_percent, dec!(6.5));
    }

    #[test]
    fn salary_form_parses_values() {
        let form = SalaryForm {
            gross_income: "15,000".to_string(),
            credit_points: "2.75".to_string(),
            pension_percent: "7".to_string(),
            voluntary_fund: true,
        };

        assert_eq!(
            form.to_input(),
            SalaryInput {
                gross_monthly_income: dec!(15000),
                credit_points: dec!(2.75),
                pension_percent: dec!(7),
                includes_voluntary_fund: true,
            }
        );
    }

    #[test]
    fn salary_form_clamps_negative_gross() {
        let form = SalaryForm {
            gross_income: "-100".to_string(),
            ..SalaryForm::default()
        };

        assert_eq!(form.to_input().gross_monthly_income, Decimal::ZERO);
    }

    #[test]
    fn salary_form_unparsable_gross_is_zero() {
        let form = SalaryForm {
            gross_income: "lots".to_string(),
            ..SalaryForm::default()
        };

        assert_eq!(form.to_input().gross_monthly_income, Decimal::ZERO);
    }

    #[test]
    fn budget_form_defaults() {
        assert_eq!(BudgetForm::default().to_input(), BudgetInput::default());
    }

    #[test]
    fn budget_form_replaces_zero_and_negative_rooms() {
        for rooms in ["0", "-3", "abc"] {
            let form = BudgetForm {
                room_count: rooms.to_string(),
                tier: "advanced".to_string(),
            };

            assert_eq!(
                form.to_input(),
                BudgetInput {
                    room_count: DEFAULT_ROOM_COUNT,
                    tier: AutomationTier::Advanced,
                }
            );
        }
    }

    #[test]
    fn budget_form_unknown_tier_is_basic() {
        let form = BudgetForm {
            room_count: "6".to_string(),
            tier: "luxury".to_string(),
        };

        assert_eq!(
            form.to_input(),
            BudgetInput {
                room_count: 6,
                tier: AutomationTier::Basic,
            }
        );
    }

    #[test]
    fn transfer_form_defaults_and_fallbacks() {
        for amount in ["", "abc", "0", "-50"] {
            let form = TransferForm {
                amount: amount.to_string(),
            };

            assert_eq!(form.to_input(), TransferInput::default());
        }
    }

    #[test]
    fn transfer_form_parses_amount() {
        let form = TransferForm {
            amount: "2,500".to_string(),
        };

        assert_eq!(form.to_input().amount, dec!(2500));
    }
}
