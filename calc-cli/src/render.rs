//! Plain-text reports for the terminal.

use std::fmt;

use calc_core::{
    BudgetEstimate, Currency, DeductionResult, TransferComparison, format_currency,
};
use rust_decimal::Decimal;

fn ils(amount: Decimal) -> String {
    format_currency(amount, Currency::Ils)
}

/// Monthly salary breakdown.
pub struct SalaryReport<'a>(pub &'a DeductionResult);

impl fmt::Display for SalaryReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.0;
        writeln!(f, "Gross salary:       {}", ils(r.gross))?;
        writeln!(f, "Income tax:         {}", ils(r.income_tax))?;
        writeln!(f, "National insurance: {}", ils(r.national_insurance))?;
        writeln!(f, "Health insurance:   {}", ils(r.health_insurance))?;
        writeln!(f, "Pension:            {}", ils(r.pension_deduction))?;
        if !r.voluntary_fund_deduction.is_zero() {
            writeln!(f, "Study fund:         {}", ils(r.voluntary_fund_deduction))?;
        }
        writeln!(f, "Total deductions:   {}", ils(r.total_deductions))?;
        writeln!(f, "Net salary:         {}", ils(r.net_salary))?;
        writeln!(f, "Effective rate:     {}%", r.effective_rate)?;
        writeln!(f, "Employer cost:      {}", ils(r.employer_total_cost))?;
        writeln!(f, "Annual gross:       {}", ils(r.annual_gross))?;
        write!(f, "Annual net:         {}", ils(r.annual_net))
    }
}

/// Itemized equipment list with totals.
pub struct BudgetReport<'a>(pub &'a BudgetEstimate);

impl fmt::Display for BudgetReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let estimate = self.0;
        writeln!(
            f,
            "{} tier, {} rooms",
            estimate.tier.label(),
            estimate.room_count
        )?;

        let width = estimate
            .items
            .iter()
            .map(|item| item.name.chars().count())
            .max()
            .unwrap_or(0);

        for item in &estimate.items {
            writeln!(
                f,
                "  {:<width$}  {:>2} x {} = {}",
                item.name,
                item.quantity,
                ils(item.unit_price),
                ils(item.line_total()),
            )?;
        }

        write!(
            f,
            "Total: {} (~{})",
            ils(estimate.total),
            format_currency(estimate.total_usd, Currency::Usd)
        )
    }
}

/// Ranked provider quotes, best first.
pub struct TransferReport<'a>(pub &'a TransferComparison);

impl fmt::Display for TransferReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let comparison = self.0;
        writeln!(
            f,
            "Sending {}",
            format_currency(comparison.amount, Currency::Usd)
        )?;

        let width = comparison
            .quotes
            .iter()
            .map(|q| q.provider_name.chars().count())
            .max()
            .unwrap_or(0);

        for (rank, quote) in comparison.quotes.iter().enumerate() {
            writeln!(
                f,
                "{:>2}. {:<width$}  receives {}  fee {} USD  rate {}  cost {}  {}  {}",
                rank + 1,
                quote.provider_name,
                ils(quote.amount_received),
                quote.fee,
                quote.effective_rate,
                quote.total_cost,
                quote.rating_stars,
                quote.speed,
            )?;
        }

        match comparison.savings {
            Some(savings) => write!(f, "Best choice saves {} over the worst", ils(savings)),
            None => write!(f, "All providers deliver the same amount"),
        }
    }
}

#[cfg(test)]
mod tests {
    use calc_core::{AutomationTier, EquipmentItem, TransferQuote};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn plain(s: &str) -> String {
        s.replace(['\u{200f}', '\u{a0}'], " ")
    }

    // =========================================================================
    // SalaryReport tests
    // =========================================================================

    #[test]
    fn salary_report_lists_every_line() {
        let result = DeductionResult {
            gross: dec!(10000),
            income_tax: dec!(106),
            net_salary: dec!(8622),
            effective_rate: dec!(13.8),
            ..DeductionResult::default()
        };

        let text = plain(&SalaryReport(&result).to_string());

        assert!(text.contains("Gross salary:        10,000 ₪"), "{text}");
        assert!(text.contains("Net salary:          8,622 ₪"), "{text}");
        assert!(text.contains("Effective rate:     13.8%"), "{text}");
        assert!(!text.contains("Study fund"), "{text}");
        assert_eq!(text.lines().count(), 11);
    }

    #[test]
    fn salary_report_shows_study_fund_when_present() {
        let result = DeductionResult {
            voluntary_fund_deduction: dec!(750),
            ..DeductionResult::default()
        };

        assert!(SalaryReport(&result).to_string().contains("Study fund"));
    }

    // =========================================================================
    // BudgetReport tests
    // =========================================================================

    #[test]
    fn budget_report_lists_items_and_totals() {
        let estimate = BudgetEstimate {
            tier: AutomationTier::Basic,
            room_count: 3,
            items: vec![
                EquipmentItem::new("Smart Hub / Controller", 1, dec!(250)),
                EquipmentItem::new("Smart Lights (per room)", 3, dec!(120)),
            ],
            total: dec!(610),
            total_usd: dec!(167),
        };

        let text = plain(&BudgetReport(&estimate).to_string());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Basic tier, 3 rooms");
        assert!(lines[2].contains(" 3 x  120 ₪ =  360 ₪"), "{text}");
        assert_eq!(lines[3], "Total:  610 ₪ (~ 167 $)");
    }

    // =========================================================================
    // TransferReport tests
    // =========================================================================

    fn quote(
        name: &str,
        received: Decimal,
    ) -> TransferQuote {
        TransferQuote {
            provider_name: name.to_string(),
            fee: dec!(4.10),
            effective_rate: dec!(3.6500),
            amount_received: received,
            total_cost: dec!(4.10),
            speed: "Same day".to_string(),
            rating: dec!(4.8),
            rating_stars: "★★★★★".to_string(),
            referral_url: String::new(),
        }
    }

    #[test]
    fn transfer_report_ranks_and_shows_savings() {
        let comparison = TransferComparison {
            amount: dec!(1000),
            quotes: vec![quote("Wise", dec!(3635.04)), quote("Bank Wire", dec!(3451.99))],
            savings: Some(dec!(183.05)),
        };

        let text = plain(&TransferReport(&comparison).to_string());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Sending  1,000 $");
        assert!(lines[1].starts_with(" 1. Wise       receives  3,635 ₪"), "{text}");
        assert!(lines[1].contains("fee 4.10 USD  rate 3.6500"), "{text}");
        assert!(lines[2].starts_with(" 2. Bank Wire"), "{text}");
        assert_eq!(lines[3], "Best choice saves  183 ₪ over the worst");
    }

    #[test]
    fn transfer_report_without_savings() {
        let comparison = TransferComparison {
            amount: dec!(0),
            quotes: vec![quote("Wise", dec!(0))],
            savings: None,
        };

        let text = TransferReport(&comparison).to_string();

        assert!(text.ends_with("All providers deliver the same amount"));
    }
}
