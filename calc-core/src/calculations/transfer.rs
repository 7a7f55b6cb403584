//! Money-transfer comparison across the configured providers.
//!
//! For an amount sent in dollars, each provider is quoted as:
//!
//! | Figure          | Formula |
//! |-----------------|---------|
//! | fee             | max(minimum fee, amount × fee rate) |
//! | effective rate  | mid rate × (1 − markup) |
//! | amount received | (amount − fee) × effective rate, minimum 0 |
//! | total cost      | fee + amount × markup × mid rate |
//!
//! Quotes are ordered by amount received, best first. The sort is stable so
//! providers that deliver the same amount keep their table order.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::ProviderTable;
//! use calc_core::calculations::{TransferComparator, TransferInput};
//!
//! let providers = ProviderTable::default();
//! let comparison = TransferComparator::new(&providers).calculate(&TransferInput {
//!     amount: dec!(1000),
//! });
//!
//! assert_eq!(comparison.quotes[0].provider_name, "Wise");
//! assert_eq!(comparison.quotes[0].amount_received, dec!(3635.04));
//! assert_eq!(comparison.savings, Some(dec!(183.05)));
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::common::{round_dp, round_half_up, round_whole};
use crate::{ProviderTable, TransferComparison, TransferProvider, TransferQuote};

/// Amount used when the form value is missing or not positive.
pub const DEFAULT_TRANSFER_AMOUNT: Decimal = dec!(1000);

/// Largest amount the comparator quotes; larger values are clamped.
pub const MAX_TRANSFER_AMOUNT: Decimal = dec!(1000000000);

const MAX_STARS: usize = 5;

/// Values collected from the transfer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInput {
    /// Amount sent, in dollars.
    pub amount: Decimal,
}

impl Default for TransferInput {
    fn default() -> Self {
        Self {
            amount: DEFAULT_TRANSFER_AMOUNT,
        }
    }
}

/// Quotes every provider in a [`ProviderTable`] for one amount.
#[derive(Debug, Clone)]
pub struct TransferComparator<'a> {
    table: &'a ProviderTable,
}

impl<'a> TransferComparator<'a> {
    pub fn new(table: &'a ProviderTable) -> Self {
        Self { table }
    }

    /// Quotes and ranks all providers. The amount is clamped into
    /// `[0, MAX_TRANSFER_AMOUNT]`.
    pub fn calculate(
        &self,
        input: &TransferInput,
    ) -> TransferComparison {
        let amount = if input.amount < Decimal::ZERO {
            warn!(amount = %input.amount, "negative transfer amount clamped to 0");
            Decimal::ZERO
        } else if input.amount > MAX_TRANSFER_AMOUNT {
            warn!(amount = %input.amount, "transfer amount clamped to {MAX_TRANSFER_AMOUNT}");
            MAX_TRANSFER_AMOUNT
        } else {
            input.amount
        };

        let mut quotes: Vec<TransferQuote> = self
            .table
            .providers
            .iter()
            .map(|provider| self.quote(provider, amount))
            .collect();

        // `sort_by` is stable: equal amounts keep table order.
        quotes.sort_by(|a, b| b.amount_received.cmp(&a.amount_received));

        let savings = self.savings(&quotes);

        debug!(
            amount = %amount,
            providers = quotes.len(),
            best = quotes.first().map(|q| q.provider_name.as_str()).unwrap_or("-"),
            "transfer comparison calculated"
        );

        TransferComparison {
            amount,
            quotes,
            savings,
        }
    }

    fn quote(
        &self,
        provider: &TransferProvider,
        amount: Decimal,
    ) -> TransferQuote {
        let mid_rate = self.table.mid_rate;

        let fee = provider.minimum_fee.max(amount * provider.fee_rate);
        let effective_rate = mid_rate * (Decimal::ONE - provider.markup_rate);
        let amount_received = ((amount - fee) * effective_rate).max(Decimal::ZERO);
        let total_cost = fee + amount * provider.markup_rate * mid_rate;

        TransferQuote {
            provider_name: provider.name.clone(),
            fee: round_half_up(fee),
            effective_rate: round_dp(effective_rate, 4),
            amount_received: round_half_up(amount_received),
            total_cost: round_half_up(total_cost),
            speed: provider.speed.clone(),
            rating: provider.rating,
            rating_stars: rating_stars(provider.rating),
            referral_url: provider.referral_url.clone(),
        }
    }

    fn savings(
        &self,
        quotes: &[TransferQuote],
    ) -> Option<Decimal> {
        let best = quotes.first()?;
        let worst = quotes.last()?;
        let difference = best.amount_received - worst.amount_received;

        (difference > Decimal::ZERO).then_some(difference)
    }
}

/// Renders a 0–5 rating as filled and empty stars, rounded to the nearest star.
pub fn rating_stars(rating: Decimal) -> String {
    let filled = round_whole(rating.max(Decimal::ZERO))
        .to_usize()
        .unwrap_or(0)
        .min(MAX_STARS);

    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_STARS - filled))
}
