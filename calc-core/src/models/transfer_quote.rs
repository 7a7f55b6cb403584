use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What one provider charges for a transfer and what the recipient gets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferQuote {
    pub provider_name: String,
    /// Transfer fee in the source currency.
    pub fee: Decimal,
    /// Exchange rate after the provider's markup.
    pub effective_rate: Decimal,
    /// Amount delivered, in the destination currency.
    pub amount_received: Decimal,
    pub total_cost: Decimal,
    pub speed: String,
    pub rating: Decimal,
    pub rating_stars: String,
    pub referral_url: String,
}

/// Provider quotes for one amount, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferComparison {
    pub amount: Decimal,
    pub quotes: Vec<TransferQuote>,
    /// Best minus worst `amount_received`; `None` unless strictly positive.
    pub savings: Option<Decimal>,
}

impl TransferComparison {
    pub fn best(&self) -> Option<&TransferQuote> {
        self.quotes.first()
    }

    pub fn worst(&self) -> Option<&TransferQuote> {
        self.quotes.last()
    }
}
