use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by [`ProviderTable::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderTableError {
    #[error("no transfer providers configured")]
    NoProviders,

    #[error("mid-market rate must be positive, got {0}")]
    InvalidMidRate(Decimal),

    #[error("provider '{provider}': {field} must be between 0 and 1, got {value}")]
    InvalidRate {
        provider: String,
        field: &'static str,
        value: Decimal,
    },

    #[error("provider '{provider}': minimum fee must be non-negative, got {value}")]
    NegativeMinimumFee { provider: String, value: Decimal },

    #[error("provider '{provider}': rating must be between 0 and 5, got {value}")]
    InvalidRating { provider: String, value: Decimal },
}

/// A money-transfer service and its pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferProvider {
    pub name: String,
    /// Fee as a fraction of the amount sent.
    pub fee_rate: Decimal,
    pub minimum_fee: Decimal,
    /// Spread over the mid-market rate, as a fraction.
    pub markup_rate: Decimal,
    pub speed: String,
    /// Average user rating out of 5.
    pub rating: Decimal,
    /// Empty when the provider has no referral link.
    #[serde(default)]
    pub referral_url: String,
}

impl TransferProvider {
    fn validate(&self) -> Result<(), ProviderTableError> {
        for (field, value) in [("fee_rate", self.fee_rate), ("markup_rate", self.markup_rate)] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(ProviderTableError::InvalidRate {
                    provider: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        if self.minimum_fee < Decimal::ZERO {
            return Err(ProviderTableError::NegativeMinimumFee {
                provider: self.name.clone(),
                value: self.minimum_fee,
            });
        }
        if self.rating < Decimal::ZERO || self.rating > Decimal::from(5) {
            return Err(ProviderTableError::InvalidRating {
                provider: self.name.clone(),
                value: self.rating,
            });
        }
        Ok(())
    }
}

/// Provider list in display order, plus the reference dollar/shekel rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderTable {
    /// Shekels received per dollar at the mid-market rate.
    pub mid_rate: Decimal,
    pub providers: Vec<TransferProvider>,
}

impl ProviderTable {
    /// # Errors
    ///
    /// Returns [`ProviderTableError`] if the table is empty, the mid rate is
    /// not positive, or any provider has an out-of-range value.
    pub fn validate(&self) -> Result<(), ProviderTableError> {
        if self.providers.is_empty() {
            return Err(ProviderTableError::NoProviders);
        }
        if self.mid_rate <= Decimal::ZERO {
            return Err(ProviderTableError::InvalidMidRate(self.mid_rate));
        }
        self.providers.iter().try_for_each(TransferProvider::validate)
    }

    /// Case-insensitive lookup by provider name.
    pub fn find(
        &self,
        name: &str,
    ) -> Option<&TransferProvider> {
        self.providers
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}

fn provider(
    name: &str,
    fee_rate: Decimal,
    minimum_fee: Decimal,
    markup_rate: Decimal,
    speed: &str,
    rating: Decimal,
    referral_url: &str,
) -> TransferProvider {
    TransferProvider {
        name: name.to_string(),
        fee_rate,
        minimum_fee,
        markup_rate,
        speed: speed.to_string(),
        rating,
        referral_url: referral_url.to_string(),
    }
}

impl Default for ProviderTable {
    fn default() -> Self {
        Self {
            mid_rate: dec!(3.65),
            providers: vec![
                provider(
                    "Wise",
                    dec!(0.0041),
                    dec!(1.00),
                    dec!(0),
                    "Same day",
                    dec!(4.8),
                    "https://wise.com/",
                ),
                provider(
                    "Revolut",
                    dec!(0),
                    dec!(0),
                    dec!(0.005),
                    "Instant to 1 day",
                    dec!(4.5),
                    "https://www.revolut.com/",
                ),
                provider(
                    "OFX",
                    dec!(0),
                    dec!(0),
                    dec!(0.012),
                    "1-2 business days",
                    dec!(4.3),
                    "https://www.ofx.com/",
                ),
                provider(
                    "Remitly",
                    dec!(0),
                    dec!(3.99),
                    dec!(0.015),
                    "Minutes to 3 days",
                    dec!(4.4),
                    "https://www.remitly.com/",
                ),
                provider(
                    "Western Union",
                    dec!(0.01),
                    dec!(5.00),
                    dec!(0.025),
                    "Minutes to 2 days",
                    dec!(3.9),
                    "https://www.westernunion.com/",
                ),
                provider(
                    "Bank Wire",
                    dec!(0.002),
                    dec!(25.00),
                    dec!(0.03),
                    "2-5 business days",
                    dec!(3.0),
                    "",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert_eq!(ProviderTable::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_table() {
        let table = ProviderTable {
            providers: vec![],
            ..ProviderTable::default()
        };

        assert_eq!(table.validate(), Err(ProviderTableError::NoProviders));
    }

    #[test]
    fn validate_rejects_zero_mid_rate() {
        let table = ProviderTable {
            mid_rate: Decimal::ZERO,
            ..ProviderTable::default()
        };

        assert_eq!(
            table.validate(),
            Err(ProviderTableError::InvalidMidRate(Decimal::ZERO))
        );
    }

    #[test]
    fn validate_rejects_markup_above_one() {
        let mut table = ProviderTable::default();
        table.providers[1].markup_rate = dec!(1.5);

        assert_eq!(
            table.validate(),
            Err(ProviderTableError::InvalidRate {
                provider: "Revolut".to_string(),
                field: "markup_rate",
                value: dec!(1.5),
            })
        );
    }

    #[test]
    fn validate_rejects_rating_above_five() {
        let mut table = ProviderTable::default();
        table.providers[0].rating = dec!(6);

        assert_eq!(
            table.validate(),
            Err(ProviderTableError::InvalidRating {
                provider: "Wise".to_string(),
                value: dec!(6),
            })
        );
    }

    #[test]
    fn find_ignores_case_and_whitespace() {
        let table = ProviderTable::default();

        assert_eq!(
            table.find(" western union ").map(|p| p.name.as_str()),
            Some("Western Union")
        );
        assert!(table.find("Moneygram").is_none());
    }
}
