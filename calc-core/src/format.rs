//! Currency display in the Hebrew (Israel) locale style.
//!
//! Amounts are rounded to whole units and rendered right-to-left friendly:
//! a leading right-to-left mark, comma-grouped digits, a no-break space and
//! the currency symbol. Negative amounts carry a left-to-right mark before the
//! minus sign so it stays attached to the digits.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_whole;

const RLM: char = '\u{200f}';
const NBSP: char = '\u{a0}';
const MINUS: &str = "\u{200e}-";

/// Currencies the calculators display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Israeli new shekel.
    Ils,
    /// US dollar.
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ils => "ILS",
            Self::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Ils => "₪",
            Self::Usd => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Formats `amount` with zero fractional digits.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::{Currency, format_currency};
///
/// assert_eq!(format_currency(dec!(1234), Currency::Ils), "\u{200f}1,234\u{a0}₪");
/// assert_eq!(format_currency(dec!(0), Currency::Usd), "\u{200f}0\u{a0}$");
/// assert_eq!(format_currency(dec!(-50), Currency::Ils), "\u{200f}\u{200e}-50\u{a0}₪");
/// ```
pub fn format_currency(
    amount: Decimal,
    currency: Currency,
) -> String {
    let rounded = round_whole(amount);
    let sign = if rounded < Decimal::ZERO { MINUS } else { "" };
    let digits = group_thousands(&rounded.abs().trunc().to_string());

    format!("{RLM}{sign}{digits}{NBSP}{}", currency.symbol())
}

/// Inserts a comma between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
