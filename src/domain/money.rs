use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter;
use std::ops::Sub;
use std::sync::LazyLock;
use thiserror::Error;

/// Prefix used for every rendered amount.
pub const CURRENCY_PREFIX: &str = "S/ ";

/// Number of decimal places carried by every `Money` value.
pub const SCALE: u32 = 2;

// sign, whole part, fraction; `5.` and `.5` are both numbers, `.` is not
static DECIMAL_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?$").expect("decimal grammar must compile")
});

/// Integer digits of the largest amount [`Money`] can hold.
const MAX_WHOLE_DIGITS: usize = 27;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMoneyError {
    #[error("not a decimal number")]
    NotANumber,

    #[error("amount is beyond {}", Money::max())]
    OutOfRange { negative: bool },
}

/// Fixed-point currency amount with exactly two decimal places.
///
/// Every constructor rounds half away from zero to [`SCALE`] places, so two
/// `Money` values can be compared and subtracted without drift. Values are
/// bounded by [`Money::max`], the largest decimal that still carries cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub fn zero() -> Self {
        Self::from_decimal(Decimal::ZERO)
    }

    /// `792281625142643375935439503.35`
    pub fn max() -> Self {
        Self(Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, SCALE))
    }

    /// Rounds to cents; values past [`Money::max`] saturate.
    pub fn from_decimal(value: Decimal) -> Self {
        let limit = Self::max().0;
        let mut rounded = value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded > limit {
            return Self(limit);
        }
        if rounded < -limit {
            return Self(-limit);
        }
        rounded.rescale(SCALE);
        Self(rounded)
    }

    pub fn from_cents(cents: i64) -> Self {
        Self::from_decimal(Decimal::new(cents, SCALE))
    }

    /// Parses user-entered text: trims it, treats `,` as the decimal point and
    /// reads an optionally signed decimal number, rounded to cents.
    ///
    /// Well-formed numbers too large for [`Money`] yield `OutOfRange` so callers
    /// can tell them apart from text that is not a number at all.
    pub fn parse(text: &str) -> Result<Self, ParseMoneyError> {
        let normalized = text.trim().replace(',', ".");
        let caps = DECIMAL_TEXT
            .captures(&normalized)
            .ok_or(ParseMoneyError::NotANumber)?;

        let negative = &caps[1] == "-";
        let whole = caps.get(2).map_or("", |m| m.as_str());
        let fraction = caps.get(3).map_or("", |m| m.as_str());
        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseMoneyError::NotANumber);
        }

        let out_of_range = ParseMoneyError::OutOfRange { negative };
        let whole = whole.trim_start_matches('0');
        if whole.len() > MAX_WHOLE_DIGITS {
            return Err(out_of_range);
        }

        // the third fraction digit alone decides the rounding of the cents
        let fraction_digits = fraction.bytes().chain(iter::repeat(b'0')).take(3);
        let thousandths = whole
            .bytes()
            .chain(fraction_digits)
            .fold(0i128, |acc, digit| acc * 10 + i128::from(digit - b'0'));
        let cents = (thousandths + 5) / 10;

        let magnitude =
            Decimal::try_from_i128_with_scale(cents, SCALE).map_err(|_| out_of_range)?;
        if negative && !magnitude.is_zero() {
            Ok(Self(-magnitude))
        } else {
            Ok(Self(magnitude))
        }
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Plain `1234.50` rendering, suitable for writing back into a numeric field.
    pub fn to_plain_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Self::from_decimal(self.0 - rhs.0)
    }
}

/// Renders `S/ 1,234.50`: fixed prefix, `,` between thousands, `.` before the cents.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = self.0.abs().to_string();
        let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}{}.{}", CURRENCY_PREFIX, sign, group_thousands(whole), fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
