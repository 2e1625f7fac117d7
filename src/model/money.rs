use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ModelError;

/// Returns the fixed directed exchange rate from `from` to `to`.
///
/// Any code converts to itself at `1.0`. Pairs outside the table return `None`.
pub fn exchange_rate(from: &str, to: &str) -> Option<f64> {
    match (from, to) {
        ("USD", "GBP") => Some(0.5),
        ("GBP", "USD") => Some(2.0),
        ("USD", "EUR") => Some(1.5),
        ("EUR", "USD") => Some(1.0 / 1.5),
        ("USD", "CAN") => Some(1.25),
        ("CAN", "USD") => Some(1.0 / 1.25),
        (source, target) if source == target => Some(1.0),
        _ => None,
    }
}

/// An immutable amount of money in a single currency.
///
/// Every operation returns a new value. A conversion with no defined rate yields the
/// sentinel returned by [`Money::unconvertible`] rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: String,
}

impl Money {
    /// Creates a new Money value.
    ///
    /// # Arguments
    /// * `amount` - Whole units of the currency (may be negative)
    /// * `currency` - Currency code, e.g. `"USD"`
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// The `Money(0, "")` sentinel returned for conversions with no defined rate.
    pub fn unconvertible() -> Self {
        Self::new(0, "")
    }

    pub fn is_unconvertible(&self) -> bool {
        self.amount == 0 && self.currency.is_empty()
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Converts into `target`, rounding half away from zero to whole units.
    ///
    /// # Errors
    /// [`ModelError::UnknownRate`] when the pair is not in the rate table.
    pub fn try_convert(&self, target: &str) -> Result<Money, ModelError> {
        let rate = exchange_rate(&self.currency, target).ok_or_else(|| ModelError::UnknownRate {
            from: self.currency.clone(),
            to: target.to_string(),
        })?;
        let amount = (self.amount as f64 * rate).round() as i64;
        debug!(from = %self.currency, to = %target, rate, amount, "Converted");
        Ok(Money::new(amount, target))
    }

    /// Converts into `target`, falling back to [`Money::unconvertible`] when no rate exists.
    pub fn convert(&self, target: &str) -> Money {
        self.try_convert(target).unwrap_or_else(|err| {
            warn!(error = %err, "Conversion has no rate, returning sentinel");
            Money::unconvertible()
        })
    }

    /// Adds `other`. Mixed currencies convert `self` first and produce `other`'s currency.
    pub fn add(&self, other: &Money) -> Money {
        if self.currency == other.currency {
            return Money::new(self.amount + other.amount, self.currency.clone());
        }
        let converted = self.convert(&other.currency);
        Money::new(converted.amount + other.amount, other.currency.clone())
    }

    /// Subtracts `other` when the currencies match.
    ///
    /// With mixed currencies `self` is converted into `other`'s currency and `other` is
    /// **added** to it, so the result equals [`Money::add`]. Callers rely on that result.
    pub fn subtract(&self, other: &Money) -> Money {
        if self.currency == other.currency {
            return Money::new(self.amount - other.amount, self.currency.clone());
        }
        let converted = self.convert(&other.currency);
        Money::new(converted.amount + other.amount, other.currency.clone())
    }
}
