//! Price labels.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Currency assumed when the page does not name one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Label used for zero-priced titles.
pub const FREE_TO_PLAY: &str = "Free To Play";

/// Price of a title as shown on its storefront page.
///
/// Serializes as a single string: `"24.50 EUR"`, `"Free To Play"`, or the
/// raw amount text followed by the currency when it was not numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum Price {
    /// Zero-priced title.
    FreeToPlay,
    /// Numeric amount in major units.
    Amount {
        /// Amount, e.g. `24.5`.
        amount: f64,
        /// ISO currency code.
        currency: String,
    },
    /// Amount text that could not be read as a number.
    Unparsed {
        /// Normalized amount text.
        text: String,
        /// ISO currency code.
        currency: String,
    },
}

impl Price {
    /// Creates a price from a major-unit amount; zero becomes [`Price::FreeToPlay`].
    pub fn amount(amount: f64, currency: impl Into<String>) -> Self {
        if amount == 0.0 {
            Self::FreeToPlay
        } else {
            Self::Amount {
                amount,
                currency: currency.into(),
            }
        }
    }

    /// Creates a price from minor units (cents); zero becomes [`Price::FreeToPlay`].
    #[allow(clippy::cast_precision_loss)]
    pub fn from_minor_units(units: u64, currency: impl Into<String>) -> Self {
        Self::amount(units as f64 / 100.0, currency)
    }

    /// Returns true for zero-priced titles.
    pub fn is_free(&self) -> bool {
        matches!(self, Self::FreeToPlay)
    }

    /// Returns the currency code, if the price carries one.
    pub fn currency(&self) -> Option<&str> {
        match self {
            Self::FreeToPlay => None,
            Self::Amount { currency, .. } | Self::Unparsed { currency, .. } => Some(currency),
        }
    }

    /// Reads a label previously produced by `Display`.
    pub fn from_label(label: &str) -> Self {
        if label == FREE_TO_PLAY {
            return Self::FreeToPlay;
        }

        let Some((text, currency)) = label.rsplit_once(' ') else {
            return Self::Unparsed {
                text: label.to_string(),
                currency: String::new(),
            };
        };

        match text.parse::<f64>() {
            Ok(amount) if amount.is_finite() => Self::amount(amount, currency),
            _ => Self::Unparsed {
                text: text.to_string(),
                currency: currency.to_string(),
            },
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FreeToPlay => f.write_str(FREE_TO_PLAY),
            Self::Amount { amount, currency } => write!(f, "{amount:.2} {currency}"),
            Self::Unparsed { text, currency } if currency.is_empty() => f.write_str(text),
            Self::Unparsed { text, currency } => write!(f, "{text} {currency}"),
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}
