use serde::{Deserialize, Serialize};

/// How a value price adjusts the base price of an order line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceType {
    #[default]
    Fixed,
    Percent,
}

/// Price attached to a customer option value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerOptionValuePrice {
    pub price_type: PriceType,

    /// Absolute surcharge in minor units, used for `Fixed`
    #[serde(default)]
    pub amount: i64,

    /// Fraction of the base price (0.1 = 10%), used for `Percent`
    #[serde(default)]
    pub percent: f64,

    /// Channel this price is bound to; `None` is the default price
    #[serde(default)]
    pub channel_code: Option<String>,
}

impl CustomerOptionValuePrice {
    pub fn fixed(amount: i64) -> Self {
        Self {
            price_type: PriceType::Fixed,
            amount,
            percent: 0.0,
            channel_code: None,
        }
    }

    pub fn percent(percent: f64) -> Self {
        Self {
            price_type: PriceType::Percent,
            amount: 0,
            percent,
            channel_code: None,
        }
    }

    /// Bind the price to a single channel
    pub fn for_channel(mut self, channel_code: impl Into<String>) -> Self {
        self.channel_code = Some(channel_code.into());
        self
    }

    pub fn is_default(&self) -> bool {
        self.channel_code.is_none()
    }
}

impl Default for CustomerOptionValuePrice {
    fn default() -> Self {
        Self::fixed(0)
    }
}
