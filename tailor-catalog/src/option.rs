use serde::{Deserialize, Serialize};

use crate::pricing::CustomerOptionValuePrice;

/// Kind of input a customer option collects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerOptionType {
    Text,
    Select,
    MultiSelect,
    Date,
    DateTime,
    Number,
    Boolean,
    File,
}

impl CustomerOptionType {
    /// Select types reference a value object; everything else is a plain scalar
    pub fn is_select(&self) -> bool {
        matches!(self, CustomerOptionType::Select | CustomerOptionType::MultiSelect)
    }

    pub fn is_multi_select(&self) -> bool {
        *self == CustomerOptionType::MultiSelect
    }
}

/// A choosable value of a select option (e.g. "anti-glare" for a lens option)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerOptionValue {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub prices: Vec<CustomerOptionValuePrice>,
}

impl CustomerOptionValue {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            prices: Vec::new(),
        }
    }

    pub fn with_price(mut self, price: CustomerOptionValuePrice) -> Self {
        self.prices.push(price);
        self
    }

    /// Price for the channel, falling back to the channel-less default.
    /// `None` means the value is free.
    pub fn price_for_channel(&self, channel_code: &str) -> Option<&CustomerOptionValuePrice> {
        self.prices
            .iter()
            .find(|p| p.channel_code.as_deref() == Some(channel_code))
            .or_else(|| self.prices.iter().find(|p| p.is_default()))
    }
}

/// An option a customer fills in when ordering a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerOption {
    pub code: String,
    pub name: String,
    pub option_type: CustomerOptionType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub values: Vec<CustomerOptionValue>,
}

impl CustomerOption {
    pub fn new(code: impl Into<String>, name: impl Into<String>, option_type: CustomerOptionType) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            option_type,
            required: false,
            values: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: CustomerOptionValue) -> Self {
        self.values.push(value);
        self
    }

    pub fn value(&self, code: &str) -> Option<&CustomerOptionValue> {
        self.values.iter().find(|v| v.code == code)
    }
}
