use serde::{Deserialize, Serialize};
use uuid::Uuid;
use tailor_catalog::{CustomerOptionType, PriceType};

/// Reference to the catalog value a selection was made from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionValueRef {
    pub code: String,
    pub name: String,
}

/// A customer's selection for one option, owned by a single order item.
///
/// Option name, type and pricing are copied from the catalog when the
/// selection is made so later catalog edits do not re-price placed orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemOption {
    pub id: Uuid,
    pub customer_option_code: String,
    pub customer_option_name: String,
    pub customer_option_type: CustomerOptionType,
    /// `None` for free-form input (text, dates, files...), which is never priced
    pub customer_option_value: Option<OptionValueRef>,
    pub scalar_value: String,
    pub price_type: PriceType,
    pub fixed_price: i64,
    pub percent: f64,
}

impl OrderItemOption {
    /// Unrounded surcharge this selection adds to `base_price`
    pub fn price_adjustment(&self, base_price: i64, quantity: u32) -> f64 {
        if self.customer_option_value.is_none() {
            return 0.0;
        }

        match self.price_type {
            PriceType::Percent => base_price as f64 * self.percent,
            PriceType::Fixed => self.fixed_price.saturating_mul(i64::from(quantity)) as f64,
        }
    }

    pub fn is_multi_select(&self) -> bool {
        self.customer_option_type.is_multi_select()
    }
}
