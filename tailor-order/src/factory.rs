use std::collections::BTreeMap;

use uuid::Uuid;
use tailor_catalog::{CustomerOption, CustomerOptionValuePrice, Product};
use tailor_core::StoreConfig;

use crate::option::{OptionValueRef, OrderItemOption};

/// Builds order item selections from catalog options, snapshotting the
/// value price of the store's channel.
pub struct OrderItemOptionFactory {
    channel_code: String,
}

impl OrderItemOptionFactory {
    pub fn new(channel_code: impl Into<String>) -> Self {
        Self {
            channel_code: channel_code.into(),
        }
    }

    pub fn for_store(store: &StoreConfig) -> Self {
        Self::new(store.channel_code.clone())
    }

    /// Selection of a value of a select or multi-select option
    pub fn create_for_value(
        &self,
        option: &CustomerOption,
        value_code: &str,
    ) -> Result<OrderItemOption, ConfigurationError> {
        if !option.option_type.is_select() {
            return Err(ConfigurationError::ScalarExpected(option.code.clone()));
        }

        let value = option.value(value_code).ok_or_else(|| ConfigurationError::UnknownValue {
            option: option.code.clone(),
            value: value_code.to_string(),
        })?;

        let price = value
            .price_for_channel(&self.channel_code)
            .cloned()
            .unwrap_or_default();

        Ok(OrderItemOption {
            id: Uuid::new_v4(),
            customer_option_code: option.code.clone(),
            customer_option_name: option.name.clone(),
            customer_option_type: option.option_type,
            customer_option_value: Some(OptionValueRef {
                code: value.code.clone(),
                name: value.name.clone(),
            }),
            scalar_value: value.code.clone(),
            price_type: price.price_type,
            fixed_price: price.amount,
            percent: price.percent,
        })
    }

    /// Free-form selection (text, number, date, ...); never priced
    pub fn create_for_scalar(
        &self,
        option: &CustomerOption,
        scalar: impl Into<String>,
    ) -> Result<OrderItemOption, ConfigurationError> {
        if option.option_type.is_select() {
            return Err(ConfigurationError::ValueExpected(option.code.clone()));
        }

        let free = CustomerOptionValuePrice::default();
        Ok(OrderItemOption {
            id: Uuid::new_v4(),
            customer_option_code: option.code.clone(),
            customer_option_name: option.name.clone(),
            customer_option_type: option.option_type,
            customer_option_value: None,
            scalar_value: scalar.into(),
            price_type: free.price_type,
            fixed_price: free.amount,
            percent: free.percent,
        })
    }

    /// Build a product's whole configuration from submitted input keyed by option code.
    ///
    /// Selections follow the product's option order.
    pub fn create_from_input(
        &self,
        product: &Product,
        input: &BTreeMap<String, Vec<String>>,
    ) -> Result<Vec<OrderItemOption>, ConfigurationError> {
        if let Some(code) = input.keys().find(|code| product.customer_option(code).is_none()) {
            tracing::warn!(product = %product.code, option = %code, "Rejected unknown customer option");
            return Err(ConfigurationError::UnknownOption(code.clone()));
        }

        let mut configuration = Vec::new();
        for option in &product.customer_options {
            let entries = input.get(&option.code).map(Vec::as_slice).unwrap_or_default();

            if entries.is_empty() {
                if option.required {
                    tracing::warn!(product = %product.code, option = %option.code, "Required customer option missing");
                    return Err(ConfigurationError::MissingRequired(option.code.clone()));
                }
                continue;
            }

            if entries.len() > 1 && !option.option_type.is_multi_select() {
                return Err(ConfigurationError::TooManyInputs {
                    option: option.code.clone(),
                    count: entries.len(),
                });
            }

            for entry in entries {
                let selection = if option.option_type.is_select() {
                    self.create_for_value(option, entry)?
                } else {
                    self.create_for_scalar(option, entry.clone())?
                };
                configuration.push(selection);
            }
        }

        Ok(configuration)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigurationError {
    #[error("Unknown customer option: {0}")]
    UnknownOption(String),

    #[error("Customer option {option} has no value {value}")]
    UnknownValue {
        option: String,
        value: String,
    },

    #[error("Customer option {0} expects a value selection")]
    ValueExpected(String),

    #[error("Customer option {0} expects a scalar input")]
    ScalarExpected(String),

    #[error("Customer option {option} accepts one input, got {count}")]
    TooManyInputs {
        option: String,
        count: usize,
    },

    #[error("Required customer option missing: {0}")]
    MissingRequired(String),
}
