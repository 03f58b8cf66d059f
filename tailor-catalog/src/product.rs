use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::option::CustomerOption;

/// Catalog product that may expose customer options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub customer_options: Vec<CustomerOption>,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            customer_options: Vec::new(),
        }
    }

    pub fn with_customer_option(mut self, option: CustomerOption) -> Self {
        self.customer_options.push(option);
        self
    }

    pub fn has_customer_options(&self) -> bool {
        !self.customer_options.is_empty()
    }

    pub fn customer_option(&self, code: &str) -> Option<&CustomerOption> {
        self.customer_options.iter().find(|o| o.code == code)
    }
}
