use indexmap::IndexMap;
use serde::Serialize;

use crate::models::OrderItem;
use crate::option::OrderItemOption;

/// One entry of the code-keyed configuration view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigurationEntry<'a> {
    Single(&'a OrderItemOption),
    /// Multi-select options collect every selection sharing the code
    Many(Vec<&'a OrderItemOption>),
}

impl OrderItem {
    /// Replace every selection. Duplicate codes are not checked.
    pub fn set_customer_option_configuration(&mut self, configuration: Vec<OrderItemOption>) {
        self.configuration = configuration;
    }

    pub fn customer_option_configuration(&self) -> &[OrderItemOption] {
        &self.configuration
    }

    /// Selections keyed by option code.
    ///
    /// Multi-select selections are grouped under their code, anything else
    /// overwrites a previous selection with the same code. Codes keep the
    /// position of their first selection.
    pub fn customer_option_configuration_assoc(&self) -> IndexMap<&str, ConfigurationEntry<'_>> {
        let mut assoc: IndexMap<&str, ConfigurationEntry<'_>> = IndexMap::new();

        for option in &self.configuration {
            let code = option.customer_option_code.as_str();
            if !option.is_multi_select() {
                assoc.insert(code, ConfigurationEntry::Single(option));
                continue;
            }

            match assoc.get_mut(code) {
                Some(ConfigurationEntry::Many(group)) => group.push(option),
                _ => {
                    assoc.insert(code, ConfigurationEntry::Many(vec![option]));
                }
            }
        }

        assoc
    }

    /// Option code to scalar value; the last selection wins on shared codes
    pub fn customer_option_configuration_as_simple_array(&self) -> IndexMap<String, String> {
        self.configuration
            .iter()
            .map(|option| (option.customer_option_code.clone(), option.scalar_value.clone()))
            .collect()
    }
}
