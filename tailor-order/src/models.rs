use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use tailor_catalog::Product;
use tailor_core::StoreConfig;

use crate::option::OrderItemOption;

/// A customer's order, holding the lines being bought
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub channel_code: String,
    pub currency_code: String,
    pub items: Vec<OrderItem>,
    pub items_total: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(channel_code: String, currency_code: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            channel_code,
            currency_code,
            items: Vec::new(),
            items_total: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Start an order in the configured storefront channel
    pub fn for_store(store: &StoreConfig) -> Self {
        Self::new(store.channel_code.clone(), store.currency_code.clone())
    }

    pub fn item(&self, item_id: &Uuid) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.id == *item_id)
    }

    /// Sum line totals into `items_total`
    pub fn recalculate_items_total(&mut self) {
        self.items_total = self
            .items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.total()));
        self.updated_at = Utc::now();
    }
}

/// A line within an order: a product variant, a quantity and the customer's
/// option selections.
///
/// Selections are owned by the item and live and die with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub variant_code: String,
    pub product: Option<Product>,
    pub(crate) quantity: u32,
    pub(crate) unit_price: i64,
    pub(crate) adjustments_total: i64,
    pub(crate) total: i64,
    #[serde(default)]
    pub(crate) configuration: Vec<OrderItemOption>,
}

impl OrderItem {
    pub fn new(variant_code: impl Into<String>, product: Option<Product>) -> Self {
        Self {
            id: Uuid::new_v4(),
            variant_code: variant_code.into(),
            product,
            quantity: 1,
            unit_price: 0,
            adjustments_total: 0,
            total: 0,
            configuration: Vec::new(),
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price including option surcharges
    pub fn unit_price(&self) -> i64 {
        self.unit_price
    }

    pub fn adjustments_total(&self) -> i64 {
        self.adjustments_total
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}

/// An order line for products sold without customer options support
/// (gift cards, shipping insurance, ...). It only knows the base comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlainOrderItem {
    pub id: Uuid,
    pub variant_code: String,
    pub quantity: u32,
    pub unit_price: i64,
}

impl PlainOrderItem {
    pub fn new(variant_code: impl Into<String>, unit_price: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            variant_code: variant_code.into(),
            quantity: 1,
            unit_price,
        }
    }
}
