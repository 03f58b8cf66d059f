use uuid::Uuid;

use crate::equality::OrderLine;
use crate::models::{Order, OrderItem};

/// Adds and removes order lines, merging equal ones
pub struct OrderModifier;

impl OrderModifier {
    /// Add an item, merging it into an equal existing line when there is one.
    ///
    /// Returns the id of the line now holding the quantity.
    pub fn add_to_order(order: &mut Order, item: OrderItem) -> Result<Uuid, OrderError> {
        if item.quantity() == 0 {
            return Err(OrderError::InvalidQuantity(item.quantity()));
        }

        let line_id = match order.items.iter_mut().find(|existing| existing.equals(&item)) {
            Some(existing) => {
                let quantity = existing
                    .quantity()
                    .checked_add(item.quantity())
                    .ok_or(OrderError::QuantityOverflow {
                        current: existing.quantity(),
                        added: item.quantity(),
                    })?;
                tracing::debug!(
                    order_id = %order.id,
                    item_id = %existing.id,
                    quantity,
                    "Merged order item into existing line"
                );
                existing.set_quantity(quantity);
                existing.id
            }
            None => {
                let id = item.id;
                order.items.push(item);
                id
            }
        };

        order.recalculate_items_total();
        Ok(line_id)
    }

    /// Remove a line together with its option selections
    pub fn remove_from_order(order: &mut Order, item_id: &Uuid) -> Result<OrderItem, OrderError> {
        let position = order
            .items
            .iter()
            .position(|i| i.id == *item_id)
            .ok_or_else(|| OrderError::ItemNotFound(item_id.to_string()))?;

        let removed = order.items.remove(position);
        order.recalculate_items_total();
        Ok(removed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Order item not found: {0}")]
    ItemNotFound(String),

    #[error("Quantity overflow: {current} + {added}")]
    QuantityOverflow {
        current: u32,
        added: u32,
    },
}
