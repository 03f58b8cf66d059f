use uuid::Uuid;

use crate::models::{OrderItem, PlainOrderItem};

/// Contract shared by every kind of order line.
///
/// Two lines that are `equals` are merged into one when added to an order.
pub trait OrderLine {
    fn id(&self) -> Uuid;

    fn variant_code(&self) -> &str;

    /// `Some` for lines that carry customer option selections
    fn as_customer_option_capable(&self) -> Option<&OrderItem> {
        None
    }

    /// Same line, or the same variant
    fn base_equals(&self, other: &dyn OrderLine) -> bool {
        self.id() == other.id() || self.variant_code() == other.variant_code()
    }

    fn equals(&self, other: &dyn OrderLine) -> bool {
        self.base_equals(other)
    }
}

impl OrderLine for OrderItem {
    fn id(&self) -> Uuid {
        self.id
    }

    fn variant_code(&self) -> &str {
        &self.variant_code
    }

    fn as_customer_option_capable(&self) -> Option<&OrderItem> {
        Some(self)
    }

    /// Lines of customizable products never merge, whatever their selections
    fn equals(&self, other: &dyn OrderLine) -> bool {
        if !self.base_equals(other) {
            return false;
        }

        let product = other
            .as_customer_option_capable()
            .and_then(|item| item.product.as_ref());

        match product {
            Some(product) => !product.has_customer_options(),
            None => true,
        }
    }
}

impl OrderLine for PlainOrderItem {
    fn id(&self) -> Uuid {
        self.id
    }

    fn variant_code(&self) -> &str {
        &self.variant_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::fixtures::*;
    use tailor_catalog::{CustomerOption, CustomerOptionType, Product};

    fn customizable() -> Product {
        Product::new("RING", "Ring")
            .with_customer_option(CustomerOption::new("engraving", "Engraving", CustomerOptionType::Text))
    }

    #[test]
    fn test_different_variants_are_not_equal() {
        let a = OrderItem::new("MUG_RED", Some(Product::new("MUG", "Mug")));
        let b = OrderItem::new("MUG_BLUE", Some(Product::new("MUG", "Mug")));
        assert!(!a.equals(&b));
    }

    #[test]
    fn test_same_variant_without_options_is_equal() {
        let mug = Product::new("MUG", "Mug");
        let a = OrderItem::new("MUG_RED", Some(mug.clone()));
        let b = OrderItem::new("MUG_RED", Some(mug));
        assert!(a.equals(&b));
        assert!(b.equals(&a));
    }

    #[test]
    fn test_customizable_items_never_equal() {
        let ring = customizable();
        let mut a = OrderItem::new("RING_SILVER", Some(ring.clone()));
        let mut b = OrderItem::new("RING_SILVER", Some(ring));
        a.set_customer_option_configuration(vec![text("engraving", "A&B")]);
        b.set_customer_option_configuration(vec![text("engraving", "A&B")]);

        assert!(!a.equals(&b));
    }

    #[test]
    fn test_customizable_item_not_equal_to_itself() {
        let a = OrderItem::new("RING_SILVER", Some(customizable()));
        assert!(!a.equals(&a));
    }

    #[test]
    fn test_compared_item_without_product_defers_to_base() {
        let a = OrderItem::new("RING_SILVER", Some(customizable()));
        let b = OrderItem::new("RING_SILVER", None);
        assert!(a.equals(&b));
    }

    #[test]
    fn test_plain_line_defers_to_base() {
        let a = OrderItem::new("GIFT_CARD_50", Some(customizable()));
        let same = PlainOrderItem::new("GIFT_CARD_50", 5000);
        let other = PlainOrderItem::new("GIFT_CARD_20", 2000);

        assert!(a.equals(&same));
        assert!(!a.equals(&other));
    }

    #[test]
    fn test_plain_lines_use_base_comparison() {
        let a = PlainOrderItem::new("GIFT_CARD_50", 5000);
        let b = PlainOrderItem::new("GIFT_CARD_50", 5000);
        let customized = OrderItem::new("GIFT_CARD_50", Some(customizable()));

        assert!(a.equals(&b));
        assert!(a.equals(&customized));
    }
}
