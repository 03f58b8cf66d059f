use crate::models::OrderItem;

impl OrderItem {
    /// Store `base_price` plus option surcharges as the unit price and refresh the total
    pub fn set_unit_price(&mut self, base_price: i64) {
        let unit_price = self.apply_configuration_prices(base_price, 1);
        tracing::debug!(
            item_id = %self.id,
            base_price,
            unit_price,
            "Applied customer option prices"
        );

        self.unit_price = unit_price;
        self.recalculate_units_total();
    }

    /// Base price plus the surcharge of every priced selection, rounded to
    /// the nearest minor unit (halves round away from zero).
    ///
    /// Fixed surcharges scale with `quantity`, percentages apply to `base_price`.
    pub fn apply_configuration_prices(&self, base_price: i64, quantity: u32) -> i64 {
        let result = self
            .configuration
            .iter()
            .fold(base_price as f64, |acc, option| acc + option.price_adjustment(base_price, quantity));

        result.round() as i64
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.recalculate_units_total();
    }

    pub fn set_adjustments_total(&mut self, adjustments_total: i64) {
        self.adjustments_total = adjustments_total;
        self.recalculate_units_total();
    }

    pub fn recalculate_units_total(&mut self) {
        self.total = self
            .unit_price
            .saturating_mul(i64::from(self.quantity))
            .saturating_add(self.adjustments_total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::fixtures::*;
    use crate::option::OrderItemOption;

    fn item_with(configuration: Vec<OrderItemOption>) -> OrderItem {
        let mut item = OrderItem::new("GLASSES_ROUND", None);
        item.set_customer_option_configuration(configuration);
        item
    }

    #[test]
    fn test_fixed_prices_add_up() {
        let item = item_with(vec![fixed("case", "leather", 5), fixed("cloth", "microfiber", 3)]);
        assert_eq!(item.apply_configuration_prices(100, 1), 108);
    }

    #[test]
    fn test_percent_price() {
        let item = item_with(vec![percent("lens", "anti_glare", 0.1)]);
        assert_eq!(item.apply_configuration_prices(100, 1), 110);
    }

    #[test]
    fn test_fixed_price_scales_with_quantity() {
        let item = item_with(vec![fixed("case", "leather", 5), percent("lens", "anti_glare", 0.1)]);
        assert_eq!(item.apply_configuration_prices(100, 3), 125);
    }

    #[test]
    fn test_unreferenced_selection_contributes_nothing() {
        let mut engraving = text("engraving", "For Ada");
        engraving.fixed_price = 700;
        let item = item_with(vec![engraving, fixed("case", "leather", 5)]);

        assert_eq!(item.apply_configuration_prices(100, 1), 105);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        let item = item_with(vec![percent("lens", "anti_glare", 0.005)]);
        assert_eq!(item.apply_configuration_prices(100, 1), 101);
    }

    #[test]
    fn test_rounds_to_nearest() {
        let item = item_with(vec![percent("lens", "anti_glare", 0.333)]);
        // 999 + 332.667
        assert_eq!(item.apply_configuration_prices(999, 1), 1332);
    }

    #[test]
    fn test_non_positive_base_is_not_clamped() {
        let item = item_with(vec![percent("lens", "anti_glare", 0.5), fixed("case", "leather", 10)]);
        assert_eq!(item.apply_configuration_prices(0, 1), 10);
        assert_eq!(item.apply_configuration_prices(-100, 1), -140);
    }

    #[test]
    fn test_no_configuration_keeps_base_price() {
        let item = OrderItem::new("MUG_RED", None);
        assert_eq!(item.apply_configuration_prices(1234, 4), 1234);
    }

    #[test]
    fn test_set_unit_price_applies_configuration_and_total() {
        let mut item = item_with(vec![fixed("case", "leather", 500), fixed("cloth", "microfiber", 300)]);
        item.set_quantity(2);

        item.set_unit_price(10000);

        assert_eq!(item.unit_price(), 10800);
        assert_eq!(item.total(), 21600);
    }

    #[test]
    fn test_set_unit_price_is_not_cumulative() {
        let mut item = item_with(vec![fixed("case", "leather", 500)]);
        item.set_unit_price(10000);
        item.set_unit_price(10000);

        assert_eq!(item.unit_price(), 10500);
    }

    #[test]
    fn test_total_saturates_on_huge_quantity() {
        let mut item = OrderItem::new("MUG_RED", None);
        item.set_unit_price(i64::MAX / 2);
        item.set_quantity(u32::MAX);

        assert_eq!(item.total(), i64::MAX);
    }

    #[test]
    fn test_adjustments_join_total() {
        let mut item = OrderItem::new("MUG_RED", None);
        item.set_unit_price(1000);
        item.set_quantity(3);
        item.set_adjustments_total(-500);

        assert_eq!(item.adjustments_total(), -500);
        assert_eq!(item.total(), 2500);
    }
}
