use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDateTime, Weekday};

/// Delimiter joining ingredient names inside `pizza_ingredients`.
pub const INGREDIENT_DELIMITER: &str = ", ";

// ---------------------------------------------------------------------------
// Order – one row of the dataset
// ---------------------------------------------------------------------------

/// A single order line (one row of the source table).
///
/// `order_month` and `order_day_of_week` are derived from `order_date` at
/// construction time and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Timestamp the order was placed.
    pub order_date: NaiveDateTime,
    /// Categorical size label ("S", "M", "L", …).
    pub pizza_size: String,
    /// Price of a single pizza, non-negative.
    pub unit_price: f64,
    /// Ingredient names joined by `", "`.
    pub pizza_ingredients: String,
    /// Month of `order_date`, 1–12.
    pub order_month: u32,
    /// Full weekday name of `order_date` ("Monday" … "Sunday").
    pub order_day_of_week: String,
}

impl Order {
    /// Build an order, deriving the date features from the timestamp.
    pub fn new(
        order_date: NaiveDateTime,
        pizza_size: String,
        unit_price: f64,
        pizza_ingredients: String,
    ) -> Self {
        let order_month = order_date.month();
        let order_day_of_week = day_name(order_date.weekday()).to_string();
        Order {
            order_date,
            pizza_size,
            unit_price,
            pizza_ingredients,
            order_month,
            order_day_of_week,
        }
    }

    /// Iterate the individual ingredient tokens of this order.
    pub fn toppings(&self) -> impl Iterator<Item = &str> {
        self.pizza_ingredients.split(INGREDIENT_DELIMITER)
    }
}

/// Full weekday name, matching what `day_name()` reports in the source data.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ---------------------------------------------------------------------------
// SalesDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed indices.
///
/// Read-only after construction: the filter layer only ever borrows it.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    /// All orders (rows), in source order.
    pub orders: Vec<Order>,
    /// Sorted, de-duplicated list of observed size labels.
    pub sizes: Vec<String>,
    /// Sorted, de-duplicated topping vocabulary extracted from
    /// `pizza_ingredients` across all rows.
    pub toppings: Vec<String>,
    /// Observed `(min, max)` of `unit_price`; `(0.0, 0.0)` when empty.
    pub price_bounds: (f64, f64),
}

impl SalesDataset {
    /// Build the derived indices from the loaded orders.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        let mut sizes_set: BTreeSet<String> = BTreeSet::new();
        let mut toppings_set: BTreeSet<String> = BTreeSet::new();
        let mut price_min = f64::INFINITY;
        let mut price_max = f64::NEG_INFINITY;

        for order in &orders {
            sizes_set.insert(order.pizza_size.clone());
            for topping in order.toppings() {
                toppings_set.insert(topping.to_string());
            }
            price_min = price_min.min(order.unit_price);
            price_max = price_max.max(order.unit_price);
        }

        let price_bounds = if orders.is_empty() {
            (0.0, 0.0)
        } else {
            (price_min, price_max)
        };

        SalesDataset {
            orders,
            sizes: sizes_set.into_iter().collect(),
            toppings: toppings_set.into_iter().collect(),
            price_bounds,
        }
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(size: &str, price: f64, ingredients: &str) -> Order {
        let date = NaiveDate::from_ymd_opt(2015, 6, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        Order::new(date, size.to_string(), price, ingredients.to_string())
    }

    #[test]
    fn derives_date_features() {
        let date = NaiveDate::from_ymd_opt(2015, 1, 5)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let order = Order::new(date, "M".to_string(), 9.5, "Cheese".to_string());
        assert_eq!(order.order_month, 1);
        // 2015-01-05 was a Monday.
        assert_eq!(order.order_day_of_week, "Monday");
    }

    #[test]
    fn vocabulary_is_sorted_and_deduplicated() {
        let ds = SalesDataset::from_orders(vec![
            order("M", 9.5, "Cheese, Basil"),
            order("L", 12.0, "Basil, Mushroom"),
        ]);
        assert_eq!(ds.toppings, vec!["Basil", "Cheese", "Mushroom"]);
    }

    #[test]
    fn indices_cover_sizes_and_price_bounds() {
        let ds = SalesDataset::from_orders(vec![
            order("M", 9.5, "Cheese"),
            order("S", 7.25, "Cheese"),
            order("M", 15.0, "Cheese"),
        ]);
        assert_eq!(ds.sizes, vec!["M", "S"]);
        assert_eq!(ds.price_bounds, (7.25, 15.0));
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = SalesDataset::from_orders(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.price_bounds, (0.0, 0.0));
        assert!(ds.sizes.is_empty());
        assert!(ds.toppings.is_empty());
    }
}
