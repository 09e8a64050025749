use std::collections::BTreeSet;

use super::model::SalesDataset;
use super::stats::{describe, ColumnSummary};

// ---------------------------------------------------------------------------
// Filter criteria: what the UI selected for this interaction
// ---------------------------------------------------------------------------

/// The active filter selections, rebuilt on every interaction.
///
/// The two empty-set cases deliberately differ: an empty `selected_sizes`
/// hides every row (nothing is selected), while an empty `selected_toppings`
/// applies no topping constraint at all.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Sizes a row must be one of.  Empty set ⇒ no rows survive.
    pub selected_sizes: BTreeSet<String>,
    /// Toppings, at least one of which must appear in a row's ingredients.
    /// Empty set ⇒ stage disabled, all rows pass.
    pub selected_toppings: BTreeSet<String>,
    /// Closed interval `[lo, hi]` on `unit_price`, `lo ≤ hi`.
    pub price_range: (f64, f64),
}

/// Initialise a [`FilterCriteria`] showing the whole dataset: every size
/// selected, no toppings selected, price range at the observed bounds.
pub fn init_criteria(dataset: &SalesDataset) -> FilterCriteria {
    FilterCriteria {
        selected_sizes: dataset.sizes.iter().cloned().collect(),
        selected_toppings: BTreeSet::new(),
        price_range: dataset.price_bounds,
    }
}

// ---------------------------------------------------------------------------
// Filter application
// ---------------------------------------------------------------------------

/// Return indices of orders that pass all active filters, in source order.
///
/// An order passes when:
/// * its `pizza_size` is in `selected_sizes` (empty set ⇒ nothing passes);
/// * its `unit_price` lies in `price_range`, inclusive on both ends;
/// * `selected_toppings` is empty, or at least one selected topping occurs
///   in its `pizza_ingredients`.
///
/// Criteria values never observed in the dataset (an unknown size or
/// topping) simply match zero rows; they are not an error.
pub fn filtered_indices(dataset: &SalesDataset, criteria: &FilterCriteria) -> Vec<usize> {
    let (lo, hi) = criteria.price_range;

    dataset
        .orders
        .iter()
        .enumerate()
        .filter(|(_, order)| {
            if !criteria.selected_sizes.contains(&order.pizza_size) {
                return false;
            }
            if order.unit_price < lo || order.unit_price > hi {
                return false;
            }
            if !criteria.selected_toppings.is_empty() {
                let any_match = criteria
                    .selected_toppings
                    .iter()
                    .any(|topping| order.pizza_ingredients.contains(topping.as_str()));
                if !any_match {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// FilteredView – surviving rows plus their summary statistics
// ---------------------------------------------------------------------------

/// Result of one filter evaluation: surviving row indices (ascending, into
/// `dataset.orders`) and descriptive statistics of the numeric columns.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub indices: Vec<usize>,
    pub summaries: Vec<ColumnSummary>,
}

impl FilteredView {
    /// Number of surviving rows.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no rows survived.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Evaluate the criteria against the dataset.
///
/// Pure: the same `(dataset, criteria)` pair always produces the same view,
/// and surviving rows keep their source order.
pub fn apply(dataset: &SalesDataset, criteria: &FilterCriteria) -> FilteredView {
    let indices = filtered_indices(dataset, criteria);

    let unit_prices: Vec<f64> = indices
        .iter()
        .map(|&i| dataset.orders[i].unit_price)
        .collect();
    let order_months: Vec<f64> = indices
        .iter()
        .map(|&i| dataset.orders[i].order_month as f64)
        .collect();

    let summaries = vec![
        describe("unit_price", &unit_prices),
        describe("order_month", &order_months),
    ];

    FilteredView { indices, summaries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Order;
    use chrono::NaiveDate;

    fn order(size: &str, price: f64, ingredients: &str) -> Order {
        let date = NaiveDate::from_ymd_opt(2015, 3, 14)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap();
        Order::new(date, size.to_string(), price, ingredients.to_string())
    }

    fn dataset() -> SalesDataset {
        SalesDataset::from_orders(vec![
            order("M", 9.5, "Cheese, Basil"),
            order("L", 12.0, "Cheese, Pepperoni"),
            order("M", 15.0, "Basil, Mushroom"),
        ])
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_criteria_keep_everything() {
        let ds = dataset();
        let criteria = init_criteria(&ds);
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 1, 2]);
    }

    #[test]
    fn output_never_exceeds_input_and_is_idempotent() {
        let ds = dataset();
        let criteria = FilterCriteria {
            selected_sizes: set(&["M", "L"]),
            selected_toppings: set(&["Cheese"]),
            price_range: (9.0, 13.0),
        };
        let first = filtered_indices(&ds, &criteria);
        let second = filtered_indices(&ds, &criteria);
        assert!(first.len() <= ds.len());
        assert_eq!(first, second);
    }

    #[test]
    fn surviving_rows_keep_source_order() {
        let ds = dataset();
        let criteria = FilterCriteria {
            selected_sizes: set(&["M", "L"]),
            selected_toppings: BTreeSet::new(),
            price_range: ds.price_bounds,
        };
        let indices = filtered_indices(&ds, &criteria);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_size_selection_hides_all_rows() {
        let ds = dataset();
        let criteria = FilterCriteria {
            selected_sizes: BTreeSet::new(),
            selected_toppings: BTreeSet::new(),
            price_range: ds.price_bounds,
        };
        assert!(filtered_indices(&ds, &criteria).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive_and_monotone() {
        let ds = dataset();
        let mut criteria = init_criteria(&ds);

        criteria.price_range = (9.5, 12.0);
        let narrow = filtered_indices(&ds, &criteria).len();
        assert_eq!(narrow, 2);

        // Widening never loses rows, narrowing never gains them.
        criteria.price_range = (9.0, 16.0);
        let wide = filtered_indices(&ds, &criteria).len();
        assert!(wide >= narrow);

        criteria.price_range = (12.0, 12.0);
        let point = filtered_indices(&ds, &criteria);
        assert_eq!(point, vec![1]);
        assert!(point.len() <= narrow);
    }

    #[test]
    fn topping_filter_is_an_or_over_selections() {
        let ds = SalesDataset::from_orders(vec![
            order("M", 10.0, "Cheese, Pepperoni, Basil"),
            order("M", 10.0, "Cheese, Mushroom"),
        ]);
        let criteria = FilterCriteria {
            selected_sizes: set(&["M"]),
            selected_toppings: set(&["Basil"]),
            price_range: ds.price_bounds,
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![0]);

        // Empty topping selection is a no-op, not an empty OR.
        let criteria = FilterCriteria {
            selected_toppings: BTreeSet::new(),
            ..criteria
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 1]);
    }

    #[test]
    fn unknown_criteria_values_match_zero_rows() {
        let ds = dataset();
        let criteria = FilterCriteria {
            selected_sizes: set(&["XXL"]),
            selected_toppings: BTreeSet::new(),
            price_range: ds.price_bounds,
        };
        assert!(filtered_indices(&ds, &criteria).is_empty());
    }

    #[test]
    fn combined_filters_select_the_expected_rows() {
        let ds = dataset();
        let criteria = FilterCriteria {
            selected_sizes: set(&["M"]),
            selected_toppings: set(&["Basil"]),
            price_range: (9.0, 16.0),
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 2]);
    }

    #[test]
    fn apply_summarises_the_surviving_rows_only() {
        let ds = dataset();
        let criteria = FilterCriteria {
            selected_sizes: set(&["M"]),
            selected_toppings: BTreeSet::new(),
            price_range: ds.price_bounds,
        };
        let view = apply(&ds, &criteria);
        assert_eq!(view.len(), 2);

        let prices = &view.summaries[0];
        assert_eq!(prices.column, "unit_price");
        assert_eq!(prices.count, 2);
        assert!((prices.mean - 12.25).abs() < 1e-12);
        assert_eq!(prices.min, 9.5);
        assert_eq!(prices.max, 15.0);
    }

    #[test]
    fn empty_view_has_zero_counts_and_nan_statistics() {
        let ds = dataset();
        let criteria = FilterCriteria {
            selected_sizes: BTreeSet::new(),
            selected_toppings: BTreeSet::new(),
            price_range: ds.price_bounds,
        };
        let view = apply(&ds, &criteria);
        assert!(view.is_empty());
        for summary in &view.summaries {
            assert_eq!(summary.count, 0);
            assert!(summary.mean.is_nan());
            assert!(summary.std.is_nan());
        }
    }
}
