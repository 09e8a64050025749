use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::filter::{apply, init_criteria, FilterCriteria, FilteredView};
use crate::data::model::SalesDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once at startup and never mutated; every filter
/// change rebuilds `view` by re-running [`apply`] over it.
pub struct AppState {
    /// Loaded dataset (read-only for the process lifetime).
    pub dataset: SalesDataset,

    /// Current filter selections.
    pub criteria: FilterCriteria,

    /// Result of applying `criteria` to `dataset` (cached per interaction).
    pub view: FilteredView,

    /// Size label → colour, shared by the filter panel and the charts.
    pub color_map: ColorMap,
}

impl AppState {
    /// Ingest the loaded dataset, initialise filters, and evaluate once.
    pub fn new(dataset: SalesDataset) -> Self {
        let criteria = init_criteria(&dataset);
        let view = apply(&dataset, &criteria);
        let color_map = ColorMap::new(&dataset.sizes);
        AppState {
            dataset,
            criteria,
            view,
            color_map,
        }
    }

    /// Recompute the filtered view after a criteria change.
    pub fn refilter(&mut self) {
        self.view = apply(&self.dataset, &self.criteria);
    }

    /// Restore the initial criteria (all sizes, no toppings, full range).
    pub fn reset_filters(&mut self) {
        self.criteria = init_criteria(&self.dataset);
        self.refilter();
    }

    /// Toggle a single size selection.
    pub fn toggle_size(&mut self, size: &str) {
        if !self.criteria.selected_sizes.remove(size) {
            self.criteria.selected_sizes.insert(size.to_string());
        }
        self.refilter();
    }

    /// Select every observed size.
    pub fn select_all_sizes(&mut self) {
        self.criteria.selected_sizes = self.dataset.sizes.iter().cloned().collect();
        self.refilter();
    }

    /// Deselect every size (hides all rows).
    pub fn select_no_sizes(&mut self) {
        self.criteria.selected_sizes = BTreeSet::new();
        self.refilter();
    }

    /// Toggle a single topping selection.
    pub fn toggle_topping(&mut self, topping: &str) {
        if !self.criteria.selected_toppings.remove(topping) {
            self.criteria.selected_toppings.insert(topping.to_string());
        }
        self.refilter();
    }

    /// Clear the topping selection (disables the topping stage).
    pub fn clear_toppings(&mut self) {
        self.criteria.selected_toppings = BTreeSet::new();
        self.refilter();
    }

    /// Set the price range, clamped to the dataset bounds with `lo ≤ hi`.
    pub fn set_price_range(&mut self, lo: f64, hi: f64) {
        let (min, max) = self.dataset.price_bounds;
        let lo = lo.clamp(min, max);
        let hi = hi.clamp(min, max);
        self.criteria.price_range = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.refilter();
    }
}
