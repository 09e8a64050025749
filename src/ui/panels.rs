use eframe::egui::{self, RichText, ScrollArea, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    // Clone the option lists so we can mutate state inside the loops.
    let sizes = state.dataset.sizes.clone();
    let toppings = state.dataset.toppings.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Pizza size ----
            ui.strong(format!(
                "Pizza size  ({}/{})",
                state.criteria.selected_sizes.len(),
                sizes.len()
            ));
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_sizes();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_sizes();
                }
            });
            for size in &sizes {
                let mut checked = state.criteria.selected_sizes.contains(size);
                let text = RichText::new(size).color(state.color_map.color_for(size));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_size(size);
                }
            }
            ui.separator();

            // ---- Toppings ----
            let header_text = format!(
                "Toppings  ({}/{})",
                state.criteria.selected_toppings.len(),
                toppings.len()
            );
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("toppings_filter")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    if ui.small_button("Clear").clicked() {
                        state.clear_toppings();
                    }
                    for topping in &toppings {
                        let mut checked = state.criteria.selected_toppings.contains(topping);
                        if ui.checkbox(&mut checked, topping).changed() {
                            state.toggle_topping(topping);
                        }
                    }
                });
            ui.separator();

            // ---- Unit price range ----
            ui.strong("Unit price");
            let (bound_lo, bound_hi) = state.dataset.price_bounds;
            let (mut lo, mut hi) = state.criteria.price_range;
            let lo_changed = ui
                .add(Slider::new(&mut lo, bound_lo..=bound_hi).text("min"))
                .changed();
            let hi_changed = ui
                .add(Slider::new(&mut hi, bound_lo..=bound_hi).text("max"))
                .changed();
            if lo_changed || hi_changed {
                state.set_price_range(lo, hi);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: row counts and the reset action.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Pizza Sales Dashboard");
        ui.separator();

        ui.label(format!(
            "{} orders loaded, {} matching",
            state.dataset.len(),
            state.view.len()
        ));

        ui.separator();

        if ui.button("Reset filters").clicked() {
            state.reset_filters();
        }
    });
}
