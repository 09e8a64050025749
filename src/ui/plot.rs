use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::state::AppState;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// ---------------------------------------------------------------------------
// Aggregate charts (central panel)
// ---------------------------------------------------------------------------

/// Render the aggregate charts for the current filtered view.
pub fn sales_charts(ui: &mut Ui, state: &AppState) {
    ui.heading("Orders by Month");
    monthly_chart(ui, state);
    ui.add_space(8.0);

    ui.heading("Orders by Day of Week");
    weekday_chart(ui, state);
}

/// Grouped bar chart of order counts per month, one series per selected
/// size, coloured consistently with the filter checkboxes.
fn monthly_chart(ui: &mut Ui, state: &AppState) {
    let sizes: Vec<&String> = state
        .dataset
        .sizes
        .iter()
        .filter(|size| state.criteria.selected_sizes.contains(*size))
        .collect();

    let group_width = 0.8 / sizes.len().max(1) as f64;
    let mut charts = Vec::with_capacity(sizes.len());

    for (slot, &size) in sizes.iter().enumerate() {
        let mut counts = [0u32; 12];
        for &idx in &state.view.indices {
            let order = &state.dataset.orders[idx];
            if order.pizza_size == *size {
                counts[(order.order_month - 1) as usize] += 1;
            }
        }

        // Centre the group of size-bars on each month tick.
        let offset = (slot as f64 + 0.5) * group_width - 0.4;
        let bars: Vec<Bar> = counts
            .iter()
            .enumerate()
            .map(|(month, &count)| {
                Bar::new(month as f64 + 1.0 + offset, count as f64).width(group_width)
            })
            .collect();

        charts.push(
            BarChart::new(bars)
                .color(state.color_map.color_for(size))
                .name(size.as_str()),
        );
    }

    Plot::new("orders_by_month")
        .legend(Legend::default())
        .x_axis_label("Month")
        .y_axis_label("Orders")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .height(220.0)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Bar chart of order counts per weekday, Monday first.
fn weekday_chart(ui: &mut Ui, state: &AppState) {
    let mut counts = [0u32; 7];
    for &idx in &state.view.indices {
        let order = &state.dataset.orders[idx];
        if let Some(day) = WEEKDAY_NAMES
            .iter()
            .position(|name| *name == order.order_day_of_week)
        {
            counts[day] += 1;
        }
    }

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(day, &count)| {
            Bar::new(day as f64, count as f64)
                .width(0.6)
                .name(WEEKDAY_NAMES[day])
        })
        .collect();

    Plot::new("orders_by_weekday")
        .x_axis_label("Day of week (0 = Monday)")
        .y_axis_label("Orders")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .height(220.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE).name("Orders"));
        });
}
