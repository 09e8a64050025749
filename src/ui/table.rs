use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::stats::SUMMARY_ROWS;
use crate::state::AppState;

/// Number of rows shown in the preview table.
const PREVIEW_ROWS: usize = 100;

const OVERVIEW_COLUMNS: [&str; 6] = [
    "order_date",
    "pizza_size",
    "unit_price",
    "order_month",
    "order_day_of_week",
    "pizza_ingredients",
];

// ---------------------------------------------------------------------------
// Data overview – preview of the filtered rows
// ---------------------------------------------------------------------------

/// Render the filtered-row preview table.
pub fn data_overview(ui: &mut Ui, state: &AppState) {
    ui.heading("Data Overview");
    ui.label(format!("Showing {} rows after filtering.", state.view.len()));
    ui.add_space(4.0);

    if state.view.is_empty() {
        ui.label(RichText::new("No orders match the current filters.").weak());
        return;
    }

    let preview = &state.view.indices[..state.view.len().min(PREVIEW_ROWS)];

    ui.push_id("overview_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(40.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for title in OVERVIEW_COLUMNS {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for &idx in preview {
                    let order = &state.dataset.orders[idx];
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(order.order_date.format("%Y-%m-%d %H:%M:%S").to_string());
                        });
                        row.col(|ui| {
                            ui.colored_label(
                                state.color_map.color_for(&order.pizza_size),
                                &order.pizza_size,
                            );
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}", order.unit_price));
                        });
                        row.col(|ui| {
                            ui.label(order.order_month.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&order.order_day_of_week);
                        });
                        row.col(|ui| {
                            ui.label(&order.pizza_ingredients);
                        });
                    });
                }
            });
    });

    if state.view.len() > PREVIEW_ROWS {
        ui.label(
            RichText::new(format!(
                "… {} more rows not shown",
                state.view.len() - PREVIEW_ROWS
            ))
            .weak(),
        );
    }
}

// ---------------------------------------------------------------------------
// Summary statistics – describe() of the filtered view
// ---------------------------------------------------------------------------

/// Render the descriptive-statistics table for the current view.
pub fn summary_table(ui: &mut Ui, state: &AppState) {
    ui.heading("Summary Statistics");
    ui.add_space(4.0);

    ui.push_id("summary_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(60.0))
            .columns(
                Column::auto().at_least(100.0),
                state.view.summaries.len(),
            )
            .header(20.0, |mut header| {
                header.col(|_ui| {});
                for summary in &state.view.summaries {
                    header.col(|ui| {
                        ui.strong(&summary.column);
                    });
                }
            })
            .body(|mut body| {
                for row_label in SUMMARY_ROWS {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.strong(row_label);
                        });
                        for summary in &state.view.summaries {
                            row.col(|ui| {
                                ui.label(format_stat(summary.stat(row_label)));
                            });
                        }
                    });
                }
            });
    });
}

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.4}")
    }
}
