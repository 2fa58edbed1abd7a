use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::{MONTH_LABELS, TRADE_FILTER};
use crate::data::model::{Direction, Series};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – view selection and monthly totals
// ---------------------------------------------------------------------------

/// Render the left panel: the two view buttons and the active series' table.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("View");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        for (direction, label) in [(Direction::Import, "Imports"), (Direction::Export, "Exports")] {
            let active = state.view.direction() == direction;
            if ui.selectable_label(active, label).clicked() {
                state.select(direction);
            }
        }
    });
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.label(format!("{} records loaded", dataset.len()));
    if !dataset.rejected.is_empty() {
        ui.label(
            RichText::new(format!("{} rows rejected (see log)", dataset.rejected.len()))
                .color(Color32::from_rgb(200, 120, 0)),
        );
    }
    ui.add_space(6.0);

    let series = state.active_series();
    ui.strong(format!(
        "{} {}s, {}",
        TRADE_FILTER.fiber_type, series.direction, TRADE_FILTER.year
    ));
    if series.is_empty() {
        ui.label("No matching records.");
        return;
    }
    month_table(ui, series);
}

fn month_table(ui: &mut Ui, series: &Series) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Month");
            });
            header.col(|ui| {
                ui.strong("Value (lbs.)");
            });
        })
        .body(|mut body| {
            for total in &series.totals {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        let label = MONTH_LABELS
                            .get(usize::from(total.month).wrapping_sub(1))
                            .copied()
                            .unwrap_or("?");
                        ui.label(label);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", total.value));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(path) = &state.source {
            ui.label(path.display().to_string());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open trade data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                state.set_dataset(dataset, Some(path));
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
