use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::format;
use crate::state::{AppState, DashboardEvent};

// ---------------------------------------------------------------------------
// Overview metrics
// ---------------------------------------------------------------------------

pub fn metrics(ui: &mut Ui, state: &AppState) {
    let summary = &state.view.summary;
    ui.columns(3, |cols| {
        metric(&mut cols[0], "Total Medals", summary.total_medals.to_string());
        metric(&mut cols[1], "Average GDP", format::gdp_billions(summary.avg_gdp));
        metric(
            &mut cols[2],
            "Average Population",
            format::population_millions(summary.avg_population),
        );
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).size(26.0).strong());
    });
}

// ---------------------------------------------------------------------------
// Record tables
// ---------------------------------------------------------------------------

/// Table of the given record indices with every column of the file.
pub fn records_table(ui: &mut Ui, id: &str, state: &AppState, rows: &[usize], max_height: f32) {
    let dataset = &state.dataset;
    if rows.is_empty() {
        ui.label(RichText::new("No matching rows.").weak());
        return;
    }

    let mut headers = vec!["country", "region", "gdp", "population", "total"];
    headers.extend(dataset.extra_columns.iter().map(String::as_str));

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(70.0), headers.len())
            .min_scrolled_height(0.0)
            .max_scroll_height(max_height)
            .header(20.0, |mut header| {
                for name in &headers {
                    header.col(|ui| {
                        ui.strong(*name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let record = &dataset.records[rows[row.index()]];
                    row.col(|ui| {
                        ui.label(&record.country);
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&record.region).color(state.colors.color_for(&record.region)));
                    });
                    row.col(|ui| {
                        ui.label(format::cell(record.gdp));
                    });
                    row.col(|ui| {
                        ui.label(format::cell(record.population));
                    });
                    row.col(|ui| {
                        ui.label(record.total.to_string());
                    });
                    for value in &record.extra {
                        row.col(|ui| {
                            ui.label(value);
                        });
                    }
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Detail lookup
// ---------------------------------------------------------------------------

pub fn country_details(
    ui: &mut Ui,
    state: &AppState,
    max_height: f32,
    events: &mut Vec<DashboardEvent>,
) {
    let view = &state.view;
    let selected = view.selected_country.as_deref().unwrap_or("—");

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select a Country:");
        egui::ComboBox::from_id_salt("country_select")
            .selected_text(selected)
            .show_ui(ui, |ui: &mut Ui| {
                for country in &view.country_options {
                    let is_selected = view.selected_country.as_ref() == Some(country);
                    if ui.selectable_label(is_selected, country).clicked() && !is_selected {
                        events.push(DashboardEvent::SelectCountry(country.clone()));
                    }
                }
            });
    });

    records_table(ui, "detail_table", state, &view.detail_indices, max_height);
}
