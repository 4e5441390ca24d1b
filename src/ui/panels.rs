use std::ops::RangeInclusive;
use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::filter::RangeSelection;
use crate::state::{AppState, DashboardEvent};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Widget changes are queued in `events`.
pub fn side_panel(ui: &mut Ui, state: &AppState, events: &mut Vec<DashboardEvent>) {
    ui.heading("Filters");
    ui.separator();

    let dataset = &state.dataset;
    if dataset.is_empty() {
        ui.label("The loaded file has no rows.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Region multiselect ----
            let n_selected = state.params.regions.len();
            let n_total = dataset.regions.len();
            ui.strong(format!("Select Region(s)  ({n_selected}/{n_total})"));
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    events.push(DashboardEvent::SelectAllRegions);
                }
                if ui.small_button("None").clicked() {
                    events.push(DashboardEvent::ClearRegions);
                }
            });
            for region in &dataset.regions {
                let mut checked = state.params.regions.contains(region);
                let text = RichText::new(region).color(state.colors.color_for(region));
                if ui.checkbox(&mut checked, text).changed() {
                    events.push(DashboardEvent::ToggleRegion(region.clone()));
                }
            }
            ui.separator();

            // ---- Range sliders ----
            ui.strong("GDP Range (in billions)");
            if let Some((a, b)) =
                range_slider(ui, "gdp", state.params.gdp, dataset.gdp_bounds)
            {
                events.push(DashboardEvent::SetGdpRange(a, b));
            }
            ui.separator();

            ui.strong("Population Range (in millions)");
            if let Some((a, b)) = range_slider(
                ui,
                "population",
                state.params.population,
                dataset.population_bounds,
            ) {
                events.push(DashboardEvent::SetPopulationRange(a, b));
            }
            ui.separator();

            if ui.button("Reset filters").clicked() {
                events.push(DashboardEvent::ResetFilters);
            }
        });
}

/// Two sliders (min handle, max handle) over the observed bounds.
/// Returns the new ends when either handle moved.
fn range_slider(
    ui: &mut Ui,
    id: &str,
    current: RangeSelection,
    bounds: Option<(f64, f64)>,
) -> Option<(f64, f64)> {
    let Some((lo, hi)) = bounds else {
        ui.label(RichText::new("No values in this column.").weak());
        return None;
    };
    let range: RangeInclusive<f64> = lo..=hi;
    let mut min = current.min;
    let mut max = current.max;

    let changed = ui
        .push_id(id, |ui: &mut Ui| {
            let a = ui.add(Slider::new(&mut min, range.clone()).text("min"));
            let b = ui.add(Slider::new(&mut max, range).text("max"));
            a.changed() || b.changed()
        })
        .inner;

    changed.then_some((min, max))
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &AppState, events: &mut Vec<DashboardEvent>) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                if let Some(path) = open_file_dialog() {
                    events.push(DashboardEvent::Open(path));
                }
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                events.push(DashboardEvent::Reload);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{}: {} records loaded, {} visible",
            state.source_path.display(),
            state.dataset.len(),
            state.view.visible_indices.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open Olympics statistics")
        .add_filter("CSV", &["csv"])
        .pick_file()
}
