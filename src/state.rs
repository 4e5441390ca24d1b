use std::path::{Path, PathBuf};

use crate::color::RegionColors;
use crate::data::filter::{FilterParams, RangeSelection};
use crate::data::loader::{LoadError, load_file};
use crate::data::model::OlympicsDataset;
use crate::view::{self, ViewModel};

// ---------------------------------------------------------------------------
// Events emitted by the widgets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    ToggleRegion(String),
    SelectAllRegions,
    ClearRegions,
    SetGdpRange(f64, f64),
    SetPopulationRange(f64, f64),
    SelectCountry(String),
    ResetFilters,
    /// Replace the dataset with another CSV file.
    Open(PathBuf),
    /// Re-read the current CSV file.
    Reload,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table; read-only between explicit open / reload events.
    pub dataset: OlympicsDataset,

    /// File the dataset was read from.
    pub source_path: PathBuf,

    /// Current filter selections.
    pub params: FilterParams,

    /// Output of the latest pass.
    pub view: ViewModel,

    /// Region colours shared by every chart.
    pub colors: RegionColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest the dataset loaded at startup and run the first pass.
    pub fn new(dataset: OlympicsDataset, source_path: PathBuf) -> Self {
        let params = FilterParams::defaults_for(&dataset);
        let view = view::render(&dataset, &params, None);
        let colors = RegionColors::new(&dataset.regions);
        Self {
            dataset,
            source_path,
            params,
            view,
            colors,
            status_message: None,
        }
    }

    /// Apply one event and recompute the view.
    pub fn apply(&mut self, event: DashboardEvent) {
        log::trace!("event: {event:?}");
        let mut requested = self.view.selected_country.clone();

        match event {
            DashboardEvent::ToggleRegion(region) => {
                if !self.params.regions.remove(&region) {
                    self.params.regions.insert(region);
                }
            }
            DashboardEvent::SelectAllRegions => {
                self.params.regions = self.dataset.regions.iter().cloned().collect();
            }
            DashboardEvent::ClearRegions => self.params.regions.clear(),
            DashboardEvent::SetGdpRange(a, b) => self.params.gdp = RangeSelection::new(a, b),
            DashboardEvent::SetPopulationRange(a, b) => {
                self.params.population = RangeSelection::new(a, b)
            }
            DashboardEvent::SelectCountry(country) => requested = Some(country),
            DashboardEvent::ResetFilters => {
                self.params = FilterParams::defaults_for(&self.dataset);
            }
            DashboardEvent::Open(path) => {
                self.replace_from(&path);
                return;
            }
            DashboardEvent::Reload => {
                let path = self.source_path.clone();
                self.replace_from(&path);
                return;
            }
        }

        self.refresh(requested.as_deref());
    }

    /// Recompute the view from the current parameters.
    fn refresh(&mut self, requested: Option<&str>) {
        self.view = view::render(&self.dataset, &self.params, requested);
        if let Some(req) = requested {
            if self.view.selected_country.as_deref() != Some(req) {
                log::warn!(
                    "country '{req}' is no longer in the filtered set, showing {:?}",
                    self.view.selected_country
                );
            }
        }
    }

    fn replace_from(&mut self, path: &Path) {
        match load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records from {} ({} regions)",
                    dataset.len(),
                    path.display(),
                    dataset.regions.len()
                );
                *self = AppState::new(dataset, path.to_path_buf());
            }
            Err(e) => self.report_load_error(&e),
        }
    }

    fn report_load_error(&mut self, e: &LoadError) {
        log::error!("Failed to load file: {e}");
        self.status_message = Some(format!("Error: {e}"));
    }
}
