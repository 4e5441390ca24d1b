use std::collections::BTreeSet;

use super::model::{OlympicsDataset, Record};

// ---------------------------------------------------------------------------
// Filter parameters
// ---------------------------------------------------------------------------

/// An inclusive `[min, max]` selection over a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSelection {
    pub min: f64,
    pub max: f64,
}

impl RangeSelection {
    /// Build a range, swapping the ends if they arrive inverted.
    pub fn new(a: f64, b: f64) -> Self {
        RangeSelection {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Range covering observed `bounds`, or `[0, 0]` for an all-missing column.
    pub fn full(bounds: Option<(f64, f64)>) -> Self {
        let (min, max) = bounds.unwrap_or((0.0, 0.0));
        RangeSelection { min, max }
    }

    /// Inclusive on both ends. A missing value is never contained.
    pub fn contains(&self, value: Option<f64>) -> bool {
        value.is_some_and(|v| self.min <= v && v <= self.max)
    }
}

/// The three predicates of the filter stage, combined with AND.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    pub regions: BTreeSet<String>,
    pub gdp: RangeSelection,
    pub population: RangeSelection,
}

impl FilterParams {
    /// All regions selected, both ranges spanning the observed bounds.
    pub fn defaults_for(dataset: &OlympicsDataset) -> Self {
        FilterParams {
            regions: dataset.regions.iter().cloned().collect(),
            gdp: RangeSelection::full(dataset.gdp_bounds),
            population: RangeSelection::full(dataset.population_bounds),
        }
    }

    /// Whether a single record passes every predicate.
    pub fn matches(&self, record: &Record) -> bool {
        self.regions.contains(&record.region)
            && self.gdp.contains(record.gdp)
            && self.population.contains(record.population)
    }
}

/// Return indices of records that pass the filters, in input order.
///
/// An empty region set matches nothing.
pub fn filtered_indices(dataset: &OlympicsDataset, params: &FilterParams) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| params.matches(r))
        .map(|(i, _)| i)
        .collect()
}
