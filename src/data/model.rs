use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// One country's statistics (one row of `olympics.csv`).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub country: String,
    pub region: String,
    /// GDP in billions. `None` when the cell was empty.
    pub gdp: Option<f64>,
    /// Population in millions. `None` when the cell was empty.
    pub population: Option<f64>,
    /// Total medal count. Sums over records are taken in `u64`.
    pub total: u32,
    /// Cells of the non-required columns, in the order of
    /// [`OlympicsDataset::extra_columns`].
    pub extra: Vec<String>,
}

impl Record {
    /// Convenience constructor for a record without extra columns.
    pub fn new(country: &str, region: &str, gdp: f64, population: f64, total: u32) -> Self {
        Record {
            country: country.to_string(),
            region: region.to_string(),
            gdp: Some(gdp),
            population: Some(population),
            total,
            extra: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// OlympicsDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with values pre-computed at load time.
#[derive(Debug, Clone, Default)]
pub struct OlympicsDataset {
    /// All records in file order.
    pub records: Vec<Record>,
    /// Names of columns beyond the five required ones.
    pub extra_columns: Vec<String>,
    /// Distinct regions in first-appearance order.
    pub regions: Vec<String>,
    /// Observed `(min, max)` of the present GDP values.
    pub gdp_bounds: Option<(f64, f64)>,
    /// Observed `(min, max)` of the present population values.
    pub population_bounds: Option<(f64, f64)>,
}

impl OlympicsDataset {
    /// Build the region index and column bounds from loaded records.
    pub fn from_records(records: Vec<Record>, extra_columns: Vec<String>) -> Self {
        let mut seen = BTreeSet::new();
        let regions = records
            .iter()
            .filter(|r| seen.insert(r.region.as_str()))
            .map(|r| r.region.clone())
            .collect();

        let gdp_bounds = bounds(records.iter().filter_map(|r| r.gdp));
        let population_bounds = bounds(records.iter().filter_map(|r| r.population));

        OlympicsDataset {
            records,
            extra_columns,
            regions,
            gdp_bounds,
            population_bounds,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
