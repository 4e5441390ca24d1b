use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{OlympicsDataset, Record};

/// Columns every input file must carry (exact, case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 5] = ["country", "region", "gdp", "population", "total"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    #[error("line {line}, column '{column}': '{value}' is not {expected}")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
        expected: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the dashboard table from a CSV file.
pub fn load_file(path: &Path) -> Result<OlympicsDataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_csv(file)
}

/// CSV layout: header row with column names, at least the
/// [`REQUIRED_COLUMNS`]. Any other column is carried through as text.
///
/// Empty `gdp` / `population` cells load as missing values; every other
/// malformed numeric cell is an error.
pub fn read_csv<R: Read>(input: R) -> Result<OlympicsDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut idx = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))?;
    }
    let [country_idx, region_idx, gdp_idx, population_idx, total_idx] = idx;

    let extra_idx: Vec<usize> = (0..headers.len())
        .filter(|i| !idx.contains(i))
        .collect();
    let extra_columns = extra_idx.iter().map(|&i| headers[i].clone()).collect();

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        // The csv reader rejects rows whose length differs from the header.
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        records.push(Record {
            country: cell(country_idx).to_string(),
            region: cell(region_idx).to_string(),
            gdp: parse_optional_float(cell(gdp_idx), line, "gdp")?,
            population: parse_optional_float(cell(population_idx), line, "population")?,
            total: parse_count(cell(total_idx), line, "total")?,
            extra: extra_idx.iter().map(|&i| cell(i).to_string()).collect(),
        });
    }

    Ok(OlympicsDataset::from_records(records, extra_columns))
}

fn parse_optional_float(
    s: &str,
    line: u64,
    column: &'static str,
) -> Result<Option<f64>, LoadError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(LoadError::InvalidValue {
            line,
            column,
            value: s.to_string(),
            expected: "a number",
        }),
    }
}

fn parse_count(s: &str, line: u64, column: &'static str) -> Result<u32, LoadError> {
    s.trim().parse::<u32>().map_err(|_| LoadError::InvalidValue {
        line,
        column,
        value: s.to_string(),
        expected: "a medal count (0 to 4294967295)",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
country,region,gdp,population,total
USA,Americas,21000,331,113
CHN,Asia,14000,1441,88
";

    #[test]
    fn reads_required_columns() {
        let ds = read_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0], Record::new("USA", "Americas", 21000.0, 331.0, 113));
        assert_eq!(ds.records[1], Record::new("CHN", "Asia", 14000.0, 1441.0, 88));
        assert!(ds.extra_columns.is_empty());
    }

    #[test]
    fn keeps_extra_columns_in_file_order() {
        let csv = "\
gold,country,region,gdp,population,total,code
39,USA,Americas,21000,331,113,US
";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.extra_columns, vec!["gold", "code"]);
        assert_eq!(ds.records[0].extra, vec!["39", "US"]);
        assert_eq!(ds.records[0].total, 113);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "country,region,gdp,total\nUSA,Americas,21000,113\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("population")));
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let csv = "Country,region,gdp,population,total\nUSA,Americas,1,1,1\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("country")));
    }

    #[test]
    fn empty_numeric_cells_load_as_missing() {
        let csv = "country,region,gdp,population,total\nPRK,Asia,, ,2\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].gdp, None);
        assert_eq!(ds.records[0].population, None);
        assert_eq!(ds.gdp_bounds, None);
    }

    #[test]
    fn non_numeric_gdp_is_an_error() {
        let csv = "country,region,gdp,population,total\nUSA,Americas,n/a,331,113\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidValue { line, column, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, "gdp");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nan_gdp_is_an_error() {
        let csv = "country,region,gdp,population,total\nUSA,Americas,NaN,331,113\n";
        assert!(matches!(
            read_csv(csv.as_bytes()),
            Err(LoadError::InvalidValue { column: "gdp", .. })
        ));
    }

    #[test]
    fn negative_or_empty_total_is_an_error() {
        for total in ["-1", "", "3.5"] {
            let csv = format!("country,region,gdp,population,total\nUSA,Americas,1,1,{total}\n");
            assert!(matches!(
                read_csv(csv.as_bytes()),
                Err(LoadError::InvalidValue { column: "total", .. })
            ));
        }
    }

    #[test]
    fn total_beyond_medal_count_range_is_an_error() {
        let csv = "country,region,gdp,population,total\nUSA,Americas,1,1,4294967296\n";
        assert!(matches!(
            read_csv(csv.as_bytes()),
            Err(LoadError::InvalidValue { column: "total", .. })
        ));
        let csv = "country,region,gdp,population,total\nUSA,Americas,1,1,4294967295\n";
        assert_eq!(read_csv(csv.as_bytes()).unwrap().records[0].total, u32::MAX);
    }

    #[test]
    fn ragged_row_is_an_error() {
        let csv = "country,region,gdp,population,total\nUSA,Americas,1,1\n";
        assert!(matches!(read_csv(csv.as_bytes()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn bundled_sample_loads() {
        let ds = read_csv(include_str!("../../olympics.csv").as_bytes()).unwrap();
        assert_eq!(ds.len(), 30);
        assert_eq!(ds.extra_columns, vec!["gold", "silver", "bronze"]);
        assert_eq!(ds.regions, vec!["Americas", "Asia", "Europe", "Oceania", "Africa"]);
        assert!(ds.records.iter().all(|r| r.gdp.is_some() && r.population.is_some()));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(SAMPLE.as_bytes()).unwrap();
        let ds = load_file(tmp.path()).unwrap();
        assert_eq!(ds.regions, vec!["Americas", "Asia"]);
    }

    #[test]
    fn load_file_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("olympics.csv");
        let err = load_file(&path).unwrap_err();
        match &err {
            LoadError::Open { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("olympics.csv"));
    }
}
