use std::collections::HashSet;

use super::model::OlympicsDataset;

/// Distinct countries of the filtered rows, in first-appearance order.
pub fn country_options(dataset: &OlympicsDataset, filtered: &[usize]) -> Vec<String> {
    let mut seen = HashSet::new();
    filtered
        .iter()
        .map(|&i| &dataset.records[i].country)
        .filter(|c| seen.insert(c.as_str()))
        .cloned()
        .collect()
}

/// Re-check a country selection against the current options.
///
/// A stale choice falls back to the first option, like a select control
/// whose previous value disappeared. No options means no selection.
pub fn validate_selection(requested: Option<&str>, options: &[String]) -> Option<String> {
    match requested {
        Some(c) if options.iter().any(|o| o == c) => Some(c.to_string()),
        _ => options.first().cloned(),
    }
}

/// Indices of the filtered rows belonging to `country`.
pub fn country_rows(dataset: &OlympicsDataset, filtered: &[usize], country: &str) -> Vec<usize> {
    filtered
        .iter()
        .copied()
        .filter(|&i| dataset.records[i].country == country)
        .collect()
}
