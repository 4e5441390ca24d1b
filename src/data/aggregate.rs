use std::collections::{BTreeMap, HashMap};

use super::model::Record;

// ---------------------------------------------------------------------------
// Scalar summaries
// ---------------------------------------------------------------------------

/// The three overview metrics of a filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_medals: u64,
    /// `None` when there is no GDP value to average.
    pub avg_gdp: Option<f64>,
    /// `None` when there is no population value to average.
    pub avg_population: Option<f64>,
}

/// Sum of medals and means of GDP and population over `records`.
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a Record> + Clone) -> Summary {
    Summary {
        total_medals: records.clone().into_iter().map(|r| u64::from(r.total)).sum(),
        avg_gdp: mean(records.clone().into_iter().filter_map(|r| r.gdp)),
        avg_population: mean(records.into_iter().filter_map(|r| r.population)),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

// ---------------------------------------------------------------------------
// Grouped sums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTotal {
    pub region: String,
    pub total: u64,
}

/// Medal totals per region present in `records`, ordered by region name.
pub fn region_totals<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<RegionTotal> {
    let mut sums: BTreeMap<&str, u64> = BTreeMap::new();
    for r in records {
        *sums.entry(r.region.as_str()).or_default() += u64::from(r.total);
    }
    sums.into_iter()
        .map(|(region, total)| RegionTotal {
            region: region.to_string(),
            total,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTotal {
    pub country: String,
    /// Region of the country's first row.
    pub region: String,
    pub total: u64,
}

/// Medal totals per country, highest first. Ties keep first-appearance order.
pub fn country_totals<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<CountryTotal> {
    let mut out: Vec<CountryTotal> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();
    for r in records {
        match slot.get(r.country.as_str()) {
            Some(&i) => out[i].total += u64::from(r.total),
            None => {
                slot.insert(r.country.as_str(), out.len());
                out.push(CountryTotal {
                    country: r.country.clone(),
                    region: r.region.clone(),
                    total: u64::from(r.total),
                });
            }
        }
    }
    // `out` is in first-appearance order and `sort_by` is stable, so equal
    // totals keep that order.
    out.sort_by(|a, b| b.total.cmp(&a.total));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usa_chn() -> Vec<Record> {
        vec![
            Record::new("USA", "Americas", 21000.0, 331.0, 113),
            Record::new("CHN", "Asia", 14000.0, 1441.0, 88),
        ]
    }

    #[test]
    fn summary_of_both_rows() {
        let rows = usa_chn();
        let s = summarize(&rows);
        assert_eq!(s.total_medals, 201);
        assert_eq!(s.avg_gdp, Some(17500.0));
        assert_eq!(s.avg_population, Some(886.0));
        assert_eq!(
            region_totals(&rows),
            vec![
                RegionTotal { region: "Americas".into(), total: 113 },
                RegionTotal { region: "Asia".into(), total: 88 },
            ]
        );
    }

    #[test]
    fn empty_set_has_zero_total_and_no_means() {
        let rows: Vec<Record> = Vec::new();
        let s = summarize(&rows);
        assert_eq!(s.total_medals, 0);
        assert_eq!(s.avg_gdp, None);
        assert_eq!(s.avg_population, None);
        assert!(region_totals(&rows).is_empty());
        assert!(country_totals(&rows).is_empty());
    }

    #[test]
    fn means_skip_missing_values() {
        let mut rows = usa_chn();
        rows[1].gdp = None;
        let s = summarize(&rows);
        assert_eq!(s.avg_gdp, Some(21000.0));
        assert_eq!(s.total_medals, 201);
    }

    #[test]
    fn grouped_sums_equal_total() {
        let rows = vec![
            Record::new("USA", "Americas", 21000.0, 331.0, 113),
            Record::new("CHN", "Asia", 14000.0, 1441.0, 88),
            Record::new("JPN", "Asia", 5000.0, 126.0, 58),
            Record::new("BRA", "Americas", 1400.0, 212.0, 21),
            Record::new("GBR", "Europe", 2800.0, 67.0, 65),
        ];
        let total = summarize(&rows).total_medals;
        let by_region: u64 = region_totals(&rows).iter().map(|t| t.total).sum();
        let by_country: u64 = country_totals(&rows).iter().map(|t| t.total).sum();
        assert_eq!(by_region, total);
        assert_eq!(by_country, total);
        assert_eq!(region_totals(&rows).len(), 3);
    }

    #[test]
    fn largest_counts_sum_without_overflow() {
        let rows = vec![
            Record::new("USA", "Americas", 21000.0, 331.0, u32::MAX),
            Record::new("USA", "Americas", 21000.0, 331.0, u32::MAX),
            Record::new("CAN", "Americas", 1600.0, 38.0, 1),
        ];
        let expected = 2 * u64::from(u32::MAX) + 1;
        assert_eq!(summarize(&rows).total_medals, expected);
        assert_eq!(region_totals(&rows)[0].total, expected);
        assert_eq!(country_totals(&rows)[0].total, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn country_totals_merge_repeated_countries_and_sort_descending() {
        let rows = vec![
            Record::new("GBR", "Europe", 2800.0, 67.0, 30),
            Record::new("CHN", "Asia", 14000.0, 1441.0, 88),
            Record::new("GBR", "Europe", 2800.0, 67.0, 35),
            Record::new("AUS", "Oceania", 1400.0, 25.0, 46),
            Record::new("NED", "Europe", 900.0, 17.0, 46),
        ];
        let names: Vec<(String, u64)> = country_totals(&rows)
            .into_iter()
            .map(|t| (t.country, t.total))
            .collect();
        let expected = [("CHN", 88), ("GBR", 65), ("AUS", 46), ("NED", 46)];
        assert_eq!(
            names,
            expected.map(|(c, t)| (c.to_string(), t)).to_vec()
        );
    }
}
