use crate::data::aggregate::{self, CountryTotal, RegionTotal, Summary};
use crate::data::detail;
use crate::data::filter::{FilterParams, filtered_indices};
use crate::data::model::OlympicsDataset;

// ---------------------------------------------------------------------------
// ViewModel – everything one pass hands to the renderer
// ---------------------------------------------------------------------------

/// Result of one recomputation pass. Rebuilt from scratch on every event.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// Indices of records passing the filters, in file order.
    pub visible_indices: Vec<usize>,
    pub summary: Summary,
    pub region_totals: Vec<RegionTotal>,
    /// Bar chart data, highest total first.
    pub country_totals: Vec<CountryTotal>,
    /// Countries the detail selector may offer.
    pub country_options: Vec<String>,
    /// Validated detail selection.
    pub selected_country: Option<String>,
    /// Rows of `selected_country` within the filtered set.
    pub detail_indices: Vec<usize>,
}

/// Run filter, aggregation and detail lookup for one pass.
pub fn render(
    dataset: &OlympicsDataset,
    params: &FilterParams,
    requested_country: Option<&str>,
) -> ViewModel {
    let visible_indices = filtered_indices(dataset, params);
    let records = &dataset.records;
    let visible = &visible_indices;
    let rows = move || visible.iter().map(move |&i| &records[i]);

    let country_options = detail::country_options(dataset, &visible_indices);
    let selected_country = detail::validate_selection(requested_country, &country_options);
    let detail_indices = selected_country
        .as_deref()
        .map(|c| detail::country_rows(dataset, &visible_indices, c))
        .unwrap_or_default();

    log::debug!(
        "pass: {} of {} records visible, {} regions selected",
        visible_indices.len(),
        dataset.len(),
        params.regions.len()
    );

    ViewModel {
        summary: aggregate::summarize(rows()),
        region_totals: aggregate::region_totals(rows()),
        country_totals: aggregate::country_totals(rows()),
        country_options,
        selected_country,
        detail_indices,
        visible_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn usa_chn() -> OlympicsDataset {
        OlympicsDataset::from_records(
            vec![
                Record::new("USA", "Americas", 21000.0, 331.0, 113),
                Record::new("CHN", "Asia", 14000.0, 1441.0, 88),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn both_regions_full_ranges() {
        let ds = usa_chn();
        let params = FilterParams::defaults_for(&ds);
        let view = render(&ds, &params, None);

        assert_eq!(view.visible_indices, vec![0, 1]);
        assert_eq!(view.summary.total_medals, 201);
        assert_eq!(crate::format::thousands(view.summary.avg_gdp.unwrap(), 2), "17,500.00");
        assert_eq!(
            view.region_totals,
            vec![
                RegionTotal { region: "Americas".into(), total: 113 },
                RegionTotal { region: "Asia".into(), total: 88 },
            ]
        );
        assert_eq!(view.selected_country.as_deref(), Some("USA"));
        assert_eq!(view.detail_indices, vec![0]);
    }

    #[test]
    fn asia_only() {
        let ds = usa_chn();
        let mut params = FilterParams::defaults_for(&ds);
        params.regions = ["Asia".to_string()].into();
        let view = render(&ds, &params, None);

        assert_eq!(view.visible_indices, vec![1]);
        assert_eq!(view.summary.total_medals, 88);
        assert_eq!(
            view.region_totals,
            vec![RegionTotal { region: "Asia".into(), total: 88 }]
        );
    }

    #[test]
    fn no_regions_renders_empty_state() {
        let ds = usa_chn();
        let mut params = FilterParams::defaults_for(&ds);
        params.regions.clear();
        let view = render(&ds, &params, Some("USA"));

        assert!(view.visible_indices.is_empty());
        assert_eq!(view.summary.total_medals, 0);
        assert_eq!(view.summary.avg_gdp, None);
        assert!(view.region_totals.is_empty());
        assert!(view.country_options.is_empty());
        assert_eq!(view.selected_country, None);
        assert!(view.detail_indices.is_empty());
    }

    #[test]
    fn filtered_out_selection_is_revalidated() {
        let ds = usa_chn();
        let mut params = FilterParams::defaults_for(&ds);
        params.regions = ["Asia".to_string()].into();
        let view = render(&ds, &params, Some("USA"));

        assert_eq!(view.country_options, vec!["CHN"]);
        assert_eq!(view.selected_country.as_deref(), Some("CHN"));
        assert_eq!(view.detail_indices, vec![1]);
    }

    #[test]
    fn repeated_passes_are_identical() {
        let ds = usa_chn();
        let params = FilterParams::defaults_for(&ds);
        let a = render(&ds, &params, Some("CHN"));
        let b = render(&ds, &params, Some("CHN"));
        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }
}
