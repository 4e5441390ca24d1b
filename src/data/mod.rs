/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   olympics.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → OlympicsDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ OlympicsDataset │  Vec<Record>, regions, column bounds
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  region / gdp / population predicates → indices
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌───────────┐  ┌──────────┐
///   │ aggregate  │  │  detail   │  per-country lookup
///   └───────────┘  └──────────┘
/// ```

pub mod aggregate;
pub mod detail;
pub mod filter;
pub mod loader;
pub mod model;
