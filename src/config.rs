use std::path::PathBuf;

/// Startup settings. Fixed at compile time; nothing is read from the
/// environment or from disk.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CSV source, relative to the working directory.
    pub data_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Height of the bar and scatter charts.
    pub chart_height: f32,
    /// Diameter of the pie chart.
    pub pie_size: f32,
    /// Height of the scrollable data table.
    pub table_height: f32,
    /// Height of the selected country's detail table.
    pub detail_table_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("olympics.csv"),
            window_title: "Olympics Statistics Dashboard".to_string(),
            window_size: [1280.0, 900.0],
            min_window_size: [720.0, 480.0],
            chart_height: 400.0,
            pie_size: 360.0,
            table_height: 260.0,
            detail_table_height: 160.0,
        }
    }
}
