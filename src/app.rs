use eframe::egui::{self, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{overview, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct OlympicsDashboardApp {
    pub state: AppState,
    config: DashboardConfig,
}

impl OlympicsDashboardApp {
    pub fn new(state: AppState, config: DashboardConfig) -> Self {
        Self { state, config }
    }
}

impl eframe::App for OlympicsDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Widgets only queue events; they are applied once the frame is drawn.
        let mut events = Vec::new();
        let state = &self.state;
        let config = &self.config;

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, state, &mut events);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, state, &mut events);
            });

        // ---- Central panel: metrics, table, charts, details ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.heading(config.window_title.as_str());
                    ui.separator();

                    ui.heading("Overview");
                    overview::metrics(ui, state);
                    ui.add_space(8.0);

                    ui.heading("Data Table");
                    overview::records_table(
                        ui,
                        "data_table",
                        state,
                        &state.view.visible_indices,
                        config.table_height,
                    );
                    ui.separator();

                    ui.heading("Visualizations");
                    ui.strong("Medal Counts by Country");
                    plot::medals_by_country(ui, state, config.chart_height);
                    ui.add_space(8.0);

                    ui.strong("GDP vs Total Medals");
                    plot::gdp_vs_medals(ui, state, config.chart_height);
                    ui.add_space(8.0);

                    ui.strong("Medal Distribution by Region");
                    plot::region_distribution(ui, state, config.pie_size);
                    ui.separator();

                    ui.heading("Detailed Country Statistics");
                    overview::country_details(ui, state, config.detail_table_height, &mut events);
                });
        });

        if !events.is_empty() {
            for event in events {
                self.state.apply(event);
            }
            ctx.request_repaint();
        }
    }
}
