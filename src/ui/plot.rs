use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, GridInput, GridMark, Legend, Plot, PlotPoints, Points};

use crate::data::aggregate::RegionTotal;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Medal counts by country (bar)
// ---------------------------------------------------------------------------

/// One bar per country, sorted by total descending, coloured by region.
pub fn medals_by_country(ui: &mut Ui, state: &AppState, height: f32) {
    let totals = &state.view.country_totals;
    if totals.is_empty() {
        ui.label(RichText::new("No data for the current filters.").weak());
        return;
    }

    // One chart per region so the legend lists regions.
    let charts: Vec<BarChart> = state
        .view
        .region_totals
        .iter()
        .map(|rt| {
            let color = state.colors.color_for(&rt.region);
            let bars = totals
                .iter()
                .enumerate()
                .filter(|(_, t)| t.region == rt.region)
                .map(|(i, t)| {
                    Bar::new(i as f64, t.total as f64)
                        .name(&t.country)
                        .fill(color)
                        .width(0.8)
                })
                .collect();
            BarChart::new(bars)
                .name(&rt.region)
                .color(color)
                .element_formatter(Box::new(|bar: &Bar, _: &BarChart| {
                    format!("country: {}\ntotal: {}", bar.name, bar.value)
                }))
        })
        .collect();

    let labels: Vec<String> = totals.iter().map(|t| t.country.clone()).collect();
    let n_bars = labels.len();

    Plot::new("medals_by_country")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("country")
        .y_axis_label("total")
        .x_grid_spacer(move |input: GridInput| {
            bar_positions(input.bounds, n_bars)
                .into_iter()
                .map(|value| GridMark { value, step_size: 1.0 })
                .collect()
        })
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// x positions of the bars inside the visible `(min, max)`, one grid mark
/// (and so one country label) per bar.
pub fn bar_positions(bounds: (f64, f64), n_bars: usize) -> Vec<f64> {
    if n_bars == 0 {
        return Vec::new();
    }
    let first = bounds.0.ceil().max(0.0);
    let last = bounds.1.floor().min((n_bars - 1) as f64);
    if first > last {
        return Vec::new();
    }
    (first as usize..=last as usize).map(|i| i as f64).collect()
}

// ---------------------------------------------------------------------------
// GDP vs total medals (scatter)
// ---------------------------------------------------------------------------

struct ScatterPoint {
    country: String,
    region: String,
    gdp: f64,
    total: f64,
}

pub fn gdp_vs_medals(ui: &mut Ui, state: &AppState, height: f32) {
    let dataset = &state.dataset;
    let points: Vec<ScatterPoint> = state
        .view
        .visible_indices
        .iter()
        .map(|&i| &dataset.records[i])
        .filter_map(|r| {
            Some(ScatterPoint {
                country: r.country.clone(),
                region: r.region.clone(),
                gdp: r.gdp?,
                total: r.total as f64,
            })
        })
        .collect();

    if points.is_empty() {
        ui.label(RichText::new("No data for the current filters.").weak());
        return;
    }

    let series: Vec<Points> = state
        .view
        .region_totals
        .iter()
        .map(|rt| {
            let pts: PlotPoints = points
                .iter()
                .filter(|p| p.region == rt.region)
                .map(|p| [p.gdp, p.total])
                .collect();
            Points::new(pts)
                .name(&rt.region)
                .color(state.colors.color_for(&rt.region))
                .radius(4.5)
        })
        .collect();

    Plot::new("gdp_vs_medals")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("gdp")
        .y_axis_label("total")
        .label_formatter(move |name, value| {
            if name.is_empty() {
                return String::new();
            }
            points
                .iter()
                .filter(|p| p.region == name)
                .min_by(|a, b| {
                    let da = (a.gdp - value.x).abs() + (a.total - value.y).abs();
                    let db = (b.gdp - value.x).abs() + (b.total - value.y).abs();
                    da.total_cmp(&db)
                })
                .map(|p| format!("country: {}\ngdp: {}\ntotal: {}", p.country, p.gdp, p.total))
                .unwrap_or_default()
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for s in series {
                plot_ui.points(s);
            }
        });
}

// ---------------------------------------------------------------------------
// Medal distribution by region (pie)
// ---------------------------------------------------------------------------

/// Angular extent of one region, as offsets in `[0, TAU)` measured
/// clockwise from twelve o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub region: String,
    pub total: u64,
    pub start: f32,
    pub sweep: f32,
}

/// Slices in the order of `totals`. Empty when nothing was won.
pub fn pie_slices(totals: &[RegionTotal]) -> Vec<PieSlice> {
    let sum: u64 = totals.iter().map(|t| t.total).sum();
    if sum == 0 {
        return Vec::new();
    }
    let mut start = 0.0;
    totals
        .iter()
        .map(|t| {
            let sweep = t.total as f32 / sum as f32 * TAU;
            let slice = PieSlice {
                region: t.region.clone(),
                total: t.total,
                start,
                sweep,
            };
            start += sweep;
            slice
        })
        .collect()
}

/// Slice under screen angle `angle` (radians, `atan2(dy, dx)` with y down).
pub fn slice_at(slices: &[PieSlice], angle: f32) -> Option<usize> {
    let offset = (angle + FRAC_PI_2).rem_euclid(TAU);
    slices
        .iter()
        .position(|s| s.sweep > 0.0 && offset >= s.start && offset < s.start + s.sweep)
        // rounding can leave a sliver below TAU uncovered
        .or_else(|| slices.iter().rposition(|s| s.sweep > 0.0))
}

pub fn region_distribution(ui: &mut Ui, state: &AppState, size: f32) {
    let slices = pie_slices(&state.view.region_totals);
    if slices.is_empty() {
        ui.label(RichText::new("No medals in the current selection.").weak());
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
        let center = response.rect.center();
        let radius = size * 0.45;

        let hovered = response.hover_pos().and_then(|pos| {
            let d = pos - center;
            if d.length() > radius {
                return None;
            }
            slice_at(&slices, d.y.atan2(d.x))
        });

        for (i, s) in slices.iter().enumerate() {
            if s.sweep <= 0.0 {
                continue;
            }
            let color = state.colors.color_for(&s.region);
            let r = if hovered == Some(i) { radius * 1.05 } else { radius };
            // Fan of thin triangles; a slice wider than half the pie is not convex.
            let steps = (s.sweep / 0.05).ceil().max(1.0) as usize;
            for k in 0..steps {
                let a0 = s.start + s.sweep * k as f32 / steps as f32 - FRAC_PI_2;
                let a1 = s.start + s.sweep * (k + 1) as f32 / steps as f32 - FRAC_PI_2;
                painter.add(Shape::convex_polygon(
                    vec![center, center + r * Vec2::angled(a0), center + r * Vec2::angled(a1)],
                    color,
                    Stroke::NONE,
                ));
            }
        }

        if let Some(i) = hovered {
            let s = &slices[i];
            response.on_hover_text_at_pointer(format!("region: {}\ntotal: {}", s.region, s.total));
        }

        ui.vertical(|ui: &mut Ui| {
            for s in &slices {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new("■").color(state.colors.color_for(&s.region)));
                    ui.label(format!("{}  {}", s.region, s.total));
                });
            }
        });
    });
}
