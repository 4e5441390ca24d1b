use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{FromColor, Hsl, Srgb};

// ---------------------------------------------------------------------------
// Region palette
// ---------------------------------------------------------------------------

/// Hue step between consecutive regions, in degrees.
const GOLDEN_ANGLE: f32 = 137.508;
/// Hue of the first region.
const BASE_HUE: f32 = 210.0;

/// `n` region colours. Hues advance by the golden angle so any prefix of
/// the palette stays well spread; odd entries are a shade darker so that
/// neighbouring hues differ in lightness too.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (BASE_HUE + i as f32 * GOLDEN_ANGLE) % 360.0;
            let lightness = if i % 2 == 0 { 0.58 } else { 0.46 };
            let rgb = Srgb::from_color(Hsl::new(hue, 0.7, lightness)).into_format::<u8>();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Region → Color32
// ---------------------------------------------------------------------------

/// Assigns every region of the dataset a fixed colour, so a region keeps
/// its colour in all charts whatever the filters are.
#[derive(Debug, Clone, Default)]
pub struct RegionColors {
    mapping: BTreeMap<String, Color32>,
}

impl RegionColors {
    /// Colours are assigned in the order `regions` are given.
    pub fn new(regions: &[String]) -> Self {
        let mapping = regions
            .iter()
            .cloned()
            .zip(generate_palette(regions.len()))
            .collect();
        RegionColors { mapping }
    }

    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping.get(region).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(8);
        assert_eq!(p.len(), 8);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn first_colours_do_not_depend_on_palette_length() {
        assert_eq!(generate_palette(3)[..], generate_palette(6)[..3]);
    }

    #[test]
    fn unknown_region_is_gray() {
        let colors = RegionColors::new(&["Asia".to_string(), "Europe".to_string()]);
        assert_ne!(colors.color_for("Asia"), colors.color_for("Europe"));
        assert_eq!(colors.color_for("Atlantis"), Color32::GRAY);
    }
}
