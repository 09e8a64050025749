use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: size label → Color32
// ---------------------------------------------------------------------------

/// Maps the dataset's size labels to distinct colours, shared between the
/// filter checkboxes and the per-size chart series.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the sorted size labels.
    pub fn new(sizes: &[String]) -> Self {
        let palette = generate_palette(sizes.len());
        let mapping: BTreeMap<String, Color32> = sizes
            .iter()
            .zip(palette.into_iter())
            .map(|(label, c): (&String, Color32)| (label.clone(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given size label.
    pub fn color_for(&self, size: &str) -> Color32 {
        self.mapping
            .get(size)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colors() {
        let palette = generate_palette(5);
        assert_eq!(palette.len(), 5);
        for (i, a) in palette.iter().enumerate() {
            for b in palette.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_size_falls_back_to_default() {
        let map = ColorMap::new(&["L".to_string(), "M".to_string()]);
        assert_ne!(map.color_for("L"), map.color_for("M"));
        assert_eq!(map.color_for("XXL"), Color32::GRAY);
    }
}
