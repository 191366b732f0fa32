use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::CellValue;

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
// Color mapping: status value → Color32
// ---------------------------------------------------------------------------

/// Maps the unique values of a status column to distinct colours, so the
/// distribution chart stays stable while the user navigates sections.
#[derive(Debug, Clone, Default)]
pub struct StatusColors {
    mapping: BTreeMap<CellValue, Color32>,
}

impl StatusColors {
    /// Build a colour map from the distinct values of a column. Input order
    /// does not matter; hues are assigned in sorted value order.
    pub fn new<'a>(values: impl Iterator<Item = &'a CellValue>) -> Self {
        let unique: std::collections::BTreeSet<&CellValue> = values.collect();
        let palette = generate_palette(unique.len());
        let mapping = unique
            .into_iter()
            .zip(palette)
            .map(|(v, c)| (v.clone(), c))
            .collect();
        StatusColors { mapping }
    }

    pub fn color_for(&self, value: &CellValue) -> Color32 {
        self.mapping.get(value).copied().unwrap_or(Color32::GRAY)
    }
}
