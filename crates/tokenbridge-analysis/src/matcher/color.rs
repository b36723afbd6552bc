//! Color matching by Euclidean RGB distance.

use tokenbridge_core::constants::MAX_RGB_DISTANCE;

use crate::catalog::ColorToken;
use crate::values::{self, Rgb};

/// Parsed catalog colors, parallel to the catalog table.
#[derive(Debug, Clone, Default)]
pub(super) struct ColorIndex {
    values: Vec<Option<Rgb>>,
}

impl ColorIndex {
    pub(super) fn new(tokens: &[ColorToken]) -> Self {
        Self {
            values: tokens.iter().map(|t| values::parse_hex(&t.value)).collect(),
        }
    }

    /// Position of the entry with exactly this hex value.
    pub(super) fn exact(&self, rgb: Rgb) -> Option<usize> {
        self.values.iter().position(|v| *v == Some(rgb))
    }

    /// Nearest entry whose normalized distance is below `max_distance`,
    /// with confidence `1 - distance`. Ties keep the first declared entry.
    pub(super) fn nearest(&self, rgb: Rgb, max_distance: f64) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, value) in self.values.iter().enumerate() {
            let Some(value) = value else { continue };
            let d = rgb.distance(value) / MAX_RGB_DISTANCE;
            if d >= max_distance {
                continue;
            }
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, d)| (i, 1.0 - d))
    }
}
