//! Radius matching by pixel difference with a relative allowance.

use tokenbridge_core::config::MatchThresholds;

use crate::catalog::BorderRadiusToken;
use crate::values;

/// The framework's default `rounded-*` scale.
const DEFAULT_SCALE: &[(&str, &str)] = &[
    ("rounded-sm", "2px"),
    ("rounded", "4px"),
    ("rounded-md", "6px"),
    ("rounded-lg", "8px"),
    ("rounded-xl", "12px"),
    ("rounded-2xl", "16px"),
    ("rounded-3xl", "24px"),
];

/// Pixel value of a default-scale radius class.
pub(super) fn default_class_px(class: &str) -> Option<&'static str> {
    DEFAULT_SCALE
        .iter()
        .find(|(name, _)| *name == class)
        .map(|&(_, px)| px)
}

#[derive(Debug, Clone, Default)]
pub(super) struct RadiusIndex {
    px: Vec<Option<f64>>,
}

impl RadiusIndex {
    pub(super) fn new(tokens: &[BorderRadiusToken]) -> Self {
        Self {
            px: tokens.iter().map(|t| values::to_px(&t.value)).collect(),
        }
    }

    pub(super) fn exact(&self, px: f64) -> Option<usize> {
        self.px
            .iter()
            .position(|v| v.is_some_and(|v| (v - px).abs() < f64::EPSILON))
    }

    /// Best entry by `max(0, 1 - diff / allowance)`, accepted above the
    /// configured minimum. The allowance is `max(min_px, relative * px)`.
    pub(super) fn nearest(&self, px: f64, th: &MatchThresholds) -> Option<(usize, f64)> {
        let allowance = th
            .radius_min_allowance_px
            .max(th.radius_relative_allowance * px);
        let mut best: Option<(usize, f64)> = None;
        for (i, value) in self.px.iter().enumerate() {
            let Some(value) = value else { continue };
            let confidence = (1.0 - (value - px).abs() / allowance).max(0.0);
            if confidence <= th.radius_min_confidence {
                continue;
            }
            if best.map_or(true, |(_, bc)| confidence > bc) {
                best = Some((i, confidence));
            }
        }
        best
    }
}
