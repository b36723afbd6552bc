//! Shadow matching on the first shadow layer.

use tokenbridge_core::config::MatchThresholds;

use super::similarity::clamped_score;
use crate::catalog::ShadowToken;
use crate::values::{self, ShadowLayer};

#[derive(Debug, Clone, Default)]
pub(super) struct ShadowIndex {
    normalized: Vec<String>,
    layers: Vec<Option<ShadowLayer>>,
}

impl ShadowIndex {
    pub(super) fn new(tokens: &[ShadowToken]) -> Self {
        Self {
            normalized: tokens.iter().map(|t| values::normalize_shadow(&t.value)).collect(),
            layers: tokens
                .iter()
                .map(|t| values::first_shadow_layer(&t.value))
                .collect(),
        }
    }

    /// Entry whose normalized text equals `normalized`.
    pub(super) fn exact(&self, normalized: &str) -> Option<usize> {
        self.normalized.iter().position(|v| v == normalized)
    }

    pub(super) fn nearest(&self, raw: &str, th: &MatchThresholds) -> Option<(usize, f64)> {
        let input = values::first_shadow_layer(raw)?;
        let mut best: Option<(usize, f64)> = None;
        for (i, layer) in self.layers.iter().enumerate() {
            let Some(layer) = layer else { continue };
            let score = similarity(&input, layer, th);
            if score <= th.shadow_min_similarity {
                continue;
            }
            if best.map_or(true, |(_, bs)| score > bs) {
                best = Some((i, score));
            }
        }
        best
    }
}

/// Mean of clamped per-field scores for x, y, blur, and opacity. Opacity is
/// left out when either side has none. Spread and inset are not compared.
pub fn similarity(a: &ShadowLayer, b: &ShadowLayer, th: &MatchThresholds) -> f64 {
    let mut total = clamped_score(a.x, b.x, th.shadow_offset_tolerance_px)
        + clamped_score(a.y, b.y, th.shadow_offset_tolerance_px)
        + clamped_score(a.blur, b.blur, th.shadow_blur_tolerance_px);
    let mut fields = 3.0;
    if let (Some(oa), Some(ob)) = (a.opacity, b.opacity) {
        total += clamped_score(oa, ob, th.shadow_opacity_tolerance);
        fields += 1.0;
    }
    total / fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(s: &str) -> ShadowLayer {
        values::first_shadow_layer(s).unwrap()
    }

    #[test]
    fn test_small_opacity_delta_is_close() {
        let th = MatchThresholds::default();
        let score = similarity(
            &layer("0px 1px 3px 0px rgba(0,0,0,0.11)"),
            &layer("0px 1px 3px 0px rgba(0, 0, 0, 0.10)"),
            &th,
        );
        assert!(score > 0.99);
    }

    #[test]
    fn test_rgb_drops_opacity_term() {
        let th = MatchThresholds::default();
        let score = similarity(&layer("0 0 0 rgb(0,0,0)"), &layer("10px 0 0 rgba(0,0,0,1)"), &th);
        // x scores 0, y and blur score 1
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }
}
