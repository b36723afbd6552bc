//! Scoring helpers shared by the approximate matchers.

use tokenbridge_core::constants::CONTAINMENT_SIMILARITY;

/// `1 - |a - b| / tolerance`, clamped to `[0, 1]`.
pub fn clamped_score(a: f64, b: f64, tolerance: f64) -> f64 {
    if tolerance <= 0.0 {
        return if a == b { 1.0 } else { 0.0 };
    }
    (1.0 - (a - b).abs() / tolerance).clamp(0.0, 1.0)
}

/// Similarity of two class names. Equal names score 1, containment scores
/// [`CONTAINMENT_SIMILARITY`], otherwise the fraction of `source` characters
/// that appear anywhere in `target`.
pub fn class_similarity(source: &str, target: &str) -> f64 {
    if source.is_empty() || target.is_empty() {
        return 0.0;
    }
    if source == target {
        return 1.0;
    }
    if target.contains(source) || source.contains(target) {
        return CONTAINMENT_SIMILARITY;
    }
    let total = source.chars().count();
    let found = source.chars().filter(|c| target.contains(*c)).count();
    found as f64 / total as f64
}
