//! Matching thresholds and semantic alias configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::TokenCategory;

/// Configuration for the token matcher. Unset fields fall back to the
/// constants in [`crate::constants`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchingConfig {
    /// Normalized RGB distance below which colors match. Default: 0.1.
    pub color_max_distance: Option<f64>,
    /// Minimum radius allowance in px. Default: 4.
    pub radius_min_allowance_px: Option<f64>,
    /// Radius allowance relative to the input. Default: 0.25.
    pub radius_relative_allowance: Option<f64>,
    /// Radius confidence must exceed this. Default: 0.7.
    pub radius_min_confidence: Option<f64>,
    /// Shadow similarity must exceed this. Default: 0.7.
    pub shadow_min_similarity: Option<f64>,
    /// Typography group score must exceed this. Default: 0.5.
    pub typography_min_score: Option<f64>,
    /// Class-name similarity must exceed this. Default: 0.7.
    pub class_name_min_similarity: Option<f64>,
    /// Extra semantic aliases, appended to the built-in table.
    #[serde(default)]
    pub aliases: Vec<AliasEntry>,
}

/// One `[[matching.aliases]]` entry: an alternate variable or class name
/// that resolves to a canonical token name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub category: TokenCategory,
    pub alternate: String,
    pub canonical: String,
}

/// Resolved thresholds handed to the matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    pub color_max_distance: f64,
    pub radius_min_allowance_px: f64,
    pub radius_relative_allowance: f64,
    pub radius_min_confidence: f64,
    pub shadow_offset_tolerance_px: f64,
    pub shadow_blur_tolerance_px: f64,
    pub shadow_opacity_tolerance: f64,
    pub shadow_min_similarity: f64,
    pub typography_min_score: f64,
    pub class_name_min_similarity: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            color_max_distance: COLOR_MAX_DISTANCE,
            radius_min_allowance_px: RADIUS_MIN_ALLOWANCE_PX,
            radius_relative_allowance: RADIUS_RELATIVE_ALLOWANCE,
            radius_min_confidence: RADIUS_MIN_CONFIDENCE,
            shadow_offset_tolerance_px: SHADOW_OFFSET_TOLERANCE_PX,
            shadow_blur_tolerance_px: SHADOW_BLUR_TOLERANCE_PX,
            shadow_opacity_tolerance: SHADOW_OPACITY_TOLERANCE,
            shadow_min_similarity: SHADOW_MIN_SIMILARITY,
            typography_min_score: TYPOGRAPHY_MIN_SCORE,
            class_name_min_similarity: CLASS_NAME_MIN_SIMILARITY,
        }
    }
}

impl MatchingConfig {
    /// Resolve the configured thresholds over the compiled defaults.
    pub fn thresholds(&self) -> MatchThresholds {
        let d = MatchThresholds::default();
        MatchThresholds {
            color_max_distance: self.color_max_distance.unwrap_or(d.color_max_distance),
            radius_min_allowance_px: self
                .radius_min_allowance_px
                .unwrap_or(d.radius_min_allowance_px),
            radius_relative_allowance: self
                .radius_relative_allowance
                .unwrap_or(d.radius_relative_allowance),
            radius_min_confidence: self
                .radius_min_confidence
                .unwrap_or(d.radius_min_confidence),
            shadow_min_similarity: self
                .shadow_min_similarity
                .unwrap_or(d.shadow_min_similarity),
            typography_min_score: self.typography_min_score.unwrap_or(d.typography_min_score),
            class_name_min_similarity: self
                .class_name_min_similarity
                .unwrap_or(d.class_name_min_similarity),
            ..d
        }
    }
}
