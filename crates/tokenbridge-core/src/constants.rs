//! Named thresholds and unit constants for token matching.
//!
//! Every value here can be overridden through `[matching]` or
//! `[transform]` in `tokenbridge.toml`; these are the compiled defaults.

/// Pixels per `rem`.
pub const REM_PX: f64 = 16.0;

/// Largest possible Euclidean distance between two RGB colors (sqrt(3 * 255^2)).
pub const MAX_RGB_DISTANCE: f64 = 441.672_955_930_063_7;

/// Normalized RGB distance below which two colors are considered the same token.
pub const COLOR_MAX_DISTANCE: f64 = 0.1;

/// Minimum absolute radius allowance in pixels.
pub const RADIUS_MIN_ALLOWANCE_PX: f64 = 4.0;

/// Radius allowance as a fraction of the input value.
pub const RADIUS_RELATIVE_ALLOWANCE: f64 = 0.25;

/// Radius confidence must exceed this to match.
pub const RADIUS_MIN_CONFIDENCE: f64 = 0.7;

/// Shadow offset tolerance (x and y) in pixels.
pub const SHADOW_OFFSET_TOLERANCE_PX: f64 = 10.0;

/// Shadow blur tolerance in pixels.
pub const SHADOW_BLUR_TOLERANCE_PX: f64 = 15.0;

/// Shadow alpha tolerance.
pub const SHADOW_OPACITY_TOLERANCE: f64 = 0.5;

/// Shadow similarity must exceed this to match.
pub const SHADOW_MIN_SIMILARITY: f64 = 0.7;

/// Typography group score must exceed this to match.
pub const TYPOGRAPHY_MIN_SCORE: f64 = 0.5;

/// Confidence for a single font-size class or value.
pub const TYPOGRAPHY_SIZE_CONFIDENCE: f64 = 0.8;

/// Confidence for a single font-weight or line-height class or value.
pub const TYPOGRAPHY_FACET_CONFIDENCE: f64 = 0.7;

/// Class-name string similarity must exceed this to match.
pub const CLASS_NAME_MIN_SIMILARITY: f64 = 0.7;

/// Similarity assigned when one name contains the other.
pub const CONTAINMENT_SIMILARITY: f64 = 0.8;

/// Confidence of a semantic alias table hit.
pub const ALIAS_CONFIDENCE: f64 = 0.95;

/// Default component directory pattern.
pub const DEFAULT_COMPONENT_PATTERN: &str = "src/components/{componentName}";

/// Placeholder substituted with the component name.
pub const COMPONENT_PLACEHOLDER: &str = "{componentName}";

/// Default module that exports the token accessor functions.
pub const DEFAULT_ACCESSOR_MODULE: &str = "@tokens/token-index";

/// Default maximum file size read by the local source (1 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;
