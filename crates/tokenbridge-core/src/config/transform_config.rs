//! Rewriter configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ACCESSOR_MODULE;
use crate::types::TokenCategory;

/// How a literal inside a JS style object is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StyleObjectForm {
    /// `getColorValue('olivia-blue')`
    #[default]
    Accessor,
    /// `"var(--color-olivia-blue)"`
    CssVariable,
}

impl std::str::FromStr for StyleObjectForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accessor" => Ok(Self::Accessor),
            "css-variable" | "css-var" | "var" => Ok(Self::CssVariable),
            other => Err(format!("unknown style object form: {other}")),
        }
    }
}

/// Configuration for the rewriter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TransformConfig {
    /// Minimum confidence for any rewrite. Default: 0.0 (every accepted match).
    pub min_confidence: Option<f64>,
    /// Per-category overrides of `min_confidence`.
    pub color_min_confidence: Option<f64>,
    pub radius_min_confidence: Option<f64>,
    pub shadow_min_confidence: Option<f64>,
    pub typography_min_confidence: Option<f64>,
    /// Rendering of style-object literals. Default: accessor.
    pub style_object_form: Option<StyleObjectForm>,
    /// Module exporting the accessor functions. Default: `@tokens/token-index`.
    pub accessor_module: Option<String>,
    /// Insert a missing accessor import when accessor calls are introduced. Default: true.
    pub insert_accessor_imports: Option<bool>,
    /// Rewrite `import { colors } from '...design-tokens'` usages. Default: true.
    pub rewrite_token_imports: Option<bool>,
}

impl TransformConfig {
    /// Returns the cutoff a match in `category` must reach to be applied.
    pub fn cutoff(&self, category: TokenCategory) -> f64 {
        let specific = match category {
            TokenCategory::Color => self.color_min_confidence,
            TokenCategory::BorderRadius => self.radius_min_confidence,
            TokenCategory::Shadow => self.shadow_min_confidence,
            TokenCategory::Typography => self.typography_min_confidence,
        };
        specific.or(self.min_confidence).unwrap_or(0.0)
    }

    pub fn effective_style_object_form(&self) -> StyleObjectForm {
        self.style_object_form.unwrap_or_default()
    }

    pub fn effective_accessor_module(&self) -> &str {
        self.accessor_module
            .as_deref()
            .unwrap_or(DEFAULT_ACCESSOR_MODULE)
    }

    pub fn effective_insert_accessor_imports(&self) -> bool {
        self.insert_accessor_imports.unwrap_or(true)
    }

    pub fn effective_rewrite_token_imports(&self) -> bool {
        self.rewrite_token_imports.unwrap_or(true)
    }
}
