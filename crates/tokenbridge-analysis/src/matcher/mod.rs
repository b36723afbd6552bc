//! Token matching: maps each extracted candidate to at most one catalog
//! token with a confidence in `[0, 1]`.
//!
//! Precedence, first satisfied wins: exact reference, semantic alias, exact
//! normalized value, then a category-specific approximate comparison.
//! Matching is a pure function of the candidate, the catalog, and the
//! thresholds.

mod color;
mod radius;
mod shadow;
pub mod similarity;
mod typography;

use std::fmt;

use tokenbridge_core::config::MatchThresholds;
use tokenbridge_core::constants::ALIAS_CONFIDENCE;
use tokenbridge_core::TokenCategory;

use crate::aliases::AliasTable;
use crate::catalog::{TokenCatalog, TokenRef, TypeFacet};
use crate::extractor::{Candidate, LiteralForm};
use crate::values;

use color::ColorIndex;
use radius::RadiusIndex;
use shadow::ShadowIndex;

pub use shadow::similarity as shadow_similarity;

/// Why a candidate matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    /// Already names the token (`var(--color-x)`, `rounded-xs`).
    ExactReference,
    /// Resolved through the semantic alias table.
    Alias,
    /// Same normalized value as the token.
    ExactValue,
    /// Closest token within the category's tolerance.
    Approximate,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ExactReference => "exact-reference",
            Self::Alias => "alias",
            Self::ExactValue => "exact-value",
            Self::Approximate => "approximate",
        })
    }
}

/// A candidate resolved to a catalog token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenMatch<'a> {
    pub token: TokenRef<'a>,
    pub confidence: f64,
    pub reason: MatchReason,
}

impl<'a> TokenMatch<'a> {
    fn new(token: TokenRef<'a>, confidence: f64, reason: MatchReason) -> Self {
        Self {
            token,
            confidence,
            reason,
        }
    }
}

/// Matches candidates against one catalog. Catalog values are parsed once
/// at construction.
#[derive(Debug, Clone)]
pub struct TokenMatcher<'a> {
    catalog: &'a TokenCatalog,
    thresholds: MatchThresholds,
    aliases: AliasTable,
    colors: ColorIndex,
    radii: RadiusIndex,
    shadows: ShadowIndex,
}

impl<'a> TokenMatcher<'a> {
    pub fn new(catalog: &'a TokenCatalog, thresholds: MatchThresholds, aliases: AliasTable) -> Self {
        Self {
            catalog,
            thresholds,
            aliases,
            colors: ColorIndex::new(catalog.colors().all()),
            radii: RadiusIndex::new(catalog.border_radius().all()),
            shadows: ShadowIndex::new(catalog.shadows().all()),
        }
    }

    /// Default thresholds and the built-in alias table.
    pub fn with_defaults(catalog: &'a TokenCatalog) -> Self {
        Self::new(catalog, MatchThresholds::default(), AliasTable::builtin(catalog))
    }

    pub fn catalog(&self) -> &'a TokenCatalog {
        self.catalog
    }

    pub fn thresholds(&self) -> &MatchThresholds {
        &self.thresholds
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn match_candidate(&self, candidate: &Candidate) -> Option<TokenMatch<'a>> {
        match candidate.form {
            LiteralForm::Reference => self.match_reference(candidate.category, &candidate.raw),
            LiteralForm::Class => match (candidate.category, candidate.facet) {
                (TokenCategory::Typography, Some(facet)) => {
                    let tokens = self.catalog.typography().all();
                    typography::match_class(tokens, facet, &candidate.raw).map(|i| {
                        TokenMatch::new(
                            TokenRef::Typography(&tokens[i]),
                            typography::facet_confidence(facet),
                            MatchReason::Approximate,
                        )
                    })
                }
                (TokenCategory::Typography, None) => None,
                (category, _) => self.match_class_name(category, &candidate.raw),
            },
            LiteralForm::ClassGroup => {
                let members: Vec<&str> = candidate.raw.split_whitespace().collect();
                let tokens = self.catalog.typography().all();
                typography::match_group(tokens, &members, self.thresholds.typography_min_score).map(
                    |(i, score)| {
                        TokenMatch::new(
                            TokenRef::Typography(&tokens[i]),
                            score,
                            MatchReason::Approximate,
                        )
                    },
                )
            }
            LiteralForm::Value => match candidate.facet {
                Some(facet) => self.match_typography_value(facet, &candidate.raw),
                None => self.match_value(candidate.category, &candidate.raw),
            },
        }
    }

    /// A `var(--x)` reference: canonical property first, then the alias table.
    pub fn match_reference(&self, category: TokenCategory, property: &str) -> Option<TokenMatch<'a>> {
        let exact = property.strip_prefix("--").and_then(|name| {
            let canonical = match category {
                TokenCategory::Color => name.strip_prefix("color-").map(str::to_string),
                TokenCategory::BorderRadius => name
                    .strip_prefix("radius-")
                    .map(|s| format!("radius-{s}")),
                TokenCategory::Shadow => name
                    .strip_prefix("shadow-")
                    .map(|s| format!("shadow-{s}")),
                TokenCategory::Typography => None,
            }?;
            self.catalog.lookup_by_name(category, &canonical)
        });
        if let Some(token) = exact {
            return Some(TokenMatch::new(token, 1.0, MatchReason::ExactReference));
        }
        self.match_alias(category, property)
    }

    fn match_alias(&self, category: TokenCategory, alternate: &str) -> Option<TokenMatch<'a>> {
        let canonical = self.aliases.resolve(category, alternate)?;
        self.catalog
            .lookup_by_name(category, canonical)
            .map(|token| TokenMatch::new(token, ALIAS_CONFIDENCE, MatchReason::Alias))
    }

    /// A bare `rounded*` / `shadow*` class.
    pub fn match_class_name(&self, category: TokenCategory, class: &str) -> Option<TokenMatch<'a>> {
        let tokens = self.catalog.list(category);
        if let Some(token) = tokens.iter().find(|t| t.utility_class() == class) {
            return Some(TokenMatch::new(*token, 1.0, MatchReason::ExactReference));
        }
        if let Some(found) = self.match_alias(category, class) {
            return Some(found);
        }
        match category {
            // Default-scale classes carry a size; compare it, not the name.
            TokenCategory::BorderRadius => {
                if let Some(px) = radius::default_class_px(class) {
                    return self.match_radius(px);
                }
            }
            // `shadow-<color>` only tints a shadow.
            TokenCategory::Shadow => {
                let names_color = class
                    .strip_prefix("shadow-")
                    .is_some_and(|c| self.catalog.lookup_by_name(TokenCategory::Color, c).is_some());
                if names_color {
                    return None;
                }
            }
            _ => {}
        }
        let mut best: Option<(TokenRef<'a>, f64)> = None;
        for token in tokens {
            let score = similarity::class_similarity(class, &token.utility_class());
            if score <= self.thresholds.class_name_min_similarity {
                continue;
            }
            if best.map_or(true, |(_, bs)| score > bs) {
                best = Some((token, score));
            }
        }
        best.map(|(token, score)| TokenMatch::new(token, score, MatchReason::Approximate))
    }

    /// A literal value (hex, rgba, length, or shadow) of `category`.
    pub fn match_value(&self, category: TokenCategory, raw: &str) -> Option<TokenMatch<'a>> {
        match category {
            TokenCategory::Color => self.match_color(raw),
            TokenCategory::BorderRadius => self.match_radius(raw),
            TokenCategory::Shadow => self.match_shadow(raw),
            TokenCategory::Typography => None,
        }
    }

    fn match_color(&self, raw: &str) -> Option<TokenMatch<'a>> {
        let tokens = self.catalog.colors().all();
        if let Some(rgb) = values::parse_hex(raw) {
            if let Some(i) = self.colors.exact(rgb) {
                return Some(TokenMatch::new(TokenRef::Color(&tokens[i]), 1.0, MatchReason::ExactValue));
            }
        }
        // rgba() alpha is not part of color identity.
        let rgb = values::parse_color(raw)?;
        self.colors
            .nearest(rgb, self.thresholds.color_max_distance)
            .map(|(i, c)| TokenMatch::new(TokenRef::Color(&tokens[i]), c, MatchReason::Approximate))
    }

    fn match_radius(&self, raw: &str) -> Option<TokenMatch<'a>> {
        let tokens = self.catalog.border_radius().all();
        let px = values::to_px(raw)?;
        if let Some(i) = self.radii.exact(px) {
            return Some(TokenMatch::new(
                TokenRef::BorderRadius(&tokens[i]),
                1.0,
                MatchReason::ExactValue,
            ));
        }
        self.radii.nearest(px, &self.thresholds).map(|(i, c)| {
            TokenMatch::new(TokenRef::BorderRadius(&tokens[i]), c, MatchReason::Approximate)
        })
    }

    fn match_shadow(&self, raw: &str) -> Option<TokenMatch<'a>> {
        let tokens = self.catalog.shadows().all();
        if let Some(i) = self.shadows.exact(&values::normalize_shadow(raw)) {
            return Some(TokenMatch::new(TokenRef::Shadow(&tokens[i]), 1.0, MatchReason::ExactValue));
        }
        self.shadows
            .nearest(raw, &self.thresholds)
            .map(|(i, s)| TokenMatch::new(TokenRef::Shadow(&tokens[i]), s, MatchReason::Approximate))
    }

    /// A single typography dimension (`font-size: 14px`, `fontWeight: 600`).
    pub fn match_typography_value(&self, facet: TypeFacet, raw: &str) -> Option<TokenMatch<'a>> {
        let tokens = self.catalog.typography().all();
        typography::match_value(tokens, facet, raw).map(|i| {
            TokenMatch::new(
                TokenRef::Typography(&tokens[i]),
                typography::facet_confidence(facet),
                MatchReason::Approximate,
            )
        })
    }
}
