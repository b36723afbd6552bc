//! Token catalog: flat per-category tables, each indexed by name and alias.
//!
//! The catalog is validated and indexed once at load time and is read-only
//! afterwards, so it can be shared freely across worker threads.

mod builtin;
pub mod definition;
pub mod export;
pub mod table;
pub mod types;

use std::path::Path;

use once_cell::sync::Lazy;
use tokenbridge_core::errors::CatalogError;
use tokenbridge_core::TokenCategory;

use crate::values;

pub use definition::CatalogDefinition;
pub use export::StyleMap;
pub use table::TokenTable;
pub use types::{
    accessor_function, reference_suffix, BorderRadiusToken, CatalogEntry, ColorToken,
    ShadowToken, TokenRef, TypeFacet, TypographyScale, TypographyToken,
};

static BUILTIN: Lazy<TokenCatalog> = Lazy::new(|| {
    TokenCatalog::from_definition(builtin::definition()).expect("built-in catalog is valid")
});

/// The full set of design tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenCatalog {
    colors: TokenTable<ColorToken>,
    border_radius: TokenTable<BorderRadiusToken>,
    shadows: TokenTable<ShadowToken>,
    typography: TokenTable<TypographyToken>,
}

impl TokenCatalog {
    /// The built-in design system catalog.
    pub fn builtin() -> &'static TokenCatalog {
        &BUILTIN
    }

    /// Load a catalog from a JSON or TOML definition file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let catalog = Self::from_definition(CatalogDefinition::from_path(path)?)?;
        tracing::info!(
            path = %path.display(),
            tokens = catalog.len(),
            "loaded token catalog"
        );
        Ok(catalog)
    }

    /// Validate, normalize, and index a definition.
    pub fn from_definition(mut def: CatalogDefinition) -> Result<Self, CatalogError> {
        for color in &mut def.colors {
            check_name(TokenCategory::Color, &color.name, &color.value)?;
            color.value = values::normalize_hex(&color.value).ok_or_else(|| {
                invalid(TokenCategory::Color, &color.name, &color.value, "expected #RGB or #RRGGBB")
            })?;
        }
        for radius in &def.border_radius {
            check_name(TokenCategory::BorderRadius, &radius.name, &radius.value)?;
            let v = radius.value.trim();
            if !(v.ends_with("px") || v.ends_with("rem")) || values::to_px(v).is_none() {
                return Err(invalid(
                    TokenCategory::BorderRadius,
                    &radius.name,
                    &radius.value,
                    "expected <N>px or <N>rem",
                ));
            }
        }
        for shadow in &def.shadows {
            check_name(TokenCategory::Shadow, &shadow.name, &shadow.value)?;
            if shadow.value.trim().is_empty() {
                return Err(invalid(TokenCategory::Shadow, &shadow.name, "", "empty shadow"));
            }
        }
        for style in &def.typography {
            check_name(TokenCategory::Typography, &style.name, &style.size.value)?;
            if values::to_px(&style.size.value).is_none() {
                return Err(invalid(
                    TokenCategory::Typography,
                    &style.name,
                    &style.size.value,
                    "font size must be a length",
                ));
            }
            if style.weight.value.trim().parse::<u16>().is_err() {
                return Err(invalid(
                    TokenCategory::Typography,
                    &style.name,
                    &style.weight.value,
                    "font weight must be numeric",
                ));
            }
        }

        Ok(Self {
            colors: TokenTable::build(TokenCategory::Color, def.colors)?,
            border_radius: TokenTable::build(TokenCategory::BorderRadius, def.border_radius)?,
            shadows: TokenTable::build(TokenCategory::Shadow, def.shadows)?,
            typography: TokenTable::build(TokenCategory::Typography, def.typography)?,
        })
    }

    pub fn colors(&self) -> &TokenTable<ColorToken> {
        &self.colors
    }

    pub fn border_radius(&self) -> &TokenTable<BorderRadiusToken> {
        &self.border_radius
    }

    pub fn shadows(&self) -> &TokenTable<ShadowToken> {
        &self.shadows
    }

    pub fn typography(&self) -> &TokenTable<TypographyToken> {
        &self.typography
    }

    /// Look up by name, then by alias.
    pub fn lookup(&self, category: TokenCategory, name_or_alias: &str) -> Option<TokenRef<'_>> {
        match category {
            TokenCategory::Color => self.colors.get(name_or_alias).map(TokenRef::Color),
            TokenCategory::BorderRadius => {
                self.border_radius.get(name_or_alias).map(TokenRef::BorderRadius)
            }
            TokenCategory::Shadow => self.shadows.get(name_or_alias).map(TokenRef::Shadow),
            TokenCategory::Typography => {
                self.typography.get(name_or_alias).map(TokenRef::Typography)
            }
        }
    }

    /// Look up by canonical name only.
    pub fn lookup_by_name(&self, category: TokenCategory, name: &str) -> Option<TokenRef<'_>> {
        match category {
            TokenCategory::Color => self.colors.get_by_name(name).map(TokenRef::Color),
            TokenCategory::BorderRadius => {
                self.border_radius.get_by_name(name).map(TokenRef::BorderRadius)
            }
            TokenCategory::Shadow => self.shadows.get_by_name(name).map(TokenRef::Shadow),
            TokenCategory::Typography => {
                self.typography.get_by_name(name).map(TokenRef::Typography)
            }
        }
    }

    /// Look up by designer-facing alias only.
    pub fn lookup_by_alias(&self, category: TokenCategory, alias: &str) -> Option<TokenRef<'_>> {
        match category {
            TokenCategory::Color => self.colors.get_by_alias(alias).map(TokenRef::Color),
            TokenCategory::BorderRadius => {
                self.border_radius.get_by_alias(alias).map(TokenRef::BorderRadius)
            }
            TokenCategory::Shadow => self.shadows.get_by_alias(alias).map(TokenRef::Shadow),
            TokenCategory::Typography => {
                self.typography.get_by_alias(alias).map(TokenRef::Typography)
            }
        }
    }

    /// Like [`lookup`](Self::lookup), but a miss is a `TokenNotFound` error.
    pub fn require(
        &self,
        category: TokenCategory,
        name_or_alias: &str,
    ) -> Result<TokenRef<'_>, CatalogError> {
        self.lookup(category, name_or_alias)
            .ok_or_else(|| CatalogError::TokenNotFound {
                category,
                input: name_or_alias.to_string(),
            })
    }

    /// All tokens of a category in declaration order.
    pub fn list(&self, category: TokenCategory) -> Vec<TokenRef<'_>> {
        match category {
            TokenCategory::Color => self.colors.iter().map(TokenRef::Color).collect(),
            TokenCategory::BorderRadius => {
                self.border_radius.iter().map(TokenRef::BorderRadius).collect()
            }
            TokenCategory::Shadow => self.shadows.iter().map(TokenRef::Shadow).collect(),
            TokenCategory::Typography => {
                self.typography.iter().map(TokenRef::Typography).collect()
            }
        }
    }

    pub fn color_value(&self, name_or_alias: &str) -> Result<&str, CatalogError> {
        self.colors
            .get(name_or_alias)
            .map(|t| t.value.as_str())
            .ok_or_else(|| not_found(TokenCategory::Color, name_or_alias))
    }

    pub fn border_radius_value(&self, name_or_alias: &str) -> Result<&str, CatalogError> {
        self.border_radius
            .get(name_or_alias)
            .map(|t| t.value.as_str())
            .ok_or_else(|| not_found(TokenCategory::BorderRadius, name_or_alias))
    }

    pub fn shadow_value(&self, name_or_alias: &str) -> Result<&str, CatalogError> {
        self.shadows
            .get(name_or_alias)
            .map(|t| t.value.as_str())
            .ok_or_else(|| not_found(TokenCategory::Shadow, name_or_alias))
    }

    /// One dimension of a text style, e.g. `("text-body", Size)` → `14px`.
    pub fn typography_value(
        &self,
        name_or_alias: &str,
        facet: TypeFacet,
    ) -> Result<&str, CatalogError> {
        self.typography
            .get(name_or_alias)
            .and_then(|t| t.facet(facet))
            .map(|s| s.value.as_str())
            .ok_or_else(|| not_found(TokenCategory::Typography, name_or_alias))
    }

    /// Utility classes for a text style: size, weight, line height.
    pub fn text_style_classes(&self, name_or_alias: &str) -> Result<String, CatalogError> {
        self.typography
            .get(name_or_alias)
            .map(TypographyToken::utility_classes)
            .ok_or_else(|| not_found(TokenCategory::Typography, name_or_alias))
    }

    /// Total number of tokens across all categories.
    pub fn len(&self) -> usize {
        self.colors.len() + self.border_radius.len() + self.shadows.len() + self.typography.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn check_name(category: TokenCategory, name: &str, value: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(invalid(category, name, value, "token name is empty"));
    }
    Ok(())
}

fn invalid(category: TokenCategory, name: &str, value: &str, reason: &str) -> CatalogError {
    CatalogError::InvalidValue {
        category,
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn not_found(category: TokenCategory, input: &str) -> CatalogError {
    CatalogError::TokenNotFound {
        category,
        input: input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let catalog = TokenCatalog::builtin();
        assert_eq!(catalog.colors().len(), 50);
        assert_eq!(catalog.border_radius().len(), 5);
        assert_eq!(catalog.shadows().len(), 7);
        assert_eq!(catalog.typography().len(), 15);
    }

    #[test]
    fn test_lookup_by_name_and_alias_agree() {
        let catalog = TokenCatalog::builtin();
        let by_name = catalog.lookup(TokenCategory::Color, "olivia-blue").unwrap();
        let by_alias = catalog.lookup(TokenCategory::Color, "Olivia Blue").unwrap();
        assert_eq!(by_name, by_alias);
        assert_eq!(by_name.value(), "#25C9D0");
    }

    #[test]
    fn test_short_hex_is_normalized_on_load() {
        let def = CatalogDefinition {
            colors: vec![ColorToken {
                name: "ink".to_string(),
                alias: "Ink".to_string(),
                value: "#abc".to_string(),
                usage: None,
            }],
            ..Default::default()
        };
        let catalog = TokenCatalog::from_definition(def).unwrap();
        assert_eq!(catalog.color_value("ink").unwrap(), "#AABBCC");
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let def = CatalogDefinition {
            border_radius: vec![BorderRadiusToken {
                name: "radius-pill".to_string(),
                alias: "Pill".to_string(),
                value: "9999".to_string(),
            }],
            ..Default::default()
        };
        assert!(matches!(
            TokenCatalog::from_definition(def),
            Err(CatalogError::InvalidValue { .. })
        ));
    }
}
