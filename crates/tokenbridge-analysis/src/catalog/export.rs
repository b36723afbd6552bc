//! Catalog generators: style map, CSS custom properties, Tailwind theme
//! extension, safelist, and alias-to-code conversion.

use std::fmt::Write as _;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{json, Map, Value};
use tokenbridge_core::errors::CatalogError;
use tokenbridge_core::TokenCategory;

use super::types::{TokenRef, TypeFacet};
use super::TokenCatalog;

/// Color utility prefixes emitted in the safelist.
const COLOR_CLASS_PREFIXES: [&str; 3] = ["bg", "text", "border"];

/// Category → ordered `key: value` pairs. Serializes as nested JSON objects
/// in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    sections: Vec<(TokenCategory, Vec<(String, String)>)>,
}

impl StyleMap {
    pub fn get(&self, category: TokenCategory, key: &str) -> Option<&str> {
        self.section(category)?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn section(&self, category: TokenCategory) -> Option<&[(String, String)]> {
        self.sections
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, entries)| entries.as_slice())
    }
}

struct Section<'a>(&'a [(String, String)]);

impl Serialize for Section<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (category, entries) in &self.sections {
            map.serialize_entry(category.name(), &Section(entries))?;
        }
        map.end()
    }
}

impl TokenCatalog {
    /// Category → `{key: value}`. Radius and shadow keys drop their name prefix;
    /// typography maps to its utility classes.
    pub fn to_style_map(&self) -> StyleMap {
        let sections = TokenCategory::ALL
            .iter()
            .map(|&category| {
                let entries = self
                    .list(category)
                    .into_iter()
                    .map(|t| (t.suffix().to_string(), t.value().into_owned()))
                    .collect();
                (category, entries)
            })
            .collect();
        StyleMap { sections }
    }

    /// A `:root` block declaring one custom property per token (per facet
    /// for typography).
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for category in TokenCategory::ALL {
            for token in self.list(category) {
                match token {
                    TokenRef::Typography(style) => {
                        for facet in TypeFacet::ALL {
                            if let Some(scale) = style.facet(facet) {
                                let _ = writeln!(
                                    css,
                                    "  --{}-{}: {};",
                                    style.name,
                                    facet.suffix(),
                                    scale.value
                                );
                            }
                        }
                    }
                    other => {
                        if let Some(var) = other.css_variable() {
                            let _ = writeln!(css, "  {}: {};", var, other.value());
                        }
                    }
                }
            }
        }
        css.push_str("}\n");
        css
    }

    /// One utility class per text style, built on the typography custom properties.
    pub fn typography_utilities_css(&self) -> String {
        let mut css = String::new();
        for style in self.typography().iter() {
            let _ = writeln!(css, ".{} {{", style.name);
            for facet in TypeFacet::ALL {
                if style.facet(facet).is_some() {
                    let property = match facet {
                        TypeFacet::Size => "font-size",
                        TypeFacet::Weight => "font-weight",
                        TypeFacet::LineHeight => "line-height",
                    };
                    let _ = writeln!(css, "  {property}: var(--{}-{});", style.name, facet.suffix());
                }
            }
            css.push_str("}\n");
        }
        css
    }

    /// Classes a Tailwind build must always keep for the rewritten output.
    pub fn safelist(&self) -> Vec<String> {
        let mut classes = Vec::with_capacity(self.colors().len() * 3 + 12);
        for color in self.colors().iter() {
            for prefix in COLOR_CLASS_PREFIXES {
                classes.push(format!("{prefix}-{}", color.name));
            }
        }
        for token in self.list(TokenCategory::BorderRadius) {
            classes.push(token.utility_class());
        }
        for token in self.list(TokenCategory::Shadow) {
            classes.push(token.utility_class());
        }
        classes
    }

    /// Tailwind configuration fragment: `theme.extend` plus `safelist`.
    pub fn tailwind_config(&self) -> Value {
        let section = |category: TokenCategory| -> Value {
            let mut map = Map::new();
            for token in self.list(category) {
                map.insert(
                    token.suffix().to_string(),
                    Value::String(token.value().into_owned()),
                );
            }
            Value::Object(map)
        };

        json!({
            "theme": {
                "extend": {
                    "colors": section(TokenCategory::Color),
                    "borderRadius": section(TokenCategory::BorderRadius),
                    "boxShadow": section(TokenCategory::Shadow),
                }
            },
            "safelist": self.safelist(),
        })
    }

    /// Translate a designer-facing alias (or a name) into the code that applies it:
    /// color → name, radius → `rounded-*`, shadow → `shadow-*`,
    /// typography → its utility classes.
    pub fn code_reference(
        &self,
        category: TokenCategory,
        alias: &str,
    ) -> Result<String, CatalogError> {
        let token = self
            .lookup_by_alias(category, alias)
            .or_else(|| self.lookup_by_name(category, alias))
            .ok_or_else(|| CatalogError::TokenNotFound {
                category,
                input: alias.to_string(),
            })?;
        Ok(match token {
            TokenRef::Typography(style) => style.utility_classes(),
            other => other.utility_class(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_map_keys_drop_prefixes() {
        let map = TokenCatalog::builtin().to_style_map();
        assert_eq!(map.get(TokenCategory::BorderRadius, "sm"), Some("12px"));
        assert_eq!(map.get(TokenCategory::Color, "grey-fog"), Some("#F8F8F8"));
        assert_eq!(
            map.get(TokenCategory::Typography, "text-body"),
            Some("text-sm font-normal leading-5")
        );
    }

    #[test]
    fn test_style_map_serializes_in_declaration_order() {
        let json = serde_json::to_string(&TokenCatalog::builtin().to_style_map()).unwrap();
        let white = json.find("neutral-white").unwrap();
        let orange = json.find("ecem-dune-orange-t800").unwrap();
        assert!(white < orange);
    }
}
