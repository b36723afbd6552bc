//! Token record types for every catalog category.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tokenbridge_core::TokenCategory;

/// Common accessors for the two unique keys of a catalog entry.
pub trait CatalogEntry {
    fn name(&self) -> &str;
    fn alias(&self) -> &str;
}

/// A named color. `value` is normalized to uppercase `#RRGGBB` on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    /// Canonical (code-facing) name, e.g. `olivia-blue`.
    pub name: String,
    /// Designer-facing name, e.g. `Olivia Blue`.
    pub alias: String,
    /// Hex value.
    pub value: String,
    /// Free-form usage note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

/// A named corner radius, `value` in `px` or `rem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRadiusToken {
    pub name: String,
    pub alias: String,
    pub value: String,
}

/// A named box shadow in full CSS syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowToken {
    pub name: String,
    pub alias: String,
    pub value: String,
}

/// One dimension of a typography style: a CSS value and the utility class
/// that produces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyScale {
    pub value: String,
    #[serde(alias = "utilityClass")]
    pub utility_class: String,
}

/// A composite text style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyToken {
    pub name: String,
    pub alias: String,
    pub size: TypographyScale,
    pub weight: TypographyScale,
    #[serde(default, alias = "lineHeight", skip_serializing_if = "Option::is_none")]
    pub line_height: Option<TypographyScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

/// The dimensions of a typography token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeFacet {
    Size,
    Weight,
    LineHeight,
}

impl TypeFacet {
    pub const ALL: [TypeFacet; 3] = [TypeFacet::Size, TypeFacet::Weight, TypeFacet::LineHeight];

    /// Suffix used in CSS variable names and accessor arguments.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Weight => "weight",
            Self::LineHeight => "line-height",
        }
    }
}

impl TypographyToken {
    pub fn facet(&self, facet: TypeFacet) -> Option<&TypographyScale> {
        match facet {
            TypeFacet::Size => Some(&self.size),
            TypeFacet::Weight => Some(&self.weight),
            TypeFacet::LineHeight => self.line_height.as_ref(),
        }
    }

    /// Space-joined utility classes: size, weight, then line-height.
    pub fn utility_classes(&self) -> String {
        TypeFacet::ALL
            .iter()
            .filter_map(|f| self.facet(*f))
            .map(|s| s.utility_class.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

macro_rules! impl_catalog_entry {
    ($($ty:ty),*) => {
        $(impl CatalogEntry for $ty {
            fn name(&self) -> &str {
                &self.name
            }
            fn alias(&self) -> &str {
                &self.alias
            }
        })*
    };
}

impl_catalog_entry!(ColorToken, BorderRadiusToken, ShadowToken, TypographyToken);

/// A borrowed token of any category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRef<'a> {
    Color(&'a ColorToken),
    BorderRadius(&'a BorderRadiusToken),
    Shadow(&'a ShadowToken),
    Typography(&'a TypographyToken),
}

impl<'a> TokenRef<'a> {
    pub fn category(&self) -> TokenCategory {
        match self {
            Self::Color(_) => TokenCategory::Color,
            Self::BorderRadius(_) => TokenCategory::BorderRadius,
            Self::Shadow(_) => TokenCategory::Shadow,
            Self::Typography(_) => TokenCategory::Typography,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Self::Color(t) => &t.name,
            Self::BorderRadius(t) => &t.name,
            Self::Shadow(t) => &t.name,
            Self::Typography(t) => &t.name,
        }
    }

    pub fn alias(&self) -> &'a str {
        match self {
            Self::Color(t) => &t.alias,
            Self::BorderRadius(t) => &t.alias,
            Self::Shadow(t) => &t.alias,
            Self::Typography(t) => &t.alias,
        }
    }

    /// The token's value. Typography renders as its utility classes.
    pub fn value(&self) -> Cow<'a, str> {
        match self {
            Self::Color(t) => Cow::Borrowed(&t.value),
            Self::BorderRadius(t) => Cow::Borrowed(&t.value),
            Self::Shadow(t) => Cow::Borrowed(&t.value),
            Self::Typography(t) => Cow::Owned(t.utility_classes()),
        }
    }

    /// Name with the category prefix removed (`radius-sm` → `sm`).
    pub fn suffix(&self) -> &'a str {
        reference_suffix(self.category(), self.name())
    }

    /// CSS custom property for the whole token. Typography has one per facet.
    pub fn css_variable(&self) -> Option<String> {
        match self {
            Self::Color(_) => Some(format!("--color-{}", self.suffix())),
            Self::BorderRadius(_) => Some(format!("--radius-{}", self.suffix())),
            Self::Shadow(_) => Some(format!("--shadow-{}", self.suffix())),
            Self::Typography(_) => None,
        }
    }

    /// Utility class applying this token. Colors need a caller-supplied
    /// prefix (`bg`, `text`, `border`) and return the bare name here.
    pub fn utility_class(&self) -> String {
        match self {
            Self::Color(t) => t.name.clone(),
            Self::BorderRadius(_) => format!("rounded-{}", self.suffix()),
            Self::Shadow(_) => format!("shadow-{}", self.suffix()),
            Self::Typography(t) => t.name.clone(),
        }
    }

    pub fn as_typography(&self) -> Option<&'a TypographyToken> {
        match self {
            Self::Typography(t) => Some(t),
            _ => None,
        }
    }
}

/// Strip the category's reference prefix from a token name.
pub fn reference_suffix(category: TokenCategory, name: &str) -> &str {
    let prefix = match category {
        TokenCategory::BorderRadius => "radius-",
        TokenCategory::Shadow => "shadow-",
        TokenCategory::Color | TokenCategory::Typography => return name,
    };
    name.strip_prefix(prefix).unwrap_or(name)
}

/// Accessor function exported by the token module for `category`.
pub fn accessor_function(category: TokenCategory) -> &'static str {
    match category {
        TokenCategory::Color => "getColorValue",
        TokenCategory::BorderRadius => "getBorderRadiusValue",
        TokenCategory::Shadow => "getShadowValue",
        TokenCategory::Typography => "getTypographyValue",
    }
}
