//! Types shared by every tokenbridge crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four kinds of design token held in a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenCategory {
    Color,
    BorderRadius,
    Shadow,
    Typography,
}

impl TokenCategory {
    /// All categories in catalog declaration order.
    pub const ALL: [TokenCategory; 4] = [
        TokenCategory::Color,
        TokenCategory::BorderRadius,
        TokenCategory::Shadow,
        TokenCategory::Typography,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::BorderRadius => "border-radius",
            Self::Shadow => "shadow",
            Self::Typography => "typography",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "color" | "colors" => Ok(Self::Color),
            "border-radius" | "borderradius" | "radius" | "radii" => Ok(Self::BorderRadius),
            "shadow" | "shadows" => Ok(Self::Shadow),
            "typography" | "type" | "text" => Ok(Self::Typography),
            other => Err(format!("unknown token category: {other}")),
        }
    }
}

/// A source file handed to the engine by a component source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentFile {
    /// File name without directories (e.g. `Button.tsx`).
    pub name: String,
    /// Path relative to the component directory.
    pub path: String,
    /// Full UTF-8 text of the file.
    pub content: String,
}

impl ComponentFile {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content: content.into(),
        }
    }

    /// Lowercased extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in TokenCategory::ALL {
            let parsed: TokenCategory = category.name().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("spacing".parse::<TokenCategory>().is_err());
    }

    #[test]
    fn test_extension_is_lowercased() {
        let file = ComponentFile::new("Card.TSX", "Card.TSX", "");
        assert_eq!(file.extension().as_deref(), Some("tsx"));
        let bare = ComponentFile::new("Makefile", "Makefile", "");
        assert_eq!(bare.extension(), None);
    }
}
