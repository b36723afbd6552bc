//! Semantic alias table: alternate variable and class names that resolve to
//! canonical token names with high (but not exact) confidence.

use rustc_hash::FxHashMap;
use tokenbridge_core::config::AliasEntry;
use tokenbridge_core::TokenCategory;

use crate::catalog::TokenCatalog;

use TokenCategory::{BorderRadius, Color, Shadow};

/// (category, alternate, canonical)
const BUILTIN_ALIASES: &[(TokenCategory, &str, &str)] = &[
    // Component-library theme variables
    (Color, "--primary", "olivia-blue"),
    (Color, "--primary-foreground", "neutral-white"),
    (Color, "--background", "neutral-white"),
    (Color, "--foreground", "neutral-charcoal"),
    (Color, "--card", "neutral-white"),
    (Color, "--card-foreground", "neutral-charcoal"),
    (Color, "--popover", "neutral-white"),
    (Color, "--popover-foreground", "neutral-charcoal"),
    (Color, "--secondary", "grey-disco"),
    (Color, "--secondary-foreground", "neutral-charcoal"),
    (Color, "--muted", "grey-fog"),
    (Color, "--muted-foreground", "grey-earl"),
    (Color, "--accent", "olivia-blue-t900"),
    (Color, "--accent-foreground", "neutral-charcoal"),
    (Color, "--border", "grey-steel"),
    (Color, "--input", "grey-steel"),
    (Color, "--ring", "olivia-blue"),
    (Color, "--destructive", "danger-red"),
    (Color, "--destructive-foreground", "neutral-white"),
    (Color, "--warning", "caution-yellow"),
    (Color, "--success", "success-green"),
    // Legacy variable names
    (Color, "--color-primary", "olivia-blue"),
    (Color, "--color-text", "neutral-charcoal"),
    (BorderRadius, "--radius", "radius-xs"),
    (BorderRadius, "--radius-small", "radius-sm"),
    (BorderRadius, "--radius-medium", "radius-md"),
    (Shadow, "--elevation-1", "shadow-outer-extra-light"),
    (Shadow, "--elevation-2", "shadow-tooltip"),
    (Shadow, "--elevation-3", "shadow-outer-medium-12"),
    (Shadow, "--elevation-4", "shadow-outer-medium-16"),
    (Shadow, "--elevation-5", "shadow-outer-dark"),
    // Framework default utility classes, mapped by their default pixel values
    (BorderRadius, "rounded", "radius-2xs"),
    (BorderRadius, "rounded-lg", "radius-xs"),
    (BorderRadius, "rounded-xl", "radius-sm"),
    (BorderRadius, "rounded-2xl", "radius-md"),
    (Shadow, "shadow", "shadow-outer-extra-light"),
    (Shadow, "shadow-sm", "shadow-outer-extra-light"),
    (Shadow, "shadow-md", "shadow-outer-medium-12"),
    (Shadow, "shadow-lg", "shadow-outer-medium-16"),
    (Shadow, "shadow-xl", "shadow-outer-dark"),
    (Shadow, "shadow-2xl", "shadow-outer-dark"),
];

/// Alternate name → canonical name, per category.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: FxHashMap<(TokenCategory, String), String>,
    /// Custom property name → category, for classifying `var(--x)` references.
    reference_categories: FxHashMap<String, TokenCategory>,
}

impl AliasTable {
    /// The built-in table, restricted to entries whose target exists in `catalog`.
    pub fn builtin(catalog: &TokenCatalog) -> Self {
        let mut table = Self::default();
        for &(category, alternate, canonical) in BUILTIN_ALIASES {
            table.insert(catalog, category, alternate, canonical);
        }
        table
    }

    /// The built-in table extended with configured entries. Configured
    /// entries override built-in ones with the same alternate name.
    pub fn with_entries(catalog: &TokenCatalog, extra: &[AliasEntry]) -> Self {
        let mut table = Self::builtin(catalog);
        for entry in extra {
            if !table.insert(catalog, entry.category, &entry.alternate, &entry.canonical) {
                tracing::warn!(
                    category = %entry.category,
                    alternate = %entry.alternate,
                    canonical = %entry.canonical,
                    "alias target not in catalog, skipping"
                );
            }
        }
        table
    }

    fn insert(
        &mut self,
        catalog: &TokenCatalog,
        category: TokenCategory,
        alternate: &str,
        canonical: &str,
    ) -> bool {
        if catalog.lookup_by_name(category, canonical).is_none() {
            return false;
        }
        if alternate.starts_with("--") {
            self.reference_categories
                .insert(alternate.to_string(), category);
        }
        self.entries
            .insert((category, alternate.to_string()), canonical.to_string());
        true
    }

    pub fn resolve(&self, category: TokenCategory, alternate: &str) -> Option<&str> {
        self.entries
            .get(&(category, alternate.to_string()))
            .map(String::as_str)
    }

    /// Category of an aliased custom property, if it has one.
    pub fn reference_category(&self, property: &str) -> Option<TokenCategory> {
        self.reference_categories.get(property).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_alias_targets_builtin_catalog() {
        let table = AliasTable::builtin(TokenCatalog::builtin());
        assert_eq!(table.len(), BUILTIN_ALIASES.len());
    }

    #[test]
    fn test_missing_target_skipped() {
        let entry = AliasEntry {
            category: Color,
            alternate: "--brand".to_string(),
            canonical: "no-such-color".to_string(),
        };
        let table = AliasTable::with_entries(TokenCatalog::builtin(), &[entry]);
        assert_eq!(table.resolve(Color, "--brand"), None);
        assert_eq!(table.reference_category("--brand"), None);
    }

    #[test]
    fn test_configured_entry_overrides_builtin() {
        let entry = AliasEntry {
            category: Color,
            alternate: "--primary".to_string(),
            canonical: "midnight-teal".to_string(),
        };
        let table = AliasTable::with_entries(TokenCatalog::builtin(), &[entry]);
        assert_eq!(table.resolve(Color, "--primary"), Some("midnight-teal"));
    }
}
