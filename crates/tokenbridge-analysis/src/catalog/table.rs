//! A flat per-category token table with name and alias indices.

use rustc_hash::FxHashMap;
use tokenbridge_core::errors::CatalogError;
use tokenbridge_core::TokenCategory;

use super::types::CatalogEntry;

/// Tokens of one category in declaration order, indexed by name and alias.
/// Both indices are built once; duplicates are rejected at build time.
#[derive(Debug, Clone)]
pub struct TokenTable<T> {
    entries: Vec<T>,
    by_name: FxHashMap<String, usize>,
    by_alias: FxHashMap<String, usize>,
}

impl<T> Default for TokenTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_name: FxHashMap::default(),
            by_alias: FxHashMap::default(),
        }
    }
}

impl<T: CatalogEntry> TokenTable<T> {
    /// Build the table, failing on the first duplicate name or alias.
    pub fn build(category: TokenCategory, entries: Vec<T>) -> Result<Self, CatalogError> {
        let mut by_name = FxHashMap::default();
        let mut by_alias = FxHashMap::default();
        by_name.reserve(entries.len());
        by_alias.reserve(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.name().to_string(), idx).is_some() {
                return Err(CatalogError::DuplicateName {
                    category,
                    name: entry.name().to_string(),
                });
            }
            if by_alias.insert(entry.alias().to_string(), idx).is_some() {
                return Err(CatalogError::DuplicateAlias {
                    category,
                    alias: entry.alias().to_string(),
                });
            }
        }

        Ok(Self {
            entries,
            by_name,
            by_alias,
        })
    }

    pub fn get_by_name(&self, name: &str) -> Option<&T> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    pub fn get_by_alias(&self, alias: &str) -> Option<&T> {
        self.by_alias.get(alias).map(|&i| &self.entries[i])
    }

    /// Name first, then alias.
    pub fn get(&self, name_or_alias: &str) -> Option<&T> {
        self.get_by_name(name_or_alias)
            .or_else(|| self.get_by_alias(name_or_alias))
    }

    /// Declaration position of a token name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// All entries in declaration order.
    pub fn all(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
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
    use crate::catalog::types::ShadowToken;

    fn shadow(name: &str, alias: &str) -> ShadowToken {
        ShadowToken {
            name: name.to_string(),
            alias: alias.to_string(),
            value: "0px 1px 2px 0px rgba(0, 0, 0, 0.10)".to_string(),
        }
    }

    #[test]
    fn test_name_takes_precedence_over_alias() {
        // "b" is the alias of the first entry and the name of the second.
        let table = TokenTable::build(
            TokenCategory::Shadow,
            vec![shadow("a", "b"), shadow("b", "c")],
        )
        .unwrap();
        assert_eq!(table.get("b").unwrap().name, "b");
        assert_eq!(table.get_by_alias("b").unwrap().name, "a");
        assert_eq!(table.position("b"), Some(1));
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let err = TokenTable::build(
            TokenCategory::Shadow,
            vec![shadow("a", "Same"), shadow("b", "Same")],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateAlias { ref alias, .. } if alias == "Same"));
    }
}
