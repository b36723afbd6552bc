//! Per-category rewrite counters.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use tokenbridge_core::TokenCategory;

/// Number of distinct candidates rewritten, by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationSummary {
    pub colors_transformed: usize,
    pub border_radii_transformed: usize,
    pub shadows_transformed: usize,
    pub typography_transformed: usize,
    /// Bare `rounded*` / `shadow*` classes renamed to token classes.
    pub classes_transformed: usize,
    /// Token-object imports replaced with accessor imports.
    pub imports_transformed: usize,
}

impl TransformationSummary {
    pub(crate) fn record(&mut self, category: TokenCategory) {
        match category {
            TokenCategory::Color => self.colors_transformed += 1,
            TokenCategory::BorderRadius => self.border_radii_transformed += 1,
            TokenCategory::Shadow => self.shadows_transformed += 1,
            TokenCategory::Typography => self.typography_transformed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.colors_transformed
            + self.border_radii_transformed
            + self.shadows_transformed
            + self.typography_transformed
            + self.classes_transformed
            + self.imports_transformed
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl AddAssign for TransformationSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.colors_transformed += rhs.colors_transformed;
        self.border_radii_transformed += rhs.border_radii_transformed;
        self.shadows_transformed += rhs.shadows_transformed;
        self.typography_transformed += rhs.typography_transformed;
        self.classes_transformed += rhs.classes_transformed;
        self.imports_transformed += rhs.imports_transformed;
    }
}

impl Add for TransformationSummary {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sum for TransformationSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_is_fieldwise() {
        let a = TransformationSummary {
            colors_transformed: 2,
            classes_transformed: 1,
            ..Default::default()
        };
        let b = TransformationSummary {
            colors_transformed: 1,
            imports_transformed: 1,
            ..Default::default()
        };
        let total: TransformationSummary = [a, b].into_iter().sum();
        assert_eq!(total.colors_transformed, 3);
        assert_eq!(total.total(), 5);
        assert!(TransformationSummary::default().is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(TransformationSummary::default()).unwrap();
        assert!(json.get("borderRadiiTransformed").is_some());
        assert!(json.get("importsTransformed").is_some());
    }
}
