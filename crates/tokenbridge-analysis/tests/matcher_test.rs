//! Matching properties across whole catalogs.

use tokenbridge_analysis::catalog::{BorderRadiusToken, CatalogDefinition, ColorToken, TypeFacet};
use tokenbridge_analysis::matcher::MatchReason;
use tokenbridge_analysis::{TokenCatalog, TokenMatcher};
use tokenbridge_core::TokenCategory;

fn colors(entries: &[(&str, &str)]) -> TokenCatalog {
    TokenCatalog::from_definition(CatalogDefinition {
        colors: entries
            .iter()
            .map(|(name, value)| ColorToken {
                name: name.to_string(),
                alias: name.to_uppercase(),
                value: value.to_string(),
                usage: None,
            })
            .collect(),
        ..Default::default()
    })
    .unwrap()
}

fn radius(px: &str) -> TokenCatalog {
    TokenCatalog::from_definition(CatalogDefinition {
        border_radius: vec![BorderRadiusToken {
            name: "radius-only".to_string(),
            alias: "Only".to_string(),
            value: px.to_string(),
        }],
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_every_token_value_matches_itself_exactly() {
    let catalog = TokenCatalog::builtin();
    let matcher = TokenMatcher::with_defaults(catalog);
    for category in [TokenCategory::Color, TokenCategory::BorderRadius, TokenCategory::Shadow] {
        for token in catalog.list(category) {
            let m = matcher
                .match_value(category, &token.value())
                .unwrap_or_else(|| panic!("{} did not match", token.name()));
            assert_eq!(m.token.name(), token.name());
            assert_eq!(m.confidence, 1.0);
            assert_eq!(m.reason, MatchReason::ExactValue);
        }
    }
}

#[test]
fn test_every_typography_size_class_has_a_match() {
    let catalog = TokenCatalog::builtin();
    let matcher = TokenMatcher::with_defaults(catalog);
    for token in catalog.typography().iter() {
        let m = matcher.match_typography_value(TypeFacet::Size, &token.size.value).unwrap();
        assert_eq!(m.token.as_typography().unwrap().size.value, token.size.value);
    }
}

#[test]
fn test_closer_color_wins_regardless_of_order() {
    let catalog = colors(&[("far", "#858585"), ("near", "#828282")]);
    let matcher = TokenMatcher::with_defaults(&catalog);
    let m = matcher.match_value(TokenCategory::Color, "#808080").unwrap();
    assert_eq!(m.token.name(), "near");
    assert!(m.confidence > 0.9 && m.confidence < 1.0);
    assert_eq!(m.reason, MatchReason::Approximate);
}

#[test]
fn test_color_confidence_decreases_with_distance() {
    let catalog = colors(&[("target", "#808080")]);
    let matcher = TokenMatcher::with_defaults(&catalog);
    let mut last = 1.0;
    for input in ["#818181", "#848484", "#888888", "#8C8C8C"] {
        let m = matcher.match_value(TokenCategory::Color, input).unwrap();
        assert!(m.confidence < last, "{input}: {} >= {last}", m.confidence);
        last = m.confidence;
    }
    assert!(matcher.match_value(TokenCategory::Color, "#C0C0C0").is_none());
}

#[test]
fn test_rgba_alpha_is_ignored() {
    let catalog = colors(&[("black", "#000000")]);
    let matcher = TokenMatcher::with_defaults(&catalog);
    let m = matcher.match_value(TokenCategory::Color, "rgba(0,0,0,0.2)").unwrap();
    assert_eq!(m.token.name(), "black");
    assert_eq!(m.confidence, 1.0);
}

#[test]
fn test_radius_at_allowance_boundary_does_not_match() {
    // allowance = max(4px, 25% of 14px) = 4px
    let matcher_catalog = radius("10px");
    let matcher = TokenMatcher::with_defaults(&matcher_catalog);
    assert!(matcher.match_value(TokenCategory::BorderRadius, "14px").is_none());
    assert!(matcher.match_value(TokenCategory::BorderRadius, "6px").is_none());

    // allowance = 25% of 40px = 10px
    let large = radius("50px");
    let matcher = TokenMatcher::with_defaults(&large);
    assert!(matcher.match_value(TokenCategory::BorderRadius, "40px").is_none());
}

#[test]
fn test_radius_inside_allowance() {
    let catalog = radius("1rem");
    let matcher = TokenMatcher::with_defaults(&catalog);
    // 1px off with a 4px allowance.
    let m = matcher.match_value(TokenCategory::BorderRadius, "15px").unwrap();
    assert!((m.confidence - 0.75).abs() < 1e-9);
    // 2px off a 4.5px allowance is under the acceptance line.
    assert!(matcher.match_value(TokenCategory::BorderRadius, "18px").is_none());
    let exact = matcher.match_value(TokenCategory::BorderRadius, "16px").unwrap();
    assert_eq!(exact.reason, MatchReason::ExactValue);
}

#[test]
fn test_unparseable_shadow_never_matches() {
    let matcher = TokenMatcher::with_defaults(TokenCatalog::builtin());
    assert!(matcher.match_value(TokenCategory::Shadow, "var(--elevation)").is_none());
    assert!(matcher.match_value(TokenCategory::Shadow, "none").is_none());
}

#[test]
fn test_reference_and_alias_precedence() {
    let matcher = TokenMatcher::with_defaults(TokenCatalog::builtin());
    let exact = matcher
        .match_reference(TokenCategory::Color, "--color-olivia-blue")
        .unwrap();
    assert_eq!(exact.reason, MatchReason::ExactReference);
    assert_eq!(exact.confidence, 1.0);

    let alias = matcher.match_reference(TokenCategory::Color, "--primary").unwrap();
    assert_eq!(alias.reason, MatchReason::Alias);
    assert_eq!(alias.token.name(), "olivia-blue");
    assert!((alias.confidence - 0.95).abs() < 1e-9);
}
