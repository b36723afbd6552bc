//! Typography matching: class groups by per-dimension agreement, single
//! classes and scalars by facet value.

use tokenbridge_core::constants::{TYPOGRAPHY_FACET_CONFIDENCE, TYPOGRAPHY_SIZE_CONFIDENCE};

use crate::catalog::{TypeFacet, TypographyToken};
use crate::extractor::classes::{arbitrary_part, typography_facet};
use crate::extractor::line_height_value;
use crate::values;

const CONTROL_KEYWORDS: &[&str] = &["button", "input", "link", "tab", "tooltip", "avatar", "subtitle"];

/// Controls are the most specific use of a scale value, then headlines,
/// then generic body text.
fn specificity(name: &str) -> u8 {
    if CONTROL_KEYWORDS.iter().any(|k| name.contains(k)) {
        2
    } else if name.contains("headline") {
        1
    } else {
        0
    }
}

pub(super) fn facet_confidence(facet: TypeFacet) -> f64 {
    match facet {
        TypeFacet::Size => TYPOGRAPHY_SIZE_CONFIDENCE,
        TypeFacet::Weight | TypeFacet::LineHeight => TYPOGRAPHY_FACET_CONFIDENCE,
    }
}

/// Compare two values of one facet after normalization.
fn same_value(facet: TypeFacet, a: &str, b: &str) -> bool {
    match facet {
        TypeFacet::Size => match (values::to_px(a), values::to_px(b)) {
            (Some(a), Some(b)) => (a - b).abs() < f64::EPSILON,
            _ => false,
        },
        TypeFacet::Weight => match (a.trim().parse::<u16>(), b.trim().parse::<u16>()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        },
        TypeFacet::LineHeight => match (line_height_value(a), line_height_value(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

/// Does `token` produce `class`? Arbitrary classes compare by value.
fn declares_class(token: &TypographyToken, facet: TypeFacet, class: &str) -> bool {
    let Some(scale) = token.facet(facet) else {
        return false;
    };
    if scale.utility_class == class {
        return true;
    }
    match arbitrary_part(class) {
        Some(value) => same_value(facet, value, &scale.value),
        None => false,
    }
}

fn most_specific(tokens: &[TypographyToken], accept: impl Fn(&TypographyToken) -> bool) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (i, token) in tokens.iter().enumerate() {
        if !accept(token) {
            continue;
        }
        let rank = specificity(&token.name);
        if best.map_or(true, |(_, br)| rank > br) {
            best = Some((i, rank));
        }
    }
    best.map(|(i, _)| i)
}

/// Single typography class, e.g. `text-sm` or `font-[600]`.
pub(super) fn match_class(tokens: &[TypographyToken], facet: TypeFacet, class: &str) -> Option<usize> {
    most_specific(tokens, |t| declares_class(t, facet, class))
}

/// Single typography scalar, e.g. `font-size: 14px`.
pub(super) fn match_value(tokens: &[TypographyToken], facet: TypeFacet, raw: &str) -> Option<usize> {
    most_specific(tokens, |t| {
        t.facet(facet)
            .is_some_and(|scale| same_value(facet, raw, &scale.value))
    })
}

/// Class group: score is the share of member classes the entry declares.
/// Accepted above `min_score`; ties keep the first declared entry.
pub(super) fn match_group(
    tokens: &[TypographyToken],
    members: &[&str],
    min_score: f64,
) -> Option<(usize, f64)> {
    let facets: Vec<(TypeFacet, &str)> = members
        .iter()
        .filter_map(|m| typography_facet(m).map(|f| (f, *m)))
        .collect();
    if facets.is_empty() {
        return None;
    }
    let mut best: Option<(usize, f64)> = None;
    for (i, token) in tokens.iter().enumerate() {
        let hits = facets
            .iter()
            .filter(|(facet, class)| declares_class(token, *facet, class))
            .count();
        let score = hits as f64 / facets.len() as f64;
        if score <= min_score {
            continue;
        }
        if best.map_or(true, |(_, bs)| score > bs) {
            best = Some((i, score));
        }
    }
    best
}
