//! Utility-class classification.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::catalog::TypeFacet;
use crate::values;

/// Prefixes that mark a class list as worth a typography pass.
static TYPOGRAPHY_PREFIXES: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["text-", "font-", "leading-"]).unwrap()
});

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];

const LEADINGS: &[&str] = &[
    "none", "tight", "snug", "normal", "relaxed", "loose", "3", "4", "5", "6", "7", "8", "9", "10",
];

/// Keywords on `shadow-*` / `rounded-*` that are not sizes.
const NON_TOKEN_KEYWORDS: &[&str] = &["none", "full", "inherit", "current", "transparent"];

/// Default palette names; `shadow-<color>[-<shade>]` sets a shadow's color.
const PALETTE: &[&str] = &[
    "black", "white", "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber",
    "yellow", "lime", "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet",
    "purple", "fuchsia", "pink", "rose",
];

const RADIUS_SIDES: &[&str] = &[
    "t", "r", "b", "l", "tl", "tr", "br", "bl", "s", "e", "ss", "se", "es", "ee",
];

pub fn may_contain_typography(class_list: &str) -> bool {
    TYPOGRAPHY_PREFIXES.is_match(class_list)
}

/// Split a variant-prefixed class (`md:hover:rounded-lg`) into the offset of
/// its base class and the base class itself.
pub fn base_class(class: &str) -> (usize, &str) {
    // Colons inside arbitrary values (`bg-[url(a:b)]`) are not variant separators.
    let search_end = class.find('[').unwrap_or(class.len());
    match class[..search_end].rfind(':') {
        Some(i) => (i + 1, &class[i + 1..]),
        None => (0, class),
    }
}

fn arbitrary_value<'a>(class: &'a str, prefix: &str) -> Option<&'a str> {
    class
        .strip_prefix(prefix)?
        .strip_prefix('[')?
        .strip_suffix(']')
}

/// Which typography dimension a class sets, if any.
pub fn typography_facet(class: &str) -> Option<TypeFacet> {
    if let Some(v) = arbitrary_value(class, "text-") {
        let is_length = (v.ends_with("px") || v.ends_with("rem")) && values::to_px(v).is_some();
        return is_length.then_some(TypeFacet::Size);
    }
    if let Some(v) = arbitrary_value(class, "font-") {
        return v.parse::<u16>().ok().map(|_| TypeFacet::Weight);
    }
    if let Some(v) = arbitrary_value(class, "leading-") {
        return values::to_px(v).map(|_| TypeFacet::LineHeight);
    }
    if let Some(size) = class.strip_prefix("text-") {
        return FONT_SIZES.contains(&size).then_some(TypeFacet::Size);
    }
    if let Some(weight) = class.strip_prefix("font-") {
        return FONT_WEIGHTS.contains(&weight).then_some(TypeFacet::Weight);
    }
    if let Some(leading) = class.strip_prefix("leading-") {
        return LEADINGS.contains(&leading).then_some(TypeFacet::LineHeight);
    }
    None
}

/// A bare `rounded` / `rounded-*` class without an arbitrary value.
pub fn is_radius_class(class: &str) -> bool {
    if class == "rounded" {
        return true;
    }
    match class.strip_prefix("rounded-") {
        Some(rest) => is_plain_suffix(rest),
        None => false,
    }
}

/// For a side-specific radius class (`rounded-t-lg`), the side prefix
/// (`rounded-t`) and the equivalent all-corner class (`rounded-lg`).
pub fn radius_side(class: &str) -> Option<(&str, String)> {
    let rest = class.strip_prefix("rounded-")?;
    let (side, size) = match rest.split_once('-') {
        Some((side, size)) => (side, Some(size)),
        None => (rest, None),
    };
    if !RADIUS_SIDES.contains(&side) {
        return None;
    }
    let prefix = &class[.."rounded-".len() + side.len()];
    let sideless = match size {
        Some(size) => format!("rounded-{size}"),
        None => "rounded".to_string(),
    };
    Some((prefix, sideless))
}

/// The value inside an arbitrary utility (`text-[14px]` → `14px`).
pub fn arbitrary_part(class: &str) -> Option<&str> {
    class.split_once("-[")?.1.strip_suffix(']')
}

/// A bare `shadow` / `shadow-*` class without an arbitrary value or opacity.
pub fn is_shadow_class(class: &str) -> bool {
    if class == "shadow" {
        return true;
    }
    match class.strip_prefix("shadow-") {
        Some(rest) => is_plain_suffix(rest) && !is_palette_color(rest),
        None => false,
    }
}

fn is_palette_color(rest: &str) -> bool {
    let (hue, shade) = rest.split_once('-').unwrap_or((rest, ""));
    PALETTE.contains(&hue) && shade.bytes().all(|b| b.is_ascii_digit())
}

fn is_plain_suffix(rest: &str) -> bool {
    !rest.is_empty()
        && !NON_TOKEN_KEYWORDS.contains(&rest)
        && rest
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Utility classes bucketed by concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorizedClasses {
    pub color: Vec<String>,
    pub spacing: Vec<String>,
    pub typography: Vec<String>,
    pub layout: Vec<String>,
    pub other: Vec<String>,
}

const COLOR_PREFIXES: &[&str] = &["bg-", "border-", "ring-", "fill-", "stroke-"];
const SPACING_PREFIXES: &[&str] = &[
    "p-", "px-", "py-", "pt-", "pr-", "pb-", "pl-", "m-", "mx-", "my-", "mt-", "mr-", "mb-", "ml-",
    "gap-", "space-x-", "space-y-", "-m",
];
const TYPOGRAPHY_CLASS_PREFIXES: &[&str] = &["font-", "leading-", "tracking-"];
const LAYOUT_PREFIXES: &[&str] = &[
    "w-", "h-", "min-w-", "min-h-", "max-w-", "max-h-", "grid-", "col-", "row-", "flex-",
    "justify-", "items-", "self-", "top-", "left-", "right-", "bottom-", "inset-", "z-",
    "overflow-",
];
const LAYOUT_KEYWORDS: &[&str] = &[
    "flex", "grid", "block", "inline", "inline-block", "inline-flex", "hidden", "absolute",
    "relative", "fixed", "sticky", "container",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

/// Bucket each class (variants stripped) by concern.
pub fn categorize_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> CategorizedClasses {
    let mut out = CategorizedClasses::default();
    for class in classes {
        let (_, base) = base_class(class);
        let bucket = if let Some(rest) = base.strip_prefix("text-") {
            if typography_facet(base).is_some() || TEXT_ALIGN.contains(&rest) {
                &mut out.typography
            } else {
                &mut out.color
            }
        } else if COLOR_PREFIXES.iter().any(|p| base.starts_with(p)) {
            &mut out.color
        } else if SPACING_PREFIXES.iter().any(|p| base.starts_with(p)) {
            &mut out.spacing
        } else if TYPOGRAPHY_CLASS_PREFIXES.iter().any(|p| base.starts_with(p)) {
            &mut out.typography
        } else if LAYOUT_KEYWORDS.contains(&base) || LAYOUT_PREFIXES.iter().any(|p| base.starts_with(p)) {
            &mut out.layout
        } else {
            &mut out.other
        };
        bucket.push(class.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typography_facets() {
        assert_eq!(typography_facet("text-sm"), Some(TypeFacet::Size));
        assert_eq!(typography_facet("text-[10px]"), Some(TypeFacet::Size));
        assert_eq!(typography_facet("font-semibold"), Some(TypeFacet::Weight));
        assert_eq!(typography_facet("font-[600]"), Some(TypeFacet::Weight));
        assert_eq!(typography_facet("leading-[22px]"), Some(TypeFacet::LineHeight));
        assert_eq!(typography_facet("text-white"), None);
        assert_eq!(typography_facet("text-[#555]"), None);
        assert_eq!(typography_facet("font-sans"), None);
    }

    #[test]
    fn test_variant_prefix_stripped() {
        assert_eq!(base_class("md:hover:rounded-lg"), (9, "rounded-lg"));
        assert_eq!(base_class("bg-[url(a:b)]"), (0, "bg-[url(a:b)]"));
    }

    #[test]
    fn test_radius_and_shadow_classes() {
        assert!(is_radius_class("rounded"));
        assert!(is_radius_class("rounded-t-lg"));
        assert!(!is_radius_class("rounded-[4px]"));
        assert!(!is_radius_class("rounded-none"));
        assert!(is_shadow_class("shadow-md"));
        assert!(!is_shadow_class("shadow-none"));
        assert!(!is_shadow_class("shadow-black/50"));
        assert!(!is_shadow_class("shadow-black"));
        assert!(!is_shadow_class("shadow-red-500"));
        assert!(is_shadow_class("shadow-lg"));
        assert!(is_shadow_class("shadow-outer-dark"));
        assert!(!is_radius_class("rounded-full"));
    }

    #[test]
    fn test_radius_side() {
        assert_eq!(radius_side("rounded-t-lg"), Some(("rounded-t", "rounded-lg".to_string())));
        assert_eq!(radius_side("rounded-tl"), Some(("rounded-tl", "rounded".to_string())));
        assert_eq!(radius_side("rounded-lg"), None);
        assert_eq!(arbitrary_part("text-[14px]"), Some("14px"));
    }

    #[test]
    fn test_categorize() {
        let cats = categorize_classes(["bg-white", "p-4", "text-sm", "text-gray-500", "flex", "rounded"]);
        assert_eq!(cats.color, vec!["bg-white", "text-gray-500"]);
        assert_eq!(cats.spacing, vec!["p-4"]);
        assert_eq!(cats.typography, vec!["text-sm"]);
        assert_eq!(cats.layout, vec!["flex"]);
        assert_eq!(cats.other, vec!["rounded"]);
    }
}
