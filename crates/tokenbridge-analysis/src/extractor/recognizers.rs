//! Named literal recognizers. Each pattern is bounded to one line or to an
//! explicit delimiter, so a malformed file cannot cause runaway matching.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tokenbridge_core::TokenCategory;

use super::context::{classify_value, style_object_value};
use super::types::{LiteralForm, RenderContext};
use super::CandidateSink;
use crate::aliases::AliasTable;
use crate::catalog::TypeFacet;
use crate::values;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})\b").unwrap());

static RGBA_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)rgba\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*[0-9.]+\s*\)").unwrap()
});

static CSS_RADIUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"border-radius[ \t]*:[ \t]*(\d+(?:\.\d+)?(?:px|rem))").unwrap());

static STYLE_RADIUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\bborderRadius[ \t]*:[ \t]*(?:"(\d+(?:\.\d+)?(?:px|rem))"|'(\d+(?:\.\d+)?(?:px|rem))'|(\d+(?:\.\d+)?)\b)"#,
    )
    .unwrap()
});

static RADIUS_UTILITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(rounded(?:-(?:tl|tr|br|bl|ss|se|es|ee|t|r|b|l|s|e))?)-\[(\d+(?:\.\d+)?(?:px|rem))\]")
        .unwrap()
});

static CSS_SHADOW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"box-shadow[ \t]*:[ \t]*([^;{}"'`\n]+)"#).unwrap());

static SHADOW_UTILITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bshadow-\[([^\]\s"'`]+)\]"#).unwrap());

static STYLE_SHADOW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bboxShadow[ \t]*:[ \t]*(?:"([^"\n]+)"|'([^'\n]+)')"#).unwrap()
});

static CSS_FONT_SIZE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"font-size[ \t]*:[ \t]*(\d+(?:\.\d+)?(?:px|rem))").unwrap());

static CSS_FONT_WEIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"font-weight[ \t]*:[ \t]*(\d{3})\b").unwrap());

static CSS_LINE_HEIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"line-height[ \t]*:[ \t]*(\d+(?:\.\d+)?(?:px|rem)?)").unwrap());

static STYLE_FONT_SIZE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\bfontSize[ \t]*:[ \t]*(?:"(\d+(?:\.\d+)?(?:px|rem))"|'(\d+(?:\.\d+)?(?:px|rem))'|(\d+(?:\.\d+)?)\b)"#,
    )
    .unwrap()
});

static STYLE_FONT_WEIGHT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bfontWeight[ \t]*:[ \t]*(?:"(\d{3})"|'(\d{3})'|(\d{3})\b)"#).unwrap()
});

static STYLE_LINE_HEIGHT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\blineHeight[ \t]*:[ \t]*(?:"(\d+(?:\.\d+)?(?:px|rem)?)"|'(\d+(?:\.\d+)?(?:px|rem)?)'|(\d+(?:\.\d+)?)\b)"#,
    )
    .unwrap()
});

static TYPOGRAPHY_UTILITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\b(text|font|leading)-\[([^\]\s"'`]+)\]"#).unwrap());

static WRAPPED_VAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:hsla?|rgba?)\(\s*var\(\s*(--[A-Za-z0-9_-]+)\s*\)\s*\)").unwrap()
});

static BARE_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"var\(\s*(--[A-Za-z0-9_-]+)\s*\)").unwrap());

/// Attributes whose `#…` values are fragments, not colors.
const FRAGMENT_ATTRIBUTES: &[&str] = &["href", "to", "xlinkHref", "id", "target"];

/// True when the value ending at `end` is followed (on the same line) by a
/// declaration terminator rather than more value tokens.
fn value_terminated(content: &str, end: usize) -> bool {
    let rest = content[end..].trim_start_matches([' ', '\t']);
    match rest.bytes().next() {
        None => true,
        Some(b) => matches!(b, b';' | b'}' | b'!' | b'"' | b'\'' | b'`' | b'\n' | b'\r' | b','),
    }
}

/// True when a numeric style-object value is the whole property value.
fn numeric_terminated(content: &str, end: usize) -> bool {
    let rest = content[end..].trim_start_matches([' ', '\t']);
    match rest.bytes().next() {
        None => true,
        Some(b) => matches!(b, b',' | b'}' | b'\n' | b'\r'),
    }
}

fn is_fragment_reference(content: &str, start: usize) -> bool {
    let before = &content[..start];
    let Some(before) = before.strip_suffix(['"', '\'']) else {
        return false;
    };
    let Some(before) = before.trim_end().strip_suffix('=') else {
        return false;
    };
    let attr = before.trim_end();
    FRAGMENT_ATTRIBUTES.iter().any(|a| attr.ends_with(a))
}

pub(super) fn hex_colors(content: &str, sink: &mut CandidateSink) {
    for m in HEX_COLOR.find_iter(content) {
        let bytes = content.as_bytes();
        if m.start() > 0 && matches!(bytes[m.start() - 1], b'&' | b'#') {
            continue;
        }
        if is_fragment_reference(content, m.start()) {
            continue;
        }
        let Some(raw) = values::hex_key(m.as_str()) else {
            continue;
        };
        let (span, context) = classify_value(content, m.range());
        sink.push(TokenCategory::Color, LiteralForm::Value, None, raw, span, context);
    }
}

pub(super) fn rgba_colors(content: &str, sink: &mut CandidateSink) {
    for m in RGBA_COLOR.find_iter(content) {
        if values::parse_rgba(m.as_str()).is_none() {
            continue;
        }
        let raw = values::compact(m.as_str());
        let (span, context) = classify_value(content, m.range());
        sink.push(TokenCategory::Color, LiteralForm::Value, None, raw, span, context);
    }
}

pub(super) fn css_radii(content: &str, sink: &mut CandidateSink) {
    for caps in CSS_RADIUS.captures_iter(content) {
        let Some(value) = caps.get(1) else { continue };
        if !value_terminated(content, value.end()) {
            continue;
        }
        let Some(px) = values::to_px(value.as_str()) else {
            continue;
        };
        sink.push(
            TokenCategory::BorderRadius,
            LiteralForm::Value,
            None,
            values::format_px(px),
            value.range(),
            RenderContext::CssValue,
        );
    }
}

/// Shared handling for `key: "v"`, `key: 'v'`, and `key: 42` style-object
/// patterns with the value in capture groups 1, 2, 3 respectively.
fn style_object_scalars(
    content: &str,
    re: &Regex,
    category: TokenCategory,
    facet: Option<TypeFacet>,
    normalize: impl Fn(&str, bool) -> Option<String>,
    sink: &mut CandidateSink,
) {
    for caps in re.captures_iter(content) {
        let (value, numeric) = match quoted_or_numeric(&caps) {
            Some(v) => v,
            None => continue,
        };
        let span = if numeric {
            if !numeric_terminated(content, value.end) {
                continue;
            }
            value.clone()
        } else {
            match style_object_value(content, &value) {
                Some(quoted) => quoted,
                None => continue,
            }
        };
        let Some(raw) = normalize(&content[value], numeric) else {
            continue;
        };
        sink.push(category, LiteralForm::Value, facet, raw, span, RenderContext::StyleObject);
    }
}

fn quoted_or_numeric(caps: &Captures<'_>) -> Option<(Range<usize>, bool)> {
    if let Some(m) = caps.get(1).or_else(|| caps.get(2)) {
        return Some((m.range(), false));
    }
    caps.get(3).map(|m| (m.range(), true))
}

fn px_value(v: &str, _numeric: bool) -> Option<String> {
    values::to_px(v).map(values::format_px)
}

pub(super) fn style_object_radii(content: &str, sink: &mut CandidateSink) {
    style_object_scalars(
        content,
        &STYLE_RADIUS,
        TokenCategory::BorderRadius,
        None,
        px_value,
        sink,
    );
}

pub(super) fn radius_utilities(content: &str, sink: &mut CandidateSink) {
    for caps in RADIUS_UTILITY.captures_iter(content) {
        let (Some(whole), Some(prefix), Some(value)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let Some(px) = values::to_px(value.as_str()) else {
            continue;
        };
        sink.push(
            TokenCategory::BorderRadius,
            LiteralForm::Value,
            None,
            values::format_px(px),
            whole.range(),
            RenderContext::ArbitraryClass {
                prefix: prefix.as_str().to_string(),
            },
        );
    }
}

fn is_plausible_shadow(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    value.bytes().any(|b| b.is_ascii_digit())
        && !lower.contains("var(")
        && !value.contains('$')
        && !lower.starts_with('#')
        && !lower.starts_with("rgb")
}

pub(super) fn css_shadows(content: &str, sink: &mut CandidateSink) {
    for caps in CSS_SHADOW.captures_iter(content) {
        let Some(m) = caps.get(1) else { continue };
        let mut text = m.as_str().trim_end();
        if let Some(stripped) = text.strip_suffix("!important") {
            text = stripped.trim_end();
        }
        if text.is_empty() || !is_plausible_shadow(text) {
            continue;
        }
        let span = m.start()..m.start() + text.len();
        sink.push(
            TokenCategory::Shadow,
            LiteralForm::Value,
            None,
            values::normalize_shadow(text),
            span,
            RenderContext::CssValue,
        );
    }
}

pub(super) fn shadow_utilities(content: &str, sink: &mut CandidateSink) {
    for caps in SHADOW_UTILITY.captures_iter(content) {
        let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let spaced = value.as_str().replace('_', " ");
        if !is_plausible_shadow(&spaced) {
            continue;
        }
        sink.push(
            TokenCategory::Shadow,
            LiteralForm::Value,
            None,
            values::normalize_shadow(&spaced),
            whole.range(),
            RenderContext::ArbitraryClass {
                prefix: "shadow".to_string(),
            },
        );
    }
}

pub(super) fn style_object_shadows(content: &str, sink: &mut CandidateSink) {
    for caps in STYLE_SHADOW.captures_iter(content) {
        let Some(value) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        if !is_plausible_shadow(value.as_str()) {
            continue;
        }
        let Some(span) = style_object_value(content, &value.range()) else {
            continue;
        };
        sink.push(
            TokenCategory::Shadow,
            LiteralForm::Value,
            None,
            values::normalize_shadow(value.as_str()),
            span,
            RenderContext::StyleObject,
        );
    }
}

/// Normalize a line height: lengths to px, unitless ratios as plain numbers.
pub(crate) fn line_height_value(v: &str) -> Option<String> {
    let v = v.trim();
    if v.ends_with("px") || v.ends_with("rem") {
        return values::to_px(v).map(values::format_px);
    }
    v.parse::<f64>().ok().map(|n| n.to_string())
}

fn weight_value(v: &str) -> Option<String> {
    v.trim().parse::<u16>().ok().map(|n| n.to_string())
}

pub(super) fn css_typography(content: &str, sink: &mut CandidateSink) {
    let rules: [(&Regex, TypeFacet, fn(&str) -> Option<String>); 3] = [
        (&CSS_FONT_SIZE, TypeFacet::Size, |v| px_value(v, false)),
        (&CSS_FONT_WEIGHT, TypeFacet::Weight, weight_value),
        (&CSS_LINE_HEIGHT, TypeFacet::LineHeight, line_height_value),
    ];
    for (re, facet, normalize) in rules {
        for caps in re.captures_iter(content) {
            let Some(value) = caps.get(1) else { continue };
            if !value_terminated(content, value.end()) {
                continue;
            }
            let Some(raw) = normalize(value.as_str()) else {
                continue;
            };
            sink.push(
                TokenCategory::Typography,
                LiteralForm::Value,
                Some(facet),
                raw,
                value.range(),
                RenderContext::CssValue,
            );
        }
    }
}

pub(super) fn style_object_typography(content: &str, sink: &mut CandidateSink) {
    style_object_scalars(
        content,
        &STYLE_FONT_SIZE,
        TokenCategory::Typography,
        Some(TypeFacet::Size),
        // React treats a bare number as pixels.
        px_value,
        sink,
    );
    style_object_scalars(
        content,
        &STYLE_FONT_WEIGHT,
        TokenCategory::Typography,
        Some(TypeFacet::Weight),
        |v, _| weight_value(v),
        sink,
    );
    style_object_scalars(
        content,
        &STYLE_LINE_HEIGHT,
        TokenCategory::Typography,
        Some(TypeFacet::LineHeight),
        // A bare number is a unitless ratio.
        |v, _| line_height_value(v),
        sink,
    );
}

/// Arbitrary typography utilities that are not part of a class list.
pub(super) fn typography_utilities(
    content: &str,
    class_list_spans: &[Range<usize>],
    sink: &mut CandidateSink,
) {
    for caps in TYPOGRAPHY_UTILITY.captures_iter(content) {
        let (Some(whole), Some(prefix), Some(value)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if class_list_spans
            .iter()
            .any(|s| s.start <= whole.start() && whole.end() <= s.end)
        {
            continue;
        }
        let Some(facet) = super::classes::typography_facet(whole.as_str()) else {
            continue;
        };
        let raw = match facet {
            TypeFacet::Size => px_value(value.as_str(), false),
            TypeFacet::Weight => weight_value(value.as_str()),
            TypeFacet::LineHeight => line_height_value(value.as_str()),
        };
        let Some(raw) = raw else { continue };
        sink.push(
            TokenCategory::Typography,
            LiteralForm::Value,
            Some(facet),
            raw,
            whole.range(),
            RenderContext::ArbitraryClass {
                prefix: prefix.as_str().to_string(),
            },
        );
    }
}

/// Category of a custom property: canonical prefix first, then the alias table.
pub(crate) fn reference_category(property: &str, aliases: &AliasTable) -> Option<TokenCategory> {
    if property.starts_with("--color-") {
        Some(TokenCategory::Color)
    } else if property.starts_with("--radius-") {
        Some(TokenCategory::BorderRadius)
    } else if property.starts_with("--shadow-") {
        Some(TokenCategory::Shadow)
    } else {
        aliases.reference_category(property)
    }
}

pub(super) fn references(content: &str, aliases: &AliasTable, sink: &mut CandidateSink) {
    let mut wrapped: Vec<Range<usize>> = Vec::new();
    for caps in WRAPPED_VAR.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // Only colors can be unwrapped from a color function.
        if reference_category(name.as_str(), aliases) != Some(TokenCategory::Color) {
            continue;
        }
        wrapped.push(whole.range());
        sink.push(
            TokenCategory::Color,
            LiteralForm::Reference,
            None,
            name.as_str().to_string(),
            whole.range(),
            RenderContext::Reference,
        );
    }
    for caps in BARE_VAR.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if wrapped
            .iter()
            .any(|w| w.start <= whole.start() && whole.end() <= w.end)
        {
            continue;
        }
        let Some(category) = reference_category(name.as_str(), aliases) else {
            continue;
        };
        sink.push(
            category,
            LiteralForm::Reference,
            None,
            name.as_str().to_string(),
            whole.range(),
            RenderContext::Reference,
        );
    }
}
