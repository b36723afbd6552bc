//! Render-context classification for value literals.

use std::ops::Range;

use super::types::RenderContext;

/// Decide how a value literal at `span` would be rewritten, widening the
/// span where the rewrite replaces surrounding syntax.
///
/// - `prefix-[value]` → the whole class, [`RenderContext::ArbitraryClass`]
/// - `key: "value"` → the quoted string, [`RenderContext::StyleObject`]
/// - anything else → the literal, [`RenderContext::CssValue`]
pub fn classify_value(content: &str, span: Range<usize>) -> (Range<usize>, RenderContext) {
    if let Some(found) = arbitrary_class(content, &span) {
        return found;
    }
    if let Some(quoted) = style_object_value(content, &span) {
        return (quoted, RenderContext::StyleObject);
    }
    (span, RenderContext::CssValue)
}

fn arbitrary_class(content: &str, span: &Range<usize>) -> Option<(Range<usize>, RenderContext)> {
    let bytes = content.as_bytes();
    if span.start < 2 || bytes.get(span.end) != Some(&b']') {
        return None;
    }
    if bytes[span.start - 1] != b'[' || bytes[span.start - 2] != b'-' {
        return None;
    }
    let dash = span.start - 2;
    let mut begin = dash;
    while begin > 0 {
        let b = bytes[begin - 1];
        if b.is_ascii_alphanumeric() || b == b'-' {
            begin -= 1;
        } else {
            break;
        }
    }
    if begin == dash {
        return None;
    }
    let prefix = content[begin..dash].to_string();
    Some((
        begin..span.end + 1,
        RenderContext::ArbitraryClass { prefix },
    ))
}

/// `key: "value"` or `"key": 'value'`. Returns the span including quotes.
pub fn style_object_value(content: &str, span: &Range<usize>) -> Option<Range<usize>> {
    let bytes = content.as_bytes();
    if span.start == 0 {
        return None;
    }
    let quote = bytes[span.start - 1];
    if !matches!(quote, b'"' | b'\'') || bytes.get(span.end) != Some(&quote) {
        return None;
    }
    let before = content[..span.start - 1].trim_end();
    let key_end = before.strip_suffix(':')?.trim_end();
    let last = key_end.bytes().last()?;
    if last.is_ascii_alphanumeric() || last == b'_' || last == b'$' || last == b'"' || last == b'\'' {
        Some(span.start - 1..span.end + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(content: &str, literal: &str) -> (String, RenderContext) {
        let start = content.find(literal).unwrap();
        let (span, ctx) = classify_value(content, start..start + literal.len());
        (content[span].to_string(), ctx)
    }

    #[test]
    fn test_arbitrary_class() {
        let (text, ctx) = classify(r#"className="hover:bg-[#25C9D0] p-2""#, "#25C9D0");
        assert_eq!(text, "bg-[#25C9D0]");
        assert_eq!(ctx, RenderContext::ArbitraryClass { prefix: "bg".to_string() });
    }

    #[test]
    fn test_style_object() {
        let (text, ctx) = classify("style={{ color: '#fff' }}", "#fff");
        assert_eq!(text, "'#fff'");
        assert_eq!(ctx, RenderContext::StyleObject);
    }

    #[test]
    fn test_css_value() {
        let (text, ctx) = classify(".a { color: #fff; }", "#fff");
        assert_eq!(text, "#fff");
        assert_eq!(ctx, RenderContext::CssValue);
        // JSX attribute, not a style object
        let (_, ctx) = classify(r##"<path fill="#fff" />"##, "#fff");
        assert_eq!(ctx, RenderContext::CssValue);
    }
}
