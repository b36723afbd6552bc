//! Class-list discovery: `className`/`class` attribute values and string
//! arguments of class-merging helpers.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::ClassList;

static CLASS_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\b(?:className|class)\s*=\s*(?:\{\s*)?(?:"([^"\n]*)"|'([^'\n]*)'|`([^`]*)`)"#)
        .unwrap()
});

static CLASS_HELPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:cn|clsx|classNames|cva|twMerge|twJoin)\s*\(").unwrap());

/// Upper bound on how far a helper call's argument list is scanned.
const MAX_HELPER_SCAN: usize = 8 * 1024;

/// All class lists in `content`, sorted by position.
pub fn find_class_lists(content: &str) -> Vec<ClassList> {
    let mut spans: Vec<Range<usize>> = Vec::new();

    for caps in CLASS_ATTR.captures_iter(content) {
        if let Some(m) = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)) {
            spans.push(m.range());
        }
    }
    for m in CLASS_HELPER.find_iter(content) {
        helper_string_args(content, m.end(), &mut spans);
    }

    spans.sort_by_key(|r| (r.start, r.end));
    spans.dedup();
    spans
        .into_iter()
        .map(|span| ClassList {
            classes: tokenize(content, span.clone()),
            span,
        })
        .collect()
}

/// Collect the content spans of string literals inside a call's argument
/// list, starting just after the opening parenthesis.
fn helper_string_args(content: &str, start: usize, out: &mut Vec<Range<usize>>) {
    let bytes = content.as_bytes();
    let end = (start + MAX_HELPER_SCAN).min(bytes.len());
    let mut depth = 1usize;
    let mut i = start;
    while i < end {
        match bytes[i] {
            b'(' | b'{' | b'[' => depth += 1,
            b')' | b'}' | b']' => {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
            q @ (b'"' | b'\'' | b'`') => {
                let body = i + 1;
                let mut j = body;
                while j < end && bytes[j] != q {
                    if bytes[j] == b'\\' {
                        j += 1;
                    } else if q != b'`' && bytes[j] == b'\n' {
                        break;
                    }
                    j += 1;
                }
                if j < end && bytes[j] == q {
                    out.push(body..j);
                }
                i = j;
            }
            _ => {}
        }
        i += 1;
    }
}

/// Whitespace-separated class ranges within `span`, skipping `${…}` template
/// expressions.
fn tokenize(content: &str, span: Range<usize>) -> Vec<Range<usize>> {
    let bytes = content.as_bytes();
    let mut classes = Vec::new();
    let mut start: Option<usize> = None;
    let mut i = span.start;
    while i < span.end {
        let b = bytes[i];
        if b == b'$' && bytes.get(i + 1) == Some(&b'{') {
            // Discard any partial class glued to the expression.
            start = None;
            let mut depth = 0usize;
            while i < span.end {
                match bytes[i] {
                    b'{' => depth += 1,
                    b'}' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
                i += 1;
            }
            i += 1;
            continue;
        }
        if b.is_ascii_whitespace() {
            if let Some(s) = start.take() {
                classes.push(s..i);
            }
        } else if start.is_none() {
            start = Some(i);
        }
        i += 1;
    }
    if let Some(s) = start {
        classes.push(s..span.end);
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(content: &str) -> Vec<Vec<&str>> {
        find_class_lists(content)
            .iter()
            .map(|l| l.classes.iter().map(|r| &content[r.clone()]).collect())
            .collect()
    }

    #[test]
    fn test_attribute_forms() {
        let src = r#"<a className="p-4 rounded" /><b class='m-2' /><c className={"flex"} />"#;
        assert_eq!(lists(src), vec![vec!["p-4", "rounded"], vec!["m-2"], vec!["flex"]]);
    }

    #[test]
    fn test_template_expressions_skipped() {
        let src = "<a className={`p-4 ${open ? 'block' : 'hidden'} text-sm`} />";
        let found = lists(src);
        assert!(found.contains(&vec!["p-4", "text-sm"]));
    }

    #[test]
    fn test_helper_string_args() {
        let src = r#"<a className={cn("px-2 shadow-md", active && "bg-white", { "x": y })} />"#;
        let found = lists(src);
        assert_eq!(found[0], vec!["px-2", "shadow-md"]);
        assert_eq!(found[1], vec!["bg-white"]);
    }
}
