//! Accessor imports: inserting them for new accessor calls and replacing
//! token-object imports whose every use can be rewritten.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use tokenbridge_core::TokenCategory;

use super::edits::Edit;
use crate::catalog::{accessor_function, reference_suffix, TokenCatalog, TokenRef};
use crate::extractor::TokenImport;

static IMPORT_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\b[^;'"]*?(?:\bfrom\s*)?["'][^"'\n]+["'][ \t]*;?"#).unwrap()
});

static DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*["']use (?:client|server|strict)["'][ \t]*;?"#).unwrap());

/// Accessor functions in a stable order.
pub fn ordered_functions(categories: &[TokenCategory]) -> Vec<&'static str> {
    TokenCategory::ALL
        .iter()
        .filter(|c| categories.contains(c))
        .map(|c| accessor_function(*c))
        .collect()
}

pub fn import_line(functions: &[&str], module: &str) -> String {
    format!("import {{ {} }} from '{module}';", functions.join(", "))
}

/// Edit that makes `functions` importable from `module`: extends an existing
/// named import from the module, or inserts a new line after the last import
/// (after a leading directive when there are none).
pub fn ensure_accessor_import(content: &str, functions: &[&str], module: &str) -> Option<Edit> {
    if functions.is_empty() {
        return None;
    }
    let existing = Regex::new(&format!(
        r#"import\s*\{{([^}}]*)\}}\s*from\s*["']{}["']"#,
        regex::escape(module)
    ))
    .ok()?;
    if let Some(caps) = existing.captures(content) {
        let list = caps.get(1)?;
        let present: Vec<&str> = list
            .as_str()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let missing: Vec<&str> = functions
            .iter()
            .copied()
            .filter(|f| !present.contains(f))
            .collect();
        if missing.is_empty() {
            return None;
        }
        let merged: Vec<&str> = present.into_iter().chain(missing).collect();
        return Some(Edit::new(list.range(), format!(" {} ", merged.join(", "))));
    }

    let line = import_line(functions, module);
    if let Some(last) = IMPORT_STATEMENT.find_iter(content).last() {
        return Some(Edit::insert(last.end(), format!("\n{line}")));
    }
    if let Some(directive) = DIRECTIVE.find(content) {
        return Some(Edit::insert(directive.end(), format!("\n{line}")));
    }
    Some(Edit::insert(0, format!("{line}\n")))
}

/// Category of a token object export.
fn object_category(imported: &str) -> Option<TokenCategory> {
    match imported {
        "colors" => Some(TokenCategory::Color),
        "borderRadius" => Some(TokenCategory::BorderRadius),
        "shadows" => Some(TokenCategory::Shadow),
        _ => None,
    }
}

/// `oliviaBlueT900` / `olivia_blue` → `olivia-blue-t900` / `olivia-blue`.
fn kebab_case(member: &str) -> String {
    let mut out = String::with_capacity(member.len() + 4);
    for (i, c) in member.chars().enumerate() {
        if c == '_' {
            out.push('-');
        } else if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Resolve a token-object member: canonical name, then the name with the
/// category prefix, then the designer-facing alias ignoring case and spacing.
pub fn resolve_member<'a>(
    catalog: &'a TokenCatalog,
    category: TokenCategory,
    member: &str,
) -> Option<TokenRef<'a>> {
    let kebab = kebab_case(member);
    if let Some(token) = catalog.lookup_by_name(category, &kebab) {
        return Some(token);
    }
    let prefix = match category {
        TokenCategory::BorderRadius => "radius-",
        TokenCategory::Shadow => "shadow-",
        TokenCategory::Color | TokenCategory::Typography => "",
    };
    if !prefix.is_empty() && reference_suffix(category, &kebab) == kebab {
        if let Some(token) = catalog.lookup_by_name(category, &format!("{prefix}{kebab}")) {
            return Some(token);
        }
    }
    let wanted = squash(member);
    catalog
        .list(category)
        .into_iter()
        .find(|t| squash(t.alias()) == wanted)
}

/// Every use of a local binding outside `skip`. `None` if any use is not a
/// `local.member` access.
fn member_uses<'c>(content: &'c str, local: &str, skip: &Range<usize>) -> Option<Vec<(Range<usize>, &'c str)>> {
    let ident = Regex::new(&format!(r"\b{}\b", regex::escape(local))).ok()?;
    let bytes = content.as_bytes();
    let mut uses = Vec::new();
    for m in ident.find_iter(content) {
        if skip.start <= m.start() && m.end() <= skip.end {
            continue;
        }
        if content[..m.start()].ends_with("...") {
            return None;
        }
        // `theme.colors` is a different binding.
        if m.start() > 0 && matches!(bytes[m.start() - 1], b'.' | b'$') {
            continue;
        }
        if bytes.get(m.end()) != Some(&b'.') {
            return None;
        }
        let rest = &content[m.end() + 1..];
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
            .unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        let end = m.end() + 1 + len;
        uses.push((m.start()..end, &content[m.end() + 1..end]));
    }
    Some(uses)
}

/// Edits replacing a token-object import and all of its member accesses,
/// plus the categories whose accessors the new import provides. `extra`
/// categories are imported as well. `None` when any specifier or use cannot
/// be rewritten safely.
pub fn rewrite_token_import(
    content: &str,
    import: &TokenImport,
    catalog: &TokenCatalog,
    module: &str,
    extra: &[TokenCategory],
) -> Option<(Vec<Edit>, Vec<TokenCategory>)> {
    let mut edits = Vec::new();
    let mut categories = extra.to_vec();
    for (imported, local) in &import.specifiers {
        let category = object_category(imported)?;
        let uses = member_uses(content, local, &import.span)?;
        if uses.is_empty() {
            return None;
        }
        for (span, member) in uses {
            let token = resolve_member(catalog, category, member)?;
            edits.push(Edit::new(
                span,
                format!("{}('{}')", accessor_function(category), token.name()),
            ));
        }
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    let functions = ordered_functions(&categories);
    edits.push(Edit::new(import.span.clone(), import_line(&functions, module)));
    Some((edits, categories))
}
