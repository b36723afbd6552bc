//! Named imports of token objects (`import { colors } from '@/tokens'`).

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::TokenImport;

static NAMED_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+\{([^}]*)\}\s*from\s*["']([^"'\n]+)["'][ \t]*;?"#).unwrap()
});

const TOKEN_SOURCE_MARKERS: &[&str] = &["tokens", "design-system", "design-token"];
const TOKEN_OBJECTS: &[&str] = &["colors", "shadows", "typography", "borderRadius"];

fn is_token_import(source: &str, specifiers: &[(String, String)]) -> bool {
    let source = source.to_ascii_lowercase();
    TOKEN_SOURCE_MARKERS.iter().any(|m| source.contains(m))
        || specifiers.iter().any(|(imported, _)| {
            TOKEN_OBJECTS.contains(&imported.as_str())
                || imported.to_ascii_lowercase().contains("token")
        })
}

fn parse_specifiers(list: &str) -> Vec<(String, String)> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|spec| {
            // `type Foo` imports carry no runtime value.
            let spec = spec.strip_prefix("type ").unwrap_or(spec).trim();
            let mut parts = spec.split_whitespace();
            let imported = parts.next()?.to_string();
            let local = match (parts.next(), parts.next()) {
                (Some("as"), Some(local)) => local.to_string(),
                _ => imported.clone(),
            };
            Some((imported, local))
        })
        .collect()
}

pub fn find_token_imports(content: &str) -> Vec<TokenImport> {
    NAMED_IMPORT
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let source = caps.get(2)?.as_str();
            let specifiers = parse_specifiers(caps.get(1)?.as_str());
            if specifiers.is_empty() || !is_token_import(source, &specifiers) {
                return None;
            }
            Some(TokenImport {
                span: whole.range(),
                source: source.to_string(),
                specifiers,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_imports() {
        let src = "import { colors, shadows as sh } from '@/tokens';\nimport { useState } from 'react';\n";
        let found = find_token_imports(src);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].source, "@/tokens");
        assert_eq!(
            found[0].specifiers,
            vec![
                ("colors".to_string(), "colors".to_string()),
                ("shadows".to_string(), "sh".to_string())
            ]
        );
        assert_eq!(&src[found[0].span.clone()], "import { colors, shadows as sh } from '@/tokens';");
    }

    #[test]
    fn test_recognized_by_specifier() {
        let found = find_token_imports("import { borderRadius } from '../theme'");
        assert_eq!(found.len(), 1);
        let found = find_token_imports("import { designTokens } from '../theme'");
        assert_eq!(found.len(), 1);
    }
}
