//! Replacement text for a matched occurrence, by render context.

use tokenbridge_core::config::StyleObjectForm;
use tokenbridge_core::TokenCategory;

use super::edits::Edit;
use crate::catalog::{accessor_function, TokenRef, TypeFacet};
use crate::extractor::{Occurrence, RenderContext};

/// CSS custom property for a token, or for one facet of a text style.
fn css_variable(token: TokenRef<'_>, facet: Option<TypeFacet>) -> Option<String> {
    match (token.css_variable(), facet) {
        (Some(var), _) => Some(var),
        (None, Some(facet)) => Some(format!("--{}-{}", token.name(), facet.suffix())),
        (None, None) => None,
    }
}

/// `getColorValue('olivia-blue')` or `getTypographyValue('text-body', 'size')`.
pub fn accessor_call(token: TokenRef<'_>, facet: Option<TypeFacet>) -> Option<String> {
    let function = accessor_function(token.category());
    match (token.category(), facet) {
        (TokenCategory::Typography, Some(facet)) => Some(format!(
            "{function}('{}', '{}')",
            token.name(),
            facet.suffix()
        )),
        (TokenCategory::Typography, None) => None,
        _ => Some(format!("{function}('{}')", token.name())),
    }
}

/// Edits that rewrite one occurrence to `token`. `None` when the context has
/// no rendering for this token (e.g. a whole text style in a CSS value).
pub fn render(
    content: &str,
    occurrence: &Occurrence,
    token: TokenRef<'_>,
    facet: Option<TypeFacet>,
    form: StyleObjectForm,
) -> Option<Vec<Edit>> {
    let span = occurrence.span.clone();
    let replacement = match &occurrence.context {
        RenderContext::CssValue | RenderContext::Reference => {
            format!("var({})", css_variable(token, facet)?)
        }
        RenderContext::StyleObject => match form {
            StyleObjectForm::Accessor => accessor_call(token, facet)?,
            StyleObjectForm::CssVariable => format!("\"var({})\"", css_variable(token, facet)?),
        },
        RenderContext::ArbitraryClass { prefix } => match token {
            TokenRef::Color(t) => format!("{prefix}-{}", t.name),
            TokenRef::Typography(t) => t.name.clone(),
            TokenRef::BorderRadius(_) | TokenRef::Shadow(_) => {
                format!("{prefix}-{}", token.suffix())
            }
        },
        RenderContext::ClassToken => token.utility_class(),
        RenderContext::ClassGroup { members } => {
            let (first, rest) = members.split_first()?;
            let mut edits = vec![Edit::new(first.clone(), token.utility_class())];
            for member in rest {
                let start = content[..member.start].trim_end().len();
                edits.push(Edit::new(start..member.end, ""));
            }
            return Some(edits);
        }
    };
    Some(vec![Edit::new(span, replacement)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TokenCatalog;
    use smallvec::smallvec;

    fn token(category: TokenCategory, name: &str) -> TokenRef<'static> {
        TokenCatalog::builtin().lookup(category, name).unwrap()
    }

    fn occ(span: std::ops::Range<usize>, context: RenderContext) -> Occurrence {
        Occurrence { span, context }
    }

    fn one(edits: Option<Vec<Edit>>) -> String {
        edits.unwrap().remove(0).replacement
    }

    #[test]
    fn test_contexts() {
        let blue = token(TokenCategory::Color, "olivia-blue");
        let css = occ(0..7, RenderContext::CssValue);
        assert_eq!(one(render("", &css, blue, None, StyleObjectForm::Accessor)), "var(--color-olivia-blue)");

        let style = occ(0..9, RenderContext::StyleObject);
        assert_eq!(
            one(render("", &style, blue, None, StyleObjectForm::Accessor)),
            "getColorValue('olivia-blue')"
        );
        assert_eq!(
            one(render("", &style, blue, None, StyleObjectForm::CssVariable)),
            "\"var(--color-olivia-blue)\""
        );

        let class = occ(0..12, RenderContext::ArbitraryClass { prefix: "bg".into() });
        assert_eq!(one(render("", &class, blue, None, StyleObjectForm::Accessor)), "bg-olivia-blue");

        let radius = token(TokenCategory::BorderRadius, "radius-2xs");
        let class = occ(0..13, RenderContext::ArbitraryClass { prefix: "rounded-t".into() });
        assert_eq!(one(render("", &class, radius, None, StyleObjectForm::Accessor)), "rounded-t-2xs");
    }

    #[test]
    fn test_typography_facets() {
        let body = token(TokenCategory::Typography, "text-body");
        let css = occ(0..4, RenderContext::CssValue);
        assert_eq!(
            one(render("", &css, body, Some(TypeFacet::Size), StyleObjectForm::Accessor)),
            "var(--text-body-size)"
        );
        assert!(render("", &css, body, None, StyleObjectForm::Accessor).is_none());
        let style = occ(0..3, RenderContext::StyleObject);
        assert_eq!(
            one(render("", &style, body, Some(TypeFacet::LineHeight), StyleObjectForm::Accessor)),
            "getTypographyValue('text-body', 'line-height')"
        );
    }

    #[test]
    fn test_class_group() {
        let content = "text-sm  font-normal leading-5";
        let group = occ(
            0..content.len(),
            RenderContext::ClassGroup {
                members: smallvec![0..7, 9..20, 21..30],
            },
        );
        let body = token(TokenCategory::Typography, "text-body");
        let edits = render(content, &group, body, None, StyleObjectForm::Accessor).unwrap();
        assert_eq!(edits[0], Edit::new(0..7, "text-body"));
        assert_eq!(edits[1], Edit::new(7..20, ""));
        assert_eq!(edits[2], Edit::new(20..30, ""));
    }
}
