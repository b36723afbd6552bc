//! Literal extraction: finds every hard-coded style value, utility class,
//! custom property reference, and token import in a component file.
//!
//! Extraction is a pure function of the file content. Candidates are
//! deduplicated by (category, form, facet, normalized literal) and keep every
//! occurrence span so the transformer can rewrite them all.

pub mod class_lists;
pub mod classes;
pub mod context;
pub mod imports;
mod recognizers;
pub mod types;

use std::ops::Range;

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tokenbridge_core::TokenCategory;

use crate::aliases::AliasTable;
use crate::catalog::TypeFacet;

pub use class_lists::find_class_lists;
pub use classes::{categorize_classes, CategorizedClasses};
pub use imports::find_token_imports;
pub(crate) use recognizers::line_height_value;
pub use types::{
    Candidate, ClassList, Extraction, LiteralForm, Occurrence, RenderContext, TokenImport,
};

type CandidateKey = (TokenCategory, LiteralForm, Option<TypeFacet>, String);

// Recognizer families, as prefilter bits.
const COLOR: u8 = 1;
const RADIUS: u8 = 1 << 1;
const SHADOW: u8 = 1 << 2;
const TYPOGRAPHY: u8 = 1 << 3;
const REFERENCE: u8 = 1 << 4;
const ALL_FAMILIES: u8 = COLOR | RADIUS | SHADOW | TYPOGRAPHY | REFERENCE;

/// Literals at least one of which occurs in anything a family recognizes.
const TRIGGERS: &[(&str, u8)] = &[
    ("#", COLOR),
    ("rgba(", COLOR),
    ("radius", RADIUS),
    ("rounded", RADIUS),
    ("shadow", SHADOW),
    ("font", TYPOGRAPHY),
    ("line-height", TYPOGRAPHY),
    ("lineheight", TYPOGRAPHY),
    ("text-", TYPOGRAPHY),
    ("leading-", TYPOGRAPHY),
    ("var(", REFERENCE),
];

static PREFILTER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(TRIGGERS.iter().map(|(t, _)| t))
        .unwrap()
});

/// Recognizer families worth running on `content`.
fn families(content: &str) -> u8 {
    let mut found = 0;
    for m in PREFILTER.find_overlapping_iter(content) {
        found |= TRIGGERS[m.pattern().as_usize()].1;
        if found == ALL_FAMILIES {
            break;
        }
    }
    found
}

/// Accumulates candidates, merging repeated literals into one candidate.
#[derive(Default)]
pub(crate) struct CandidateSink {
    index: FxHashMap<CandidateKey, usize>,
    candidates: Vec<Candidate>,
    spans: FxHashSet<(TokenCategory, usize, usize)>,
}

impl CandidateSink {
    pub(crate) fn push(
        &mut self,
        category: TokenCategory,
        form: LiteralForm,
        facet: Option<TypeFacet>,
        raw: String,
        span: Range<usize>,
        context: RenderContext,
    ) {
        if !self.spans.insert((category, span.start, span.end)) {
            return;
        }
        let occurrence = Occurrence { span, context };
        let key = (category, form, facet, raw);
        if let Some(&i) = self.index.get(&key) {
            self.candidates[i].occurrences.push(occurrence);
            return;
        }
        let (category, form, facet, raw) = key.clone();
        self.index.insert(key, self.candidates.len());
        self.candidates.push(Candidate {
            raw,
            category,
            form,
            facet,
            occurrences: vec![occurrence],
        });
    }

    fn finish(mut self) -> Vec<Candidate> {
        for candidate in &mut self.candidates {
            candidate.occurrences.sort_by_key(|o| o.span.start);
        }
        self.candidates.sort_by_key(Candidate::first_offset);
        self.candidates
    }
}

/// Extracts candidates from component source text.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    aliases: AliasTable,
}

impl Extractor {
    /// `aliases` decides which non-canonical `var(--x)` references are
    /// candidates and in which category.
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    pub fn extract(&self, content: &str) -> Extraction {
        let class_lists = find_class_lists(content);
        let present = families(content);
        let mut sink = CandidateSink::default();

        if present & REFERENCE != 0 {
            recognizers::references(content, &self.aliases, &mut sink);
        }
        if present & COLOR != 0 {
            recognizers::hex_colors(content, &mut sink);
            recognizers::rgba_colors(content, &mut sink);
        }
        if present & RADIUS != 0 {
            recognizers::css_radii(content, &mut sink);
            recognizers::style_object_radii(content, &mut sink);
            recognizers::radius_utilities(content, &mut sink);
        }
        if present & SHADOW != 0 {
            recognizers::css_shadows(content, &mut sink);
            recognizers::shadow_utilities(content, &mut sink);
            recognizers::style_object_shadows(content, &mut sink);
        }
        if present & TYPOGRAPHY != 0 {
            recognizers::css_typography(content, &mut sink);
            recognizers::style_object_typography(content, &mut sink);
        }
        class_list_tokens(content, &class_lists, &mut sink);

        if present & TYPOGRAPHY != 0 {
            let list_spans: Vec<Range<usize>> =
                class_lists.iter().map(|l| l.span.clone()).collect();
            recognizers::typography_utilities(content, &list_spans, &mut sink);
        }

        let candidates = sink.finish();
        tracing::trace!(candidates = candidates.len(), "extracted candidates");
        Extraction {
            candidates,
            class_lists,
            token_imports: find_token_imports(content),
        }
    }
}

/// Bare radius/shadow classes and typography classes inside class lists.
fn class_list_tokens(content: &str, lists: &[ClassList], sink: &mut CandidateSink) {
    for list in lists {
        let mut typography: SmallVec<[Range<usize>; 3]> = SmallVec::new();
        for range in &list.classes {
            let class = &content[range.clone()];
            let (offset, base) = classes::base_class(class);
            let base_span = range.start + offset..range.end;

            if classes::is_radius_class(base) {
                // Sided classes match as their all-corner form and keep the side.
                let (raw, context) = match classes::radius_side(base) {
                    Some((prefix, sideless)) => (
                        sideless,
                        RenderContext::ArbitraryClass {
                            prefix: prefix.to_string(),
                        },
                    ),
                    None => (base.to_string(), RenderContext::ClassToken),
                };
                sink.push(
                    TokenCategory::BorderRadius,
                    LiteralForm::Class,
                    None,
                    raw,
                    base_span.clone(),
                    context,
                );
            } else if classes::is_shadow_class(base) {
                sink.push(
                    TokenCategory::Shadow,
                    LiteralForm::Class,
                    None,
                    base.to_string(),
                    base_span.clone(),
                    RenderContext::ClassToken,
                );
            }

            // Variant-prefixed typography belongs to another state; leave it.
            if offset == 0 && classes::typography_facet(base).is_some() {
                typography.push(range.clone());
            }
        }

        match typography.len() {
            0 => {}
            1 => {
                let span = typography[0].clone();
                let class = &content[span.clone()];
                sink.push(
                    TokenCategory::Typography,
                    LiteralForm::Class,
                    classes::typography_facet(class),
                    class.to_string(),
                    span,
                    RenderContext::ClassToken,
                );
            }
            _ => {
                let raw = typography
                    .iter()
                    .map(|r| &content[r.clone()])
                    .collect::<Vec<_>>()
                    .join(" ");
                let span = typography[0].start..typography[typography.len() - 1].end;
                sink.push(
                    TokenCategory::Typography,
                    LiteralForm::ClassGroup,
                    None,
                    raw,
                    span,
                    RenderContext::ClassGroup {
                        members: typography,
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TokenCatalog;

    fn extract(content: &str) -> Extraction {
        Extractor::new(AliasTable::builtin(TokenCatalog::builtin())).extract(content)
    }

    fn raws(ex: &Extraction, category: TokenCategory) -> Vec<&str> {
        ex.by_category(category).map(|c| c.raw.as_str()).collect()
    }

    #[test]
    fn test_hex_dedup_keeps_all_occurrences() {
        let src = r#"<div className="bg-[#25C9D0]" style={{ color: '#25c9d0' }} />"#;
        let ex = extract(src);
        let colors: Vec<_> = ex.by_category(TokenCategory::Color).collect();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].raw, "#25c9d0");
        assert_eq!(colors[0].occurrences.len(), 2);
        assert!(matches!(
            colors[0].occurrences[0].context,
            RenderContext::ArbitraryClass { .. }
        ));
        assert_eq!(colors[0].occurrences[1].context, RenderContext::StyleObject);
    }

    #[test]
    fn test_fragment_links_are_not_colors() {
        let ex = extract(r##"<a href="#add">x</a>"##);
        assert!(raws(&ex, TokenCategory::Color).is_empty());
    }

    #[test]
    fn test_radius_forms() {
        let src = ".a { border-radius: 0.25rem; }\nconst s = { borderRadius: 8 };\n<i className=\"rounded-lg rounded-t-[6px]\" />";
        let ex = extract(src);
        assert_eq!(raws(&ex, TokenCategory::BorderRadius), vec!["4px", "8px", "rounded-lg", "6px"]);
    }

    #[test]
    fn test_multi_value_radius_is_skipped() {
        let ex = extract(".a { border-radius: 4px 8px; }");
        assert!(raws(&ex, TokenCategory::BorderRadius).is_empty());
    }

    #[test]
    fn test_shadow_forms() {
        let src = ".a { box-shadow: 0 1px  2px rgba(0,0,0,0.1) !important; }\n<i className=\"shadow-[0_4px_8px_rgba(0,0,0,0.2)] shadow-md\" />";
        let ex = extract(src);
        assert_eq!(
            raws(&ex, TokenCategory::Shadow),
            vec!["0 1px 2px rgba(0, 0, 0, 0.1)", "0 4px 8px rgba(0, 0, 0, 0.2)", "shadow-md"]
        );
    }

    #[test]
    fn test_typography_group_and_single() {
        let ex = extract(r#"<h1 className="text-sm font-semibold md:text-lg leading-5" /><p className="text-xs" />"#);
        let typo: Vec<_> = ex.by_category(TokenCategory::Typography).collect();
        assert_eq!(typo.len(), 2);
        assert_eq!(typo[0].form, LiteralForm::ClassGroup);
        assert_eq!(typo[0].raw, "text-sm font-semibold leading-5");
        assert_eq!(typo[1].form, LiteralForm::Class);
        assert_eq!(typo[1].facet, Some(TypeFacet::Size));
    }

    #[test]
    fn test_typography_scalars() {
        let src = ".t { font-size: 14px; font-weight: 600; line-height: 1.4; }";
        let ex = extract(src);
        let facets: Vec<_> = ex
            .by_category(TokenCategory::Typography)
            .map(|c| (c.facet, c.raw.as_str()))
            .collect();
        assert_eq!(
            facets,
            vec![
                (Some(TypeFacet::Size), "14px"),
                (Some(TypeFacet::Weight), "600"),
                (Some(TypeFacet::LineHeight), "1.4"),
            ]
        );
    }

    #[test]
    fn test_references() {
        let src = ".a { color: hsl(var(--primary)); background: var(--color-neutral-white); margin: var(--gap); }";
        let ex = extract(src);
        assert_eq!(raws(&ex, TokenCategory::Color), vec!["--primary", "--color-neutral-white"]);
        let wrapped = &ex.candidates[0].occurrences[0];
        assert_eq!(&src[wrapped.span.clone()], "hsl(var(--primary))");
    }

    #[test]
    fn test_prefilter_families() {
        assert_eq!(families("const a = 1;"), 0);
        assert_eq!(families("borderRadius: 8"), RADIUS);
        assert_eq!(families("BOX-SHADOW: none; color: #fff"), SHADOW | COLOR);
        assert_eq!(families("fontSize: 12, lineHeight: 1.4"), TYPOGRAPHY);
    }

    #[test]
    fn test_candidates_in_first_seen_order() {
        let src = ".a { box-shadow: 0 1px 2px #000; color: #fff; }";
        let ex = extract(src);
        let offsets: Vec<_> = ex.candidates.iter().map(Candidate::first_offset).collect();
        let mut sorted = offsets.clone();
        sorted.sort();
        assert_eq!(offsets, sorted);
    }
}
