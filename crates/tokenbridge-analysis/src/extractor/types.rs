//! Candidate literal types produced by the extractor.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tokenbridge_core::TokenCategory;

use crate::catalog::TypeFacet;

/// The syntactic shape of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiteralForm {
    /// A CSS value: `#25C9D0`, `4px`, `0 1px 2px rgba(...)`, `14px`.
    Value,
    /// A single utility class: `rounded-lg`, `shadow-md`, `text-sm`.
    Class,
    /// Several typography classes from one class list: `text-sm font-semibold leading-5`.
    ClassGroup,
    /// A custom property reference: `--primary`.
    Reference,
}

/// How an occurrence is rewritten once its candidate is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderContext {
    /// Inside a CSS declaration or plain string: becomes `var(--…)`.
    CssValue,
    /// A quoted or numeric value in a JS style object. The span includes the quotes.
    StyleObject,
    /// An arbitrary-value utility such as `bg-[#fff]`. The span covers the whole class.
    ArbitraryClass { prefix: String },
    /// A bare class inside a class list.
    ClassToken,
    /// A typography class group. `members` are the member class spans, in order.
    ClassGroup { members: SmallVec<[Range<usize>; 3]> },
    /// A `var(--x)` (or `hsl(var(--x))`) expression. The span covers the expression.
    Reference,
}

/// One place a candidate appears in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Byte range in the source text.
    pub span: Range<usize>,
    pub context: RenderContext,
}

/// A distinct literal found in a file, with every place it occurs.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Normalized literal: lowercase 6-digit hex, whitespace-free rgba, px
    /// length, normalized shadow, class text, or custom property name.
    pub raw: String,
    pub category: TokenCategory,
    pub form: LiteralForm,
    /// Set for typography scalars and single typography classes.
    pub facet: Option<TypeFacet>,
    /// Occurrences sorted by span start.
    pub occurrences: Vec<Occurrence>,
}

impl Candidate {
    /// Start offset of the first occurrence.
    pub fn first_offset(&self) -> usize {
        self.occurrences.first().map_or(usize::MAX, |o| o.span.start)
    }

    pub fn is_rgba(&self) -> bool {
        self.category == TokenCategory::Color && self.raw.starts_with("rgb")
    }
}

/// A class list string: a `className` value or a string argument of a
/// class-merging helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassList {
    /// Byte range of the string content (without quotes).
    pub span: Range<usize>,
    /// Byte ranges of each whitespace-separated class.
    pub classes: Vec<Range<usize>>,
}

/// A named import that pulls in token objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenImport {
    /// Byte range of the whole import statement, including a trailing `;`.
    #[serde(skip)]
    pub span: Range<usize>,
    pub source: String,
    /// `(imported, local)` names; equal unless renamed with `as`.
    pub specifiers: Vec<(String, String)>,
}

impl TokenImport {
    pub fn imported_names(&self) -> impl Iterator<Item = &str> {
        self.specifiers.iter().map(|(imported, _)| imported.as_str())
    }
}

/// Everything the extractor finds in one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Distinct candidates in first-seen order.
    pub candidates: Vec<Candidate>,
    pub class_lists: Vec<ClassList>,
    pub token_imports: Vec<TokenImport>,
}

impl Extraction {
    pub fn by_category(&self, category: TokenCategory) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(move |c| c.category == category)
    }

    /// Every class in every class list, in source order.
    pub fn classes<'a>(&'a self, content: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.class_lists
            .iter()
            .flat_map(move |list| list.classes.iter().map(move |r| &content[r.clone()]))
    }
}
