//! Property tests: extraction is deterministic, and a transformed file is a
//! fixed point of the transformer.

use proptest::prelude::*;
use tokenbridge_analysis::aliases::AliasTable;
use tokenbridge_analysis::{Extractor, TokenCatalog, Transformer};

const FRAGMENTS: &[&str] = &[
    "import React from 'react';",
    "'use client';",
    ".a { color: #25C9D0; }",
    ".b { background: #f8f8f8; border-radius: 0.75rem; }",
    ".c { box-shadow: 0px 1px 3px 0px rgba(0,0,0,0.11); }",
    ".d { color: rgba(85, 85, 85, 0.4); }",
    ".e { font-size: 14px; font-weight: 600; line-height: 1.4; }",
    ".f { color: hsl(var(--primary)); margin: var(--gap); }",
    "<div className=\"rounded-lg shadow-md p-4\" />",
    "<p className=\"text-sm font-normal leading-5 mt-2\">hi</p>",
    "<span className=\"text-xs\">x</span>",
    "<i className=\"bg-[#25C9D0] rounded-t-[6px] shadow-[0_4px_16px_rgba(0,0,0,0.28)]\" />",
    "<b style={{ color: '#555555', borderRadius: 8 }} />",
    "<b style={{ boxShadow: '0px 6px 12px 0px rgba(0, 0, 0, 0.18)' }} />",
    "<a href=\"#top\" className={cn('text-[10px]', 'rounded-xl')}>top</a>",
    "const blue = '#123456';",
    "export default function Card() { return null; }",
];

fn source() -> impl Strategy<Value = String> {
    prop::collection::vec(0..FRAGMENTS.len(), 0..10)
        .prop_map(|picks| picks.into_iter().map(|i| FRAGMENTS[i]).collect::<Vec<_>>().join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn extraction_is_deterministic(content in "[ -~\n]{0,240}") {
        let extractor = Extractor::new(AliasTable::builtin(TokenCatalog::builtin()));
        prop_assert_eq!(extractor.extract(&content), extractor.extract(&content));
    }

    #[test]
    fn extraction_of_components_is_deterministic(content in source()) {
        let extractor = Extractor::new(AliasTable::builtin(TokenCatalog::builtin()));
        prop_assert_eq!(extractor.extract(&content), extractor.extract(&content));
    }

    #[test]
    fn transform_reaches_a_fixed_point(content in source()) {
        let transformer = Transformer::with_defaults(TokenCatalog::builtin());
        let first = transformer.transform_content(&content);
        let second = transformer.transform_content(&first.content);
        prop_assert_eq!(&second.content, &first.content);
        prop_assert!(second.summary.is_empty(), "second pass rewrote: {:?}", second.summary);
    }

    #[test]
    fn unmatched_text_is_preserved(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
        let transformer = Transformer::with_defaults(TokenCatalog::builtin());
        let content = format!("{prefix}\n.a {{ color: #25C9D0; }}\n{suffix}");
        let out = transformer.transform_content(&content);
        prop_assert!(out.content.starts_with(&prefix));
        prop_assert!(out.content.ends_with(&suffix));
        prop_assert_eq!(out.summary.colors_transformed, 1);
    }
}
