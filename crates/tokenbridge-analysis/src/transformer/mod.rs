//! Rewriting: replaces matched literals with token references.
//!
//! Each file is transformed independently: extract, match, render one edit
//! group per occurrence, accept groups in priority order (references,
//! shadows, typography, radii, colors, bare classes) and apply them in one
//! pass. A group that overlaps an accepted edit is dropped whole, so no
//! literal is ever partially rewritten.

pub mod edits;
pub mod imports;
pub mod render;
pub mod summary;

use rayon::prelude::*;
use serde::Serialize;
use tokenbridge_core::config::{BridgeConfig, StyleObjectForm, TransformConfig};
use tokenbridge_core::{ComponentFile, TokenCategory};

use crate::aliases::AliasTable;
use crate::analyzer::{is_presentational, ComponentAnalysis, DEFAULT_PRESENTATIONAL_EXTENSIONS};
use crate::catalog::TokenCatalog;
use crate::extractor::{Candidate, Extractor, LiteralForm, RenderContext};
use crate::matcher::TokenMatcher;

use edits::{EditSet, Offer};
pub use summary::TransformationSummary;

/// Output of transforming one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTransform {
    pub content: String,
    pub summary: TransformationSummary,
}

impl FileTransform {
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Per-file line of a batch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub path: String,
    pub changed: bool,
    pub summary: TransformationSummary,
}

/// Output of a batch transform. Files keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationResult {
    pub transformed_files: Vec<ComponentFile>,
    pub summary: TransformationSummary,
    pub files: Vec<FileSummary>,
}

impl TransformationResult {
    pub fn changed_files(&self) -> impl Iterator<Item = &ComponentFile> {
        self.files
            .iter()
            .zip(&self.transformed_files)
            .filter(|(s, _)| s.changed)
            .map(|(_, f)| f)
    }
}

/// Edit acceptance order. Lower goes first.
fn priority(candidate: &Candidate) -> u8 {
    match (candidate.form, candidate.category) {
        (LiteralForm::Reference, _) => 0,
        (LiteralForm::Value, TokenCategory::Shadow) => 1,
        (_, TokenCategory::Typography) => 2,
        (LiteralForm::Value, TokenCategory::BorderRadius) => 3,
        (LiteralForm::Value, TokenCategory::Color) => 4,
        _ => 5,
    }
}

/// Rewrites component files against one catalog.
#[derive(Debug, Clone)]
pub struct Transformer<'a> {
    matcher: TokenMatcher<'a>,
    extractor: Extractor,
    config: TransformConfig,
    presentational_extensions: Vec<String>,
}

impl<'a> Transformer<'a> {
    pub fn new(
        matcher: TokenMatcher<'a>,
        config: TransformConfig,
        presentational_extensions: Vec<String>,
    ) -> Self {
        let extractor = Extractor::new(matcher.aliases().clone());
        Self {
            matcher,
            extractor,
            config,
            presentational_extensions,
        }
    }

    /// Default thresholds, built-in aliases, and default transform settings.
    pub fn with_defaults(catalog: &'a TokenCatalog) -> Self {
        Self::new(
            TokenMatcher::with_defaults(catalog),
            TransformConfig::default(),
            DEFAULT_PRESENTATIONAL_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        )
    }

    /// Thresholds, aliases, and rewrite settings from a resolved config.
    pub fn from_config(catalog: &'a TokenCatalog, config: &BridgeConfig) -> Self {
        let aliases = AliasTable::with_entries(catalog, &config.matching.aliases);
        let matcher = TokenMatcher::new(catalog, config.matching.thresholds(), aliases);
        Self::new(
            matcher,
            config.transform.clone(),
            config.scan.effective_presentational_extensions(),
        )
    }

    pub fn matcher(&self) -> &TokenMatcher<'a> {
        &self.matcher
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Rewrite one file's content.
    pub fn transform_content(&self, content: &str) -> FileTransform {
        let extraction = self.extractor.extract(content);
        let form = self.config.effective_style_object_form();
        let mut candidates: Vec<&Candidate> = extraction.candidates.iter().collect();
        candidates.sort_by_key(|c| priority(c));

        let mut edits = EditSet::new();
        let mut summary = TransformationSummary::default();
        let mut accessor_categories: Vec<TokenCategory> = Vec::new();

        for candidate in candidates {
            let Some(found) = self.matcher.match_candidate(candidate) else {
                continue;
            };
            let cutoff = self.config.cutoff(candidate.category);
            if found.confidence < cutoff {
                tracing::debug!(
                    raw = %candidate.raw,
                    token = found.token.name(),
                    confidence = found.confidence,
                    cutoff,
                    "match below cutoff, leaving literal"
                );
                continue;
            }

            let mut applied = false;
            for occurrence in &candidate.occurrences {
                let Some(group) =
                    render::render(content, occurrence, found.token, candidate.facet, form)
                else {
                    continue;
                };
                if edits.offer(content, group) == Offer::Applied {
                    applied = true;
                    if occurrence.context == RenderContext::StyleObject
                        && form == StyleObjectForm::Accessor
                        && !accessor_categories.contains(&candidate.category)
                    {
                        accessor_categories.push(candidate.category);
                    }
                }
            }
            if !applied {
                continue;
            }
            tracing::debug!(
                category = %candidate.category,
                raw = %candidate.raw,
                token = found.token.name(),
                confidence = found.confidence,
                reason = %found.reason,
                occurrences = candidate.occurrences.len(),
                "rewrote literal"
            );
            match (candidate.form, candidate.category) {
                (LiteralForm::Class, TokenCategory::BorderRadius | TokenCategory::Shadow) => {
                    summary.classes_transformed += 1;
                }
                (_, category) => summary.record(category),
            }
        }

        let module = self.config.effective_accessor_module();
        let mut imports_written = false;
        if self.config.effective_rewrite_token_imports() {
            for import in &extraction.token_imports {
                // The first rewritten import also carries the accessors the
                // literal rewrites need.
                let extra: &[TokenCategory] = if imports_written { &[] } else { &accessor_categories };
                let Some((group, _)) = imports::rewrite_token_import(
                    content,
                    import,
                    self.matcher.catalog(),
                    module,
                    extra,
                ) else {
                    continue;
                };
                if edits.offer(content, group) == Offer::Applied {
                    imports_written = true;
                    summary.imports_transformed += 1;
                    tracing::debug!(source = %import.source, "rewrote token import");
                }
            }
        }
        if !imports_written && self.config.effective_insert_accessor_imports() {
            let functions = imports::ordered_functions(&accessor_categories);
            if let Some(edit) = imports::ensure_accessor_import(content, &functions, module) {
                edits.offer(content, vec![edit]);
            }
        }

        FileTransform {
            content: edits.apply(content),
            summary,
        }
    }

    /// Files with a presentational extension are rewritten; everything else
    /// passes through unchanged.
    pub fn transform_file(&self, file: &ComponentFile) -> (ComponentFile, FileSummary) {
        if !is_presentational(file, &self.presentational_extensions) {
            return (
                file.clone(),
                FileSummary {
                    path: file.path.clone(),
                    changed: false,
                    summary: TransformationSummary::default(),
                },
            );
        }
        let out = self.transform_content(&file.content);
        let changed = out.changed(&file.content);
        (
            ComponentFile {
                content: out.content,
                ..file.clone()
            },
            FileSummary {
                path: file.path.clone(),
                changed,
                summary: out.summary,
            },
        )
    }

    /// Rewrite a batch of files in parallel. `analysis` is the analyzer's view
    /// of the same files; a batch with no presentational files is returned
    /// unchanged without extraction.
    pub fn transform(
        &self,
        files: &[ComponentFile],
        analysis: &ComponentAnalysis,
    ) -> TransformationResult {
        if analysis.files_analyzed == 0 {
            tracing::info!(files = files.len(), "no presentational files, nothing to transform");
            return TransformationResult {
                transformed_files: files.to_vec(),
                summary: TransformationSummary::default(),
                files: files
                    .iter()
                    .map(|f| FileSummary {
                        path: f.path.clone(),
                        changed: false,
                        summary: TransformationSummary::default(),
                    })
                    .collect(),
            };
        }

        let (transformed_files, reports): (Vec<ComponentFile>, Vec<FileSummary>) =
            files.par_iter().map(|f| self.transform_file(f)).unzip();
        let summary: TransformationSummary = reports.iter().map(|r| r.summary).sum();
        tracing::info!(
            files = files.len(),
            changed = reports.iter().filter(|r| r.changed).count(),
            rewrites = summary.total(),
            "transform complete"
        );
        TransformationResult {
            transformed_files,
            summary,
            files: reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(content: &str) -> FileTransform {
        Transformer::with_defaults(TokenCatalog::builtin()).transform_content(content)
    }

    #[test]
    fn test_css_value() {
        let out = transform(".a { color: #25C9D0; }");
        assert_eq!(out.content, ".a { color: var(--color-olivia-blue); }");
        assert_eq!(out.summary.colors_transformed, 1);
    }

    #[test]
    fn test_counts_once_per_candidate() {
        let out = transform(".a { color: #25C9D0; }\n.b { border-color: #25c9d0; }");
        assert_eq!(out.content.matches("var(--color-olivia-blue)").count(), 2);
        assert_eq!(out.summary.colors_transformed, 1);
    }

    #[test]
    fn test_shadow_wins_over_inner_color() {
        let out = transform(".a { box-shadow: 0px 1px 3px 0px rgba(0,0,0,0.11); }");
        assert_eq!(out.content, ".a { box-shadow: var(--shadow-outer-extra-light); }");
        assert_eq!(out.summary.shadows_transformed, 1);
        assert_eq!(out.summary.colors_transformed, 0);
    }

    #[test]
    fn test_style_object_adds_accessor_import() {
        let src = "import React from 'react';\n\nexport const A = () => <div style={{ color: '#25C9D0' }} />;\n";
        let out = transform(src);
        assert!(out.content.contains("style={{ color: getColorValue('olivia-blue') }}"));
        assert!(out
            .content
            .starts_with("import React from 'react';\nimport { getColorValue } from '@tokens/token-index';\n"));
    }

    #[test]
    fn test_typography_group() {
        let out = transform(r#"<p className="text-xl font-semibold leading-7 mt-2">x</p>"#);
        assert_eq!(out.content, r#"<p className="text-headline-h1 mt-2">x</p>"#);
        assert_eq!(out.summary.typography_transformed, 1);
    }

    #[test]
    fn test_bare_classes() {
        let out = transform(r#"<div className="rounded-lg shadow-md md:rounded-t-xl" />"#);
        assert_eq!(
            out.content,
            r#"<div className="rounded-xs shadow-outer-medium-12 md:rounded-t-sm" />"#
        );
        assert_eq!(out.summary.classes_transformed, 3);
    }

    #[test]
    fn test_reference_alias() {
        let out = transform(".a { background: hsl(var(--primary)); }");
        assert_eq!(out.content, ".a { background: var(--color-olivia-blue); }");
        assert_eq!(out.summary.colors_transformed, 1);
    }

    #[test]
    fn test_token_import_rewrite() {
        let src = "import { colors } from '@/design-tokens';\nconst s = { color: colors.oliviaBlue };\n";
        let out = transform(src);
        assert_eq!(
            out.content,
            "import { getColorValue } from '@tokens/token-index';\nconst s = { color: getColorValue('olivia-blue') };\n"
        );
        assert_eq!(out.summary.imports_transformed, 1);
    }

    #[test]
    fn test_second_pass_is_clean() {
        let src = r##"import React from 'react';
export const Card = () => (
  <div className="rounded-[8px] bg-[#F8F8F8] text-sm font-normal leading-5" style={{ boxShadow: '0px 6px 12px 0px rgba(0, 0, 0, 0.18)', borderRadius: 12 }}>
    <span style={{ color: "#555555" }}>hi</span>
  </div>
);
"##;
        let t = Transformer::with_defaults(TokenCatalog::builtin());
        let first = t.transform_content(src);
        assert!(!first.summary.is_empty());
        let second = t.transform_content(&first.content);
        assert_eq!(second.content, first.content);
        assert!(second.summary.is_empty());
    }
}
