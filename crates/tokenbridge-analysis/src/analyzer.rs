//! Component analysis: the distinct style literals and classes a set of
//! component files uses, before any matching.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tokenbridge_core::config::BridgeConfig;
use tokenbridge_core::{ComponentFile, TokenCategory};

use crate::aliases::AliasTable;
use crate::catalog::TokenCatalog;
use crate::extractor::{categorize_classes, CategorizedClasses, Extractor, LiteralForm, TokenImport};

/// Extensions of files that carry markup and inline styles.
pub const DEFAULT_PRESENTATIONAL_EXTENSIONS: &[&str] = &["tsx", "jsx"];

pub fn is_presentational(file: &ComponentFile, extensions: &[String]) -> bool {
    file.extension()
        .is_some_and(|ext| extensions.iter().any(|e| *e == ext))
}

/// What a component's files contain. Lists are distinct, in first-seen
/// order across files; `class_usage` keeps every occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAnalysis {
    pub colors: Vec<String>,
    pub rgba_colors: Vec<String>,
    pub border_radii: Vec<String>,
    pub shadows: Vec<String>,
    pub typography: Vec<String>,
    /// Custom property references (`--primary`).
    pub references: Vec<String>,
    pub class_usage: Vec<String>,
    pub class_categories: CategorizedClasses,
    pub token_imports: Vec<TokenImport>,
    pub files_analyzed: usize,
    pub files_skipped: usize,
}

impl ComponentAnalysis {
    /// Number of distinct literals across all categories.
    pub fn literal_count(&self) -> usize {
        self.colors.len()
            + self.rgba_colors.len()
            + self.border_radii.len()
            + self.shadows.len()
            + self.typography.len()
            + self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literal_count() == 0 && self.class_usage.is_empty() && self.token_imports.is_empty()
    }

    fn absorb(&mut self, other: ComponentAnalysis) {
        self.colors.extend(other.colors);
        self.rgba_colors.extend(other.rgba_colors);
        self.border_radii.extend(other.border_radii);
        self.shadows.extend(other.shadows);
        self.typography.extend(other.typography);
        self.references.extend(other.references);
        self.class_usage.extend(other.class_usage);
        self.token_imports.extend(other.token_imports);
        self.files_analyzed += other.files_analyzed;
        self.files_skipped += other.files_skipped;
    }

    fn finish(&mut self) {
        for list in [
            &mut self.colors,
            &mut self.rgba_colors,
            &mut self.border_radii,
            &mut self.shadows,
            &mut self.typography,
            &mut self.references,
        ] {
            dedup_in_order(list);
        }
        let mut seen = FxHashSet::default();
        let distinct: Vec<&str> = self
            .class_usage
            .iter()
            .map(String::as_str)
            .filter(|c| seen.insert(*c))
            .collect();
        self.class_categories = categorize_classes(distinct);
    }
}

fn dedup_in_order(list: &mut Vec<String>) {
    let mut seen = FxHashSet::default();
    list.retain(|item| seen.insert(item.clone()));
}

/// Runs the extractor over component files.
#[derive(Debug, Clone)]
pub struct ComponentAnalyzer {
    extractor: Extractor,
    presentational_extensions: Vec<String>,
}

impl ComponentAnalyzer {
    pub fn new(extractor: Extractor, presentational_extensions: Vec<String>) -> Self {
        Self {
            extractor,
            presentational_extensions,
        }
    }

    pub fn with_defaults(catalog: &TokenCatalog) -> Self {
        Self::new(
            Extractor::new(AliasTable::builtin(catalog)),
            DEFAULT_PRESENTATIONAL_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        )
    }

    pub fn from_config(catalog: &TokenCatalog, config: &BridgeConfig) -> Self {
        Self::new(
            Extractor::new(AliasTable::with_entries(catalog, &config.matching.aliases)),
            config.scan.effective_presentational_extensions(),
        )
    }

    /// Analyze one file's content.
    pub fn analyze_content(&self, content: &str) -> ComponentAnalysis {
        let extraction = self.extractor.extract(content);
        let mut out = ComponentAnalysis {
            files_analyzed: 1,
            ..Default::default()
        };
        for candidate in &extraction.candidates {
            let raw = candidate.raw.clone();
            if candidate.form == LiteralForm::Reference {
                out.references.push(raw);
                continue;
            }
            match candidate.category {
                TokenCategory::Color if candidate.is_rgba() => out.rgba_colors.push(raw),
                TokenCategory::Color => out.colors.push(raw),
                TokenCategory::BorderRadius => out.border_radii.push(raw),
                TokenCategory::Shadow => out.shadows.push(raw),
                TokenCategory::Typography => out.typography.push(raw),
            }
        }
        out.class_usage = extraction.classes(content).map(str::to_string).collect();
        out.token_imports = extraction.token_imports;
        out
    }

    /// Analyze a batch in parallel; results merge in input order.
    pub fn analyze(&self, files: &[ComponentFile]) -> ComponentAnalysis {
        let parts: Vec<ComponentAnalysis> = files
            .par_iter()
            .map(|file| {
                if is_presentational(file, &self.presentational_extensions) {
                    self.analyze_content(&file.content)
                } else {
                    tracing::trace!(path = %file.path, "skipping non-presentational file");
                    ComponentAnalysis {
                        files_skipped: 1,
                        ..Default::default()
                    }
                }
            })
            .collect();

        let mut analysis = ComponentAnalysis::default();
        for part in parts {
            analysis.absorb(part);
        }
        analysis.finish();
        tracing::info!(
            files = analysis.files_analyzed,
            skipped = analysis.files_skipped,
            literals = analysis.literal_count(),
            classes = analysis.class_usage.len(),
            "analysis complete"
        );
        analysis
    }
}
