//! `tokenbridge analyze`, `transform`, and `rewrite`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Serialize;
use tokenbridge_analysis::source::{ComponentSource, LocalComponentSource};
use tokenbridge_analysis::transformer::FileSummary;
use tokenbridge_analysis::{ComponentAnalysis, ComponentAnalyzer, TransformationSummary, Transformer};
use tokenbridge_core::errors::BridgeErrorCode;
use tokenbridge_core::ComponentFile;

use super::{write_json, Context};
use crate::args::{OutputFormat, Target};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReport<'a> {
    component: &'a str,
    #[serde(flatten)]
    analysis: &'a ComponentAnalysis,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransformReport<'a> {
    component: &'a str,
    summary: TransformationSummary,
    files: &'a [FileSummary],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RewriteReport<'a> {
    #[serde(flatten)]
    file: &'a FileSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

fn targets(source: &LocalComponentSource, target: &Target) -> Result<Vec<String>> {
    if target.all {
        return Ok(source.list_components()?);
    }
    Ok(target.component.iter().cloned().collect())
}

/// Read a component's files; unreadable files are logged and left out.
fn read_component(source: &LocalComponentSource, name: &str) -> Result<Vec<ComponentFile>> {
    let batch = source.component_files(name)?;
    for e in &batch.errors {
        tracing::warn!(component = name, "{}", e.report_string());
    }
    Ok(batch.data)
}

pub fn describe(summary: &TransformationSummary) -> String {
    format!(
        "colors {}, radii {}, shadows {}, typography {}, classes {}, imports {}",
        summary.colors_transformed,
        summary.border_radii_transformed,
        summary.shadows_transformed,
        summary.typography_transformed,
        summary.classes_transformed,
        summary.imports_transformed,
    )
}

fn list_line(out: &mut dyn Write, label: &str, items: &[String]) -> Result<()> {
    if !items.is_empty() {
        writeln!(out, "  {label:<13} {}", items.join(", "))?;
    }
    Ok(())
}

pub fn analyze(ctx: &Context, target: &Target, out: &mut dyn Write) -> Result<()> {
    let source = LocalComponentSource::new(&target.repo, &ctx.config.scan)?;
    let analyzer = ComponentAnalyzer::from_config(&ctx.catalog, &ctx.config);

    let mut results = Vec::new();
    for name in targets(&source, target)? {
        let files = read_component(&source, &name)?;
        let analysis = analyzer.analyze(&files);
        results.push((name, analysis));
    }

    match ctx.format {
        OutputFormat::Json => {
            let reports: Vec<_> = results
                .iter()
                .map(|(component, analysis)| AnalysisReport { component, analysis })
                .collect();
            write_json(out, &reports)
        }
        OutputFormat::Text => {
            for (name, a) in &results {
                writeln!(
                    out,
                    "{name}: {} files analyzed, {} skipped",
                    a.files_analyzed, a.files_skipped
                )?;
                list_line(out, "colors:", &a.colors)?;
                list_line(out, "rgba:", &a.rgba_colors)?;
                list_line(out, "radii:", &a.border_radii)?;
                list_line(out, "shadows:", &a.shadows)?;
                list_line(out, "typography:", &a.typography)?;
                list_line(out, "references:", &a.references)?;
                let cats = &a.class_categories;
                writeln!(
                    out,
                    "  {:<13} {} uses ({} color, {} spacing, {} typography, {} layout, {} other)",
                    "classes:",
                    a.class_usage.len(),
                    cats.color.len(),
                    cats.spacing.len(),
                    cats.typography.len(),
                    cats.layout.len(),
                    cats.other.len(),
                )?;
                if !a.token_imports.is_empty() {
                    writeln!(out, "  {:<13} {}", "token imports:", a.token_imports.len())?;
                }
            }
            Ok(())
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

pub fn transform(
    ctx: &Context,
    target: &Target,
    out_dir: Option<&Path>,
    write: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let source = LocalComponentSource::new(&target.repo, &ctx.config.scan)?;
    let analyzer = ComponentAnalyzer::from_config(&ctx.catalog, &ctx.config);
    let transformer = Transformer::from_config(&ctx.catalog, &ctx.config);

    let mut reports = Vec::new();
    for name in targets(&source, target)? {
        let files = read_component(&source, &name)?;
        let analysis = analyzer.analyze(&files);
        let result = transformer.transform(&files, &analysis);

        if write {
            let dir = source.component_dir(&name);
            for file in result.changed_files() {
                write_file(&dir.join(&file.path), &file.content)?;
            }
        } else if let Some(root) = out_dir {
            let dir = root.join(&name);
            for file in &result.transformed_files {
                write_file(&dir.join(&file.path), &file.content)?;
            }
        }
        reports.push((name, result));
    }

    match ctx.format {
        OutputFormat::Json => {
            let json: Vec<_> = reports
                .iter()
                .map(|(component, r)| TransformReport {
                    component,
                    summary: r.summary,
                    files: &r.files,
                })
                .collect();
            write_json(out, &json)
        }
        OutputFormat::Text => {
            let mut total = TransformationSummary::default();
            for (name, r) in &reports {
                let changed: Vec<&str> = r
                    .files
                    .iter()
                    .filter(|f| f.changed)
                    .map(|f| f.path.as_str())
                    .collect();
                writeln!(
                    out,
                    "{name}: {} of {} files changed ({})",
                    changed.len(),
                    r.files.len(),
                    describe(&r.summary)
                )?;
                for path in changed {
                    writeln!(out, "  {path}")?;
                }
                total += r.summary;
            }
            if reports.len() > 1 {
                writeln!(out, "total: {} rewrites ({})", total.total(), describe(&total))?;
            }
            Ok(())
        }
    }
}

pub fn rewrite(ctx: &Context, paths: &[PathBuf], write: bool, out: &mut dyn Write) -> Result<()> {
    let transformer = Transformer::from_config(&ctx.catalog, &ctx.config);

    let mut results = Vec::with_capacity(paths.len());
    for path in paths {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = ComponentFile::new(name, path.display().to_string(), content);
        let (rewritten, summary) = transformer.transform_file(&file);
        if write && summary.changed {
            fs::write(path, &rewritten.content)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        results.push((rewritten, summary));
    }

    match ctx.format {
        OutputFormat::Json => {
            let reports: Vec<_> = results
                .iter()
                .map(|(file, summary)| RewriteReport {
                    file: summary,
                    content: (!write).then_some(file.content.as_str()),
                })
                .collect();
            write_json(out, &reports)
        }
        OutputFormat::Text if write => {
            for (_, summary) in &results {
                let status = if summary.changed { "rewritten" } else { "unchanged" };
                writeln!(out, "{}: {status} ({})", summary.path, describe(&summary.summary))?;
            }
            Ok(())
        }
        OutputFormat::Text => {
            let multiple = results.len() > 1;
            for (file, _) in &results {
                if multiple {
                    writeln!(out, "// {}", file.path)?;
                }
                write!(out, "{}", file.content)?;
            }
            Ok(())
        }
    }
}
