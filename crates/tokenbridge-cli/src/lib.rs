//! # tokenbridge-cli
//!
//! The `tokenbridge` command: catalog queries and exports, component
//! analysis, and in-place token rewriting.

pub mod args;
pub mod commands;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tokenbridge_core::errors::{BridgeErrorCode, CatalogError, ConfigError, SourceError, TransformError};

pub use args::{Cli, Command, OutputFormat, TokensCommand};
use commands::Context;

/// Run a parsed command line, writing the report to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let root = match &cli.command {
        Command::Components { repo } => repo.as_path(),
        Command::Analyze { target } | Command::Transform { target, .. } => target.repo.as_path(),
        Command::Tokens(_) | Command::Rewrite { .. } => Path::new("."),
    };
    let ctx = Context::load(cli, root)?;

    match &cli.command {
        Command::Tokens(command) => commands::tokens::run(&ctx, command, out),
        Command::Components { repo } => commands::components::run(&ctx, repo, out),
        Command::Analyze { target } => commands::transform::analyze(&ctx, target, out),
        Command::Transform { target, out: out_dir, write } => {
            commands::transform::transform(&ctx, target, out_dir.as_deref(), *write, out)
        }
        Command::Rewrite { files, write } => commands::transform::rewrite(&ctx, files, *write, out),
    }
}

/// `[CODE] message` for engine errors, the full context chain otherwise.
pub fn report(error: &anyhow::Error) -> String {
    if let Some(e) = error.downcast_ref::<CatalogError>() {
        return e.report_string();
    }
    if let Some(e) = error.downcast_ref::<ConfigError>() {
        return e.report_string();
    }
    if let Some(e) = error.downcast_ref::<SourceError>() {
        return e.report_string();
    }
    if let Some(e) = error.downcast_ref::<TransformError>() {
        return e.report_string();
    }
    format!("{error:#}")
}
