//! Command implementations. Each writes its report to `out`.

pub mod components;
pub mod tokens;
pub mod transform;

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;
use tokenbridge_analysis::TokenCatalog;
use tokenbridge_core::config::{BridgeConfig, CliOverrides};

use crate::args::{Cli, OutputFormat};

/// Resolved configuration and catalog shared by every command.
pub struct Context {
    pub config: BridgeConfig,
    pub catalog: Cow<'static, TokenCatalog>,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve config rooted at `root` with the global flags on top, then load
    /// the configured catalog.
    pub fn load(cli: &Cli, root: &Path) -> Result<Self> {
        let overrides = CliOverrides {
            catalog_path: cli.catalog.as_ref().map(|p| p.display().to_string()),
            component_pattern: cli.pattern.clone(),
            scan_threads: cli.threads,
            ..Default::default()
        };
        let config_root = cli.config_root.as_deref().unwrap_or(root);
        let config = BridgeConfig::load(config_root, Some(&overrides))
            .with_context(|| format!("loading config from {}", config_root.display()))?;

        let catalog = match config.catalog.path.as_deref() {
            Some(path) => Cow::Owned(TokenCatalog::load(Path::new(path))?),
            None => Cow::Borrowed(TokenCatalog::builtin()),
        };
        tracing::debug!(tokens = catalog.len(), "catalog ready");

        Ok(Self {
            config,
            catalog,
            format: cli.format,
        })
    }
}

pub(crate) fn write_json(out: &mut dyn Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
