//! `tokenbridge components`

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tokenbridge_analysis::source::{ComponentSource, LocalComponentSource};

use super::{write_json, Context};
use crate::args::OutputFormat;

pub fn run(ctx: &Context, repo: &Path, out: &mut dyn Write) -> Result<()> {
    let source = LocalComponentSource::new(repo, &ctx.config.scan)?;
    let names = source.list_components()?;
    match ctx.format {
        OutputFormat::Json => write_json(out, &names),
        OutputFormat::Text => {
            for name in &names {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
    }
}
