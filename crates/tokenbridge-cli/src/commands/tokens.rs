//! `tokenbridge tokens …`

use std::io::Write;

use anyhow::Result;
use serde_json::{json, Value};
use tokenbridge_analysis::catalog::TokenRef;
use tokenbridge_core::TokenCategory;

use super::{write_json, Context};
use crate::args::{OutputFormat, TokensCommand};

pub fn run(ctx: &Context, command: &TokensCommand, out: &mut dyn Write) -> Result<()> {
    match command {
        TokensCommand::List { category } => list(ctx, *category, out),
        TokensCommand::Lookup { category, name } => lookup(ctx, *category, name, out),
        TokensCommand::Css { utilities } => {
            write!(out, "{}", ctx.catalog.css_variables())?;
            if *utilities {
                writeln!(out)?;
                write!(out, "{}", ctx.catalog.typography_utilities_css())?;
            }
            Ok(())
        }
        TokensCommand::Tailwind => write_json(out, &ctx.catalog.tailwind_config()),
        TokensCommand::Code { category, alias } => {
            let code = ctx.catalog.code_reference(*category, alias)?;
            match ctx.format {
                OutputFormat::Json => write_json(out, &json!({ "alias": alias, "code": code })),
                OutputFormat::Text => Ok(writeln!(out, "{code}")?),
            }
        }
    }
}

fn token_json(token: TokenRef<'_>) -> Result<Value> {
    let mut value = match token {
        TokenRef::Color(t) => serde_json::to_value(t)?,
        TokenRef::BorderRadius(t) => serde_json::to_value(t)?,
        TokenRef::Shadow(t) => serde_json::to_value(t)?,
        TokenRef::Typography(t) => serde_json::to_value(t)?,
    };
    if let Value::Object(map) = &mut value {
        map.insert("category".to_string(), json!(token.category()));
        if let Some(var) = token.css_variable() {
            map.insert("cssVariable".to_string(), json!(var));
        }
    }
    Ok(value)
}

fn list(ctx: &Context, category: Option<TokenCategory>, out: &mut dyn Write) -> Result<()> {
    let categories: Vec<TokenCategory> = match category {
        Some(c) => vec![c],
        None => TokenCategory::ALL.to_vec(),
    };
    match ctx.format {
        OutputFormat::Json => {
            let tokens = categories
                .iter()
                .flat_map(|&c| ctx.catalog.list(c))
                .map(token_json)
                .collect::<Result<Vec<_>>>()?;
            write_json(out, &tokens)
        }
        OutputFormat::Text => {
            for c in categories {
                writeln!(out, "# {c}")?;
                for token in ctx.catalog.list(c) {
                    writeln!(out, "{}\t{}\t{}", token.name(), token.alias(), token.value())?;
                }
            }
            Ok(())
        }
    }
}

fn lookup(ctx: &Context, category: TokenCategory, name: &str, out: &mut dyn Write) -> Result<()> {
    let token = ctx.catalog.require(category, name)?;
    match ctx.format {
        OutputFormat::Json => write_json(out, &token_json(token)?),
        OutputFormat::Text => {
            writeln!(out, "name:  {}", token.name())?;
            writeln!(out, "alias: {}", token.alias())?;
            writeln!(out, "value: {}", token.value())?;
            if let Some(var) = token.css_variable() {
                writeln!(out, "css:   var({var})")?;
            }
            Ok(())
        }
    }
}
