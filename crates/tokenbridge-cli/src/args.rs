//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tokenbridge_core::TokenCategory;

#[derive(Debug, Parser)]
#[command(name = "tokenbridge")]
#[command(version)]
#[command(about = "Map hardcoded style values in UI components onto design tokens")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Catalog definition file (JSON or TOML); the built-in catalog otherwise
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Directory holding tokenbridge.toml (defaults to --repo, then the cwd)
    #[arg(long, global = true)]
    pub config_root: Option<PathBuf>,

    /// Component directory pattern, e.g. `src/components/{componentName}`
    #[arg(long, global = true)]
    pub pattern: Option<String>,

    /// Worker threads (0 = one per core)
    #[arg(long, global = true)]
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query and export the token catalog
    #[command(subcommand)]
    Tokens(TokensCommand),

    /// List components in a repository
    Components {
        /// Repository root
        #[arg(long, default_value = ".")]
        repo: PathBuf,
    },

    /// Report the style literals and classes components use
    Analyze {
        #[command(flatten)]
        target: Target,
    },

    /// Rewrite component literals into token references
    Transform {
        #[command(flatten)]
        target: Target,

        /// Write transformed files under this directory, one folder per component
        #[arg(long, conflicts_with = "write")]
        out: Option<PathBuf>,

        /// Overwrite changed files in place
        #[arg(long)]
        write: bool,
    },

    /// Rewrite individual files
    Rewrite {
        /// Files to rewrite
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Overwrite changed files in place instead of printing them
        #[arg(long)]
        write: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TokensCommand {
    /// List tokens, optionally of one category
    List {
        #[arg(long, short, value_parser = parse_category)]
        category: Option<TokenCategory>,
    },

    /// Look a token up by name or alias
    Lookup {
        #[arg(value_parser = parse_category)]
        category: TokenCategory,
        name: String,
    },

    /// Print the CSS custom-property sheet
    Css {
        /// Also print one utility class per text style
        #[arg(long)]
        utilities: bool,
    },

    /// Print the Tailwind theme extension and safelist
    Tailwind,

    /// Translate a designer-facing alias into the code that applies it
    Code {
        #[arg(value_parser = parse_category)]
        category: TokenCategory,
        alias: String,
    },
}

/// Which components of a repository to process.
#[derive(Debug, Args)]
pub struct Target {
    /// Repository root
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Component name
    #[arg(long, short, required_unless_present = "all", conflicts_with = "all")]
    pub component: Option<String>,

    /// Every component in the repository
    #[arg(long)]
    pub all: bool,
}

fn parse_category(s: &str) -> Result<TokenCategory, String> {
    s.parse()
}
