//! tokenbridge
//!
//! ```bash
//! # Export the catalog as CSS custom properties
//! tokenbridge tokens css > tokens.css
//!
//! # What does the Button component hardcode?
//! tokenbridge analyze --repo ../app --component Button
//!
//! # Rewrite every component in place
//! tokenbridge transform --repo ../app --all --write
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tokenbridge_cli::{report, run, Cli, OutputFormat};

fn main() -> ExitCode {
    tokenbridge_core::tracing::init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::json!({ "error": report(&e) }));
            } else {
                eprintln!("error: {}", report(&e));
            }
            ExitCode::FAILURE
        }
    }
}
