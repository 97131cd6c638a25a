//! `spaceless` CLI
//!
//! Prints the transformed module to stdout.
//! Enable logs with `RUST_LOG=spaceless=debug` or `RUST_LOG=trace`.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use spaceless::{transform_sync, SourceLang, SpacelessOptions, TransformOptions};

#[derive(Parser, Debug)]
#[command(name = "spaceless")]
#[command(about = "Strips whitespace from `spaceless` tagged templates", long_about = None)]
#[command(version)]
#[command(after_help = "Rules (default in brackets):
  remove-new-lines [on], remove-before-tags [on], remove-between-tags [on],
  remove-before-close [on], remove-after-close [on], remove-after-open [off],
  remove-in-content [off], trim-edges [off]")]
struct Args {
    /// Input file, `-` reads stdin
    input: PathBuf,

    /// Parse as TypeScript (default for .ts, .mts, .cts, .tsx)
    #[arg(long = "ts", conflicts_with = "js")]
    ts: bool,

    /// Parse as JavaScript
    #[arg(long = "js")]
    js: bool,

    /// Emit minified code
    #[arg(long = "minify")]
    minify: bool,

    /// Rule overrides, e.g. '{"remove-in-content": true}'
    #[arg(long = "config", value_name = "JSON")]
    config: Option<String>,
}

impl Args {
    fn lang(&self) -> SourceLang {
        let guessed = SourceLang::from_filename(&self.input.to_string_lossy());
        if self.ts {
            guessed.with_typescript(true)
        } else if self.js {
            guessed.with_typescript(false)
        } else {
            guessed
        }
    }
}

fn main() {
    init_tracing();

    let args = Args::parse();

    let spaceless = match args.config.as_deref().map(SpacelessOptions::from_json_str) {
        Some(Ok(options)) => options,
        Some(Err(e)) => {
            eprintln!("error: --config: {e}");
            std::process::exit(1);
        }
        None => SpacelessOptions::default(),
    };

    let source = match read_input(&args.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: cannot read `{}`: {e}", args.input.display());
            std::process::exit(1);
        }
    };

    let options = TransformOptions {
        spaceless,
        lang: args.lang(),
        minify: args.minify,
    };

    match transform_sync(&source, &options) {
        Ok(result) => print!("{}", result.code),
        Err(e) => {
            eprintln!("error: {}: {e}", args.input.display());
            std::process::exit(1);
        }
    }
}

fn read_input(input: &Path) -> std::io::Result<String> {
    if input.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(input)
    }
}

/// Logs go to stderr and only when `RUST_LOG` is set
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}
