// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-line entry point.
//!
//! ```text
//! queryset-gen --input models.json --output models_queryset.go
//! ```
//!
//! Logs go to stderr (filter with `RUST_LOG`), so printing the generated
//! file to stdout is safe to redirect.

use std::{fs, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use queryset_gen::{Error, Result, Schema, generate_descriptions, generate_file};
use tracing_subscriber::EnvFilter;

/// Generate GORM query-set methods from a model schema.
#[derive(Debug, Parser)]
#[command(name = "queryset-gen", version, about)]
struct Cli {
    /// Schema document describing packages, structs and fields.
    #[arg(short, long)]
    input: PathBuf,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the package name from the schema.
    #[arg(long)]
    package: Option<String>,

    /// Skip methods that fail to build instead of aborting.
    #[arg(long)]
    skip_invalid: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Go)]
    format: Format
}

/// What to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Complete Go source file.
    Go,
    /// Method descriptions as JSON.
    Json
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut schema = Schema::load(&cli.input)?;
    if let Some(package) = cli.package {
        schema.package = package;
    }
    if cli.skip_invalid {
        schema.options.skip_invalid = true;
    }

    let code = match cli.format {
        Format::Go => generate_file(&schema)?,
        Format::Json => generate_descriptions(&schema)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, code).map_err(|source| Error::Io {
                path: path.clone(),
                source
            })?;
            tracing::info!(
                path = %path.display(),
                structs = schema.structs.len(),
                "wrote query sets"
            );
        }
        None => print!("{code}")
    }

    Ok(())
}
