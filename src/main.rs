// src/main.rs
mod utils;
mod profile;
mod extractors;
mod storage;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use utils::AppError;
use extractors::{extract_connection_parameters, SectionExtractor};
use profile::{readme::render_readme, Document, SectionKind};
use storage::{OutputWriter, README_SUFFIX};

/// Split an OpenVPN client profile into ca.crt, crt, key, tls-auth and readme files
#[derive(Parser, Debug)]
#[command(name = "ovpn-splitter", author, version, about, long_about = None)]
struct Args {
    /// Path to the .ovpn profile; outputs are written next to it
    #[arg(default_value = "client.ovpn")]
    path: PathBuf,
}

/// What a successful run produced.
#[derive(Debug)]
struct RunSummary {
    sections_written: Vec<PathBuf>,
    readme_path: PathBuf,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    match run(&args.path) {
        Ok(summary) => {
            tracing::debug!(
                "Wrote {} section files and {}",
                summary.sections_written.len(),
                summary.readme_path.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            Err(e)
        }
    }
}

/// Reads the profile, writes one file per embedded section, then the readme.
/// Section writes are best-effort; a missing connection parameter aborts before the readme.
fn run(path: &Path) -> Result<RunSummary, AppError> {
    // 1. Read the profile
    if !path.exists() {
        return Err(AppError::InputNotFound(path.to_path_buf()));
    }
    let content = fs::read(path)?;
    let document = Document::new(path, content);

    let writer = OutputWriter::for_input(document.path())?;
    let file_name = document
        .path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::info!("Reading '{}': OK", file_name);

    // 2. Split out the embedded sections
    let sections = SectionExtractor::new().extract_all(&document);
    if sections.is_empty() {
        tracing::warn!("No embedded sections found in '{}'", file_name);
    }

    let mut sections_written = Vec::with_capacity(sections.len());
    for kind in SectionKind::ALL {
        let name = writer.file_name(kind.file_suffix());
        let Some(block) = sections.get(kind) else {
            if writer.output_path(kind.file_suffix()).exists() {
                tracing::warn!("'{}' is left over from an earlier run and was not updated", name);
            }
            continue;
        };
        match writer.write_section(kind, block) {
            Ok(path) => {
                tracing::info!("Writing '{}': OK", name);
                sections_written.push(path);
            }
            Err(e) => tracing::warn!("Writing '{}': {}", name, e),
        }
    }

    // 3. Summarize the connection parameters
    let params = extract_connection_parameters(&document)?;
    let readme = render_readme(&params);
    tracing::info!("{}", readme);

    let readme_path = writer.write_readme(&readme)?;
    tracing::info!(
        "OpenVPN configuration is available in '{}'.",
        writer.file_name(README_SUFFIX)
    );

    Ok(RunSummary { sections_written, readme_path })
}
