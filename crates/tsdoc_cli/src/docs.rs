//! Documentation generation command
//!
//! Collects the TypeScript inputs, renders each one with tsdoc-md and
//! writes the joined document to the output file or stdout.

use crate::Args;
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tsdoc_md::{render_markdown_with, DocConfig};
use walkdir::WalkDir;

/// Extensions picked up when walking directories
const TS_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts"];

/// Run the docs command with the given arguments
pub fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let files = collect_inputs(&args.inputs)?;
    let md = render_files(&files, &config)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &md)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(output = %path.display(), files = files.len(), "wrote documentation");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(md.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Configuration file (if any) with command line overrides applied
fn load_config(args: &Args) -> Result<DocConfig> {
    let mut config = match &args.config {
        Some(path) => DocConfig::load(path)
            .with_context(|| format!("Invalid configuration {}", path.display()))?,
        None => DocConfig::default(),
    };
    if args.no_heritage {
        config.include_heritage = false;
    }
    Ok(config)
}

/// Expand the inputs into the list of files to document
///
/// Files are kept as given; directories contribute their TypeScript files in
/// sorted order.
fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry =
                    entry.with_context(|| format!("Failed to walk {}", input.display()))?;
                if entry.file_type().is_file() && is_typescript_file(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            tracing::debug!(dir = %input.display(), files = found.len(), "collected directory");
            files.extend(found);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            bail!("Input not found: {}", input.display());
        }
    }

    Ok(files)
}

fn is_typescript_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TS_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Render every file and join the non-empty documents with a blank line
fn render_files(files: &[PathBuf], config: &DocConfig) -> Result<String> {
    let mut documents = Vec::new();

    for path in files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        // The file's own name selects the syntax (.tsx, .d.ts, ...)
        let file_config = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => config.clone().with_file_name(name),
            None => config.clone(),
        };
        let md = render_markdown_with(&source, &file_config)
            .with_context(|| format!("Failed to document {}", path.display()))?;
        tracing::debug!(file = %path.display(), bytes = md.len(), "rendered");
        if !md.is_empty() {
            documents.push(md);
        }
    }

    Ok(documents.join("\n"))
}
