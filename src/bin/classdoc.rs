//! classdoc - generate class documentation from JSDoc-annotated JavaScript.
//!
//! - **stdin mode**: `classdoc < Foo.js` writes the rendered document to stdout
//! - **file mode**: `classdoc -o docs/classes lib/**/*.js` writes one document
//!   per input; without `-o` the documents are concatenated on stdout

use anyhow::{Context, Result};
use clap::Parser;
use classdoc_core::render::{create_renderer, Renderer};
use classdoc_core::utils::file_utils::{is_supported_file, output_stem, read_file_content};
use classdoc_core::{DiagnosticLevel, ExtractConfig, ExtractionReport, ExtractorManager};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "classdoc",
    about = "Generate class documentation from JSDoc-annotated JavaScript"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory; one document per input file
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: xml (default), json
    #[arg(short = 'f', long, default_value = "xml")]
    format: String,

    /// Leave method source text out of the output
    #[arg(long)]
    no_source: bool,

    /// Skip the single-class re-parse and go straight to regex fallback
    #[arg(long)]
    no_recovery: bool,

    /// Source path label used in stdin mode
    #[arg(long, default_value = "-")]
    label: String,

    /// Also print informational diagnostics
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let manager = ExtractorManager::with_config(ExtractConfig {
        recover: !cli.no_recovery,
        include_source: !cli.no_source,
    });
    let renderer = create_renderer(&cli.format)?;

    if cli.files.is_empty() {
        return stdin_mode(&cli, &manager, renderer.as_ref());
    }

    file_mode(&cli, &manager, renderer.as_ref())
}

/// stdin mode: read one source from stdin, write the document to stdout.
fn stdin_mode(cli: &Cli, manager: &ExtractorManager, renderer: &dyn Renderer) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let report = manager.extract_report(&input, &cli.label);
    print_diagnostics(&report, cli.verbose);
    print!("{}", renderer.render(&report.model));
    Ok(())
}

/// file mode: extract every input in parallel, then write in input order.
fn file_mode(cli: &Cli, manager: &ExtractorManager, renderer: &dyn Renderer) -> Result<()> {
    let input_files = expand_globs(&cli.files)?;

    let mut inputs = Vec::with_capacity(input_files.len());
    for path in &input_files {
        match read_file_content(path) {
            Ok(content) => inputs.push((content, path.to_string_lossy().to_string())),
            Err(e) => eprintln!("warning: skipping {}: {:#}", path.display(), e),
        }
    }

    if let Some(output_dir) = cli.output.as_deref() {
        fs::create_dir_all(output_dir).with_context(|| {
            format!("failed to create output directory: {}", output_dir.display())
        })?;
    }

    let reports = manager.extract_batch(&inputs);
    for report in &reports {
        print_diagnostics(report, cli.verbose);
        let rendered = renderer.render(&report.model);

        match cli.output.as_deref() {
            Some(output_dir) => {
                let name = output_stem(&report.model.class_info.source_path);
                let out_path = output_dir.join(format!("{}.{}", name, renderer.file_extension()));
                fs::write(&out_path, &rendered)
                    .with_context(|| format!("failed to write {}", out_path.display()))?;
            }
            None => print!("{}", rendered),
        }
    }

    Ok(())
}

/// Expand glob patterns into a list of real file paths.
/// Bare directories are scanned (non-recursively) for JavaScript sources.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && is_supported_file(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn print_diagnostics(report: &ExtractionReport, verbose: bool) {
    let path = &report.model.class_info.source_path;
    for diagnostic in &report.diagnostics {
        if diagnostic.level == DiagnosticLevel::Info && !verbose {
            continue;
        }
        match diagnostic.line {
            Some(line) => eprintln!(
                "{}: {}:{}: {}",
                diagnostic.level, path, line, diagnostic.message
            ),
            None => eprintln!("{}: {}: {}", diagnostic.level, path, diagnostic.message),
        }
    }
}
