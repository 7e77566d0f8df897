//! Batch processing command for multiple slip images.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use slip_core::models::config::SlipConfig;
use slip_core::models::slip::SlipRecord;

use super::output::{csv_row, format_record, OutputFormat, CSV_HEADER};
use super::{build_reader, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    record: Option<SlipRecord>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_image(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = process_single_file(&path, &config).await;
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(record) => results.push(ProcessResult {
                path,
                record: Some(record),
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        record: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let read: Vec<_> = results
        .iter()
        .filter(|r| r.record.as_ref().is_some_and(SlipRecord::success))
        .collect();
    let unreadable = results.len() - read.len();

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            let Some(record) = &result.record else {
                continue;
            };
            let stem = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("slip");
            let output_path = output_dir.join(format!("{}.{}", stem, args.format.extension()));

            fs::write(&output_path, format_record(record, args.format)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} read, {} unreadable",
        style(read.len()).green(),
        style(unreadable).red()
    );

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn is_image(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(
        ext.to_lowercase().as_str(),
        "png" | "jpg" | "jpeg" | "webp" | "tiff" | "tif" | "bmp"
    )
}

/// OCR text stored next to the image as `<stem>.txt`.
fn sidecar_text(path: &Path) -> anyhow::Result<Option<String>> {
    let sidecar = path.with_extension("txt");
    if sidecar.is_file() {
        debug!("Using OCR text from {}", sidecar.display());
        Ok(Some(fs::read_to_string(sidecar)?))
    } else {
        Ok(None)
    }
}

async fn process_single_file(path: &Path, config: &SlipConfig) -> anyhow::Result<SlipRecord> {
    let text = sidecar_text(path)?;
    let reader = build_reader(config, None, text)?;
    let image = image::open(path)?;

    Ok(reader.read(Arc::new(image)).await)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["file", "error", "processing_time_ms"];
    header.extend(CSV_HEADER);
    wtr.write_record(&header)?;

    for result in results {
        let mut row = vec![
            result.path.display().to_string(),
            result.error.clone().unwrap_or_default(),
            result.processing_time_ms.to_string(),
        ];
        match &result.record {
            Some(record) => row.extend(csv_row(record)),
            None => row.extend(std::iter::repeat_n(String::new(), CSV_HEADER.len())),
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
