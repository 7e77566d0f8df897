//! Read command - extract data from a single slip.

use std::fs;
use std::io::Read as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;
use tracing::{debug, info};

use slip_core::models::slip::SlipRecord;
use slip_core::pipeline::SlipReader;

use super::output::{format_record, OutputFormat};
use super::{build_reader, load_config};

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Slip image (PNG, JPEG, ...)
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Raw QR payload, used instead of scanning the image
    #[arg(short, long)]
    qr: Option<String>,

    /// File with OCR text ("-" reads stdin), used instead of the OCR engine
    #[arg(short, long)]
    text: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: ReadArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if args.image.is_none() && args.qr.is_none() && args.text.is_none() {
        anyhow::bail!("Nothing to read: pass --image, --qr or --text");
    }

    let text = args.text.as_deref().map(read_text).transpose()?;
    let reader = build_reader(&config, args.qr.clone(), text.clone())?;

    let record = match &args.image {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            info!("Reading slip image: {}", path.display());
            let image = image::open(path)?;
            read_image(&reader, image).await?
        }
        None => reader.read_sources(args.qr.as_deref(), text.as_deref()),
    };

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if !record.success() {
        eprintln!(
            "{} Neither a QR code nor slip text could be read",
            style("⚠").yellow()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

async fn read_image(reader: &SlipReader, image: image::DynamicImage) -> anyhow::Result<SlipRecord> {
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    let reading = async move {
        let record = reader.read_with_progress(Arc::new(image), Some(&tx)).await;
        drop(tx);
        record
    };
    let reporting = async {
        while let Some(progress) = rx.recv().await {
            pb.set_position(progress.percent() as u64);
            pb.set_message(progress.message());
        }
    };

    let (record, ()) = tokio::join!(reading, reporting);
    pb.finish_and_clear();

    Ok(record)
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
