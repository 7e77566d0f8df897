//! CLI application for reading Thai bank transfer slips.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, decode_qr, read};

/// Thai slip reader - Extract payment data from bank transfer slips
#[derive(Parser)]
#[command(name = "slip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a single slip from an image, a QR payload and/or OCR text
    Read(read::ReadArgs),

    /// Read multiple slip images
    Batch(batch::BatchArgs),

    /// Decode a PromptPay QR payload
    DecodeQr(decode_qr::DecodeQrArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Read(args) => read::run(args, cli.config.as_deref()).await,
        Commands::Batch(args) => batch::run(args, cli.config.as_deref()).await,
        Commands::DecodeQr(args) => decode_qr::run(args),
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
