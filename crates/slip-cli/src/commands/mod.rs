pub mod batch;
pub mod config;
pub mod decode_qr;
pub mod output;
pub mod read;

use std::path::Path;
use std::sync::Arc;

use slip_core::models::config::SlipConfig;
use slip_core::ocr::{StaticText, TextRecognizer};
use slip_core::pipeline::SlipReader;
use slip_core::qr::{QrScanner, RqrrScanner, StaticPayload};

/// Load the configuration selected by `--config`, or the user's default file.
///
/// An explicitly selected file must exist.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<SlipConfig> {
    match config_path {
        Some(path) => Ok(SlipConfig::from_file(Path::new(path))?),
        None => config::load_or_default(&config::default_config_path()),
    }
}

/// Build a reader for one slip.
///
/// A known QR payload replaces image scanning; known OCR text replaces the
/// OCR engine.
pub fn build_reader(
    config: &SlipConfig,
    qr_payload: Option<String>,
    text: Option<String>,
) -> anyhow::Result<SlipReader> {
    let scanner: Arc<dyn QrScanner> = match qr_payload {
        Some(payload) => Arc::new(StaticPayload::new(payload)),
        None => Arc::new(RqrrScanner::new()),
    };

    let recognizer: Arc<dyn TextRecognizer> = match text {
        Some(text) => Arc::new(StaticText::new(text)),
        None => default_recognizer(config),
    };

    Ok(SlipReader::from_config(scanner, recognizer, config)?)
}

#[cfg(feature = "tesseract")]
fn default_recognizer(config: &SlipConfig) -> Arc<dyn TextRecognizer> {
    Arc::new(slip_core::ocr::TesseractRecognizer::new(config.ocr.clone()))
}

#[cfg(not(feature = "tesseract"))]
fn default_recognizer(_config: &SlipConfig) -> Arc<dyn TextRecognizer> {
    tracing::debug!("Built without Tesseract, OCR text must be supplied");
    Arc::new(StaticText::unavailable())
}
