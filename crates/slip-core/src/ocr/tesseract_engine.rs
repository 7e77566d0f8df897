//! Tesseract-backed recognizer (Thai + English by default).

use image::{DynamicImage, ImageFormat};
use tesseract::Tesseract;
use tracing::debug;

use crate::error::OcrError;
use crate::models::config::OcrConfig;

use super::TextRecognizer;

/// Recognizer running a system Tesseract installation.
pub struct TesseractRecognizer {
    config: OcrConfig,
}

impl TesseractRecognizer {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        // The binding reads images from disk.
        let temp_file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::Image(format!("failed to create temp file: {}", e)))?;
        image
            .save_with_format(temp_file.path(), ImageFormat::Png)
            .map_err(|e| OcrError::Image(format!("failed to write temp image: {}", e)))?;

        let image_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| OcrError::Image("temp path is not valid UTF-8".to_string()))?;
        let datapath = self
            .config
            .tessdata_dir
            .as_ref()
            .and_then(|p| p.to_str());

        let text = Tesseract::new(datapath, Some(&self.config.languages))
            .map_err(|e| OcrError::Init(format!("Tesseract init error: {}", e)))?
            .set_image(image_path)
            .map_err(|e| OcrError::Image(format!("Tesseract set image error: {}", e)))?
            .get_text()
            .map_err(|e| OcrError::Recognition(format!("Tesseract error: {}", e)))?;

        debug!(
            "Tesseract ({}) recognized {} characters",
            self.config.languages,
            text.len()
        );

        Ok(text)
    }
}
