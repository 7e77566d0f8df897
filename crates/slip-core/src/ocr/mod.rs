//! Text recognition seam.
//!
//! OCR itself is an external engine; the core only consumes its text.

#[cfg(feature = "tesseract")]
mod tesseract_engine;

#[cfg(feature = "tesseract")]
pub use tesseract_engine::TesseractRecognizer;

use image::DynamicImage;

use crate::error::OcrError;

/// Produces unstructured text from a slip image.
pub trait TextRecognizer: Send + Sync {
    /// Recognize all text in the image.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}

/// Recognizer that returns text recognized elsewhere.
#[derive(Debug, Clone, Default)]
pub struct StaticText(Option<String>);

impl StaticText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    /// A recognizer whose engine is unavailable.
    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl TextRecognizer for StaticText {
    fn recognize(&self, _image: &DynamicImage) -> Result<String, OcrError> {
        self.0
            .clone()
            .ok_or_else(|| OcrError::Init("no text source configured".to_string()))
    }
}
