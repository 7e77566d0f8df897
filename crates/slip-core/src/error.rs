//! Error types for the slip-core library.

use thiserror::Error;

/// Main error type for the slip library.
#[derive(Error, Debug)]
pub enum SlipError {
    /// QR payload or QR scanning error.
    #[error("QR error: {0}")]
    Qr(#[from] QrError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Slip field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while reading a TLV payload or scanning a QR code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Fewer than four header characters remain at a record boundary.
    #[error("truncated record header at offset {offset}")]
    Truncated { offset: usize },

    /// The two-character tag is not numeric.
    #[error("invalid tag {tag:?} at offset {offset}")]
    InvalidTag { offset: usize, tag: String },

    /// The two-character length field is not numeric.
    #[error("invalid length {length:?} at offset {offset}")]
    InvalidLength { offset: usize, length: String },

    /// The declared value length runs past the end of the stream.
    #[error("value at offset {offset} declares {declared} characters but only {remaining} remain")]
    LengthOverrun {
        offset: usize,
        declared: usize,
        remaining: usize,
    },

    /// The pixel decoder failed on a located QR grid.
    #[error("QR scan failed: {0}")]
    Scan(String),
}

/// Errors related to text recognition.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The recognizer could not be initialised.
    #[error("failed to initialise recognizer: {0}")]
    Init(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The image could not be handed to the recognizer.
    #[error("invalid image: {0}")]
    Image(String),
}

/// Errors related to slip field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// An accepted range is inverted or empty.
    #[error("invalid range for {field}: {min} > {max}")]
    InvalidRange {
        field: String,
        min: String,
        max: String,
    },

    /// Reference length bounds are inverted.
    #[error("invalid reference length bounds: {min} > {max}")]
    InvalidLengthBounds { min: usize, max: usize },
}

/// Result type for the slip library.
pub type Result<T> = std::result::Result<T, SlipError>;
