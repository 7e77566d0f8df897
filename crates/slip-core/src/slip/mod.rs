//! Slip field extraction from OCR text.

mod extractor;
pub mod normalize;
pub mod rules;

pub use extractor::{clean_text, TextFieldExtractor};
pub use normalize::format_date_time;

use crate::models::slip::OcrSlipInfo;

/// Trait for slip text parsing.
///
/// Parsing never fails: fields without a match are left absent.
pub trait SlipParser: Send + Sync {
    /// Extract every field from OCR text.
    fn extract(&self, text: &str) -> OcrSlipInfo;
}
