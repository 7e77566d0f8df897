//! Core library for Thai bank transfer slips.
//!
//! This crate provides:
//! - PromptPay (EMVCo) QR payload decoding
//! - Slip field extraction from OCR text (amounts, fees, dates, references, accounts)
//! - Date/time normalization for display
//! - Merging of both sources into one slip record, optionally run concurrently

pub mod error;
pub mod merge;
pub mod models;
pub mod ocr;
pub mod pipeline;
pub mod qr;
pub mod slip;

pub use error::{ExtractionError, OcrError, QrError, Result, SlipError};
pub use merge::{merge, merge_now};
pub use models::config::{ExtractionConfig, OcrConfig, PipelineConfig, SlipConfig};
pub use models::slip::{OcrSlipInfo, QrPaymentInfo, SlipRecord};
pub use ocr::{StaticText, TextRecognizer};
#[cfg(feature = "tesseract")]
pub use ocr::TesseractRecognizer;
pub use pipeline::{Progress, SlipReader, SlipSession, Submission};
pub use qr::{decode_promptpay, try_decode_promptpay, QrScanner, StaticPayload};
#[cfg(feature = "qr-scan")]
pub use qr::RqrrScanner;
pub use slip::{format_date_time, SlipParser, TextFieldExtractor};
