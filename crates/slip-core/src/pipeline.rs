//! Concurrent slip reading: QR scan and OCR run side by side, then merge.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use image::DynamicImage;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::merge::merge_now;
use crate::models::config::{PipelineConfig, SlipConfig};
use crate::models::slip::{OcrSlipInfo, QrPaymentInfo, SlipRecord};
use crate::ocr::TextRecognizer;
use crate::qr::{decode_promptpay, QrScanner};
use crate::slip::{SlipParser, TextFieldExtractor};

/// Progress of one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Started,
    ScanningQr,
    RecognizingText,
    Merging,
    Finished { success: bool },
}

impl Progress {
    /// Completion percentage.
    pub fn percent(&self) -> u8 {
        match self {
            Self::Started => 0,
            Self::ScanningQr => 25,
            Self::RecognizingText => 50,
            Self::Merging => 90,
            Self::Finished { .. } => 100,
        }
    }

    /// Short status message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Started => "Processing...",
            Self::ScanningQr => "Reading QR code...",
            Self::RecognizingText => "Reading slip text...",
            Self::Merging => "Combining results...",
            Self::Finished { success: true } => "Done",
            Self::Finished { success: false } => "Could not read this slip",
        }
    }
}

/// Reads one slip image through both sources.
pub struct SlipReader {
    scanner: Arc<dyn QrScanner>,
    recognizer: Arc<dyn TextRecognizer>,
    extractor: Arc<dyn SlipParser>,
    config: PipelineConfig,
}

impl SlipReader {
    /// Create a reader with default extraction ranges and no timeout.
    pub fn new(scanner: Arc<dyn QrScanner>, recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self {
            scanner,
            recognizer,
            extractor: Arc::new(TextFieldExtractor::new()),
            config: PipelineConfig::default(),
        }
    }

    /// Create a reader from configuration.
    pub fn from_config(
        scanner: Arc<dyn QrScanner>,
        recognizer: Arc<dyn TextRecognizer>,
        config: &SlipConfig,
    ) -> Result<Self> {
        let extractor = TextFieldExtractor::from_config(&config.extraction)?;
        Ok(Self::new(scanner, recognizer)
            .with_extractor(extractor)
            .with_pipeline_config(config.pipeline.clone()))
    }

    /// Replace the text field extractor.
    pub fn with_extractor(mut self, extractor: impl SlipParser + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Set the join configuration.
    pub fn with_pipeline_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build a record from already-decoded inputs.
    ///
    /// Empty or whitespace-only inputs count as absent.
    pub fn read_sources(&self, qr_payload: Option<&str>, text: Option<&str>) -> SlipRecord {
        let qr = qr_payload.and_then(decode_payload);
        let ocr = text.and_then(|t| extract_text(self.extractor.as_ref(), t));
        merge_now(qr, ocr)
    }

    /// Read an image through both sources concurrently.
    pub async fn read(&self, image: Arc<DynamicImage>) -> SlipRecord {
        self.read_with_progress(image, None).await
    }

    /// Like [`read`](Self::read), reporting progress to `progress`.
    pub async fn read_with_progress(
        &self,
        image: Arc<DynamicImage>,
        progress: Option<&UnboundedSender<Progress>>,
    ) -> SlipRecord {
        let start = Instant::now();
        let report = |p: Progress| {
            if let Some(tx) = progress {
                // A dropped receiver only means nobody is watching.
                let _ = tx.send(p);
            }
        };

        report(Progress::Started);
        info!(
            "Reading slip image {}x{}",
            image.width(),
            image.height()
        );

        report(Progress::ScanningQr);
        let qr_task = {
            let scanner = Arc::clone(&self.scanner);
            let image = Arc::clone(&image);
            tokio::task::spawn_blocking(move || scan_qr(scanner.as_ref(), &image))
        };

        report(Progress::RecognizingText);
        let ocr_task = {
            let recognizer = Arc::clone(&self.recognizer);
            let extractor = Arc::clone(&self.extractor);
            let image = Arc::clone(&image);
            tokio::task::spawn_blocking(move || {
                recognize_text(recognizer.as_ref(), extractor.as_ref(), &image)
            })
        };

        let timeout = self.config.timeout_ms.map(Duration::from_millis);
        let (qr, ocr) = tokio::join!(
            join_source("QR", qr_task, timeout),
            join_source("OCR", ocr_task, timeout),
        );

        report(Progress::Merging);
        let record = merge_now(qr, ocr);

        report(Progress::Finished {
            success: record.success(),
        });
        debug!(
            "Slip read in {:?} (qr: {}, ocr: {})",
            start.elapsed(),
            record.qr_data.is_some(),
            record.ocr_data.is_some()
        );

        record
    }
}

fn decode_payload(payload: &str) -> Option<QrPaymentInfo> {
    if payload.trim().is_empty() {
        return None;
    }
    decode_promptpay(payload)
}

fn extract_text(extractor: &dyn SlipParser, text: &str) -> Option<OcrSlipInfo> {
    if text.trim().is_empty() {
        return None;
    }
    Some(extractor.extract(text))
}

fn scan_qr(scanner: &dyn QrScanner, image: &DynamicImage) -> Option<QrPaymentInfo> {
    match scanner.scan(image) {
        Ok(Some(payload)) => decode_payload(&payload),
        Ok(None) => {
            debug!("No QR code found");
            None
        }
        Err(e) => {
            warn!("QR scan failed: {}", e);
            None
        }
    }
}

fn recognize_text(
    recognizer: &dyn TextRecognizer,
    extractor: &dyn SlipParser,
    image: &DynamicImage,
) -> Option<OcrSlipInfo> {
    match recognizer.recognize(image) {
        Ok(text) => extract_text(extractor, &text),
        Err(e) => {
            warn!("OCR failed: {}", e);
            None
        }
    }
}

async fn join_source<T>(
    name: &str,
    task: JoinHandle<Option<T>>,
    timeout: Option<Duration>,
) -> Option<T> {
    let joined = match timeout {
        Some(limit) => match tokio::time::timeout(limit, task).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!("{} source timed out after {:?}", name, limit);
                return None;
            }
        },
        None => task.await,
    };

    match joined {
        Ok(value) => value,
        Err(e) => {
            warn!("{} source aborted: {}", name, e);
            None
        }
    }
}

/// Outcome of a session submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The record for the most recent submission.
    Completed(SlipRecord),
    /// A newer submission started while this one was in flight.
    Superseded,
}

impl Submission {
    pub fn into_record(self) -> Option<SlipRecord> {
        match self {
            Self::Completed(record) => Some(record),
            Self::Superseded => None,
        }
    }
}

/// Single-flight wrapper: only the latest submission yields a record.
pub struct SlipSession {
    reader: SlipReader,
    generation: AtomicU64,
}

impl SlipSession {
    pub fn new(reader: SlipReader) -> Self {
        Self {
            reader,
            generation: AtomicU64::new(0),
        }
    }

    /// Read `image`, discarding the result if another submission starts first.
    pub async fn submit(
        &self,
        image: DynamicImage,
        progress: Option<&UnboundedSender<Progress>>,
    ) -> Submission {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let record = self
            .reader
            .read_with_progress(Arc::new(image), progress)
            .await;

        if self.generation.load(Ordering::SeqCst) == ticket {
            Submission::Completed(record)
        } else {
            debug!("Discarding result of superseded submission {}", ticket);
            Submission::Superseded
        }
    }

    /// Discard whatever is currently in flight.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of submissions and cancellations so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
