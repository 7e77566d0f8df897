//! Configuration structures for the slip pipeline.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, Result, SlipError};

/// Main configuration for the slip pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipConfig {
    /// Text field extraction configuration.
    pub extraction: ExtractionConfig,

    /// OCR engine configuration.
    pub ocr: OcrConfig,

    /// Pipeline join configuration.
    pub pipeline: PipelineConfig,
}

/// Accepted ranges for extracted OCR fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Smallest accepted transfer amount (inclusive).
    pub amount_min: Decimal,

    /// Largest accepted transfer amount (inclusive).
    pub amount_max: Decimal,

    /// Smallest accepted fee (inclusive).
    pub fee_min: Decimal,

    /// Largest accepted fee (inclusive).
    pub fee_max: Decimal,

    /// Minimum reference length after trimming.
    pub reference_min_len: usize,

    /// Maximum reference length after trimming.
    pub reference_max_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            amount_min: Decimal::new(1, 2),
            amount_max: Decimal::from(10_000_000),
            fee_min: Decimal::ZERO,
            fee_max: Decimal::from(1000),
            reference_min_len: 10,
            reference_max_len: 50,
        }
    }
}

impl ExtractionConfig {
    /// Check that every range is non-empty.
    pub fn validate(&self) -> std::result::Result<(), ExtractionError> {
        if self.amount_min > self.amount_max {
            return Err(ExtractionError::InvalidRange {
                field: "amount".to_string(),
                min: self.amount_min.to_string(),
                max: self.amount_max.to_string(),
            });
        }
        if self.fee_min > self.fee_max {
            return Err(ExtractionError::InvalidRange {
                field: "fee".to_string(),
                min: self.fee_min.to_string(),
                max: self.fee_max.to_string(),
            });
        }
        if self.reference_min_len > self.reference_max_len {
            return Err(ExtractionError::InvalidLengthBounds {
                min: self.reference_min_len,
                max: self.reference_max_len,
            });
        }
        Ok(())
    }
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract language string.
    pub languages: String,

    /// Directory holding `*.traineddata` files (system default when unset).
    pub tessdata_dir: Option<PathBuf>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: "tha+eng".to_string(),
            tessdata_dir: None,
        }
    }
}

/// How the two source pipelines are joined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Upper bound on the wait for both sources (unbounded when unset).
    pub timeout_ms: Option<u64>,
}

impl SlipConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| SlipError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| SlipError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let config = ExtractionConfig::default();
        assert_eq!(config.amount_min, Decimal::new(1, 2));
        assert_eq!(config.amount_max, Decimal::from(10_000_000));
        assert_eq!(config.fee_min, Decimal::ZERO);
        assert_eq!(config.fee_max, Decimal::from(1000));
        assert_eq!((config.reference_min_len, config.reference_max_len), (10, 50));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = ExtractionConfig {
            fee_min: Decimal::from(10),
            fee_max: Decimal::from(1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(ExtractionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SlipConfig =
            serde_json::from_str(r#"{"pipeline": {"timeout_ms": 5000}}"#).unwrap();
        assert_eq!(config.pipeline.timeout_ms, Some(5000));
        assert_eq!(config.ocr.languages, "tha+eng");
        assert_eq!(config.extraction, ExtractionConfig::default());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = SlipConfig::default();
        config.ocr.languages = "eng".to_string();
        config.save(&path).unwrap();

        let loaded = SlipConfig::from_file(&path).unwrap();
        assert_eq!(loaded.ocr.languages, "eng");

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(SlipConfig::from_file(&path), Err(SlipError::Config(_))));
    }
}
