//! Transaction reference extraction.

use super::patterns::{REFERENCE_BARE, REFERENCE_LABEL, REFERENCE_TRANSACTION};
use super::{first_match, Candidate, ExtractionMatch, FieldExtractor};
use crate::models::config::ExtractionConfig;

/// Reference number extractor.
///
/// Labelled forms first, then an unlabelled `ABC12345678`-style fallback.
/// A capture is accepted only if its trimmed length is within bounds.
pub struct ReferenceExtractor {
    min_len: usize,
    max_len: usize,
}

impl ReferenceExtractor {
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            min_len: config.reference_min_len,
            max_len: config.reference_max_len,
        }
    }

    fn candidates() -> [Candidate; 3] {
        [
            Candidate::new("reference_label", &REFERENCE_LABEL),
            Candidate::new("reference_transaction", &REFERENCE_TRANSACTION),
            Candidate::new("reference_bare", &REFERENCE_BARE),
        ]
    }

    fn accept(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        (len >= self.min_len && len <= self.max_len).then(|| trimmed.to_string())
    }
}

impl Default for ReferenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ReferenceExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_match(&Self::candidates(), text, |raw| self.accept(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(text: &str) -> Option<String> {
        ReferenceExtractor::new().extract(text).map(|m| m.value)
    }

    #[test]
    fn test_thai_label() {
        assert_eq!(
            reference("เลขที่อ้างอิง: 2024011512345678").as_deref(),
            Some("2024011512345678")
        );
        assert_eq!(
            reference("หมายเลขอ้างอิง 0123456789AB").as_deref(),
            Some("0123456789AB")
        );
    }

    #[test]
    fn test_english_labels() {
        assert_eq!(
            reference("Ref No. ABC1234567890").as_deref(),
            Some("ABC1234567890")
        );
        assert_eq!(
            reference("Transaction ID: 98765432100").as_deref(),
            Some("98765432100")
        );
    }

    #[test]
    fn test_bare_fallback() {
        assert_eq!(
            reference("slip KBNK20240115999 ok").as_deref(),
            Some("KBNK20240115999")
        );
    }

    #[test]
    fn test_bare_fallback_after_thai_text() {
        assert_eq!(
            reference("รหัสKBNK20240115999").as_deref(),
            Some("KBNK20240115999")
        );
    }

    #[test]
    fn test_short_capture_is_rejected() {
        // Nine characters after the label, and nothing else qualifies.
        assert_eq!(reference("Ref: 123456789"), None);
    }

    #[test]
    fn test_long_capture_is_rejected() {
        let long = "9".repeat(51);
        assert_eq!(reference(&format!("Reference: {}", long)), None);
    }

    #[test]
    fn test_custom_bounds() {
        let config = ExtractionConfig {
            reference_max_len: 12,
            ..Default::default()
        };
        let extractor = ReferenceExtractor::from_config(&config);
        assert!(extractor.extract("Ref: 1234567890123").is_none());
        assert!(extractor.extract("Ref: 123456789012").is_some());
    }
}
