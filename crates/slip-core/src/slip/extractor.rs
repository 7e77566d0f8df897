//! Ranked-pattern field extractor over OCR text.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::slip::OcrSlipInfo;

use super::SlipParser;
use super::rules::{
    detect_transfer_type, extract_accounts, patterns::{NOISE, WHITESPACE_RUN}, AmountExtractor,
    DateExtractor, FeeExtractor, FieldExtractor, ReferenceExtractor, TimeExtractor,
};

/// Extracts slip fields from OCR text with ranked patterns per field.
pub struct TextFieldExtractor {
    amount: AmountExtractor,
    fee: FeeExtractor,
    date: DateExtractor,
    time: TimeExtractor,
    reference: ReferenceExtractor,
}

impl TextFieldExtractor {
    /// Create an extractor with the default accepted ranges.
    pub fn new() -> Self {
        Self::build(&ExtractionConfig::default())
    }

    /// Create an extractor from configuration, rejecting inverted ranges.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractionError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &ExtractionConfig) -> Self {
        Self {
            amount: AmountExtractor::from_config(config),
            fee: FeeExtractor::from_config(config),
            date: DateExtractor::new(),
            time: TimeExtractor::new(),
            reference: ReferenceExtractor::from_config(config),
        }
    }
}

impl Default for TextFieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SlipParser for TextFieldExtractor {
    fn extract(&self, text: &str) -> OcrSlipInfo {
        let start = Instant::now();
        info!("Extracting slip fields from {} characters of text", text.len());

        let cleaned = clean_text(text);
        let accounts = extract_accounts(text);

        let info = OcrSlipInfo {
            amount: self.amount.extract(&cleaned).map(|m| m.value),
            fee: self.fee.extract(&cleaned).map(|m| m.value),
            date: self.date.extract(text).map(|m| m.value),
            time: self.time.extract(text).map(|m| m.value),
            reference: self.reference.extract(text).map(|m| m.value),
            ref1: None,
            ref2: None,
            transaction_no: None,
            from_account: accounts.from_account,
            to_account: accounts.to_account,
            transfer_type: detect_transfer_type(text).map(|t| t.label().to_string()),
        };

        debug!(
            "Extracted amount={:?} date={:?} time={:?} reference={:?} in {:?}",
            info.amount,
            info.date,
            info.time,
            info.reference,
            start.elapsed()
        );

        info
    }
}

/// Replace OCR noise with spaces, collapse whitespace runs and trim.
///
/// Kept: Thai block, ASCII letters and digits, whitespace, `. , : - / ( ) ฿`.
pub fn clean_text(text: &str) -> String {
    let denoised = NOISE.replace_all(text, " ");
    WHITESPACE_RUN.replace_all(&denoised, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const KBANK_SLIP: &str = "\
โอนเงินสำเร็จ
15 Jan 2024 14:30 น.
นาย สมชาย ใจดี
ธ.กสิกรไทย
123-4-56789-0
พร้อมเพย์
นางสาว สมหญิง รักดี
987-6-54321-0
เลขที่รายการ:
จำนวนเงิน: 1,234.56 บาท
ค่าธรรมเนียม: 0.00 บาท
เลขที่อ้างอิง: 2024011514301234
";

    #[test]
    fn test_full_slip() {
        let info = TextFieldExtractor::new().extract(KBANK_SLIP);

        assert_eq!(
            info,
            OcrSlipInfo {
                amount: Some("1234.56".to_string()),
                fee: Some("0.00".to_string()),
                date: Some("15 Jan 2024".to_string()),
                time: Some("14:30 น.".to_string()),
                reference: Some("2024011514301234".to_string()),
                ref1: None,
                ref2: None,
                transaction_no: None,
                from_account: Some("123-4-56789-0".to_string()),
                to_account: Some("987-6-54321-0".to_string()),
                transfer_type: Some("PromptPay".to_string()),
            }
        );
    }

    #[test]
    fn test_english_slip() {
        let text = "Transfer Successful\nDate 2024-03-01 Time 09:15:42\nAmount: 2,500.00 THB\nFee: 10.00\nRef No. SCB0123456789";
        let info = TextFieldExtractor::new().extract(text);

        assert_eq!(info.amount.as_deref(), Some("2500.00"));
        assert_eq!(info.fee.as_deref(), Some("10.00"));
        assert_eq!(info.date.as_deref(), Some("2024-03-01"));
        assert_eq!(info.time.as_deref(), Some("09:15:42"));
        assert_eq!(info.reference.as_deref(), Some("SCB0123456789"));
        assert_eq!(info.transfer_type.as_deref(), Some("โอนเงิน"));
        assert_eq!(info.from_account, None);
    }

    #[test]
    fn test_empty_text_yields_all_absent() {
        let info = TextFieldExtractor::new().extract("");
        assert!(info.is_empty());
    }

    #[test]
    fn test_amount_uses_cleaned_text() {
        // The `*` noise would otherwise break the label pattern.
        let info = TextFieldExtractor::new().extract("Amount:*500.00");
        assert_eq!(info.amount.as_deref(), Some("500.00"));
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  ยอด*เงิน ฿1,000.00 |  ok\n\n"), "ยอด เงิน ฿1,000.00 ok");
    }

    #[test]
    fn test_from_config_validates() {
        let config = ExtractionConfig {
            reference_min_len: 60,
            ..Default::default()
        };
        assert!(TextFieldExtractor::from_config(&config).is_err());
    }
}
