//! Merging of the QR and OCR sources into one record.

use chrono::{DateTime, Utc};

use crate::models::slip::{OcrSlipInfo, QrPaymentInfo, SlipRecord};

/// Combine both sources into a record stamped with `now`.
///
/// Values are copied as-is; conflicting amounts are not reconciled.
/// `success` is true iff at least one source is present.
pub fn merge(
    qr: Option<QrPaymentInfo>,
    ocr: Option<OcrSlipInfo>,
    now: DateTime<Utc>,
) -> SlipRecord {
    SlipRecord::new(qr, ocr, now)
}

/// [`merge`] stamped with the current time.
pub fn merge_now(qr: Option<QrPaymentInfo>, ocr: Option<OcrSlipInfo>) -> SlipRecord {
    merge(qr, ocr, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_both_absent_is_failure() {
        let record = merge(None, None, t());
        assert!(!record.success());
        assert_eq!(record.timestamp, t());
    }

    #[test]
    fn test_either_source_is_success() {
        assert!(merge(Some(QrPaymentInfo::default()), None, t()).success());
        assert!(merge(None, Some(OcrSlipInfo::default()), t()).success());
    }

    #[test]
    fn test_conflicting_amounts_are_kept() {
        let qr = QrPaymentInfo {
            amount: "100.00".to_string(),
            ..Default::default()
        };
        let ocr = OcrSlipInfo {
            amount: Some("101.00".to_string()),
            ..Default::default()
        };
        let record = merge(Some(qr), Some(ocr), t());
        assert_eq!(record.qr_data.unwrap().amount, "100.00");
        assert_eq!(record.ocr_data.unwrap().amount.as_deref(), Some("101.00"));
    }
}
