//! Slip data models and the JSON export shape.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::slip::normalize::format_date_time;

/// Payment information decoded from a PromptPay QR payload.
///
/// Every field is an empty string when its tag is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPaymentInfo {
    /// Formatted citizen ID, phone number or e-Wallet ID.
    #[serde(rename = "merchantID")]
    pub merchant_id: String,

    /// Raw amount string from tag 54.
    pub amount: String,

    /// Reference from tag 62, sub-tag 05.
    pub reference: String,

    /// Bill payment reference 1 (tag 62, sub-tag 01).
    #[serde(rename = "billPaymentRef1")]
    pub bill_payment_ref1: String,

    /// Bill payment reference 2 (tag 62, sub-tag 02).
    #[serde(rename = "billPaymentRef2")]
    pub bill_payment_ref2: String,
}

/// Fields recovered from OCR text.
///
/// `None` means no pattern matched. `transaction_no`, `ref1` and `ref2` have
/// no extraction rule and are always `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrSlipInfo {
    pub amount: Option<String>,
    pub fee: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reference: Option<String>,
    pub ref1: Option<String>,
    pub ref2: Option<String>,
    pub transaction_no: Option<String>,
    pub from_account: Option<String>,
    pub to_account: Option<String>,
    pub transfer_type: Option<String>,
}

impl OcrSlipInfo {
    /// Whether no field was recovered at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Merged extraction result for one submitted slip image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "SlipRecordRepr")]
pub struct SlipRecord {
    pub qr_data: Option<QrPaymentInfo>,
    pub ocr_data: Option<OcrSlipInfo>,
    pub timestamp: DateTime<Utc>,
}

impl SlipRecord {
    pub(crate) fn new(
        qr_data: Option<QrPaymentInfo>,
        ocr_data: Option<OcrSlipInfo>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            qr_data,
            ocr_data,
            timestamp,
        }
    }

    /// True iff at least one source produced data.
    pub fn success(&self) -> bool {
        self.qr_data.is_some() || self.ocr_data.is_some()
    }

    /// Timestamp rendered as ISO-8601 with millisecond precision.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// OCR date and time normalized for display.
    pub fn display_datetime(&self) -> Option<String> {
        let ocr = self.ocr_data.as_ref()?;
        format_date_time(ocr.date.as_deref(), ocr.time.as_deref())
    }

    /// Two-space indented JSON document, as used for clipboard export.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Serialize)]
struct SlipDataRef<'a> {
    ocr_data: &'a Option<OcrSlipInfo>,
    qr_data: &'a Option<QrPaymentInfo>,
}

impl Serialize for SlipRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SlipRecord", 3)?;
        state.serialize_field(
            "slip_data",
            &SlipDataRef {
                ocr_data: &self.ocr_data,
                qr_data: &self.qr_data,
            },
        )?;
        state.serialize_field("timestamp", &self.timestamp_iso())?;
        state.serialize_field("success", &self.success())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct SlipDataRepr {
    ocr_data: Option<OcrSlipInfo>,
    qr_data: Option<QrPaymentInfo>,
}

#[derive(Deserialize)]
struct SlipRecordRepr {
    slip_data: SlipDataRepr,
    timestamp: DateTime<Utc>,
    success: bool,
}

impl TryFrom<SlipRecordRepr> for SlipRecord {
    type Error = String;

    fn try_from(repr: SlipRecordRepr) -> Result<Self, Self::Error> {
        let record = SlipRecord::new(
            repr.slip_data.qr_data,
            repr.slip_data.ocr_data,
            repr.timestamp,
        );
        if record.success() != repr.success {
            return Err(format!(
                "success flag {} contradicts the presence of slip data",
                repr.success
            ));
        }
        Ok(record)
    }
}
