//! Rendering of slip records for the terminal and files.

use chrono::Local;

use slip_core::models::slip::SlipRecord;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub fn format_record(record: &SlipRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(record.to_json_pretty()?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

pub const CSV_HEADER: [&str; 11] = [
    "success",
    "qr_merchant_id",
    "qr_amount",
    "qr_reference",
    "ocr_amount",
    "ocr_fee",
    "ocr_datetime",
    "ocr_reference",
    "from_account",
    "to_account",
    "transfer_type",
];

/// One CSV row matching [`CSV_HEADER`].
pub fn csv_row(record: &SlipRecord) -> Vec<String> {
    let qr = record.qr_data.as_ref();
    let ocr = record.ocr_data.as_ref();
    let text = |value: Option<&Option<String>>| value.cloned().flatten().unwrap_or_default();

    vec![
        record.success().to_string(),
        qr.map(|q| q.merchant_id.clone()).unwrap_or_default(),
        qr.map(|q| q.amount.clone()).unwrap_or_default(),
        qr.map(|q| q.reference.clone()).unwrap_or_default(),
        text(ocr.map(|o| &o.amount)),
        text(ocr.map(|o| &o.fee)),
        record.display_datetime().unwrap_or_default(),
        text(ocr.map(|o| &o.reference)),
        text(ocr.map(|o| &o.from_account)),
        text(ocr.map(|o| &o.to_account)),
        text(ocr.map(|o| &o.transfer_type)),
    ]
}

fn format_csv(record: &SlipRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;
    wtr.write_record(csv_row(record))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &SlipRecord) -> String {
    let mut output = String::new();

    if !record.success() {
        output.push_str("Could not read this slip.\n");
        return output;
    }

    if let Some(qr) = &record.qr_data {
        output.push_str("QR code:\n");
        push_line(&mut output, "Recipient", &qr.merchant_id);
        push_line(&mut output, "Amount", &qr.amount);
        push_line(&mut output, "Reference", &qr.reference);
        push_line(&mut output, "Bill ref 1", &qr.bill_payment_ref1);
        push_line(&mut output, "Bill ref 2", &qr.bill_payment_ref2);
        output.push('\n');
    }

    if let Some(ocr) = &record.ocr_data {
        output.push_str("Slip text:\n");
        let datetime = record.display_datetime();
        let fields = [
            ("Amount", ocr.amount.as_deref()),
            ("Fee", ocr.fee.as_deref()),
            ("Date", datetime.as_deref()),
            ("Reference", ocr.reference.as_deref()),
            ("From", ocr.from_account.as_deref()),
            ("To", ocr.to_account.as_deref()),
            ("Type", ocr.transfer_type.as_deref()),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                push_line(&mut output, label, value);
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Read at: {}\n",
        record.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
    ));

    output
}

fn push_line(output: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        output.push_str(&format!("  {}: {}\n", label, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use slip_core::models::slip::{OcrSlipInfo, QrPaymentInfo};

    #[test]
    fn test_text_lists_both_sources() {
        let qr = QrPaymentInfo {
            merchant_id: "081-234-5678".to_string(),
            amount: "150.00".to_string(),
            ..Default::default()
        };
        let ocr = OcrSlipInfo {
            amount: Some("150.00".to_string()),
            date: Some("15 Jan 2024".to_string()),
            time: Some("14:30".to_string()),
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 7, 30, 0).unwrap();
        let text = format_text(&slip_core::merge(Some(qr), Some(ocr), now));

        assert!(text.contains("  Recipient: 081-234-5678\n"));
        assert!(text.contains("  Date: 01/15/2024 14:30:00\n"));
        assert!(!text.contains("Bill ref 1"));
    }

    #[test]
    fn test_text_for_unreadable_slip() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 7, 30, 0).unwrap();
        let text = format_text(&slip_core::merge(None, None, now));
        assert_eq!(text, "Could not read this slip.\n");
    }
}
