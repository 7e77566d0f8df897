//! PromptPay payload decoding.

use tracing::debug;

use crate::error::QrError;
use crate::models::slip::QrPaymentInfo;

use super::tlv::TlvReader;

/// Merchant Account Information sub-template.
pub const TAG_MERCHANT_ACCOUNT: &str = "29";
/// Transaction amount.
pub const TAG_AMOUNT: &str = "54";
/// Additional Data Field sub-template.
pub const TAG_ADDITIONAL_DATA: &str = "62";

const SUB_TAG_IDENTIFIER: &str = "01";
const SUB_TAG_BILL_REF1: &str = "01";
const SUB_TAG_BILL_REF2: &str = "02";
const SUB_TAG_REFERENCE: &str = "05";

/// Decode a PromptPay payload, returning `None` for empty or malformed input.
pub fn decode_promptpay(payload: &str) -> Option<QrPaymentInfo> {
    if payload.is_empty() {
        return None;
    }

    match try_decode_promptpay(payload) {
        Ok(info) => Some(info),
        Err(e) => {
            debug!("Discarding malformed QR payload: {}", e);
            None
        }
    }
}

/// Decode a PromptPay payload, reporting why a malformed one was rejected.
///
/// Unknown tags are skipped. A structural error anywhere, nested streams
/// included, rejects the whole payload.
pub fn try_decode_promptpay(payload: &str) -> Result<QrPaymentInfo, QrError> {
    let mut info = QrPaymentInfo::default();

    visit(payload, |tag, value| {
        match tag {
            TAG_MERCHANT_ACCOUNT => visit(value, |sub_tag, sub_value| {
                if sub_tag == SUB_TAG_IDENTIFIER {
                    info.merchant_id = format_identifier(sub_value);
                }
                Ok(())
            })?,
            TAG_AMOUNT => info.amount = value.to_string(),
            TAG_ADDITIONAL_DATA => visit(value, |sub_tag, sub_value| {
                match sub_tag {
                    SUB_TAG_REFERENCE => info.reference = sub_value.to_string(),
                    SUB_TAG_BILL_REF1 => info.bill_payment_ref1 = sub_value.to_string(),
                    SUB_TAG_BILL_REF2 => info.bill_payment_ref2 = sub_value.to_string(),
                    _ => {}
                }
                Ok(())
            })?,
            _ => {}
        }
        Ok(())
    })?;

    Ok(info)
}

fn visit<'a, F>(stream: &'a str, mut on_record: F) -> Result<(), QrError>
where
    F: FnMut(&'a str, &'a str) -> Result<(), QrError>,
{
    for record in TlvReader::new(stream) {
        let record = record?;
        on_record(record.tag, record.value)?;
    }
    Ok(())
}

/// Format a PromptPay identifier for display.
///
/// - `00` + 13 digits (15 chars): citizen ID as `D-DDDD-DDDDD-DD-D`.
/// - `66` + rest (13 chars): mobile number with a leading `0` as `DDD-DDD-DDDD`.
/// - `01` + rest (15 chars): e-Wallet ID with the prefix removed.
///
/// Anything else is returned unchanged.
pub fn format_identifier(id: &str) -> String {
    let len = id.chars().count();

    if len == 15 {
        if let Some(citizen_id) = id.strip_prefix("00") {
            return group_digits(citizen_id, &[1, 4, 5, 2, 1]);
        }
        if let Some(wallet_id) = id.strip_prefix("01") {
            return wallet_id.to_string();
        }
    }

    if len == 13 {
        if let Some(national) = id.strip_prefix("66") {
            let phone = format!("0{}", national);
            return group_digits(&phone, &[3, 3, 4]);
        }
    }

    id.to_string()
}

/// Hyphenate the leading digits into `groups`, keeping any tail as-is.
///
/// Returns the input unchanged when it does not start with enough digits.
fn group_digits(s: &str, groups: &[usize]) -> String {
    let needed: usize = groups.iter().sum();
    let Some(head) = s.get(..needed) else {
        return s.to_string();
    };
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return s.to_string();
    }

    let mut parts = Vec::with_capacity(groups.len());
    let mut start = 0;
    for &size in groups {
        parts.push(&head[start..start + size]);
        start += size;
    }

    format!("{}{}", parts.join("-"), &s[needed..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Build a record with a two-digit length header.
    fn tlv(tag: &str, value: &str) -> String {
        format!("{}{:02}{}", tag, value.len(), value)
    }

    #[test]
    fn test_decode_mobile_payload() {
        let merchant = format!(
            "{}{}",
            tlv("00", "A000000677010111"),
            tlv("01", "0066812345678")
        );
        let payload = format!(
            "{}{}{}{}{}",
            tlv("00", "01"),
            tlv("01", "12"),
            tlv("29", &merchant),
            tlv("53", "764"),
            tlv("54", "1500.50"),
        );

        let info = decode_promptpay(&payload).unwrap();
        // 13 characters with a 00 prefix: no rule applies.
        assert_eq!(info.merchant_id, "0066812345678");
        assert_eq!(info.amount, "1500.50");
        assert_eq!(info.reference, "");
    }

    #[test]
    fn test_decode_additional_data() {
        let additional = format!(
            "{}{}{}{}",
            tlv("01", "INV-2024-001"),
            tlv("02", "CUST42"),
            tlv("05", "REF0001"),
            tlv("07", "TERM1"),
        );
        let payload = format!(
            "{}{}{}",
            tlv("29", &tlv("01", "001234567890123")),
            tlv("62", &additional),
            tlv("63", "ABCD"),
        );

        let info = decode_promptpay(&payload).unwrap();
        assert_eq!(
            info,
            QrPaymentInfo {
                merchant_id: "1-2345-67890-12-3".to_string(),
                amount: String::new(),
                reference: "REF0001".to_string(),
                bill_payment_ref1: "INV-2024-001".to_string(),
                bill_payment_ref2: "CUST42".to_string(),
            }
        );
    }

    #[test]
    fn test_amount_is_verbatim() {
        for raw in ["100", "0.5", "1,000.00", "abc"] {
            let info = decode_promptpay(&tlv("54", raw)).unwrap();
            assert_eq!(info.amount, raw);
        }
    }

    #[test]
    fn test_well_formed_without_known_tags() {
        let info = decode_promptpay(&format!("{}{}", tlv("00", "01"), tlv("58", "TH"))).unwrap();
        assert_eq!(info, QrPaymentInfo::default());
    }

    #[test]
    fn test_malformed_payload_is_none() {
        // Declared length 20, only 7 characters follow.
        assert_eq!(decode_promptpay("54201500.50"), None);
        assert_eq!(decode_promptpay(""), None);
        assert!(matches!(
            try_decode_promptpay("54201500.50"),
            Err(QrError::LengthOverrun { .. })
        ));
    }

    #[test]
    fn test_malformed_nested_stream_rejects_everything() {
        let payload = format!("{}{}", tlv("54", "99.00"), tlv("62", "0520SHORT"));
        assert_eq!(decode_promptpay(&payload), None);
    }

    #[test]
    fn test_format_citizen_id() {
        assert_eq!(format_identifier("001234567890123"), "1-2345-67890-12-3");
    }

    #[test]
    fn test_format_mobile() {
        // 66 + 11 characters; the first ten digits are grouped.
        assert_eq!(format_identifier("6681234567800"), "081-234-567800");
    }

    #[test]
    fn test_format_wallet() {
        assert_eq!(format_identifier("014000012345678"), "4000012345678");
    }

    #[test]
    fn test_unrecognized_identifier_passthrough() {
        for id in ["0812345678", "", "99123", "0066812345678"] {
            assert_eq!(format_identifier(id), id);
            assert_eq!(format_identifier(&format_identifier(id)), id);
        }
    }
}
