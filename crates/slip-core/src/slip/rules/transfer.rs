//! Transfer type detection.

use std::fmt;

use serde::{Deserialize, Serialize};

const PROMPTPAY_THAI: &str = "พร้อมเพย์";
const TRANSFER_THAI: &str = "โอน";

/// Kind of transfer a slip records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferType {
    /// PromptPay transfer.
    PromptPay,
    /// Ordinary bank transfer.
    BankTransfer,
}

impl TransferType {
    /// Label written into the slip record.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PromptPay => "PromptPay",
            Self::BankTransfer => "โอนเงิน",
        }
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detect the transfer type from substrings anywhere in the text.
///
/// PromptPay takes precedence over a generic transfer mention.
pub fn detect_transfer_type(text: &str) -> Option<TransferType> {
    let lower = text.to_lowercase();

    if lower.contains("promptpay") || text.contains(PROMPTPAY_THAI) {
        Some(TransferType::PromptPay)
    } else if text.contains(TRANSFER_THAI) || lower.contains("transfer") {
        Some(TransferType::BankTransfer)
    } else {
        None
    }
}
