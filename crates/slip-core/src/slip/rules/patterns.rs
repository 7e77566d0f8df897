//! Common regex patterns for Thai transfer slip extraction.
//!
//! Each field lists its candidates in rank order; callers try them in order
//! and stop at the first accepted match.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Characters outside the Thai block, ASCII letters/digits, whitespace and
    // `. , : - / ( ) ฿` are OCR noise.
    pub static ref NOISE: Regex = Regex::new(
        r"[^\u{0E00}-\u{0E7F}a-zA-Z0-9\s.,:\-/()฿]"
    ).unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Amount patterns (1,234.56 or 1234.56)
    pub static ref AMOUNT_THAI_LABEL: Regex = Regex::new(
        r"(?i)(?:จำนวนเงิน|จ่าย|ยอดเงิน|โอน)[:\s]+([0-9]{1,3}(?:,?[0-9]{3})*\.[0-9]{2})"
    ).unwrap();

    pub static ref AMOUNT_ENGLISH_LABEL: Regex = Regex::new(
        r"(?i)(?:Amount|Total|Pay)[:\s]+([0-9]{1,3}(?:,?[0-9]{3})*\.[0-9]{2})"
    ).unwrap();

    pub static ref AMOUNT_THB: Regex = Regex::new(
        r"(?i)THB[:\s]+([0-9]{1,3}(?:,?[0-9]{3})*\.[0-9]{2})"
    ).unwrap();

    pub static ref AMOUNT_BAHT_SIGN: Regex = Regex::new(
        r"฿[:\s]*([0-9]{1,3}(?:,?[0-9]{3})*\.[0-9]{2})"
    ).unwrap();

    pub static ref AMOUNT_UNIT_SUFFIX: Regex = Regex::new(
        r"(?i)([0-9]{1,3}(?:,?[0-9]{3})*\.[0-9]{2})\s*(?:บาท|Baht)"
    ).unwrap();

    // Word boundaries are ASCII-only so Thai text running into digits still
    // delimits a number.
    pub static ref AMOUNT_BARE: Regex = Regex::new(
        r"(?-u:\b)([1-9][0-9]{0,2}(?:,?[0-9]{3})*\.[0-9]{2})(?-u:\b)"
    ).unwrap();

    // Fee patterns
    pub static ref FEE_THAI_LABEL: Regex = Regex::new(
        r"(?i)(?:ค่าธรรมเนียม|ค่าบริการ)[:\s]+([0-9]+(?:\.[0-9]{2})?)"
    ).unwrap();

    pub static ref FEE_ENGLISH_LABEL: Regex = Regex::new(
        r"(?i)(?:Fee|Service\s*Charge)[:\s]+([0-9]+(?:\.[0-9]{2})?)"
    ).unwrap();

    // Date patterns
    pub static ref DATE_TEXTUAL_MONTH: Regex = Regex::new(
        r"(?i)([0-9]{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+[0-9]{4})"
    ).unwrap();

    pub static ref DATE_DMY: Regex = Regex::new(
        r"([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{4})"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"([0-9]{4}[/\-][0-9]{1,2}[/\-][0-9]{1,2})"
    ).unwrap();

    // Time patterns (optional AM/PM or Thai "น." suffix on the same line)
    pub static ref TIME_HMS: Regex = Regex::new(
        r"(?i)([0-9]{1,2}:[0-9]{2}:[0-9]{2}(?:[ \t]*(?:(?:AM|PM)(?-u:\b)|น\.))?)"
    ).unwrap();

    pub static ref TIME_HM: Regex = Regex::new(
        r"(?i)([0-9]{1,2}:[0-9]{2}(?:[ \t]*(?:(?:AM|PM)(?-u:\b)|น\.))?)"
    ).unwrap();

    // Reference patterns
    pub static ref REFERENCE_LABEL: Regex = Regex::new(
        r"(?i)(?:เลขที่อ้างอิง|หมายเลขอ้างอิง|อ้างอิง|Reference|Ref\s*No\.?|Ref\.?)[:\s]*([A-Z0-9]{10,})"
    ).unwrap();

    pub static ref REFERENCE_TRANSACTION: Regex = Regex::new(
        r"(?i)(?:Transaction\s*(?:ID|No|Number))[:\s]*([A-Z0-9]{10,})"
    ).unwrap();

    pub static ref REFERENCE_BARE: Regex = Regex::new(
        r"(?-u:\b)([A-Z]{3,6}[0-9]{8,})(?-u:\b)"
    ).unwrap();

    // Account number (123-4-56789-0, hyphens optional)
    pub static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"(?-u:\b)([0-9]{3}-?[0-9]-?[0-9]{5}-?[0-9])(?-u:\b)"
    ).unwrap();

    // Date/time normalization
    pub static ref NORMALIZE_TEXTUAL_MONTH: Regex = Regex::new(
        r"(?i)([0-9]{1,2})\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+([0-9]{4})"
    ).unwrap();

    pub static ref NORMALIZE_YMD: Regex = Regex::new(
        r"(?-u:\b)([0-9]{4})[/\-]([0-9]{1,2})[/\-]([0-9]{1,2})(?-u:\b)"
    ).unwrap();

    pub static ref NORMALIZE_DMY: Regex = Regex::new(
        r"([0-9]{1,2})[/\-]([0-9]{1,2})[/\-]([0-9]{2,4})"
    ).unwrap();

    pub static ref NORMALIZE_TIME: Regex = Regex::new(
        r"([0-9]{1,2}):([0-9]{2})(?::([0-9]{2}))?"
    ).unwrap();
}
