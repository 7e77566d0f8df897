//! Amount and fee extraction for transfer slips.
//!
//! Both extractors expect the cleaned OCR text.

use rust_decimal::Decimal;

use super::patterns::{
    AMOUNT_BAHT_SIGN, AMOUNT_BARE, AMOUNT_ENGLISH_LABEL, AMOUNT_THAI_LABEL, AMOUNT_THB,
    AMOUNT_UNIT_SUFFIX, FEE_ENGLISH_LABEL, FEE_THAI_LABEL,
};
use super::{first_match, Candidate, ExtractionMatch, FieldExtractor};
use crate::models::config::ExtractionConfig;

/// Transfer amount extractor.
///
/// Ranked: Thai label, English label, `THB`, `฿`, trailing unit, bare decimal.
pub struct AmountExtractor {
    min: Decimal,
    max: Decimal,
}

impl AmountExtractor {
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            min: config.amount_min,
            max: config.amount_max,
        }
    }

    fn candidates() -> [Candidate; 6] {
        [
            Candidate::new("amount_thai_label", &AMOUNT_THAI_LABEL),
            Candidate::new("amount_english_label", &AMOUNT_ENGLISH_LABEL),
            Candidate::new("amount_thb", &AMOUNT_THB),
            Candidate::new("amount_baht_sign", &AMOUNT_BAHT_SIGN),
            Candidate::new("amount_unit_suffix", &AMOUNT_UNIT_SUFFIX),
            Candidate::new("amount_bare", &AMOUNT_BARE),
        ]
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_match(&Self::candidates(), text, |raw| {
            accept_in_range(raw, self.min, self.max)
        })
    }
}

/// Service fee extractor.
pub struct FeeExtractor {
    min: Decimal,
    max: Decimal,
}

impl FeeExtractor {
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            min: config.fee_min,
            max: config.fee_max,
        }
    }

    fn candidates() -> [Candidate; 2] {
        [
            Candidate::new("fee_thai_label", &FEE_THAI_LABEL),
            Candidate::new("fee_english_label", &FEE_ENGLISH_LABEL),
        ]
    }
}

impl Default for FeeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for FeeExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_match(&Self::candidates(), text, |raw| {
            accept_in_range(raw, self.min, self.max)
        })
    }
}

/// Strip thousands separators from a matched amount.
pub fn strip_thousands(raw: &str) -> String {
    raw.replace(',', "")
}

/// Parse a matched amount such as `1,234.56`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    strip_thousands(raw).parse().ok()
}

fn accept_in_range(raw: &str, min: Decimal, max: Decimal) -> Option<String> {
    let value = parse_amount(raw)?;
    (value >= min && value <= max).then(|| strip_thousands(raw))
}
