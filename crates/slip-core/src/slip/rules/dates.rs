//! Date and time extraction for transfer slips.
//!
//! These run on the original OCR text so separators survive untouched.
//! Calendar validity is not checked.

use super::patterns::{DATE_DMY, DATE_TEXTUAL_MONTH, DATE_YMD, TIME_HM, TIME_HMS};
use super::{first_match, Candidate, ExtractionMatch, FieldExtractor};

/// Date field extractor: `15 Jan 2024`, then `15/01/2024`, then `2024-01-15`.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }

    fn candidates() -> [Candidate; 3] {
        [
            Candidate::new("date_textual_month", &DATE_TEXTUAL_MONTH),
            Candidate::new("date_dmy", &DATE_DMY),
            Candidate::new("date_ymd", &DATE_YMD),
        ]
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_match(&Self::candidates(), text, |raw| Some(raw.to_string()))
    }
}

/// Time field extractor: `H:MM:SS` preferred over `H:MM`.
pub struct TimeExtractor;

impl TimeExtractor {
    pub fn new() -> Self {
        Self
    }

    fn candidates() -> [Candidate; 2] {
        [
            Candidate::new("time_hms", &TIME_HMS),
            Candidate::new("time_hm", &TIME_HM),
        ]
    }
}

impl Default for TimeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TimeExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_match(&Self::candidates(), text, |raw| Some(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> Option<String> {
        DateExtractor::new().extract(text).map(|m| m.value)
    }

    fn time(text: &str) -> Option<String> {
        TimeExtractor::new().extract(text).map(|m| m.value)
    }

    #[test]
    fn test_textual_month() {
        assert_eq!(date("วันที่ 15 Jan 2024 14:30").as_deref(), Some("15 Jan 2024"));
        assert_eq!(date("3 september 2023").as_deref(), Some("3 september 2023"));
        assert_eq!(date("1 Dec. 2024").as_deref(), Some("1 Dec. 2024"));
    }

    #[test]
    fn test_textual_month_wins_over_numeric() {
        assert_eq!(
            date("printed 01/02/2024 paid 5 Feb 2024").as_deref(),
            Some("5 Feb 2024")
        );
    }

    #[test]
    fn test_numeric_forms() {
        assert_eq!(date("15/01/2024").as_deref(), Some("15/01/2024"));
        assert_eq!(date("5-1-2024").as_deref(), Some("5-1-2024"));
        assert_eq!(date("2024-01-15").as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(date("45/13/2024").as_deref(), Some("45/13/2024"));
    }

    #[test]
    fn test_no_date() {
        assert_eq!(date("no date here"), None);
    }

    #[test]
    fn test_time_prefers_seconds() {
        assert_eq!(time("at 9:05 then 14:30:15").as_deref(), Some("14:30:15"));
        assert_eq!(time("14:30 น.").as_deref(), Some("14:30 น."));
        assert_eq!(time("2:15 pm").as_deref(), Some("2:15 pm"));
        assert_eq!(time("10:20:30AM").as_deref(), Some("10:20:30AM"));
        assert_eq!(time("none"), None);
    }

    #[test]
    fn test_time_suffix_stays_on_its_line() {
        assert_eq!(time("Time 09:15:42\nAmount: 5.00").as_deref(), Some("09:15:42"));
        assert_eq!(time("14:30\nPM").as_deref(), Some("14:30"));
        assert_eq!(time("14:30 Amount").as_deref(), Some("14:30"));
        assert_eq!(time("14:30\tPM").as_deref(), Some("14:30\tPM"));
    }
}
