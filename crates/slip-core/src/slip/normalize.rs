//! Date/time normalization for display.

use super::rules::patterns::{NORMALIZE_DMY, NORMALIZE_TEXTUAL_MONTH, NORMALIZE_TIME, NORMALIZE_YMD};

/// Combine an extracted date and time into `MM/DD/YYYY HH:MM:SS`.
///
/// Returns `None` without a date. An unrecognized date is passed through as
/// `"<date> <time>"`. A missing time becomes `00:00:00`; AM/PM and `น.`
/// suffixes are dropped.
pub fn format_date_time(date: Option<&str>, time: Option<&str>) -> Option<String> {
    let date = date?;

    let Some((day, month, year)) = parse_date(date) else {
        return Some(match time {
            Some(t) => format!("{} {}", date, t),
            None => date.to_string(),
        });
    };

    let formatted_time = time.and_then(parse_time).unwrap_or_else(|| "00:00:00".to_string());

    Some(format!("{}/{}/{} {}", month, day, year, formatted_time))
}

/// Parse a date into zero-padded `(day, month, year)` strings.
fn parse_date(date: &str) -> Option<(String, String, String)> {
    if let Some(caps) = NORMALIZE_TEXTUAL_MONTH.captures(date) {
        if let Some(month) = month_number(&caps[2]) {
            return Some((pad2(&caps[1]), month.to_string(), caps[3].to_string()));
        }
    }

    if let Some(caps) = NORMALIZE_YMD.captures(date) {
        return Some((pad2(&caps[3]), pad2(&caps[2]), caps[1].to_string()));
    }

    if let Some(caps) = NORMALIZE_DMY.captures(date) {
        let year = &caps[3];
        let year = if year.len() == 2 {
            format!("20{}", year)
        } else {
            year.to_string()
        };
        return Some((pad2(&caps[1]), pad2(&caps[2]), year));
    }

    None
}

fn parse_time(time: &str) -> Option<String> {
    let caps = NORMALIZE_TIME.captures(time)?;
    let seconds = caps.get(3).map(|m| m.as_str()).unwrap_or("00");
    Some(format!("{}:{}:{}", pad2(&caps[1]), &caps[2], seconds))
}

/// Month number for an English month name or abbreviation.
pub fn month_number(name: &str) -> Option<&'static str> {
    let month = match name.to_lowercase().as_str() {
        "jan" | "january" => "01",
        "feb" | "february" => "02",
        "mar" | "march" => "03",
        "apr" | "april" => "04",
        "may" => "05",
        "jun" | "june" => "06",
        "jul" | "july" => "07",
        "aug" | "august" => "08",
        "sep" | "sept" | "september" => "09",
        "oct" | "october" => "10",
        "nov" | "november" => "11",
        "dec" | "december" => "12",
        _ => return None,
    };
    Some(month)
}

fn pad2(s: &str) -> String {
    format!("{:0>2}", s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(date: &str, time: Option<&str>) -> String {
        format_date_time(Some(date), time).unwrap()
    }

    #[test]
    fn test_textual_month() {
        assert_eq!(fmt("15 Jan 2024", Some("14:30:00")), "01/15/2024 14:30:00");
        assert_eq!(fmt("5 SEPTEMBER 2023", Some("9:05")), "09/05/2023 09:05:00");
    }

    #[test]
    fn test_day_month_year() {
        assert_eq!(fmt("5/1/2024", None), "01/05/2024 00:00:00");
        assert_eq!(fmt("15-01-24", Some("08:00:01")), "01/15/2024 08:00:01");
    }

    #[test]
    fn test_year_month_day() {
        assert_eq!(fmt("2024-01-15", Some("23:59")), "01/15/2024 23:59:00");
    }

    #[test]
    fn test_suffix_dropped() {
        assert_eq!(fmt("15 Jan 2024", Some("2:30 PM")), "01/15/2024 02:30:00");
        assert_eq!(fmt("15 Jan 2024", Some("14:30 น.")), "01/15/2024 14:30:00");
    }

    #[test]
    fn test_unrecognized_passthrough() {
        assert_eq!(fmt("วันจันทร์", Some("10:00")), "วันจันทร์ 10:00");
        assert_eq!(fmt("yesterday", None), "yesterday");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_date_time(None, Some("10:00")), None);
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("Sept"), Some("09"));
        assert_eq!(month_number("foo"), None);
    }
}
