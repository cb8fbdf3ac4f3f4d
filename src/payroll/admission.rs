//! Admission date parsing.
//!
//! Source data carries admission dates as free-form strings. Known formats
//! are tried in order; anything else is reported as unparsable.

use chrono::NaiveDate;

/// Formats tried, in order.
pub const ADMISSION_DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

/// Parses an admission date.
///
/// Accepts `DD/MM/YYYY`, `YYYY-MM-DD`, and timestamps whose date part is in
/// one of those formats (`2021-03-15T08:00:00`, `15/03/2021 08:00`).
///
/// # Example
///
/// ```
/// use people_analytics::payroll::parse_admission_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2021, 3, 15);
/// assert_eq!(parse_admission_date("15/03/2021"), expected);
/// assert_eq!(parse_admission_date("2021-03-15"), expected);
/// assert_eq!(parse_admission_date("2021-03-15T08:00:00Z"), expected);
/// assert_eq!(parse_admission_date("March 2021"), None);
/// ```
pub fn parse_admission_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    parse_known_format(trimmed).or_else(|| {
        let date_part = trimmed.split(['T', ' ']).next()?;
        if date_part.len() == trimmed.len() {
            return None;
        }
        parse_known_format(date_part)
    })
}

fn parse_known_format(value: &str) -> Option<NaiveDate> {
    ADMISSION_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_day_month_year() {
        assert_eq!(parse_admission_date("01/02/2020"), date(2020, 2, 1));
        assert_eq!(parse_admission_date("31/12/1999"), date(1999, 12, 31));
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_admission_date("2020-02-01"), date(2020, 2, 1));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(parse_admission_date("  2020-02-01 "), date(2020, 2, 1));
    }

    #[test]
    fn test_timestamp_date_part() {
        assert_eq!(parse_admission_date("2020-02-01T00:00:00"), date(2020, 2, 1));
        assert_eq!(parse_admission_date("2020-02-01 13:45:00"), date(2020, 2, 1));
        assert_eq!(parse_admission_date("01/02/2020 13:45"), date(2020, 2, 1));
    }

    #[test]
    fn test_invalid_calendar_date_fails() {
        assert_eq!(parse_admission_date("31/02/2020"), None);
        assert_eq!(parse_admission_date("2020-13-01"), None);
    }

    #[test]
    fn test_unknown_formats_fail() {
        assert_eq!(parse_admission_date(""), None);
        assert_eq!(parse_admission_date("   "), None);
        assert_eq!(parse_admission_date("not a date"), None);
        assert_eq!(parse_admission_date("2020/02/01"), None);
    }
}
