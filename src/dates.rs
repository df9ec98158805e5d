// 📅 Date Utility - stay length from free-text dates
//
// Dates travel through the system as display strings ("DD/MM/YYYY").
// They are only turned into calendar dates to count nights.

use chrono::NaiveDate;

/// Display and parse format for check-in / check-out dates
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` string into a calendar date
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT).ok()
}

/// Whole days from `check_in` to `check_out`.
///
/// Returns 0 when either string does not parse. Callers treat 0 the same as
/// a negative count: the stay is rejected.
pub fn days_between(check_in: &str, check_out: &str) -> i64 {
    match (parse_date(check_in), parse_date(check_out)) {
        (Some(start), Some(end)) => (end - start).num_days(),
        _ => 0,
    }
}

/// Reformat a raw date entry as `DD/MM/YYYY`.
///
/// Slashes are stripped first. An 8-character remainder is sliced into
/// 2/2/4 characters whether or not they are digits; anything else comes
/// back stripped but otherwise untouched.
pub fn normalize_date(raw: &str) -> String {
    let stripped: Vec<char> = raw.chars().filter(|c| *c != '/').collect();

    if stripped.len() == 8 {
        let day: String = stripped[..2].iter().collect();
        let month: String = stripped[2..4].iter().collect();
        let year: String = stripped[4..].iter().collect();
        format!("{}/{}/{}", day, month, year)
    } else {
        stripped.into_iter().collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_between_valid_range() {
        assert_eq!(days_between("01/01/2024", "03/01/2024"), 2);
        assert_eq!(days_between("28/02/2024", "01/03/2024"), 2); // leap year
        assert_eq!(days_between("31/12/2023", "01/01/2024"), 1);
    }

    #[test]
    fn test_days_between_same_or_reversed() {
        assert_eq!(days_between("05/03/2024", "05/03/2024"), 0);
        assert_eq!(days_between("10/03/2024", "05/03/2024"), -5);
    }

    #[test]
    fn test_days_between_unparseable_is_zero() {
        assert_eq!(days_between("abc", "03/01/2024"), 0);
        assert_eq!(days_between("01/01/2024", "2024-01-03"), 0);
        assert_eq!(days_between("32/01/2024", "03/02/2024"), 0);
        assert_eq!(days_between("", ""), 0);
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("01012024"), "01/01/2024");
        assert_eq!(normalize_date("01/01/2024"), "01/01/2024");
        assert_eq!(normalize_date(&normalize_date("15032024")), "15/03/2024");
    }

    #[test]
    fn test_normalize_date_wrong_length_unchanged() {
        assert_eq!(normalize_date("abc"), "abc");
        assert_eq!(normalize_date("1/1/2024"), "112024");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_normalize_date_does_not_check_digits() {
        assert_eq!(normalize_date("abcdefgh"), "ab/cd/efgh");
        assert_eq!(normalize_date("ééaabbbb"), "éé/aa/bbbb");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("03/01/2024"), NaiveDate::from_ymd_opt(2024, 1, 3));
        assert!(parse_date("2024/01/03").is_none());
    }
}
