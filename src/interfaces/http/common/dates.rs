//! Calendar date parsing at the API boundary

use chrono::NaiveDate;

use super::ApiError;

/// Wire format of every date the API accepts and returns
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` field, naming the field in the error.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        ApiError::bad_request(
            "invalid_date",
            format!("Invalid {}: '{}' is not a YYYY-MM-DD date ({})", field, value, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("start_date", "2025-08-25").unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 25).unwrap()
        );
    }

    #[test]
    fn rejects_other_formats() {
        for bad in ["25/08/2025", "2025-02-30", "2025-08-25T10:00:00", ""] {
            let err = parse_date("start_date", bad).unwrap_err();
            assert_eq!(err.code(), "invalid_date");
        }
    }
}
