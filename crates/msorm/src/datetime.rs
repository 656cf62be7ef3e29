//! Fixed-format DATETIME2 text handling.
//!
//! Temporal columns travel as text in one fixed shape. Parsing failures
//! surface as [`OrmError::DateTime`](crate::error::OrmError).

use chrono::NaiveDateTime;

use crate::error::OrmResult;

/// Textual format used for DATETIME2 values: `YYYY-MM-DD HH:MM:SS`.
pub const DATETIME2_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse DATETIME2 text.
pub fn parse_datetime2(s: &str) -> OrmResult<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(s, DATETIME2_FORMAT)?)
}

/// Render a timestamp as DATETIME2 text.
pub fn format_datetime2(t: &NaiveDateTime) -> String {
    t.format(DATETIME2_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrmError;

    #[test]
    fn test_parse_round_trip() {
        let t = parse_datetime2("2006-01-02 15:04:05").unwrap();
        assert_eq!(format_datetime2(&t), "2006-01-02 15:04:05");
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(
            parse_datetime2("2006-01-02T15:04:05").unwrap_err(),
            OrmError::DateTime(_)
        ));
        assert!(parse_datetime2("02/01/2006").is_err());
        assert!(parse_datetime2("").is_err());
    }
}
