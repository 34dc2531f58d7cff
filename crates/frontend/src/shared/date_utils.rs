//! Date formatting for list cells and date inputs.

use chrono::{DateTime, NaiveDate};

const PLACEHOLDER: &str = "—";

/// Formats an ISO-8601 timestamp from the API as `15 Mar 2024, 14:02`.
/// Unparseable values are shown as sent; missing ones as a dash.
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return PLACEHOLDER.to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d %b %Y, %H:%M").to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => format_date(Some(date)),
        Err(_) => raw.to_string(),
    }
}

pub fn format_date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Value of an `<input type="date">`; empty means no date.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn date_input_value(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(Some("2024-03-15T14:02:26.123Z")),
            "15 Mar 2024, 14:02"
        );
        assert_eq!(format_timestamp(Some("2024-03-15")), "15 Mar 2024");
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
        assert_eq!(format_timestamp(None), "—");
        assert_eq!(format_timestamp(Some("")), "—");
    }

    #[test]
    fn test_date_input_round_trip() {
        let date = parse_date_input("2024-05-31");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 31));
        assert_eq!(date_input_value(date), "2024-05-31");
        assert_eq!(parse_date_input(""), None);
        assert_eq!(date_input_value(None), "");
    }
}
