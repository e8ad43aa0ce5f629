//! Display formatting for table cells.

use chrono::{NaiveDate, NaiveDateTime};

pub fn datetime(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn datetime_opt(value: &Option<NaiveDateTime>) -> String {
    value.as_ref().map(datetime).unwrap_or_else(|| "-".to_string())
}

pub fn date_opt(value: &Option<NaiveDate>) -> String {
    value
        .as_ref()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn status_label(status: i32) -> &'static str {
    if status == 1 {
        "Active"
    } else {
        "Disabled"
    }
}

pub fn amount(value: f64) -> String {
    format!("¥{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn datetime_drops_seconds() {
        let dt = NaiveDate::from_ymd_opt(2026, 8, 28)
            .unwrap()
            .and_hms_opt(9, 5, 59)
            .unwrap();
        assert_eq!(datetime(&dt), "2026-08-28 09:05");
        assert_eq!(datetime_opt(&Some(dt)), "2026-08-28 09:05");
        assert_eq!(datetime_opt(&None), "-");
    }

    #[test]
    fn status_and_amount_labels() {
        assert_eq!(status_label(1), "Active");
        assert_eq!(status_label(0), "Disabled");
        assert_eq!(amount(1234.5), "¥1234.50");
    }
}
