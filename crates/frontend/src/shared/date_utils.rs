//! Date, time and money formatting used across the tables.

use chrono::{DateTime, NaiveDate, Utc};

pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_opt_timestamp(dt: &Option<DateTime<Utc>>) -> String {
    dt.as_ref().map(format_timestamp).unwrap_or_else(|| "—".to_string())
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Money for table cells: thousands separator, two decimals.
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(&dt), "2026-03-15 14:02");
        assert_eq!(format_opt_timestamp(&Some(dt)), "2026-03-15 14:02");
        assert_eq!(format_opt_timestamp(&None), "—");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(12.5), "12.50");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(-950.4), "-950.40");
    }
}
