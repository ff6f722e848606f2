//! Display formatting shared by the TUI and the CLI

use chrono::{DateTime, NaiveDateTime};

use crate::query::BOUND_FORMAT;

/// Currency label shown next to prices
pub const CURRENCY: &str = "SGD";

/// Format a price as `SGD 9.99`
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY} {price:.2}")
}

/// Show a last-updated timestamp as `YYYY-MM-DD HH:mm:ss`
///
/// Offset timestamps are shown in their own offset. Anything unparseable is
/// shown as received.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(BOUND_FORMAT).to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format(BOUND_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9.99), "SGD 9.99");
        assert_eq!(format_price(0.0), "SGD 0.00");
        assert_eq!(format_price(1234.5), "SGD 1234.50");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2025-01-03T09:15:00+08:00"),
            "2025-01-03 09:15:00"
        );
        assert_eq!(
            format_timestamp("2025-01-03T09:15:00.123456"),
            "2025-01-03 09:15:00"
        );
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
