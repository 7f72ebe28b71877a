/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2025-06-14" or "2025-06-14T10:02:26Z" -> "14.06.2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format a month key "YYYY-MM" to "MM.YYYY"
/// Example: "2025-06" -> "06.2025"
pub fn format_month(month_str: &str) -> String {
    if let Some((year, month)) = month_str.split_once('-') {
        if !year.is_empty() && !month.is_empty() {
            return format!("{}.{}", month, year);
        }
    }
    month_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-06-14"), "14.06.2025");
        assert_eq!(format_date("2025-06-14T10:02:26.123Z"), "14.06.2025");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2025-06"), "06.2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_month("invalid"), "invalid");
    }
}
