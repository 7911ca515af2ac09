//! Display formatting helpers for the dashboard views.

use chrono::{DateTime, Utc};

/// Human-readable rendering of a stored mobile number, e.g.
/// `+1 (555) 123-4567` for an 11-digit country-coded number. Anything else
/// is shown as stored.
pub fn format_mobile_display(mobile: &str) -> String {
    let digits: String = mobile.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 11 {
        format!(
            "+{} ({}) {}-{}",
            &digits[..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        )
    } else {
        mobile.to_string()
    }
}

/// Short date for list views; "Never" for absent timestamps (e.g. a user who
/// has not logged in yet).
pub fn format_date(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%b %d, %Y").to_string(),
        None => "Never".to_string(),
    }
}

/// Longer timestamp for detail views.
pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%B %d, %Y %H:%M").to_string(),
        None => "Unknown".to_string(),
    }
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_country_coded_numbers() {
        assert_eq!(format_mobile_display("+15551234567"), "+1 (555) 123-4567");
    }

    #[test]
    fn leaves_other_lengths_as_stored() {
        assert_eq!(format_mobile_display("+4915512345678"), "+4915512345678");
        assert_eq!(format_mobile_display("5551234567"), "5551234567");
    }

    #[test]
    fn absent_dates_render_as_never() {
        assert_eq!(format_date(None), "Never");
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(format_date(Some(ts)), "Mar 01, 2024");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title here", 8), "a longer...");
    }
}
