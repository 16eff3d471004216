use chrono::{DateTime, Utc};

/// Format an RFC3339 timestamp into a human-readable relative time.
pub fn format_relative_time(rfc3339: &str, reference_secs: i64) -> String {
    let Ok(dt) = chrono::DateTime::parse_from_rfc3339(rfc3339) else {
        return rfc3339.to_string();
    };
    let secs = reference_secs - dt.timestamp();
    if secs < 60 {
        return "just now".to_string();
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m ago", mins);
    }
    let hours = secs / 3600;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    let days = secs / 86_400;
    if days < 7 {
        return format!("{}d ago", days);
    }
    if days < 30 {
        let weeks = days / 7;
        return format!("{}w ago", weeks);
    }
    // Fallback to short date
    dt.format("%b %d, %Y").to_string()
}

/// Day heading for the events list, e.g. "Mar 04, 2026".
pub fn format_event_day(start: &DateTime<Utc>) -> String {
    start.format("%b %d, %Y").to_string()
}

/// Compact time range for one event row: "18:00–20:00", or "18:00" when
/// the end is open.
pub fn format_event_range(start: &DateTime<Utc>, end: Option<&DateTime<Utc>>) -> String {
    let start_s = start.format("%H:%M").to_string();
    match end {
        Some(end) => format!("{start_s}\u{2013}{}", end.format("%H:%M")),
        None => start_s,
    }
}

#[cfg(test)]
mod tests {
    use super::{format_event_day, format_event_range, format_relative_time};
    use chrono::{TimeZone, Utc};

    #[test]
    fn relative_time_buckets() {
        let base = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
        let stamp = base.to_rfc3339();
        let at = |offset: i64| base.timestamp() + offset;

        assert_eq!(format_relative_time(&stamp, at(30)), "just now");
        assert_eq!(format_relative_time(&stamp, at(5 * 60)), "5m ago");
        assert_eq!(format_relative_time(&stamp, at(3 * 3600)), "3h ago");
        assert_eq!(format_relative_time(&stamp, at(2 * 86_400)), "2d ago");
        assert_eq!(format_relative_time(&stamp, at(14 * 86_400)), "2w ago");
        assert_eq!(format_relative_time(&stamp, at(60 * 86_400)), "Mar 04, 2026");
    }

    #[test]
    fn relative_time_passes_through_unparseable_input() {
        assert_eq!(format_relative_time("yesterday", 0), "yesterday");
    }

    #[test]
    fn event_range_with_and_without_end() {
        let start = Utc.with_ymd_and_hms(2026, 3, 4, 18, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 4, 20, 30, 0).unwrap();

        assert_eq!(format_event_range(&start, Some(&end)), "18:00\u{2013}20:30");
        assert_eq!(format_event_range(&start, None), "18:00");
        assert_eq!(format_event_day(&start), "Mar 04, 2026");
    }
}
