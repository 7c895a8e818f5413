use chrono::{DateTime, TimeZone, Utc};

/// Compact relative-time words for tick lists: "now", "4m", "2h", "3d".
pub fn time_ago(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(time);
    match (diff.num_minutes(), diff.num_hours(), diff.num_days()) {
        (minutes, _, _) if minutes < 1 => "now".into(),
        (minutes, _, _) if minutes < 60 => format!("{}m", minutes),
        (_, hours, _) if hours < 24 => format!("{}h", hours),
        (_, _, days) => format!("{}d", days),
    }
}

/// Short absolute day for the session log, e.g. "Mar 4".
pub fn format_day(timestamp: i64) -> String {
    Utc.timestamp(timestamp, 0).format("%b %-d").to_string()
}

/// Session length as "3h05".
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{}h{:02}", secs / 3600, (secs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_words_scale_with_the_gap() {
        let base = Utc.timestamp(1_600_000_000, 0);
        let at = |secs: i64| Utc.timestamp(1_600_000_000 + secs, 0);
        assert_eq!(time_ago(base, at(30)), "now");
        assert_eq!(time_ago(base, at(60 * 4)), "4m");
        assert_eq!(time_ago(base, at(3600 * 2)), "2h");
        assert_eq!(time_ago(base, at(86400 * 3)), "3d");
    }

    #[test]
    fn days_format_without_zero_padding() {
        assert_eq!(format_day(0), "Jan 1");
        assert_eq!(format_day(1_583_280_000), "Mar 4");
    }

    #[test]
    fn durations_round_down_to_minutes() {
        assert_eq!(format_duration(0), "0h00");
        assert_eq!(format_duration(3 * 3600 + 5 * 60 + 59), "3h05");
        assert_eq!(format_duration(-10), "0h00");
    }
}
