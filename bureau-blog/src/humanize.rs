/// Relative-time formatting
///
/// Renders the difference between now and a timestamp as its largest
/// unit only: "4 days", "2 hours", "5 mins", "30 secs", or "just now".

use chrono::{DateTime, Utc};

fn unit(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Returns a humanized string for the time elapsed since `timestamp`
///
/// Timestamps in the future (or right now) render as "just now".
pub fn humanize(timestamp: &DateTime<Utc>) -> String {
    let seconds = (Utc::now() - *timestamp).num_seconds();

    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    if days > 0 {
        unit(days, "day", "days")
    } else if hours > 0 {
        unit(hours, "hour", "hours")
    } else if minutes > 0 {
        unit(minutes, "min", "mins")
    } else if secs > 0 {
        unit(secs, "sec", "secs")
    } else {
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_largest_unit_wins() {
        let ts = Utc::now() - Duration::days(4) - Duration::hours(5);
        assert_eq!(humanize(&ts), "4 days");

        let ts = Utc::now() - Duration::hours(4) - Duration::minutes(3);
        assert_eq!(humanize(&ts), "4 hours");
    }

    #[test]
    fn test_singular_forms() {
        let ts = Utc::now() - Duration::days(1) - Duration::minutes(1);
        assert_eq!(humanize(&ts), "1 day");

        let ts = Utc::now() - Duration::hours(1) - Duration::seconds(5);
        assert_eq!(humanize(&ts), "1 hour");
    }

    #[test]
    fn test_minutes_and_seconds() {
        let ts = Utc::now() - Duration::minutes(5) - Duration::seconds(2);
        assert_eq!(humanize(&ts), "5 mins");

        let ts = Utc::now() - Duration::seconds(30);
        assert_eq!(humanize(&ts), "30 secs");
    }

    #[test]
    fn test_now_and_future_are_just_now() {
        assert_eq!(humanize(&Utc::now()), "just now");

        let ts = Utc::now() + Duration::hours(2);
        assert_eq!(humanize(&ts), "just now");
    }
}
