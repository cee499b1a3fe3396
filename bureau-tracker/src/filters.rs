/// askama template filters
///
/// Route modules bring this into scope (`use crate::filters;`) so the
/// derived template code can resolve the filter functions.

use chrono::{DateTime, Utc};

/// Formats a timestamp as a short date, e.g. `2026-08-06`
pub fn tsformat(value: &DateTime<Utc>) -> askama::Result<String> {
    Ok(value.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tsformat() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 6, 12, 30, 0).unwrap();
        assert_eq!(tsformat(&ts).unwrap(), "2026-08-06");
    }
}
