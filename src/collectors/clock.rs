//! Wall clock rendering through strftime patterns

use crate::error::{Result, SwiftstatusError};
use crate::utils::format::{BoundedBuf, FRAGMENT_CAPACITY};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Render `now` with a strftime `pattern`, bounded to one fragment
pub fn format_clock<Tz>(now: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut buf = BoundedBuf::new(FRAGMENT_CAPACITY);
    if write!(buf, "{}", now.format(pattern)).is_err() {
        if buf.overflowed() {
            return Err(SwiftstatusError::Overflow { limit: FRAGMENT_CAPACITY });
        }
        return Err(SwiftstatusError::Format(format!("invalid time pattern '{}'", pattern)));
    }
    Ok(buf.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_clock_bar_pattern() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 3).unwrap();
        let out = format_clock(&now, "^fg(#FCD862)%H:%M:%S|%a %d^fg()|").unwrap();
        assert_eq!(out, "^fg(#FCD862)09:07:03|Tue 05^fg()|");
    }

    #[test]
    fn test_format_clock_is_stable() {
        let now = FixedOffset::east_opt(3600).unwrap().with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let first = format_clock(&now, "%Y-%m-%d %T").unwrap();
        let second = format_clock(&now, "%Y-%m-%d %T").unwrap();
        assert_eq!(first, "2024-12-31 23:59:59");
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_clock_invalid_pattern() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 3).unwrap();
        let err = format_clock(&now, "%Q").unwrap_err();
        assert!(matches!(err, SwiftstatusError::Format(_)));
    }

    #[test]
    fn test_format_clock_overflow() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 3).unwrap();
        let pattern = "%Y".repeat(FRAGMENT_CAPACITY);
        let err = format_clock(&now, &pattern).unwrap_err();
        assert!(matches!(err, SwiftstatusError::Overflow { .. }));
    }
}
