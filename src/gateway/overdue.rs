//! Overdue view over a todo list
//!
//! An item is overdue when its `created_time` is strictly earlier than
//! `now - window`. Input order is preserved and the result is truncated.

use crate::store::types::TodoItem;
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::{debug, warn};

/// Age after which an item counts as overdue
pub const OVERDUE_DAYS: i64 = 3;

/// Maximum number of overdue items returned
pub const OVERDUE_LIMIT: usize = 5;

/// Window and cap for the overdue view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverduePolicy {
    pub window_days: i64,
    pub limit: usize,
}

impl Default for OverduePolicy {
    fn default() -> Self {
        Self {
            window_days: OVERDUE_DAYS,
            limit: OVERDUE_LIMIT,
        }
    }
}

impl OverduePolicy {
    /// Keep items created before `now - window_days`, at most `limit` of them
    pub fn filter(&self, items: Vec<TodoItem>, now: DateTime<Utc>) -> Vec<TodoItem> {
        let Some(cutoff) = Duration::try_days(self.window_days)
            .and_then(|window| now.checked_sub_signed(window))
        else {
            warn!(window_days = self.window_days, "overdue window out of range, nothing is overdue");
            return Vec::new();
        };

        items
            .into_iter()
            .filter(|item| match parse_created_time(&item.created_time) {
                Some(created) => created < cutoff,
                None => {
                    debug!(id = %item.id, created_time = %item.created_time, "skipping unparsable created_time");
                    false
                }
            })
            .take(self.limit)
            .collect()
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with an offset, a naive date-time (read as local
/// time) and a bare date (local midnight). Anything else is `None`.
pub fn parse_created_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return local_to_utc(naive);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(local_to_utc)
}

fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::format_timestamp;
    use chrono::SubsecRound;

    fn item(id: &str, created_time: &str) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            name: format!("todo {}", id),
            priority: "medium".to_string(),
            created_time: created_time.to_string(),
        }
    }

    fn days_ago(now: DateTime<Utc>, days: i64) -> String {
        format_timestamp(now - Duration::days(days))
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_created_time("2026-10-01T08:00:00.123456Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-10-01T08:00:00.123456+00:00");

        let offset = parse_created_time("2026-10-01T08:00:00+08:00").unwrap();
        assert_eq!(offset, Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_forms() {
        assert!(parse_created_time("2026-10-01T08:00:00.123456").is_some());
        assert!(parse_created_time("2026-10-01T08:00:00").is_some());
        assert!(parse_created_time("2026-10-01 08:00:00").is_some());
        assert!(parse_created_time("2026-10-01").is_some());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_created_time("").is_none());
        assert!(parse_created_time("   ").is_none());
        assert!(parse_created_time("yesterday").is_none());
        assert!(parse_created_time("2026-13-45T99:00:00").is_none());
    }

    #[test]
    fn test_filter_keeps_only_old_items() {
        let now = Utc::now();
        let items = vec![
            item("fresh", &days_ago(now, 1)),
            item("old", &days_ago(now, 4)),
            item("older", &days_ago(now, 10)),
        ];

        let overdue = OverduePolicy::default().filter(items, now);
        let ids: Vec<&str> = overdue.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["old", "older"]);
    }

    #[test]
    fn test_filter_boundary_is_strict() {
        // Timestamps carry microseconds, so compare against a microsecond-exact now
        let now = Utc::now().trunc_subsecs(6);
        let cutoff = now - Duration::days(3);
        let items = vec![
            item("edge", &format_timestamp(cutoff)),
            item("just-before", &format_timestamp(cutoff - Duration::microseconds(1))),
        ];

        let overdue = OverduePolicy::default().filter(items, now);
        let ids: Vec<&str> = overdue.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["just-before"]);
    }

    #[test]
    fn test_out_of_range_window_is_empty() {
        let now = Utc::now();
        let items = vec![item("old", &days_ago(now, 30))];

        for window_days in [i64::MAX, i64::MIN] {
            let policy = OverduePolicy {
                window_days,
                limit: 5,
            };
            assert!(policy.filter(items.clone(), now).is_empty());
        }
    }

    #[test]
    fn test_filter_truncates_to_limit() {
        let now = Utc::now();
        let items: Vec<TodoItem> = (0..8)
            .map(|i| item(&i.to_string(), &days_ago(now, 5 + i)))
            .collect();

        let overdue = OverduePolicy::default().filter(items, now);
        assert_eq!(overdue.len(), 5);
        assert_eq!(overdue[0].id, "0");
        assert_eq!(overdue[4].id, "4");
    }

    #[test]
    fn test_filter_skips_missing_and_bad_timestamps() {
        let now = Utc::now();
        let items = vec![
            item("missing", ""),
            item("bad", "not a date"),
            item("old", &days_ago(now, 7)),
        ];

        let overdue = OverduePolicy::default().filter(items, now);
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].id, "old");
    }

    #[test]
    fn test_custom_policy() {
        let now = Utc::now();
        let policy = OverduePolicy {
            window_days: 1,
            limit: 1,
        };
        let items = vec![item("a", &days_ago(now, 2)), item("b", &days_ago(now, 3))];
        let overdue = policy.filter(items, now);
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].id, "a");
    }
}
