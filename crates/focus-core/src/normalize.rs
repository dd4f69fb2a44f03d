//! Session normalization.
//!
//! Turns heterogeneous session records into a uniform table of
//! `(start, end, minutes)` rows, filling a missing end-time or duration
//! from whichever fields are present.

use crate::error::{InsightError, Result};
use crate::types::{NormalizedSession, SessionRecord};
use chrono::{DateTime, Duration, NaiveDateTime};

/// Normalize a sequence of raw records, preserving input order.
///
/// An empty input yields an empty table; callers must check for that
/// before computing statistics that assume non-empty data.
pub fn normalize_sessions(records: &[SessionRecord]) -> Result<Vec<NormalizedSession>> {
    records.iter().map(normalize_record).collect()
}

fn normalize_record(record: &SessionRecord) -> Result<NormalizedSession> {
    let start = match &record.start_time {
        Some(raw) => parse_timestamp(raw)?,
        None => return Err(InsightError::SessionParse("missing startTime".into())),
    };

    let end = match &record.end_time {
        Some(raw) => parse_timestamp(raw)?,
        None => start + Duration::minutes(record.focused_minutes.unwrap_or(0)),
    };

    // An explicit duration wins; otherwise derive it from the interval.
    // Integer division truncates toward zero, dropping a sub-minute tail.
    let minutes = match record.focused_minutes {
        Some(m) => m,
        None => (end - start).num_seconds() / 60,
    };

    Ok(NormalizedSession { start, end, minutes })
}

/// Parse a timestamp, accepting RFC 3339 with an offset (the wall-clock
/// time is kept as given, no timezone conversion) or a bare naive
/// datetime such as `2024-01-01T09:00:00`.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }
    raw.parse::<NaiveDateTime>().map_err(|e| {
        InsightError::SessionParse(format!("invalid timestamp {:?}: {}", raw, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        start: Option<&str>,
        end: Option<&str>,
        minutes: Option<i64>,
    ) -> SessionRecord {
        SessionRecord {
            start_time: start.map(Into::into),
            end_time: end.map(Into::into),
            focused_minutes: minutes,
        }
    }

    fn ts(raw: &str) -> NaiveDateTime {
        raw.parse().unwrap()
    }

    #[test]
    fn test_empty_input() {
        let table = normalize_sessions(&[]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_end_derived_from_focused_minutes() {
        let table =
            normalize_sessions(&[record(Some("2024-01-01T09:00:00"), None, Some(30))]).unwrap();
        assert_eq!(table[0].start, ts("2024-01-01T09:00:00"));
        assert_eq!(table[0].end, ts("2024-01-01T09:30:00"));
        assert_eq!(table[0].minutes, 30);
    }

    #[test]
    fn test_minutes_derived_from_interval() {
        let table = normalize_sessions(&[record(
            Some("2024-01-01T09:00:00"),
            Some("2024-01-01T09:45:00"),
            None,
        )])
        .unwrap();
        assert_eq!(table[0].minutes, 45);
    }

    #[test]
    fn test_interval_minutes_truncate_toward_zero() {
        // 30 minutes and 45 seconds of wall time.
        let table = normalize_sessions(&[record(
            Some("2024-01-01T09:00:00"),
            Some("2024-01-01T09:30:45"),
            None,
        )])
        .unwrap();
        assert_eq!(table[0].minutes, 30);
    }

    #[test]
    fn test_explicit_minutes_win_over_interval() {
        let table = normalize_sessions(&[record(
            Some("2024-01-01T09:00:00"),
            Some("2024-01-01T10:00:00"),
            Some(25),
        )])
        .unwrap();
        assert_eq!(table[0].minutes, 25);
        assert_eq!(table[0].end, ts("2024-01-01T10:00:00"));
    }

    #[test]
    fn test_both_optionals_absent_defaults_to_zero() {
        let table =
            normalize_sessions(&[record(Some("2024-01-01T09:00:00"), None, None)]).unwrap();
        assert_eq!(table[0].minutes, 0);
        assert_eq!(table[0].end, table[0].start);
    }

    #[test]
    fn test_rfc3339_offset_keeps_wall_clock() {
        let table =
            normalize_sessions(&[record(Some("2024-01-01T09:00:00+05:30"), None, Some(10))])
                .unwrap();
        assert_eq!(table[0].start, ts("2024-01-01T09:00:00"));
    }

    #[test]
    fn test_missing_start_time_fails() {
        let err = normalize_sessions(&[record(None, None, Some(30))]).unwrap_err();
        assert!(err.to_string().contains("startTime"));
    }

    #[test]
    fn test_unparseable_start_time_fails() {
        let err = normalize_sessions(&[record(Some("not-a-date"), None, Some(30))]).unwrap_err();
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_input_order_preserved() {
        let table = normalize_sessions(&[
            record(Some("2024-01-02T14:00:00"), None, Some(10)),
            record(Some("2024-01-01T08:00:00"), None, Some(20)),
        ])
        .unwrap();
        assert_eq!(table[0].start, ts("2024-01-02T14:00:00"));
        assert_eq!(table[1].start, ts("2024-01-01T08:00:00"));
    }
}
