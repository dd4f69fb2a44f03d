//! Plain-text rendering of the session aggregates.
//!
//! Used by the `analyze` command to show the same numbers the HTTP
//! endpoints serve.

use crate::aggregations;
use focus_core::types::NormalizedSession;

/// Format whole minutes as a compact `h`/`m` string.
pub fn format_minutes(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Render both aggregates as a terminal summary.
pub fn text_summary(sessions: &[NormalizedSession]) -> String {
    let mut output = String::new();

    output.push_str(&format!("  Sessions: {}\n", sessions.len()));

    match aggregations::peak_hours(sessions) {
        Some(summary) => {
            output.push_str("  Peak hours:");
            for peak in &summary.peak_hours {
                output.push_str(&format!(
                    " {:02}:00 ({})",
                    peak.hour,
                    format_minutes(peak.minutes)
                ));
            }
            output.push('\n');
            output.push_str(&format!(
                "  Median focus: {}  Break after: {}\n",
                format_minutes(summary.median_focus_minutes),
                format_minutes(summary.recommended_break_after_min)
            ));
        }
        None => {
            output.push_str("  No sessions recorded.\n");
        }
    }

    if let Some(pattern) = aggregations::energy_pattern(sessions) {
        output.push_str(&format!(
            "  Durations: q25 {}  median {}  q75 {}\n",
            format_minutes(pattern.q25),
            format_minutes(pattern.median),
            format_minutes(pattern.q75)
        ));
        output.push_str(&format!("  {}\n", pattern.suggestion));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(start: &str, minutes: i64) -> NormalizedSession {
        let start = start.parse().unwrap();
        NormalizedSession {
            start,
            end: start + chrono::Duration::minutes(minutes),
            minutes,
        }
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(59), "59m");
        assert_eq!(format_minutes(60), "1h 0m");
        assert_eq!(format_minutes(90), "1h 30m");
        assert_eq!(format_minutes(125), "2h 5m");
    }

    #[test]
    fn test_text_summary() {
        let table = vec![
            session("2024-01-01T09:00:00", 30),
            session("2024-01-01T09:30:00", 50),
        ];

        let summary = text_summary(&table);
        assert!(summary.contains("Sessions: 2"));
        assert!(summary.contains("Peak hours: 09:00 (1h 20m)"));
        assert!(summary.contains("Median focus: 40m"));
        assert!(summary.contains("Try shorter sessions"));
    }

    #[test]
    fn test_empty_text_summary() {
        let summary = text_summary(&[]);
        assert!(summary.contains("Sessions: 0"));
        assert!(summary.contains("No sessions recorded."));
        assert!(!summary.contains("Durations:"));
    }
}
