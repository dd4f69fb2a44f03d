//! Peak-hour and duration-quantile aggregations.
//!
//! Both entry points take the normalized session table and return `None`
//! when it is empty, so degenerate input stays an ordinary value rather
//! than an error path.

use chrono::Timelike;
use focus_core::types::NormalizedSession;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Break recommendation used when the measured median is zero.
pub const DEFAULT_BREAK_MINUTES: i64 = 25;

/// Median above which longer sessions are suggested.
pub const LONG_SESSION_THRESHOLD_MINUTES: i64 = 50;

/// Total focused minutes attributed to one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakHour {
    /// Hour of day (0-23), taken from the session's start time.
    pub hour: u32,
    pub minutes: i64,
}

/// Peak-activity summary over a session table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakHoursSummary {
    /// Up to three hours ranked by total focused minutes.
    pub peak_hours: Vec<PeakHour>,
    pub median_focus_minutes: i64,
    pub recommended_break_after_min: i64,
}

/// Duration-quantile summary over a session table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyPattern {
    pub q25: i64,
    pub median: i64,
    pub q75: i64,
    pub suggestion: String,
}

/// Rank hours of the day by total focused minutes.
///
/// Returns the top three hours (fewer if fewer distinct hours occur), the
/// median session duration, and a recommended break interval. Hours with
/// equal minutes rank the lower hour first.
pub fn peak_hours(sessions: &[NormalizedSession]) -> Option<PeakHoursSummary> {
    if sessions.is_empty() {
        return None;
    }

    let mut by_hour: HashMap<u32, i64> = HashMap::new();
    for session in sessions {
        *by_hour.entry(session.start.hour()).or_insert(0) += session.minutes;
    }

    let mut ranked: Vec<PeakHour> = by_hour
        .into_iter()
        .map(|(hour, minutes)| PeakHour { hour, minutes })
        .collect();
    ranked.sort_by(|a, b| b.minutes.cmp(&a.minutes).then(a.hour.cmp(&b.hour)));
    ranked.truncate(3);

    let median = quantile_minutes(sessions, 0.5);
    let recommended = if median > 0 {
        median
    } else {
        DEFAULT_BREAK_MINUTES
    };

    Some(PeakHoursSummary {
        peak_hours: ranked,
        median_focus_minutes: median,
        recommended_break_after_min: recommended,
    })
}

/// Compute the 25th/50th/75th duration percentiles and a session-length
/// suggestion.
pub fn energy_pattern(sessions: &[NormalizedSession]) -> Option<EnergyPattern> {
    if sessions.is_empty() {
        return None;
    }

    let q25 = quantile_minutes(sessions, 0.25);
    let median = quantile_minutes(sessions, 0.5);
    let q75 = quantile_minutes(sessions, 0.75);

    let suggestion = if median > LONG_SESSION_THRESHOLD_MINUTES {
        format!(
            "You can handle longer sessions (~{} mins). Take breaks every hour.",
            median
        )
    } else {
        format!(
            "Try shorter sessions (~{} mins) followed by short breaks.",
            median
        )
    };

    Some(EnergyPattern {
        q25,
        median,
        q75,
        suggestion,
    })
}

/// Quantile of the `minutes` column with linear interpolation between
/// order statistics, truncated toward zero.
///
/// Callers guarantee a non-empty table.
fn quantile_minutes(sessions: &[NormalizedSession], q: f64) -> i64 {
    let mut minutes: Vec<i64> = sessions.iter().map(|s| s.minutes).collect();
    minutes.sort_unstable();

    let idx = q * (minutes.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        return minutes[lo];
    }
    let fraction = idx - lo as f64;
    let value = minutes[lo] as f64 + (minutes[hi] - minutes[lo]) as f64 * fraction;
    value as i64
}
