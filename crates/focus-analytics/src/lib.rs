//! Aggregation and reporting over normalized focus sessions.
//!
//! Computes peak-hour rankings, duration quantiles, and plain-text
//! summaries from a normalized session table.

pub mod aggregations;
pub mod reports;

pub use aggregations::{energy_pattern, peak_hours, EnergyPattern, PeakHour, PeakHoursSummary};
