//! Derived view metrics for plans and actions.
//!
//! Every function here is a pure transform over the inputs it is given:
//! no clocks, no caches, no I/O. Values are recomputed from the in-memory
//! plan list on every render, so "today" always means the caller's current
//! civil date.
//!
//! Missing optional inputs never raise errors; they produce neutral
//! placeholder results (`None` durations, zero progress) and leave the
//! underlying records untouched.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::models::{ActionStatus, Plan};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Severity of a deadline chip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Comfortably far out
    Safe,
    /// Due within the next few days
    Warning,
    /// Deadline has passed
    Critical,
}

/// Deadline chip: a human label plus its severity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Urgency {
    pub label: String,
    pub severity: Severity,
}

/// Partition of a plan's action list by status. The four fields always sum
/// to the number of actions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    /// Finished actions
    pub done: u32,
    /// Pending actions
    pub active: u32,
    /// Not-yet-started actions
    pub todo: u32,
    /// Canceled actions
    pub canceled: u32,
}

impl StatusCounts {
    /// Total number of actions counted.
    pub fn total(&self) -> u32 {
        self.done + self.active + self.todo + self.canceled
    }
}

/// Planned versus actual span of a finished action, in whole days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleVariance {
    /// Inclusive planned span; a same-day task is 1 day, never 0
    pub planned_days: i64,
    /// Inclusive span from the planned start to the actual completion day
    pub actual_days: i64,
    /// Planned end minus actual end; positive means it finished early
    pub delta_days: i64,
    pub status: VarianceStatus,
}

/// Sign of a schedule variance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    Ahead,
    Behind,
    OnTime,
}

impl VarianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VarianceStatus::Ahead => "ahead",
            VarianceStatus::Behind => "behind",
            VarianceStatus::OnTime => "on time",
        }
    }
}

/// Deadline chip for a plan.
///
/// Both arguments are civil dates, so time-of-day can never leak into the
/// day count; callers holding zoned instants strip them with `.date()`
/// first. Re-evaluate on every render rather than caching, since `today`
/// advances.
pub fn days_urgency(deadline: Date, today: Date) -> Urgency {
    let days = i64::from((deadline - today).get_days());
    let (label, severity) = match days {
        d if d < 0 => (format!("{}d Overdue", -d), Severity::Critical),
        0 => ("Due Today".to_string(), Severity::Warning),
        1 => ("Tomorrow".to_string(), Severity::Warning),
        d if d <= 3 => (format!("{d} days left"), Severity::Warning),
        d => (format!("{d} days left"), Severity::Safe),
    };
    Urgency { label, severity }
}

/// Completion fraction of a plan in `[0, 1]`.
///
/// Canceled actions are excluded from both numerator and denominator: they
/// neither help nor hurt. A plan with no countable actions is 0.
///
/// The unrounded fraction exists for the sorter, which needs full tie
/// precision; display code wants [`plan_progress`].
pub fn progress_ratio(plan: &Plan) -> f64 {
    let valid = plan
        .actions
        .iter()
        .filter(|a| a.status != ActionStatus::Canceled)
        .count();
    if valid == 0 {
        return 0.0;
    }
    let done = plan
        .actions
        .iter()
        .filter(|a| a.status == ActionStatus::Finished)
        .count();
    done as f64 / valid as f64
}

/// Completion percentage of a plan in `[0, 100]`.
pub fn plan_progress(plan: &Plan) -> f64 {
    100.0 * progress_ratio(plan)
}

/// Partition the plan's actions by status.
pub fn status_counts(plan: &Plan) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for action in &plan.actions {
        match action.status {
            ActionStatus::Finished => counts.done += 1,
            ActionStatus::Pending => counts.active += 1,
            ActionStatus::NotStarted => counts.todo += 1,
            ActionStatus::Canceled => counts.canceled += 1,
        }
    }
    counts
}

/// Duration of a time slot, formatted for display.
///
/// Returns `None` when either endpoint is missing. A slot that ends before
/// it starts crosses midnight and wraps forward 24 hours, so 23:00-01:00 is
/// 2 hours, not an error.
pub fn action_duration(start: Option<Time>, end: Option<Time>) -> Option<String> {
    let (start, end) = (start?, end?);
    let start_min = i64::from(start.hour()) * 60 + i64::from(start.minute());
    let end_min = i64::from(end.hour()) * 60 + i64::from(end.minute());
    let minutes = (end_min - start_min).rem_euclid(MINUTES_PER_DAY);
    Some(format_minutes(minutes))
}

/// Format a minute count as `"{H} hr {M} min"`, omitting zero units and
/// rendering `"0 min"` when both are zero.
fn format_minutes(minutes: i64) -> String {
    let (hours, mins) = (minutes / 60, minutes % 60);
    match (hours, mins) {
        (0, 0) => "0 min".to_string(),
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} hr"),
        (h, m) => format!("{h} hr {m} min"),
    }
}

/// Planned versus actual completion of an action.
///
/// Day spans are inclusive (`max(1, diff + 1)`): starting and ending on the
/// same day counts as one day of work. `delta_days` compares the planned
/// end (falling back to the planned start for single-day schedules) against
/// the actual completion day.
pub fn schedule_variance(
    planned_start: Date,
    planned_end: Option<Date>,
    actual_end: Date,
) -> ScheduleVariance {
    let planned_end = planned_end.unwrap_or(planned_start);
    let planned_days = (i64::from((planned_end - planned_start).get_days()) + 1).max(1);
    let actual_days = (i64::from((actual_end - planned_start).get_days()) + 1).max(1);
    let delta_days = i64::from((planned_end - actual_end).get_days());
    let status = match delta_days {
        d if d > 0 => VarianceStatus::Ahead,
        d if d < 0 => VarianceStatus::Behind,
        _ => VarianceStatus::OnTime,
    };
    ScheduleVariance {
        planned_days,
        actual_days,
        delta_days,
        status,
    }
}
