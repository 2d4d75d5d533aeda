//! Plan summary types for list views.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::metrics::{self, StatusCounts, Urgency};

use super::Plan;

/// Summary of a plan as it appears on a dashboard card: identity, window,
/// and the derived metrics for one moment in time.
///
/// Summaries are throwaway values rebuilt from the plan list on every
/// render; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Title of the plan
    pub title: String,
    /// First day of the plan window
    pub start_date: Date,
    /// Deadline
    pub end_date: Date,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Deadline chip for the reference day the summary was built against
    pub urgency: Urgency,
    /// Partition of the action list by status
    pub counts: StatusCounts,
    /// Completion percentage in [0, 100]
    pub progress: f64,
}

impl PlanSummary {
    /// Build a summary from a plan, deriving urgency against `today`.
    ///
    /// `today` is threaded in rather than read from a clock so summaries
    /// stay deterministic; callers pass the current civil date and rebuild
    /// on every render.
    pub fn new(plan: &Plan, today: Date) -> Self {
        Self {
            id: plan.id,
            title: plan.title.clone(),
            start_date: plan.start_date,
            end_date: plan.end_date,
            created_at: plan.created_at,
            urgency: metrics::days_urgency(plan.end_date, today),
            counts: metrics::status_counts(plan),
            progress: metrics::plan_progress(plan),
        }
    }
}
