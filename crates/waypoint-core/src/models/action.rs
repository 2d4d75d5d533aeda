//! Action model definition and completion-stamp handling.

use jiff::civil::{Date, DateTime, Time};
use serde::{Deserialize, Serialize};

use super::ActionStatus;

/// An individual action (sub-task) within a plan.
///
/// Scheduling is optional and comes in two flavors: a date range
/// (`start_date`, optional `end_date`) or a clock slot (`start_time`,
/// optional `end_time`). The two sets may legally coexist on one record;
/// nothing below the UI layer enforces exclusivity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Identifier assigned at creation, immutable, unique within its plan
    pub id: u64,

    /// Short display title (blank-titled drafts never reach storage)
    pub title: String,

    /// Current status; mutated only through the tap cycle
    pub status: ActionStatus,

    /// Optional free-text detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Scheduled range start, or the day a time slot falls on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    /// Scheduled range end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,

    /// Slot start on the clock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Time>,

    /// Slot end on the clock; slots ending before they start cross midnight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Time>,

    /// Real-world completion day, stamped on the transition to `Finished`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_date: Option<Date>,

    /// Real-world completion clock time, stamped alongside `actual_date`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<Time>,
}

impl Action {
    /// Apply a status produced by the tap cycle, honoring the completion
    /// stamp contract: `Finished` stamps `actual_date`/`actual_time` from
    /// `now`, `NotStarted` clears both, and every other status leaves the
    /// stamps untouched.
    pub fn apply_status(&mut self, next: ActionStatus, now: DateTime) {
        match next {
            ActionStatus::Finished => {
                self.actual_date = Some(now.date());
                self.actual_time = Some(now.time());
            }
            ActionStatus::NotStarted => {
                self.actual_date = None;
                self.actual_time = None;
            }
            ActionStatus::Pending | ActionStatus::Canceled => {}
        }
        self.status = next;
    }

    /// One tap of the status control. Returns the status the action landed
    /// on.
    pub fn cycle_status(&mut self, now: DateTime) -> ActionStatus {
        let next = self.status.next();
        self.apply_status(next, now);
        next
    }
}
