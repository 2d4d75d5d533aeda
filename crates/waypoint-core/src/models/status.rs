//! Status enumeration and tap cycle for actions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of action statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    /// Action has not been started yet
    #[default]
    NotStarted,

    /// Action is being actively worked on
    Pending,

    /// Action has been completed
    Finished,

    /// Action was abandoned; excluded from progress in both directions
    Canceled,
}

impl FromStr for ActionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_started" | "notstarted" | "not-started" => Ok(ActionStatus::NotStarted),
            "pending" => Ok(ActionStatus::Pending),
            "finished" => Ok(ActionStatus::Finished),
            "canceled" | "cancelled" => Ok(ActionStatus::Canceled),
            _ => Err(format!("Invalid action status: {s}")),
        }
    }
}

impl ActionStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::NotStarted => "not_started",
            ActionStatus::Pending => "pending",
            ActionStatus::Finished => "finished",
            ActionStatus::Canceled => "canceled",
        }
    }

    /// Advance one tap of the status control.
    ///
    /// The cycle is fixed and total: every status has exactly one successor,
    /// and four taps return an action to where it started.
    ///
    /// ```text
    /// NotStarted -> Pending -> Finished -> Canceled -> NotStarted
    /// ```
    ///
    /// Callers that apply a `Finished` result must stamp the action's
    /// completion date/time, and callers that apply `NotStarted` must clear
    /// it; [`crate::models::Action::apply_status`] does both.
    pub fn next(self) -> Self {
        match self {
            ActionStatus::NotStarted => ActionStatus::Pending,
            ActionStatus::Pending => ActionStatus::Finished,
            ActionStatus::Finished => ActionStatus::Canceled,
            ActionStatus::Canceled => ActionStatus::NotStarted,
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// Returns a formatted string that includes both an icon and the status
    /// name as it appears in list views:
    ///
    /// - `✓ Done` - checkmark for finished actions
    /// - `◔ Active` - clock for actions in flight
    /// - `○ To Do` - circle for actions not yet started
    /// - `✗ Canceled` - cross for abandoned actions
    pub fn with_icon(&self) -> &'static str {
        match self {
            ActionStatus::Finished => "✓ Done",
            ActionStatus::Pending => "◔ Active",
            ActionStatus::NotStarted => "○ To Do",
            ActionStatus::Canceled => "✗ Canceled",
        }
    }
}
