//! Parameter structures for Waypoint operations
//!
//! Shared parameter structures usable across interfaces (CLI today, other
//! frontends tomorrow) without framework-specific derives. Interface layers
//! wrap these with their own argument types and convert via `From`, so
//! CLI concerns (flags, help text) never leak into the core.
//!
//! Save-time validation lives here as `validate()` methods: a rejected save
//! aborts before any write happens, so there is never a partial document.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{Action, ActionStatus};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Draft of an action as authored in the create/edit form.
///
/// Drafts mirror the stored action shape minus identity: ids are assigned
/// by the store, and a missing status defaults to not-started the way a
/// fresh form row does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDraft {
    /// Title of the action; blank titles are filtered out before save
    pub title: String,
    /// Optional free-text detail
    pub description: Option<String>,
    /// Date-range schedule start
    pub start_date: Option<Date>,
    /// Date-range schedule end
    pub end_date: Option<Date>,
    /// Time-slot schedule start
    pub start_time: Option<Time>,
    /// Time-slot schedule end
    pub end_time: Option<Time>,
    /// Status carried over when re-saving an existing plan
    pub status: Option<ActionStatus>,
}

impl ActionDraft {
    /// Whether the draft survives the save-time filter.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Materialize the draft into an action with the given id.
    pub fn into_action(self, id: u64) -> Action {
        Action {
            id,
            title: self.title,
            status: self.status.unwrap_or_default(),
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            start_time: self.start_time,
            end_time: self.end_time,
            actual_date: None,
            actual_time: None,
        }
    }
}

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlan {
    /// Title of the goal (required, non-empty)
    pub title: String,
    /// First day of the plan window
    pub start_date: Date,
    /// Deadline (required)
    pub end_date: Date,
    /// Identifier of the owning user, if any
    pub owner_id: Option<String>,
    /// Authored action drafts, in display order
    #[serde(default)]
    pub actions: Vec<ActionDraft>,
}

impl CreatePlan {
    /// Validate the save and return the cleaned action drafts.
    ///
    /// A blank title blocks the save outright. Blank-titled drafts are
    /// dropped silently, matching the authoring form, which always holds a
    /// trailing empty row.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when the title is empty
    pub fn validate(&self) -> Result<Vec<ActionDraft>> {
        if self.title.trim().is_empty() {
            return Err(PlannerError::invalid_input(
                "title",
                "Title and deadline are required",
            ));
        }
        Ok(self
            .actions
            .iter()
            .filter(|draft| draft.has_title())
            .cloned()
            .collect())
    }
}

/// Parameters for updating a plan's own fields.
///
/// Action-list edits go through [`AddAction`]/[`RemoveAction`] and the
/// status cycle; this touches only the goal's identity and window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlan {
    /// Plan ID to update (required)
    pub id: u64,
    /// New title
    pub title: Option<String>,
    /// New window start
    pub start_date: Option<Date>,
    /// New deadline
    pub end_date: Option<Date>,
}

impl UpdatePlan {
    /// Validate the update.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when a new title is provided but
    ///   blank
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(PlannerError::invalid_input(
                    "title",
                    "Title cannot be empty",
                ));
            }
        }
        Ok(())
    }
}

/// Parameters for deleting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    /// Plan ID to delete (required)
    pub id: u64,
    /// Explicit confirmation; deletion is refused without it
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for listing plans with a sort order.
///
/// The sort key is carried as a string on purpose: unknown keys are legal
/// and fall back to field comparison (see [`crate::sort::SortKey::parse`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPlans {
    /// Sort key name; defaults to `startDate`
    pub sort_key: Option<String>,
    /// `asc` or `desc`; defaults to `asc`
    pub direction: Option<String>,
    /// Restrict to plans owned by this user
    pub owner_id: Option<String>,
}

/// Parameters for appending an action to an existing plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAction {
    /// ID of the plan to append to
    pub plan_id: u64,
    /// The authored draft
    #[serde(flatten)]
    pub draft: ActionDraft,
}

impl AddAction {
    /// Validate the draft before it is appended.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when the draft title is blank
    pub fn validate(&self) -> Result<()> {
        if !self.draft.has_title() {
            return Err(PlannerError::invalid_input(
                "title",
                "Action title is required",
            ));
        }
        Ok(())
    }
}

/// Parameters for removing an action by its position in the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveAction {
    /// ID of the owning plan
    pub plan_id: u64,
    /// 0-based position of the action to remove
    pub index: usize,
}

/// Parameters for one tap of an action's status control.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleAction {
    /// ID of the owning plan
    pub plan_id: u64,
    /// 0-based position of the action to cycle
    pub index: usize,
}

/// Parameters for the completed-action history view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    /// `actualDate` (default) or `actualDays`
    pub sort_key: Option<String>,
    /// `asc` or `desc`; defaults to `asc`
    pub direction: Option<String>,
    /// Restrict to plans owned by this user
    pub owner_id: Option<String>,
}
