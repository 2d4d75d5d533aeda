//! Plan model definition.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Action;

/// A goal with a deadline and an ordered list of actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique identifier assigned by the store on creation
    pub id: u64,

    /// Title of the goal (required, non-empty)
    pub title: String,

    /// First day of the plan window
    pub start_date: Date,

    /// Deadline; urgency chips count down to this day
    pub end_date: Date,

    /// Ordered actions; insertion order is display order and is preserved
    #[serde(default)]
    pub actions: Vec<Action>,

    /// Identifier of the owning user; set at creation, never changed here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}
