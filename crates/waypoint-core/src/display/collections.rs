//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections a Display implementation with
//! consistent empty-state handling, without the callers juggling loops or
//! titles.

use std::fmt;

use crate::models::PlanSummary;
use crate::sort::CompletedAction;

/// Newtype wrapper for displaying a list of plan summary cards.
#[derive(Debug)]
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No active plans. Create one to get started.")
        } else {
            for summary in &self.0 {
                write!(f, "{}", summary)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the completed-action history.
#[derive(Debug)]
pub struct CompletedActions(pub Vec<CompletedAction>);

impl CompletedActions {
    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of history entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the history entries.
    pub fn iter(&self) -> std::slice::Iter<'_, CompletedAction> {
        self.0.iter()
    }
}

impl fmt::Display for CompletedActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No completed actions yet.")
        } else {
            for entry in &self.0 {
                write!(f, "{}", entry)?;
            }
            Ok(())
        }
    }
}
