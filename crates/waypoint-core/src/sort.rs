//! Sort-order factories for plan lists and the completed-action history.
//!
//! Sorting is decorate-and-sort: each item is keyed once by a [`SortValue`]
//! and ordered with `Vec::sort_by`, which Rust guarantees stable: equal
//! keys always preserve their input order, with no hidden tie-breaks.

use std::cmp::Ordering;
use std::str::FromStr;

use jiff::civil::{Date, DateTime, Time};
use serde::{Deserialize, Serialize};

use crate::metrics;
use crate::models::{Action, ActionStatus, Plan};

/// Sort key for plan lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Plan start date (the default ordering)
    #[default]
    StartDate,
    /// Completion fraction, unrounded so near-ties still order
    Progress,
    /// Deadline; earlier deadlines sort first under ascending
    DaysLeft,
    /// Number of actions in the plan
    Actions,
    /// Any other field, compared as its serialized string value
    Field(String),
}

impl SortKey {
    /// Parse a key name. Unknown names are not an error: they become
    /// [`SortKey::Field`], which compares the plan's JSON field value as a
    /// string (empty when absent). That default case lets future fields
    /// sort without code changes.
    pub fn parse(s: &str) -> Self {
        match s {
            "startDate" | "start_date" => SortKey::StartDate,
            "progress" => SortKey::Progress,
            "daysLeft" | "days_left" => SortKey::DaysLeft,
            "actions" => SortKey::Actions,
            other => SortKey::Field(other.to_string()),
        }
    }
}

/// Direction applied on top of a key's natural ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {s}")),
        }
    }
}

/// Comparison value computed once per item before sorting.
enum SortValue {
    Date(Date),
    Instant(DateTime),
    Fraction(f64),
    Count(usize),
    Days(i64),
    Text(String),
}

impl SortValue {
    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            (SortValue::Instant(a), SortValue::Instant(b)) => a.cmp(b),
            (SortValue::Fraction(a), SortValue::Fraction(b)) => a.total_cmp(b),
            (SortValue::Count(a), SortValue::Count(b)) => a.cmp(b),
            (SortValue::Days(a), SortValue::Days(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            // One key produces one variant; mixed pairs cannot happen.
            _ => Ordering::Equal,
        }
    }
}

fn plan_sort_value(plan: &Plan, key: &SortKey) -> SortValue {
    match key {
        SortKey::StartDate => SortValue::Date(plan.start_date),
        SortKey::Progress => SortValue::Fraction(metrics::progress_ratio(plan)),
        // Comparing deadline dates orders identically to comparing their
        // epoch instants.
        SortKey::DaysLeft => SortValue::Date(plan.end_date),
        SortKey::Actions => SortValue::Count(plan.actions.len()),
        SortKey::Field(name) => SortValue::Text(json_field_string(plan, name)),
    }
}

/// String value of an arbitrary plan field, as a document store frontend
/// would read `plan[key]`: string fields compare as themselves, other
/// values by their JSON rendering, and absent fields as the empty string.
fn json_field_string(plan: &Plan, field: &str) -> String {
    match serde_json::to_value(plan) {
        Ok(serde_json::Value::Object(map)) => match map.get(field) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        },
        _ => String::new(),
    }
}

/// Produce a total order over a plan list for the given key and direction.
pub fn sort_plans(mut plans: Vec<Plan>, key: &SortKey, direction: SortDirection) -> Vec<Plan> {
    let mut keyed: Vec<(SortValue, Plan)> = plans
        .drain(..)
        .map(|plan| (plan_sort_value(&plan, key), plan))
        .collect();
    keyed.sort_by(|a, b| direction.apply(a.0.compare(&b.0)));
    keyed.into_iter().map(|(_, plan)| plan).collect()
}

/// A finished action flattened out of its plan for the history view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletedAction {
    /// Title of the owning plan
    pub plan_title: String,
    /// Owning plan's start date; the day-count base when the action has no
    /// schedule of its own
    pub plan_start_date: Date,
    /// Completion day, copied out of the stamp at flatten time
    pub completed_on: Date,
    pub action: Action,
}

impl CompletedAction {
    /// Completion instant: stamp date plus stamp time, midnight when the
    /// time half of the stamp is missing.
    pub fn completed_at(&self) -> DateTime {
        self.completed_on
            .to_datetime(self.action.actual_time.unwrap_or(Time::midnight()))
    }

    /// Inclusive day count from the action's start (falling back to the
    /// plan's start) to the completion day.
    pub fn actual_days(&self) -> i64 {
        let base = self.action.start_date.unwrap_or(self.plan_start_date);
        (i64::from((self.completed_on - base).get_days()) + 1).max(1)
    }
}

/// Flatten all finished actions that carry a completion stamp, tagging each
/// with its parent plan. Finished rows without a stamp (written by older
/// frontends) are omitted rather than sorted under a fabricated instant.
pub fn completed_actions(plans: &[Plan]) -> Vec<CompletedAction> {
    plans
        .iter()
        .flat_map(|plan| {
            plan.actions
                .iter()
                .filter(|action| action.status == ActionStatus::Finished)
                .filter_map(|action| {
                    action.actual_date.map(|completed_on| CompletedAction {
                        plan_title: plan.title.clone(),
                        plan_start_date: plan.start_date,
                        completed_on,
                        action: action.clone(),
                    })
                })
        })
        .collect()
}

/// Sort key for the completed-action history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletedSortKey {
    /// Completion instant (stamp date + stamp time)
    #[default]
    ActualDate,
    /// Inclusive days from start to completion
    ActualDays,
}

impl FromStr for CompletedSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actualDate" | "actual_date" => Ok(CompletedSortKey::ActualDate),
            "actualDays" | "actual_days" => Ok(CompletedSortKey::ActualDays),
            _ => Err(format!("Invalid history sort key: {s}")),
        }
    }
}

fn completed_sort_value(item: &CompletedAction, key: CompletedSortKey) -> SortValue {
    match key {
        CompletedSortKey::ActualDate => SortValue::Instant(item.completed_at()),
        CompletedSortKey::ActualDays => SortValue::Days(item.actual_days()),
    }
}

/// Produce a total order over a completed-action list.
pub fn sort_completed_actions(
    mut items: Vec<CompletedAction>,
    key: CompletedSortKey,
    direction: SortDirection,
) -> Vec<CompletedAction> {
    let mut keyed: Vec<(SortValue, CompletedAction)> = items
        .drain(..)
        .map(|item| (completed_sort_value(&item, key), item))
        .collect();
    keyed.sort_by(|a, b| direction.apply(a.0.compare(&b.0)));
    keyed.into_iter().map(|(_, item)| item).collect()
}
