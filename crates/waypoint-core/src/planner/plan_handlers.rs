//! Plan handler operations that return formatted wrapper types for the
//! Planner.
//!
//! Handlers are where derived values get recomputed: every list or detail
//! request rebuilds summaries, urgency chips, and history entries from the
//! freshly loaded plan list, using the current civil date as the reference
//! point.

use jiff::Zoned;

use super::Planner;
use crate::{
    display::{CompletedActions, CreateResult, DeleteResult, PlanSummaries, UpdateResult},
    error::{PlannerError, Result},
    models::{Action, Plan, PlanSummary},
    params::{
        AddAction, CreatePlan, CycleAction, DeletePlan, History, Id, ListPlans, RemoveAction,
        UpdatePlan,
    },
    sort::{self, CompletedSortKey, SortDirection, SortKey},
};

fn parse_direction(direction: Option<&str>) -> Result<SortDirection> {
    direction
        .map(str::parse::<SortDirection>)
        .transpose()
        .map_err(|reason: String| PlannerError::invalid_input("direction", reason))
        .map(Option::unwrap_or_default)
}

impl Planner {
    /// Handle listing plans as dashboard summaries in the requested order.
    ///
    /// Loads the full plan list, sorts it with the comparator factory, and
    /// derives each summary's metrics against today's date. Unknown sort
    /// keys are not rejected; they fall back to field comparison.
    pub async fn list_plans_sorted(&self, params: &ListPlans) -> Result<PlanSummaries> {
        let key = params
            .sort_key
            .as_deref()
            .map(SortKey::parse)
            .unwrap_or_default();
        let direction = parse_direction(params.direction.as_deref())?;

        let plans = self.list_plans(params.owner_id.clone()).await?;
        let sorted = sort::sort_plans(plans, &key, direction);

        let today = Zoned::now().date();
        let summaries: Vec<PlanSummary> = sorted
            .iter()
            .map(|plan| PlanSummary::new(plan, today))
            .collect();
        Ok(PlanSummaries(summaries))
    }

    /// Handle showing a complete plan with all its actions.
    pub async fn show_plan(&self, params: &Id) -> Result<Option<Plan>> {
        self.get_plan(params).await
    }

    /// Handle creating a new plan, returning the created plan for
    /// confirmation.
    pub async fn create_plan_result(&self, params: &CreatePlan) -> Result<CreateResult<Plan>> {
        let plan = self.create_plan(params).await?;
        Ok(CreateResult::new(plan))
    }

    /// Handle updating a plan's title and window, with change tracking for
    /// the confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if the plan does not exist
    pub async fn update_plan_result(&self, params: &UpdatePlan) -> Result<UpdateResult<Plan>> {
        let mut changes = Vec::new();
        if let Some(title) = &params.title {
            changes.push(format!("Renamed to '{title}'"));
        }
        if let Some(start) = params.start_date {
            changes.push(format!("Start moved to {start}"));
        }
        if let Some(end) = params.end_date {
            changes.push(format!("Deadline moved to {end}"));
        }

        let plan = self
            .update_plan(params)
            .await?
            .ok_or(PlannerError::PlanNotFound { id: params.id })?;
        Ok(UpdateResult::with_changes(plan, changes))
    }

    /// Handle permanently deleting a plan with confirmation.
    ///
    /// Requires explicit confirmation to prevent accidental deletion. Uses
    /// get-before-delete so the deleted plan's details can be echoed back;
    /// returns None if the plan doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `confirmed` is false
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<Option<DeleteResult<Plan>>> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input(
                "confirmed",
                "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let id_params = Id { id: params.id };
        let plan = self.get_plan(&id_params).await?;

        if plan.is_some() {
            self.delete_plan_by_id(&id_params).await?;
        }

        Ok(plan.map(DeleteResult::new))
    }

    /// Handle one tap of an action's status control.
    ///
    /// Read-modify-write: loads the plan, advances the action through the
    /// status cycle (stamping or clearing its completion fields as the
    /// transition dictates), and writes the whole action array back.
    pub async fn cycle_action(&self, params: &CycleAction) -> Result<UpdateResult<Plan>> {
        let mut plan = self
            .get_plan(&Id { id: params.plan_id })
            .await?
            .ok_or(PlannerError::PlanNotFound { id: params.plan_id })?;

        let Some(action) = plan.actions.get_mut(params.index) else {
            return Err(PlannerError::ActionNotFound {
                plan_id: params.plan_id,
                index: params.index,
            });
        };

        let now = Zoned::now().datetime();
        let landed = action.cycle_status(now);
        let change = format!("'{}' is now {}", action.title, landed.as_str());

        self.replace_actions(plan.id, plan.actions.clone()).await?;
        Ok(UpdateResult::with_changes(plan, vec![change]))
    }

    /// Handle appending an action to a plan.
    pub async fn add_action_result(&self, params: &AddAction) -> Result<CreateResult<Action>> {
        let action = self.add_action(params).await?;
        Ok(CreateResult::new(action))
    }

    /// Handle removing an action from a plan by position.
    pub async fn remove_action_result(
        &self,
        params: &RemoveAction,
    ) -> Result<DeleteResult<Action>> {
        let action = self.remove_action(params).await?;
        Ok(DeleteResult::new(action))
    }

    /// Handle the completed-action history view: flatten every finished,
    /// stamped action across all plans and order them.
    pub async fn completed_history(&self, params: &History) -> Result<CompletedActions> {
        let key = params
            .sort_key
            .as_deref()
            .map(str::parse::<CompletedSortKey>)
            .transpose()
            .map_err(|reason| PlannerError::invalid_input("sortKey", reason))?
            .unwrap_or_default();
        let direction = parse_direction(params.direction.as_deref())?;

        let plans = self.list_plans(params.owner_id.clone()).await?;
        let items = sort::completed_actions(&plans);
        Ok(CompletedActions(sort::sort_completed_actions(
            items, key, direction,
        )))
    }
}
