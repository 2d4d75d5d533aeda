//! Plan operations for the Planner.
//!
//! Thin async wrappers: each operation validates on the calling task, then
//! runs the blocking SQLite work on the blocking pool.

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{Action, Plan},
    params::{AddAction, CreatePlan, Id, RemoveAction, UpdatePlan},
};

impl Planner {
    /// Creates a new plan with its authored action list. Validation runs
    /// before any write: a rejected save leaves no partial document.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        let drafts = params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_plan(&params, &drafts)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all plans, optionally restricted to one owner.
    pub async fn list_plans(&self, owner_id: Option<String>) -> Result<Vec<Plan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans(owner_id.as_deref())
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Updates a plan's title and window.
    pub async fn update_plan(&self, params: &UpdatePlan) -> Result<Option<Plan>> {
        params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_plan(&params)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a plan and all its actions.
    /// This operation cannot be undone.
    pub async fn delete_plan_by_id(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Appends an action to a plan.
    pub async fn add_action(&self, params: &AddAction) -> Result<Action> {
        params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_action(params.plan_id, &params.draft)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes an action by its display position.
    pub async fn remove_action(&self, params: &RemoveAction) -> Result<Action> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.remove_action(params.plan_id, params.index)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Writes a plan's entire action array back to the store.
    pub async fn replace_actions(&self, plan_id: u64, actions: Vec<Action>) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.replace_actions(plan_id, &actions)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
