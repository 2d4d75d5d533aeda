//! Plan CRUD operations and queries.

use jiff::civil::Date;
use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::Plan,
    params::{ActionDraft, CreatePlan, UpdatePlan},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (title, start_date, end_date, owner_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_PLAN_SQL: &str = "SELECT id, title, start_date, end_date, owner_id, created_at, updated_at FROM plans WHERE id = ?1";
const LIST_PLANS_SQL: &str = "SELECT id, title, start_date, end_date, owner_id, created_at, updated_at FROM plans ORDER BY start_date, id";
const LIST_PLANS_BY_OWNER_SQL: &str = "SELECT id, title, start_date, end_date, owner_id, created_at, updated_at FROM plans WHERE owner_id = ?1 ORDER BY start_date, id";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const UPDATE_PLAN_SQL: &str =
    "UPDATE plans SET title = ?1, start_date = ?2, end_date = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_PLAN_ACTIONS_SQL: &str = "DELETE FROM actions WHERE plan_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

fn parse_date(index: usize, text: &str) -> rusqlite::Result<Date> {
    text.parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn parse_timestamp(index: usize, text: &str) -> rusqlite::Result<Timestamp> {
    text.parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Construct a Plan from a database row, with an empty action list.
fn build_plan_from_row(row: &Row) -> rusqlite::Result<Plan> {
    Ok(Plan {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        start_date: parse_date(2, &row.get::<_, String>(2)?)?,
        end_date: parse_date(3, &row.get::<_, String>(3)?)?,
        actions: Vec::new(),
        owner_id: row.get(4)?,
        created_at: parse_timestamp(5, &row.get::<_, String>(5)?)?,
        updated_at: parse_timestamp(6, &row.get::<_, String>(6)?)?,
    })
}

impl super::Database {
    /// Creates a new plan together with its authored action list in one
    /// transaction: a rejected write leaves nothing behind.
    pub fn create_plan(&mut self, params: &CreatePlan, drafts: &[ActionDraft]) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                params.title,
                params.start_date.to_string(),
                params.end_date.to_string(),
                params.owner_id.as_deref(),
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert plan", e))?;

        let id = tx.last_insert_rowid() as u64;
        let actions = Self::insert_drafts(&tx, id, drafts)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id,
            title: params.title.clone(),
            start_date: params.start_date,
            end_date: params.end_date,
            actions,
            owner_id: params.owner_id.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a plan by its ID with actions eagerly loaded.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let mut plan = stmt
            .query_row(params![id as i64], build_plan_from_row)
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query plan", e))?;

        if let Some(ref mut plan) = plan {
            plan.actions = self.get_actions(plan.id)?;
        }

        Ok(plan)
    }

    /// Lists all plans (optionally restricted to one owner) with actions
    /// eagerly loaded, ordered by start date. Derived metrics are always
    /// recomputed in memory from this list, never read from storage.
    pub fn list_plans(&self, owner_id: Option<&str>) -> Result<Vec<Plan>> {
        let (query, owner) = match owner_id {
            Some(owner) => (LIST_PLANS_BY_OWNER_SQL, Some(owner)),
            None => (LIST_PLANS_SQL, None),
        };

        let mut stmt = self
            .connection
            .prepare(query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let mut plans: Vec<Plan> = match owner {
            Some(owner) => stmt.query_map(params![owner], build_plan_from_row),
            None => stmt.query_map([], build_plan_from_row),
        }
        .map_err(|e| PlannerError::database_error("Failed to query plans", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| PlannerError::database_error("Failed to fetch plans", e))?;

        for plan in &mut plans {
            plan.actions = self.get_actions(plan.id)?;
        }

        Ok(plans)
    }

    /// Updates a plan's own fields (title and window), leaving the action
    /// list untouched. Returns the updated plan, or None if it does not
    /// exist.
    pub fn update_plan(&mut self, params: &UpdatePlan) -> Result<Option<Plan>> {
        let Some(existing) = self.get_plan(params.id)? else {
            return Ok(None);
        };

        let title = params.title.clone().unwrap_or(existing.title);
        let start_date = params.start_date.unwrap_or(existing.start_date);
        let end_date = params.end_date.unwrap_or(existing.end_date);
        let now_str = Timestamp::now().to_string();

        self.connection
            .execute(
                UPDATE_PLAN_SQL,
                params![
                    title,
                    start_date.to_string(),
                    end_date.to_string(),
                    &now_str,
                    params.id as i64
                ],
            )
            .map_err(|e| PlannerError::database_error("Failed to update plan", e))?;

        self.get_plan(params.id)
    }

    /// Permanently deletes a plan and all its actions. This operation
    /// cannot be undone.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))?;

        if !exists {
            return Err(PlannerError::PlanNotFound { id });
        }

        // Foreign keys would cascade this, but stay explicit
        tx.execute(DELETE_PLAN_ACTIONS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan actions", e))?;

        tx.execute(DELETE_PLAN_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
