//! Action row operations.
//!
//! Actions belong to their plan the way an embedded array belongs to a
//! document: reads always load the whole list in position order, and
//! writes that touch statuses replace the whole list in one transaction
//! (last write wins at the plan level).

use jiff::civil::{Date, Time};
use jiff::Timestamp;
use rusqlite::{params, types::Type, Row, Transaction};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Action, ActionStatus},
    params::ActionDraft,
};

const SELECT_ACTIONS_SQL: &str = "SELECT id, title, description, status, start_date, end_date, start_time, end_time, actual_date, actual_time FROM actions WHERE plan_id = ?1 ORDER BY position";
const INSERT_ACTION_SQL: &str = "INSERT INTO actions (plan_id, title, description, status, start_date, end_date, start_time, end_time, actual_date, actual_time, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const INSERT_ACTION_WITH_ID_SQL: &str = "INSERT INTO actions (id, plan_id, title, description, status, start_date, end_date, start_time, end_time, actual_date, actual_time, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const DELETE_PLAN_ACTIONS_SQL: &str = "DELETE FROM actions WHERE plan_id = ?1";
const DELETE_ACTION_SQL: &str = "DELETE FROM actions WHERE id = ?1";
const NEXT_POSITION_SQL: &str =
    "SELECT COALESCE(MAX(position), -1) + 1 FROM actions WHERE plan_id = ?1";
const SHIFT_POSITIONS_SQL: &str =
    "UPDATE actions SET position = position - 1 WHERE plan_id = ?1 AND position > ?2";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const UPDATE_PLAN_TIMESTAMP_SQL: &str = "UPDATE plans SET updated_at = ?1 WHERE id = ?2";

fn parse_opt_date(index: usize, text: Option<String>) -> rusqlite::Result<Option<Date>> {
    text.map(|t| {
        t.parse::<Date>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
    })
    .transpose()
}

fn parse_opt_time(index: usize, text: Option<String>) -> rusqlite::Result<Option<Time>> {
    text.map(|t| {
        t.parse::<Time>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
    })
    .transpose()
}

fn date_text(date: Option<Date>) -> Option<String> {
    date.map(|d| d.to_string())
}

fn time_text(time: Option<Time>) -> Option<String> {
    time.map(|t| t.strftime("%H:%M").to_string())
}

/// Construct an Action from a database row.
fn build_action_from_row(row: &Row) -> rusqlite::Result<Action> {
    let status_str: String = row.get(3)?;
    let status = status_str.parse::<ActionStatus>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Text,
            format!("Invalid action status: {status_str}").into(),
        )
    })?;

    Ok(Action {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        description: row.get(2)?,
        status,
        start_date: parse_opt_date(4, row.get(4)?)?,
        end_date: parse_opt_date(5, row.get(5)?)?,
        start_time: parse_opt_time(6, row.get(6)?)?,
        end_time: parse_opt_time(7, row.get(7)?)?,
        actual_date: parse_opt_date(8, row.get(8)?)?,
        actual_time: parse_opt_time(9, row.get(9)?)?,
    })
}

impl super::Database {
    /// Loads a plan's actions in display order.
    pub fn get_actions(&self, plan_id: u64) -> Result<Vec<Action>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ACTIONS_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let actions = stmt
            .query_map(params![plan_id as i64], build_action_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query actions", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch actions", e));
        actions
    }

    /// Inserts authored drafts as fresh action rows, assigning ids and
    /// positions from vector order. Used inside the plan-creation
    /// transaction.
    pub(super) fn insert_drafts(
        tx: &Transaction,
        plan_id: u64,
        drafts: &[ActionDraft],
    ) -> Result<Vec<Action>> {
        let mut actions = Vec::with_capacity(drafts.len());
        for (position, draft) in drafts.iter().enumerate() {
            let status = draft.status.unwrap_or_default();
            tx.execute(
                INSERT_ACTION_SQL,
                params![
                    plan_id as i64,
                    draft.title,
                    draft.description.as_deref(),
                    status.as_str(),
                    date_text(draft.start_date),
                    date_text(draft.end_date),
                    time_text(draft.start_time),
                    time_text(draft.end_time),
                    None::<String>, // actual_date: new actions are unstamped
                    None::<String>,
                    position as i64
                ],
            )
            .map_err(|e| PlannerError::database_error("Failed to insert action", e))?;

            actions.push(draft.clone().into_action(tx.last_insert_rowid() as u64));
        }
        Ok(actions)
    }

    /// Replaces a plan's entire action list with the given state, bumping
    /// the plan's updated_at. Ids are preserved; positions come from
    /// vector order.
    ///
    /// This is the whole-array write-back behind every status cycle: the
    /// caller read the plan, mutated the array in memory, and stores it
    /// back as one field.
    pub fn replace_actions(&mut self, plan_id: u64, actions: &[Action]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![plan_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))?;
        if !exists {
            return Err(PlannerError::PlanNotFound { id: plan_id });
        }

        tx.execute(DELETE_PLAN_ACTIONS_SQL, params![plan_id as i64])
            .map_err(|e| PlannerError::database_error("Failed to clear actions", e))?;

        for (position, action) in actions.iter().enumerate() {
            tx.execute(
                INSERT_ACTION_WITH_ID_SQL,
                params![
                    action.id as i64,
                    plan_id as i64,
                    action.title,
                    action.description.as_deref(),
                    action.status.as_str(),
                    date_text(action.start_date),
                    date_text(action.end_date),
                    time_text(action.start_time),
                    time_text(action.end_time),
                    date_text(action.actual_date),
                    time_text(action.actual_time),
                    position as i64
                ],
            )
            .map_err(|e| PlannerError::database_error("Failed to write action", e))?;
        }

        let now_str = Timestamp::now().to_string();
        tx.execute(UPDATE_PLAN_TIMESTAMP_SQL, params![&now_str, plan_id as i64])
            .map_err(|e| PlannerError::database_error("Failed to update plan timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Appends a new action to the end of a plan's list.
    pub fn add_action(&mut self, plan_id: u64, draft: &ActionDraft) -> Result<Action> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![plan_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))?;
        if !exists {
            return Err(PlannerError::PlanNotFound { id: plan_id });
        }

        let position: i64 = tx
            .query_row(NEXT_POSITION_SQL, params![plan_id as i64], |row| row.get(0))
            .map_err(|e| PlannerError::database_error("Failed to get next position", e))?;

        let status = draft.status.unwrap_or_default();
        tx.execute(
            INSERT_ACTION_SQL,
            params![
                plan_id as i64,
                draft.title,
                draft.description.as_deref(),
                status.as_str(),
                date_text(draft.start_date),
                date_text(draft.end_date),
                time_text(draft.start_time),
                time_text(draft.end_time),
                None::<String>,
                None::<String>,
                position
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert action", e))?;

        let id = tx.last_insert_rowid() as u64;

        let now_str = Timestamp::now().to_string();
        tx.execute(UPDATE_PLAN_TIMESTAMP_SQL, params![&now_str, plan_id as i64])
            .map_err(|e| PlannerError::database_error("Failed to update plan timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(draft.clone().into_action(id))
    }

    /// Removes the action at the given display position, closing the gap
    /// it leaves. Returns the removed action.
    pub fn remove_action(&mut self, plan_id: u64, index: usize) -> Result<Action> {
        let exists: bool = self
            .connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![plan_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))?;
        if !exists {
            return Err(PlannerError::PlanNotFound { id: plan_id });
        }

        let actions = self.get_actions(plan_id)?;
        let Some(removed) = actions.get(index).cloned() else {
            return Err(PlannerError::ActionNotFound { plan_id, index });
        };

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_ACTION_SQL, params![removed.id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete action", e))?;

        tx.execute(SHIFT_POSITIONS_SQL, params![plan_id as i64, index as i64])
            .map_err(|e| PlannerError::database_error("Failed to reorder actions", e))?;

        let now_str = Timestamp::now().to_string();
        tx.execute(UPDATE_PLAN_TIMESTAMP_SQL, params![&now_str, plan_id as i64])
            .map_err(|e| PlannerError::database_error("Failed to update plan timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(removed)
    }
}
