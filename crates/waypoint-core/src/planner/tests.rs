//! Tests for the planner module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::error::PlannerError;
use crate::models::ActionStatus;
use crate::params::{
    ActionDraft, AddAction, CreatePlan, CycleAction, DeletePlan, History, Id, ListPlans,
    RemoveAction, UpdatePlan,
};

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn draft(title: &str) -> ActionDraft {
    ActionDraft {
        title: title.to_string(),
        ..Default::default()
    }
}

fn create_params(title: &str, start: jiff::civil::Date, end: jiff::civil::Date) -> CreatePlan {
    CreatePlan {
        title: title.to_string(),
        start_date: start,
        end_date: end,
        owner_id: None,
        actions: vec![],
    }
}

#[tokio::test]
async fn test_create_plan_filters_blank_actions() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = create_params("Ship it", date(2026, 8, 1), date(2026, 8, 14));
    params.actions = vec![draft("Write"), draft("  "), draft("Review")];

    let plan = planner.create_plan(&params).await.expect("create failed");

    assert_eq!(plan.title, "Ship it");
    let titles: Vec<&str> = plan.actions.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Write", "Review"]);
    assert!(plan
        .actions
        .iter()
        .all(|a| a.status == ActionStatus::NotStarted));
}

#[tokio::test]
async fn test_create_plan_rejects_blank_title() {
    let (_temp_dir, planner) = create_test_planner().await;

    let params = create_params("   ", date(2026, 8, 1), date(2026, 8, 14));
    let err = planner.create_plan(&params).await.unwrap_err();

    assert!(matches!(err, PlannerError::InvalidInput { .. }));

    // The rejected save must not have written anything.
    let plans = planner.list_plans(None).await.expect("list failed");
    assert!(plans.is_empty());
}

#[tokio::test]
async fn test_get_plan_round_trips_schedules() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = create_params("Scheduled", date(2026, 8, 1), date(2026, 8, 14));
    let mut d = draft("Overnight shift");
    d.start_time = Some(jiff::civil::time(23, 0, 0, 0));
    d.end_time = Some(jiff::civil::time(1, 0, 0, 0));
    d.start_date = Some(date(2026, 8, 2));
    params.actions = vec![d];

    let created = planner.create_plan(&params).await.expect("create failed");
    let loaded = planner
        .get_plan(&Id { id: created.id })
        .await
        .expect("get failed")
        .expect("plan should exist");

    assert_eq!(loaded, created);
    assert_eq!(
        loaded.actions[0].start_time,
        Some(jiff::civil::time(23, 0, 0, 0))
    );
}

#[tokio::test]
async fn test_list_plans_sorted_default_is_start_date() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .create_plan(&create_params("Later", date(2026, 9, 1), date(2026, 9, 14)))
        .await
        .expect("create failed");
    planner
        .create_plan(&create_params("Earlier", date(2026, 8, 1), date(2026, 8, 14)))
        .await
        .expect("create failed");

    let summaries = planner
        .list_plans_sorted(&ListPlans::default())
        .await
        .expect("list failed");

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries.0[0].title, "Earlier");
    assert_eq!(summaries.0[1].title, "Later");
}

#[tokio::test]
async fn test_list_plans_sorted_by_progress_desc() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut done = create_params("Done", date(2026, 8, 1), date(2026, 8, 14));
    let mut finished_draft = draft("Finished");
    finished_draft.status = Some(ActionStatus::Finished);
    done.actions = vec![finished_draft];
    planner.create_plan(&done).await.expect("create failed");

    let mut cold = create_params("Cold", date(2026, 8, 1), date(2026, 8, 14));
    cold.actions = vec![draft("Todo")];
    planner.create_plan(&cold).await.expect("create failed");

    let summaries = planner
        .list_plans_sorted(&ListPlans {
            sort_key: Some("progress".to_string()),
            direction: Some("desc".to_string()),
            owner_id: None,
        })
        .await
        .expect("list failed");

    assert_eq!(summaries.0[0].title, "Done");
    assert_eq!(summaries.0[1].title, "Cold");
}

#[tokio::test]
async fn test_list_plans_sorted_rejects_bad_direction() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .list_plans_sorted(&ListPlans {
            sort_key: None,
            direction: Some("sideways".to_string()),
            owner_id: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_list_plans_filters_by_owner() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut mine = create_params("Mine", date(2026, 8, 1), date(2026, 8, 14));
    mine.owner_id = Some("alice".to_string());
    planner.create_plan(&mine).await.expect("create failed");

    let mut other = create_params("Theirs", date(2026, 8, 1), date(2026, 8, 14));
    other.owner_id = Some("bob".to_string());
    planner.create_plan(&other).await.expect("create failed");

    let plans = planner
        .list_plans(Some("alice".to_string()))
        .await
        .expect("list failed");
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].title, "Mine");
}

#[tokio::test]
async fn test_cycle_action_walks_the_full_circle() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = create_params("Cycle", date(2026, 8, 1), date(2026, 8, 14));
    params.actions = vec![draft("The action")];
    let plan = planner.create_plan(&params).await.expect("create failed");

    let cycle = CycleAction {
        plan_id: plan.id,
        index: 0,
    };

    // Tap 1: NotStarted -> Pending.
    planner.cycle_action(&cycle).await.expect("cycle failed");
    let loaded = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("get failed")
        .expect("plan should exist");
    assert_eq!(loaded.actions[0].status, ActionStatus::Pending);
    assert_eq!(loaded.actions[0].actual_date, None);

    // Tap 2: Pending -> Finished, stamped with the completion instant.
    planner.cycle_action(&cycle).await.expect("cycle failed");
    let loaded = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("get failed")
        .expect("plan should exist");
    assert_eq!(loaded.actions[0].status, ActionStatus::Finished);
    assert!(loaded.actions[0].actual_date.is_some());
    assert!(loaded.actions[0].actual_time.is_some());

    // Tap 3: Finished -> Canceled, stamp untouched.
    planner.cycle_action(&cycle).await.expect("cycle failed");
    let loaded = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("get failed")
        .expect("plan should exist");
    assert_eq!(loaded.actions[0].status, ActionStatus::Canceled);
    assert!(loaded.actions[0].actual_date.is_some());

    // Tap 4: Canceled -> NotStarted, stamp cleared.
    planner.cycle_action(&cycle).await.expect("cycle failed");
    let loaded = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("get failed")
        .expect("plan should exist");
    assert_eq!(loaded.actions[0].status, ActionStatus::NotStarted);
    assert_eq!(loaded.actions[0].actual_date, None);
    assert_eq!(loaded.actions[0].actual_time, None);
}

#[tokio::test]
async fn test_cycle_action_out_of_range() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&create_params("Empty", date(2026, 8, 1), date(2026, 8, 14)))
        .await
        .expect("create failed");

    let err = planner
        .cycle_action(&CycleAction {
            plan_id: plan.id,
            index: 3,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PlannerError::ActionNotFound { index: 3, .. }
    ));
}

#[tokio::test]
async fn test_cycle_action_missing_plan() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .cycle_action(&CycleAction {
            plan_id: 404,
            index: 0,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::PlanNotFound { id: 404 }));
}

#[tokio::test]
async fn test_update_plan_result_changes_fields() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&create_params("Old name", date(2026, 8, 1), date(2026, 8, 14)))
        .await
        .expect("create failed");

    let result = planner
        .update_plan_result(&UpdatePlan {
            id: plan.id,
            title: Some("New name".to_string()),
            start_date: None,
            end_date: Some(date(2026, 8, 21)),
        })
        .await
        .expect("update failed");

    assert_eq!(result.resource.title, "New name");
    assert_eq!(result.resource.end_date, date(2026, 8, 21));
    assert_eq!(result.resource.start_date, date(2026, 8, 1));
    assert_eq!(result.changes.len(), 2);
}

#[tokio::test]
async fn test_update_plan_result_missing_plan() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .update_plan_result(&UpdatePlan {
            id: 99,
            title: Some("Ghost".to_string()),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::PlanNotFound { id: 99 }));
}

#[tokio::test]
async fn test_delete_plan_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&create_params("Keep me", date(2026, 8, 1), date(2026, 8, 14)))
        .await
        .expect("create failed");

    let err = planner
        .delete_plan(&DeletePlan {
            id: plan.id,
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));

    // Still there.
    assert!(planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("get failed")
        .is_some());
}

#[tokio::test]
async fn test_delete_plan_confirmed_removes_everything() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = create_params("Doomed", date(2026, 8, 1), date(2026, 8, 14));
    params.actions = vec![draft("Action")];
    let plan = planner.create_plan(&params).await.expect("create failed");

    let result = planner
        .delete_plan(&DeletePlan {
            id: plan.id,
            confirmed: true,
        })
        .await
        .expect("delete failed")
        .expect("deleted plan should be echoed back");
    assert_eq!(result.resource.title, "Doomed");

    assert!(planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("get failed")
        .is_none());
}

#[tokio::test]
async fn test_add_and_remove_action_preserve_order() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = create_params("Order", date(2026, 8, 1), date(2026, 8, 14));
    params.actions = vec![draft("First"), draft("Second")];
    let plan = planner.create_plan(&params).await.expect("create failed");

    planner
        .add_action(&AddAction {
            plan_id: plan.id,
            draft: draft("Third"),
        })
        .await
        .expect("add failed");

    let loaded = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("get failed")
        .expect("plan should exist");
    let titles: Vec<&str> = loaded.actions.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);

    planner
        .remove_action(&RemoveAction {
            plan_id: plan.id,
            index: 1,
        })
        .await
        .expect("remove failed");

    let loaded = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("get failed")
        .expect("plan should exist");
    let titles: Vec<&str> = loaded.actions.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Third"]);
}

#[tokio::test]
async fn test_completed_history_flattens_and_sorts() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = create_params("Goal", date(2026, 8, 1), date(2026, 8, 14));
    params.actions = vec![draft("A"), draft("B")];
    let plan = planner.create_plan(&params).await.expect("create failed");

    // Finish both actions.
    for index in 0..2 {
        let cycle = CycleAction {
            plan_id: plan.id,
            index,
        };
        planner.cycle_action(&cycle).await.expect("cycle failed");
        planner.cycle_action(&cycle).await.expect("cycle failed");
    }

    let history = planner
        .completed_history(&History::default())
        .await
        .expect("history failed");

    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|e| e.plan_title == "Goal"));

    let err = planner
        .completed_history(&History {
            sort_key: Some("bogus".to_string()),
            direction: None,
            owner_id: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));
}
