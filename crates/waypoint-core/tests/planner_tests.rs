//! End-to-end planner scenarios through the async facade.

mod common;

use common::create_test_planner;
use jiff::civil::date;
use waypoint_core::params::{
    ActionDraft, CreatePlan, CycleAction, DeletePlan, History, Id, ListPlans,
};
use waypoint_core::ActionStatus;

fn draft(title: &str) -> ActionDraft {
    ActionDraft {
        title: title.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_goal_lifecycle_end_to_end() {
    let (_temp_dir, planner) = create_test_planner().await;

    // Author a goal the way the create form does: one blank trailing row
    // that must never reach storage.
    let created = planner
        .create_plan_result(&CreatePlan {
            title: "Plan the launch".to_string(),
            start_date: date(2026, 8, 1),
            end_date: date(2026, 8, 31),
            owner_id: None,
            actions: vec![draft("Write announcement"), draft("Dry run"), draft("")],
        })
        .await
        .expect("create failed");

    let output = format!("{created}");
    assert!(output.contains("Created plan with ID: 1"));
    assert!(output.contains("Write announcement"));
    assert!(!output.contains("No actions"));

    let plan = planner
        .show_plan(&Id { id: 1 })
        .await
        .expect("show failed")
        .expect("plan should exist");
    assert_eq!(plan.actions.len(), 2);

    // Two taps: first action lands on Finished with a stamp.
    let cycle = CycleAction {
        plan_id: 1,
        index: 0,
    };
    planner.cycle_action(&cycle).await.expect("cycle failed");
    let result = planner.cycle_action(&cycle).await.expect("cycle failed");
    assert!(format!("{result}")
        .contains("'Write announcement' is now finished"));

    // The dashboard reflects the new progress: 1 of 2 countable.
    let summaries = planner
        .list_plans_sorted(&ListPlans::default())
        .await
        .expect("list failed");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries.0[0].counts.done, 1);
    assert_eq!(summaries.0[0].counts.todo, 1);
    assert_eq!(summaries.0[0].progress.round() as i64, 50);

    // The finished action shows up in history.
    let history = planner
        .completed_history(&History::default())
        .await
        .expect("history failed");
    assert_eq!(history.len(), 1);
    let rendered = format!("{history}");
    assert!(rendered.contains("Write announcement"));
    assert!(rendered.contains("Plan the launch"));

    // Tear the goal down.
    let deleted = planner
        .delete_plan(&DeletePlan {
            id: 1,
            confirmed: true,
        })
        .await
        .expect("delete failed")
        .expect("deleted plan should be echoed back");
    assert!(format!("{deleted}").contains("Deleted plan 'Plan the launch'"));

    let summaries = planner
        .list_plans_sorted(&ListPlans::default())
        .await
        .expect("list failed");
    assert!(summaries.is_empty());
    assert!(format!("{summaries}").contains("No active plans"));
}

#[tokio::test]
async fn test_unknown_sort_key_falls_back_to_field_comparison() {
    let (_temp_dir, planner) = create_test_planner().await;

    for title in ["Zebra", "Alpha", "Mango"] {
        planner
            .create_plan_result(&CreatePlan {
                title: title.to_string(),
                start_date: date(2026, 8, 1),
                end_date: date(2026, 8, 31),
                owner_id: None,
                actions: vec![],
            })
            .await
            .expect("create failed");
    }

    // "title" is not a built-in key; it sorts by the serialized field.
    let summaries = planner
        .list_plans_sorted(&ListPlans {
            sort_key: Some("title".to_string()),
            direction: Some("asc".to_string()),
            owner_id: None,
        })
        .await
        .expect("list failed");

    let titles: Vec<&str> = summaries.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Mango", "Zebra"]);
}

#[tokio::test]
async fn test_reopened_database_keeps_state() {
    let (temp_dir, planner) = create_test_planner().await;

    planner
        .create_plan_result(&CreatePlan {
            title: "Persistent".to_string(),
            start_date: date(2026, 8, 1),
            end_date: date(2026, 8, 31),
            owner_id: None,
            actions: vec![draft("Survives restarts")],
        })
        .await
        .expect("create failed");
    planner
        .cycle_action(&CycleAction {
            plan_id: 1,
            index: 0,
        })
        .await
        .expect("cycle failed");

    // A second planner over the same file sees the same world.
    let reopened = waypoint_core::PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .expect("rebuild failed");

    let plan = reopened
        .show_plan(&Id { id: 1 })
        .await
        .expect("show failed")
        .expect("plan should exist");
    assert_eq!(plan.title, "Persistent");
    assert_eq!(plan.actions[0].status, ActionStatus::Pending);
}
