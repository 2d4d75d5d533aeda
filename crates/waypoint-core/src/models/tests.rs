#[cfg(test)]
mod model_tests {
    use jiff::civil::{date, time};
    use jiff::Timestamp;

    use crate::models::{Action, ActionStatus, Plan, PlanSummary};

    fn create_test_action(status: ActionStatus) -> Action {
        Action {
            id: 123,
            title: "Test Action Title".to_string(),
            status,
            description: Some("This is a test action".to_string()),
            start_date: Some(date(2026, 8, 3)),
            end_date: Some(date(2026, 8, 5)),
            start_time: None,
            end_time: None,
            actual_date: if status == ActionStatus::Finished {
                Some(date(2026, 8, 5))
            } else {
                None
            },
            actual_time: if status == ActionStatus::Finished {
                Some(time(17, 30, 0, 0))
            } else {
                None
            },
        }
    }

    fn create_test_plan() -> Plan {
        Plan {
            id: 789,
            title: "Test Plan Title".to_string(),
            start_date: date(2026, 8, 1),
            end_date: date(2026, 8, 14),
            actions: vec![
                create_test_action(ActionStatus::Finished),
                create_test_action(ActionStatus::Pending),
                create_test_action(ActionStatus::NotStarted),
                create_test_action(ActionStatus::Canceled),
            ],
            owner_id: Some("user-1".to_string()),
            created_at: Timestamp::from_second(1767225600).unwrap(),
            updated_at: Timestamp::from_second(1767312000).unwrap(),
        }
    }

    #[test]
    fn test_status_cycle_order() {
        assert_eq!(ActionStatus::NotStarted.next(), ActionStatus::Pending);
        assert_eq!(ActionStatus::Pending.next(), ActionStatus::Finished);
        assert_eq!(ActionStatus::Finished.next(), ActionStatus::Canceled);
        assert_eq!(ActionStatus::Canceled.next(), ActionStatus::NotStarted);
    }

    #[test]
    fn test_status_cycle_has_period_four() {
        for status in [
            ActionStatus::NotStarted,
            ActionStatus::Pending,
            ActionStatus::Finished,
            ActionStatus::Canceled,
        ] {
            assert_eq!(status.next().next().next().next(), status);
        }
    }

    #[test]
    fn test_status_round_trip_strings() {
        for status in [
            ActionStatus::NotStarted,
            ActionStatus::Pending,
            ActionStatus::Finished,
            ActionStatus::Canceled,
        ] {
            assert_eq!(status.as_str().parse::<ActionStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_from_str_spellings() {
        assert_eq!("notstarted".parse(), Ok(ActionStatus::NotStarted));
        assert_eq!("not-started".parse(), Ok(ActionStatus::NotStarted));
        assert_eq!("cancelled".parse(), Ok(ActionStatus::Canceled));
        assert_eq!("FINISHED".parse(), Ok(ActionStatus::Finished));
        assert!("done".parse::<ActionStatus>().is_err());
    }

    #[test]
    fn test_status_with_icon() {
        assert_eq!(ActionStatus::Finished.with_icon(), "✓ Done");
        assert_eq!(ActionStatus::Pending.with_icon(), "◔ Active");
        assert_eq!(ActionStatus::NotStarted.with_icon(), "○ To Do");
        assert_eq!(ActionStatus::Canceled.with_icon(), "✗ Canceled");
    }

    #[test]
    fn test_cycle_to_finished_stamps_completion() {
        let mut action = create_test_action(ActionStatus::Pending);
        let now = date(2026, 8, 7).at(14, 45, 0, 0);

        let landed = action.cycle_status(now);

        assert_eq!(landed, ActionStatus::Finished);
        assert_eq!(action.actual_date, Some(date(2026, 8, 7)));
        assert_eq!(action.actual_time, Some(time(14, 45, 0, 0)));
    }

    #[test]
    fn test_cycle_back_to_not_started_clears_stamp() {
        // Finishing and then cycling on to NotStarted must leave the action
        // matching its pre-completion state except for status.
        let pristine = create_test_action(ActionStatus::Pending);
        let mut action = pristine.clone();
        let now = date(2026, 8, 7).at(14, 45, 0, 0);

        action.cycle_status(now); // Finished, stamped
        action.cycle_status(now); // Canceled, stamp untouched
        assert_eq!(action.actual_date, Some(date(2026, 8, 7)));
        action.cycle_status(now); // NotStarted, stamp cleared

        assert_eq!(action.status, ActionStatus::NotStarted);
        assert_eq!(action.actual_date, None);
        assert_eq!(action.actual_time, None);

        let mut expected = pristine;
        expected.status = ActionStatus::NotStarted;
        assert_eq!(action, expected);
    }

    #[test]
    fn test_canceled_keeps_stamp_untouched() {
        let mut action = create_test_action(ActionStatus::Finished);
        let now = date(2026, 8, 9).at(9, 0, 0, 0);

        let landed = action.cycle_status(now);

        assert_eq!(landed, ActionStatus::Canceled);
        // The Finished stamp survives cancellation.
        assert_eq!(action.actual_date, Some(date(2026, 8, 5)));
        assert_eq!(action.actual_time, Some(time(17, 30, 0, 0)));
    }

    #[test]
    fn test_action_display_line() {
        let action = create_test_action(ActionStatus::Finished);
        let output = format!("{}", action);

        assert!(output.contains("✓ Done Test Action Title"));
        assert!(output.contains("Aug 03 to Aug 05"));
        assert!(output.contains("done Aug 05"));
        assert!(output.contains("This is a test action"));
    }

    #[test]
    fn test_action_display_slot_with_placeholder() {
        let mut action = create_test_action(ActionStatus::Pending);
        action.start_date = None;
        action.end_date = None;
        action.start_time = Some(time(9, 0, 0, 0));
        action.end_time = None;
        let output = format!("{}", action);

        assert!(output.contains("◔ Active"));
        assert!(output.contains("09:00 to --:--"));
        // Half-open slots have no computable duration.
        assert!(!output.contains("min"));
    }

    #[test]
    fn test_action_display_slot_duration() {
        let mut action = create_test_action(ActionStatus::NotStarted);
        action.start_time = Some(time(23, 0, 0, 0));
        action.end_time = Some(time(1, 0, 0, 0));
        let output = format!("{}", action);

        assert!(output.contains("23:00 to 01:00"));
        assert!(output.contains("2 hr"));
    }

    #[test]
    fn test_plan_display_with_actions() {
        let plan = create_test_plan();
        let output = format!("{}", plan);

        assert!(output.contains("# 789. Test Plan Title"));
        assert!(output.contains("- Start: 2026-08-01"));
        assert!(output.contains("- Due: 2026-08-14"));
        // 1 finished of 3 countable (canceled excluded): 33%.
        assert!(output.contains("- Progress: 33% (1 Done / 1 Active / 1 To Do / 1 Canceled)"));
        assert!(output.contains("## Actions"));
        assert!(output.contains("✓ Done"));
        assert!(output.contains("◔ Active"));
        assert!(output.contains("○ To Do"));
        assert!(output.contains("✗ Canceled"));
    }

    #[test]
    fn test_plan_display_empty_actions() {
        let mut plan = create_test_plan();
        plan.actions.clear();
        let output = format!("{}", plan);

        assert!(output.contains("No actions in this plan."));
        assert!(!output.contains("## Actions"));
        assert!(!output.contains("- Progress:"));
    }

    #[test]
    fn test_plan_summary_display_with_progress() {
        let plan = create_test_plan();
        let summary = PlanSummary::new(&plan, date(2026, 8, 13));
        let output = format!("{}", summary);

        assert!(output.contains("## Test Plan Title (ID: 789) (33%)"));
        assert!(output.contains("- Due: 2026-08-14 (Tomorrow)"));
        assert!(output.contains("- Actions: 1 Done / 1 Active / 1 To Do / 1 Canceled"));
        assert!(output.ends_with("\n\n"));
    }

    #[test]
    fn test_plan_summary_display_no_actions() {
        let mut plan = create_test_plan();
        plan.actions.clear();
        let summary = PlanSummary::new(&plan, date(2026, 8, 1));
        let output = format!("{}", summary);

        // No progress chip or counts line when there is nothing to count.
        assert!(output.contains("## Test Plan Title (ID: 789)\n"));
        assert!(!output.contains("(0%)"));
        assert!(!output.contains("- Actions:"));
    }

    #[test]
    fn test_plan_summary_urgency_tracks_reference_day() {
        let plan = create_test_plan();

        let safe = PlanSummary::new(&plan, date(2026, 8, 1));
        assert_eq!(safe.urgency.label, "13 days left");

        let overdue = PlanSummary::new(&plan, date(2026, 8, 20));
        assert_eq!(overdue.urgency.label, "6d Overdue");
    }

    #[test]
    fn test_plan_serializes_to_document_field_names() {
        let plan = create_test_plan();
        let value = serde_json::to_value(&plan).expect("serialization should succeed");

        assert!(value.get("startDate").is_some());
        assert!(value.get("endDate").is_some());
        assert!(value.get("ownerId").is_some());
        let action = &value["actions"][0];
        assert!(action.get("actualDate").is_some());
        assert_eq!(action["status"], "finished");
    }
}
