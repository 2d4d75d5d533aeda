//! Core library for the Waypoint goal planning application.
//!
//! A *plan* is a goal with a deadline and an ordered list of *actions*;
//! each action carries a four-state status cycled one tap at a time, an
//! optional schedule (date range or clock slot), and a completion stamp.
//! This crate provides the domain models, the pure computation layer every
//! view depends on, and the storage-backed planner facade:
//!
//! - [`models`]: plans, actions, statuses, and summary cards
//! - [`metrics`]: pure derived values: urgency chips, progress, status
//!   counts, slot durations, schedule variance
//! - [`sort`]: stable comparator factories over plan lists and the
//!   completed-action history
//! - [`planner`]: async facade over the SQLite store; all status updates
//!   are read-modify-write over whole action arrays
//! - [`display`]: markdown formatting for terminals
//!
//! The computation layer is deliberately free of I/O and clocks: callers
//! pass the reference date in and recompute on every render.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use waypoint_core::{params::{CreatePlan, ListPlans}, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("waypoint.db"))
//!     .build()
//!     .await?;
//!
//! let params = CreatePlan {
//!     title: "Run a half marathon".to_string(),
//!     start_date: "2026-08-01".parse()?,
//!     end_date: "2026-10-01".parse()?,
//!     owner_id: None,
//!     actions: vec![],
//! };
//! let created = planner.create_plan_result(&params).await?;
//! println!("{created}");
//!
//! let summaries = planner.list_plans_sorted(&ListPlans::default()).await?;
//! println!("{summaries}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod metrics;
pub mod models;
pub mod params;
pub mod planner;
pub mod sort;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CompletedActions, CreateResult, DeleteResult, LocalDateTime, OperationStatus, PlanSummaries,
    UpdateResult,
};
pub use error::{PlannerError, Result};
pub use metrics::{ScheduleVariance, Severity, StatusCounts, Urgency, VarianceStatus};
pub use models::{Action, ActionStatus, Plan, PlanSummary};
pub use planner::{Planner, PlannerBuilder};
pub use sort::{CompletedAction, CompletedSortKey, SortDirection, SortKey};
