//! High-level planner API for managing plans and actions.
//!
//! The [`Planner`] is the explicit collaborator object the rest of the
//! application is handed: constructed once at process start via
//! [`PlannerBuilder`], passed by reference, no ambient globals. It
//! coordinates between the pure domain layer ([`crate::metrics`],
//! [`crate::sort`], the status cycle) and the SQLite store.
//!
//! Status updates are read-modify-write: a handler loads the plan from the
//! store, mutates the action array in memory, and writes the whole array
//! back. Concurrent writers are last-write-wins at the plan level.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`plan_ops`]: Thin async wrappers over blocking database operations
//! - [`plan_handlers`]: High-level operations returning display wrappers
//!
//! # Usage
//!
//! ```rust,no_run
//! use waypoint_core::{params::CreatePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().build().await?;
//!
//! let params = CreatePlan {
//!     title: "Launch the newsletter".to_string(),
//!     start_date: "2026-08-01".parse()?,
//!     end_date: "2026-08-14".parse()?,
//!     owner_id: None,
//!     actions: vec![],
//! };
//! let created = planner.create_plan_result(&params).await?;
//! println!("{created}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface for managing plans and actions.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
