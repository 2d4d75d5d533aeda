use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ActionCommands, HistoryArgs, PlanCommands};

/// Main command-line interface for the Waypoint goal planner
///
/// Waypoint tracks personal goals as plans: each plan has a deadline and an
/// ordered list of actions whose status is cycled one tap at a time
/// (to do, active, done, canceled). Dashboards derive progress, deadline
/// urgency, and a completed-action history from the stored plans.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
///
/// The CLI is organized into three command categories:
/// - `plan`: Operations on whole plans (create, list, show, update, delete)
/// - `action`: Operations on a plan's action list (add, remove, cycle)
/// - `history`: The completed-action history view
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage actions within a plan
    #[command(alias = "a")]
    Action {
        #[command(subcommand)]
        command: ActionCommands,
    },
    /// Show completed actions across all plans
    #[command(alias = "h")]
    History(HistoryArgs),
}
