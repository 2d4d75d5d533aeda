//! Command definitions and handlers.
//!
//! This module implements the parameter wrapper pattern: each command has a
//! clap argument struct that converts into the matching core parameter type
//! via `From`, so CLI concerns (flags, aliases, help text) never reach the
//! core. The [`Cli`] struct at the bottom drives the planner and renders
//! each operation's markdown result.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::{Date, Time};
use jiff::Zoned;
use waypoint_core::params::{
    ActionDraft, AddAction, CreatePlan, CycleAction, DeletePlan, History, Id, ListPlans,
    RemoveAction, UpdatePlan,
};
use waypoint_core::{OperationStatus, Planner};

use crate::renderer::TerminalRenderer;

/// Create a new plan
///
/// A plan needs a title and a deadline. Action titles can be supplied
/// inline with repeated --action flags; further scheduling detail is added
/// later with `wp action add`.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Title of the goal
    pub title: String,
    /// Deadline for the goal (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Date,
    /// First day of the plan window; defaults to today
    #[arg(long)]
    pub start_date: Option<Date>,
    /// Identifier of the owning user
    #[arg(long)]
    pub owner: Option<String>,
    /// Action title; repeat the flag for more actions (blank ones are
    /// dropped)
    #[arg(long = "action")]
    pub actions: Vec<String>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            title: val.title,
            start_date: val.start_date.unwrap_or_else(|| Zoned::now().date()),
            end_date: val.end_date,
            owner_id: val.owner,
            actions: val
                .actions
                .into_iter()
                .map(|title| ActionDraft {
                    title,
                    ..Default::default()
                })
                .collect(),
        }
    }
}

/// List all plans as dashboard cards
#[derive(Args)]
pub struct ListPlansArgs {
    /// Sort key: startDate (default), progress, daysLeft, actions, or any
    /// plan field name
    #[arg(long)]
    pub sort_key: Option<String>,
    /// Sort direction
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,
    /// Show only plans owned by this user
    #[arg(long)]
    pub owner: Option<String>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            sort_key: val.sort_key,
            direction: val.direction.map(|d| d.to_string()),
            owner_id: val.owner,
        }
    }
}

/// Show details of a specific plan
#[derive(Args)]
pub struct ShowPlanArgs {
    /// Unique identifier of the plan to show
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a plan's title or window
#[derive(Args)]
pub struct UpdatePlanArgs {
    /// Unique identifier of the plan to update
    pub id: u64,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New window start (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<Date>,
    /// New deadline (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<Date>,
}

impl From<UpdatePlanArgs> for UpdatePlan {
    fn from(val: UpdatePlanArgs) -> Self {
        UpdatePlan {
            id: val.id,
            title: val.title,
            start_date: val.start_date,
            end_date: val.end_date,
        }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// Unique identifier of the plan to permanently delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Update a plan's title or window
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// Add an action to a plan
///
/// Scheduling is optional: give a date range, a clock slot, or neither.
/// A slot that ends before it starts is treated as crossing midnight.
#[derive(Args)]
pub struct AddActionArgs {
    /// Unique identifier of the plan to add this action to
    pub plan_id: u64,
    /// Title of the action
    pub title: String,
    /// Optional free-text detail
    #[arg(short, long)]
    pub description: Option<String>,
    /// Scheduled range start (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<Date>,
    /// Scheduled range end (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<Date>,
    /// Slot start on the clock (HH:MM)
    #[arg(long)]
    pub start_time: Option<Time>,
    /// Slot end on the clock (HH:MM)
    #[arg(long)]
    pub end_time: Option<Time>,
}

impl From<AddActionArgs> for AddAction {
    fn from(val: AddActionArgs) -> Self {
        AddAction {
            plan_id: val.plan_id,
            draft: ActionDraft {
                title: val.title,
                description: val.description,
                start_date: val.start_date,
                end_date: val.end_date,
                start_time: val.start_time,
                end_time: val.end_time,
                status: None,
            },
        }
    }
}

/// Remove an action from a plan by its position
#[derive(Args)]
pub struct RemoveActionArgs {
    /// Unique identifier of the owning plan
    pub plan_id: u64,
    /// 0-based position of the action to remove
    pub index: usize,
}

impl From<RemoveActionArgs> for RemoveAction {
    fn from(val: RemoveActionArgs) -> Self {
        RemoveAction {
            plan_id: val.plan_id,
            index: val.index,
        }
    }
}

/// Cycle an action's status one tap
///
/// The cycle is to do -> active -> done -> canceled -> to do. Landing on
/// done stamps the completion date and time; landing back on to do clears
/// the stamp.
#[derive(Args)]
pub struct CycleActionArgs {
    /// Unique identifier of the owning plan
    pub plan_id: u64,
    /// 0-based position of the action to cycle
    pub index: usize,
}

impl From<CycleActionArgs> for CycleAction {
    fn from(val: CycleActionArgs) -> Self {
        CycleAction {
            plan_id: val.plan_id,
            index: val.index,
        }
    }
}

#[derive(Subcommand)]
pub enum ActionCommands {
    /// Add an action to a plan
    #[command(alias = "a")]
    Add(AddActionArgs),
    /// Remove an action from a plan
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveActionArgs),
    /// Cycle an action's status one tap
    #[command(alias = "c")]
    Cycle(CycleActionArgs),
}

/// Show completed actions across all plans
#[derive(Args)]
pub struct HistoryArgs {
    /// Sort key: actualDate (default) or actualDays
    #[arg(long)]
    pub sort_key: Option<String>,
    /// Sort direction
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,
    /// Show only plans owned by this user
    #[arg(long)]
    pub owner: Option<String>,
}

impl From<HistoryArgs> for History {
    fn from(val: HistoryArgs) -> Self {
        History {
            sort_key: val.sort_key,
            direction: val.direction.map(|d| d.to_string()),
            owner_id: val.owner,
        }
    }
}

/// Command-line representation of a sort direction
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl std::fmt::Display for DirectionArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectionArg::Asc => write!(f, "asc"),
            DirectionArg::Desc => write!(f, "desc"),
        }
    }
}

/// Dispatcher binding the planner to the terminal renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Route a plan command to its handler.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let result = self.planner.create_plan_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => {
                let params: Id = args.into();
                match self.planner.show_plan(&params).await? {
                    Some(plan) => self.renderer.render(&plan.to_string()),
                    None => self.render_missing_plan(params.id),
                }
            }
            PlanCommands::Update(args) => {
                let result = self.planner.update_plan_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Delete(args) => {
                let params: DeletePlan = args.into();
                match self.planner.delete_plan(&params).await? {
                    Some(result) => self.renderer.render(&result.to_string()),
                    None => self.render_missing_plan(params.id),
                }
            }
        }
    }

    /// Route an action command to its handler.
    pub async fn handle_action_command(&self, command: ActionCommands) -> Result<()> {
        match command {
            ActionCommands::Add(args) => {
                let result = self.planner.add_action_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            ActionCommands::Remove(args) => {
                let result = self.planner.remove_action_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            ActionCommands::Cycle(args) => {
                let result = self.planner.cycle_action(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    /// List plans as dashboard cards; also the default command.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self.planner.list_plans_sorted(params).await?;
        self.renderer.render(&summaries.to_string())
    }

    /// Show the completed-action history.
    pub async fn history(&self, args: HistoryArgs) -> Result<()> {
        let history = self.planner.completed_history(&args.into()).await?;
        self.renderer.render(&history.to_string())
    }

    fn render_missing_plan(&self, id: u64) -> Result<()> {
        let status = OperationStatus::failure(format!("Plan {id} not found"));
        self.renderer.render(&status.to_string())
    }
}
