//! Display implementations for domain models.
//!
//! All Display implementations produce markdown for rich terminal display,
//! separated from the model definitions to keep data and presentation
//! apart. Derived values (urgency, progress, durations, variance) are
//! computed inline at format time from the record being shown.

use std::fmt;

use super::datetime::{ClockTime, LocalDateTime, ShortDate};
use crate::metrics::{self, StatusCounts, VarianceStatus};
use crate::models::{Action, ActionStatus, Plan, PlanSummary};
use crate::sort::CompletedAction;

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Done / {} Active / {} To Do / {} Canceled",
            self.done, self.active, self.todo, self.canceled
        )
    }
}

impl fmt::Display for Action {
    /// One list line: status icon, title, then the schedule summary in
    /// parentheses. A slot with a missing endpoint renders `--:--` and no
    /// duration.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} {}", self.status.with_icon(), self.title)?;

        let mut parts: Vec<String> = Vec::new();
        if let Some(start) = self.start_date {
            match self.end_date {
                Some(end) => parts.push(format!("{} to {}", ShortDate(start), ShortDate(end))),
                None => parts.push(ShortDate(start).to_string()),
            }
        }
        if self.start_time.is_some() || self.end_time.is_some() {
            let mut slot = format!(
                "{} to {}",
                ClockTime(self.start_time.as_ref()),
                ClockTime(self.end_time.as_ref())
            );
            if let Some(duration) = metrics::action_duration(self.start_time, self.end_time) {
                slot.push_str(", ");
                slot.push_str(&duration);
            }
            parts.push(slot);
        }
        if self.status == ActionStatus::Finished {
            if let Some(done) = self.actual_date {
                parts.push(format!("done {}", ShortDate(done)));
            }
        }

        if !parts.is_empty() {
            write!(f, " ({})", parts.join(" | "))?;
        }
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "  {desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Start: {}", self.start_date)?;
        writeln!(f, "- Due: {}", self.end_date)?;
        let counts = metrics::status_counts(self);
        if counts.total() > 0 {
            writeln!(
                f,
                "- Progress: {}% ({counts})",
                metrics::plan_progress(self).round() as i64
            )?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.actions.is_empty() {
            writeln!(f, "\n## Actions")?;
            writeln!(f)?;
            for action in &self.actions {
                write!(f, "{}", action)?;
            }
        } else {
            writeln!(f, "\nNo actions in this plan.")?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.counts.total() > 0 {
            format!(" ({}%)", self.progress.round() as i64)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;

        writeln!(f, "- Due: {} ({})", self.end_date, self.urgency.label)?;
        if self.counts.total() > 0 {
            writeln!(f, "- Actions: {}", self.counts)?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Blank line after each plan card

        Ok(())
    }
}

impl fmt::Display for CompletedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.action.title, self.plan_title)?;
        writeln!(f)?;

        match self.action.actual_time.as_ref() {
            Some(time) => writeln!(
                f,
                "- Completed: {} {}",
                self.completed_on,
                ClockTime(Some(time))
            )?,
            None => writeln!(f, "- Completed: {}", self.completed_on)?,
        }

        let days = self.actual_days();
        writeln!(f, "- Took: {days} {}", if days == 1 { "day" } else { "days" })?;

        // Variance only means something when the action was scheduled.
        if self.action.start_date.is_some() || self.action.end_date.is_some() {
            let base = self.action.start_date.unwrap_or(self.plan_start_date);
            let variance =
                metrics::schedule_variance(base, self.action.end_date, self.completed_on);
            let verdict = match variance.status {
                VarianceStatus::OnTime => "on time".to_string(),
                VarianceStatus::Ahead => format!("{}d ahead", variance.delta_days),
                VarianceStatus::Behind => format!("{}d behind", -variance.delta_days),
            };
            writeln!(
                f,
                "- Schedule: planned {}d, {verdict}",
                variance.planned_days
            )?;
        }

        writeln!(f)?;
        Ok(())
    }
}
