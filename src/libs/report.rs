//! Task and user overview reports.
//!
//! Counts are computed from the full task list; percentage lines are only
//! emitted when their denominator is non-zero.

use crate::libs::error::AppError;
use crate::libs::session::Session;
use crate::libs::task::Task;
use crate::libs::task_store::{TaskPaths, TaskStore};
use crate::libs::users::UserDirectory;
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::fs;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub completed: usize,
    pub incomplete: usize,
    pub overdue: usize,
}

impl StatusCounts {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> Self {
        let mut counts = StatusCounts::default();
        for task in tasks {
            counts.total += 1;
            if task.completed {
                counts.completed += 1;
            } else {
                counts.incomplete += 1;
            }
            if task.is_overdue(today) {
                counts.overdue += 1;
            }
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub username: String,
    pub counts: StatusCounts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOverview {
    pub counts: StatusCounts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOverview {
    pub total_users: usize,
    pub total_tasks: usize,
    pub users: Vec<UserSummary>,
}

/// Share of `part` in `whole` as a percentage, `None` for an empty whole.
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(part as f64 / whole as f64 * 100.0)
    }
}

fn write_percentage(out: &mut String, label: &str, part: usize, whole: usize) {
    if let Some(value) = percentage(part, whole) {
        let _ = writeln!(out, "% {}: {:.2}%", label, value);
    }
}

impl TaskOverview {
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        TaskOverview {
            counts: StatusCounts::from_tasks(tasks, today),
        }
    }

    pub fn render(&self) -> String {
        let c = &self.counts;
        let mut out = String::from("=== Task Overview ===\n");
        let _ = writeln!(out, "Total tasks: {}", c.total);
        let _ = writeln!(out, "Completed: {}", c.completed);
        let _ = writeln!(out, "Incomplete: {}", c.incomplete);
        let _ = writeln!(out, "Overdue: {}", c.overdue);
        write_percentage(&mut out, "Incomplete", c.incomplete, c.total);
        write_percentage(&mut out, "Overdue", c.overdue, c.total);
        out
    }
}

impl UserOverview {
    pub fn compute(users: &UserDirectory, tasks: &[Task], today: NaiveDate) -> Self {
        let summaries = users
            .usernames()
            .map(|username| UserSummary {
                username: username.to_string(),
                counts: StatusCounts::from_tasks(tasks.iter().filter(|t| t.owner == username), today),
            })
            .collect();

        UserOverview {
            total_users: users.len(),
            total_tasks: tasks.len(),
            users: summaries,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("=== User Overview ===\n");
        let _ = writeln!(out, "Total users: {}", self.total_users);
        let _ = writeln!(out, "Total tasks: {}", self.total_tasks);

        for user in &self.users {
            let c = &user.counts;
            let _ = writeln!(out, "\n--- {} ---", user.username);
            let _ = writeln!(out, "Total tasks: {}", c.total);
            write_percentage(&mut out, "of all tasks", c.total, self.total_tasks);

            if c.total > 0 {
                let _ = writeln!(out, "Completed: {}", c.completed);
                let _ = writeln!(out, "Incomplete: {}", c.incomplete);
                let _ = writeln!(out, "Overdue: {}", c.overdue);
                write_percentage(&mut out, "Completed", c.completed, c.total);
                write_percentage(&mut out, "Incomplete", c.incomplete, c.total);
                write_percentage(&mut out, "Overdue", c.overdue, c.total);
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reports {
    pub task_overview: TaskOverview,
    pub user_overview: UserOverview,
}

/// Computes both overviews and overwrites the two report files.
pub fn generate_reports(users: &UserDirectory, store: &TaskStore, paths: &TaskPaths, today: NaiveDate) -> Result<Reports, AppError> {
    let tasks = store.load()?;

    let reports = Reports {
        task_overview: TaskOverview::compute(&tasks, today),
        user_overview: UserOverview::compute(users, &tasks, today),
    };

    fs::write(&paths.task_overview, reports.task_overview.render()).map_err(|e| AppError::storage(&paths.task_overview, e))?;
    fs::write(&paths.user_overview, reports.user_overview.render()).map_err(|e| AppError::storage(&paths.user_overview, e))?;
    debug!(total = reports.task_overview.counts.total, "reports generated");

    Ok(reports)
}

/// Admin-only: regenerates the reports and returns the contents of both files.
pub fn display_statistics(session: &Session, store: &TaskStore, paths: &TaskPaths, today: NaiveDate) -> Result<(String, String), AppError> {
    session.require_admin()?;
    generate_reports(&session.users, store, paths, today)?;

    let task_overview = fs::read_to_string(&paths.task_overview).map_err(|e| AppError::storage(&paths.task_overview, e))?;
    let user_overview = fs::read_to_string(&paths.user_overview).map_err(|e| AppError::storage(&paths.user_overview, e))?;
    Ok((task_overview, user_overview))
}
