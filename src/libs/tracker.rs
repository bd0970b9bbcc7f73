//! Task-tracker operations.
//!
//! Every edit reads the whole tasks file, changes the in-memory list and
//! rewrites the file. Validation happens before any mutation, so a rejected
//! edit leaves the file untouched.

use crate::libs::error::AppError;
use crate::libs::session::Session;
use crate::libs::task::{Task, TaskEdit, TaskFilter};
use crate::libs::task_store::TaskStore;
use chrono::NaiveDate;
use tracing::debug;

/// Task details collected from the user before assignment.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub assignee: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
}

pub fn add_task(session: &Session, store: &TaskStore, new_task: NewTask, today: NaiveDate) -> Result<Task, AppError> {
    if !session.users.contains(&new_task.assignee) {
        return Err(AppError::UnknownUser(new_task.assignee));
    }
    let task = Task::new(&new_task.assignee, &new_task.title, &new_task.description, new_task.due_date, today);
    let stored = store.append(&task)?;
    debug!(task_id = stored.id, owner = %stored.owner, "task added");
    Ok(stored)
}

pub fn fetch_tasks(store: &TaskStore, filter: TaskFilter) -> Result<Vec<Task>, AppError> {
    Ok(store.load()?.into_iter().filter(|t| filter.matches(t)).collect())
}

/// Tasks owned by the logged-in user, in storage order.
pub fn my_tasks(session: &Session, store: &TaskStore) -> Result<Vec<Task>, AppError> {
    fetch_tasks(store, TaskFilter::Owner(session.current_user.clone()))
}

fn position_of_own(session: &Session, tasks: &[Task], task_id: u32) -> Result<usize, AppError> {
    tasks
        .iter()
        .position(|t| t.id == task_id && t.owner == session.current_user)
        .ok_or(AppError::TaskNotFound(task_id))
}

pub fn mark_complete(session: &Session, store: &TaskStore, task_id: u32) -> Result<Task, AppError> {
    let mut tasks = store.load()?;
    let index = position_of_own(session, &tasks, task_id)?;
    tasks[index].completed = true;
    store.save_all(&tasks)?;
    debug!(task_id, "task marked complete");
    Ok(tasks[index].clone())
}

/// Reassigns and/or reschedules one of the user's incomplete tasks.
pub fn edit_task(session: &Session, store: &TaskStore, task_id: u32, edit: TaskEdit) -> Result<Task, AppError> {
    let mut tasks = store.load()?;
    let index = position_of_own(session, &tasks, task_id)?;

    if tasks[index].completed {
        return Err(AppError::AlreadyCompleted);
    }
    if let Some(owner) = &edit.owner {
        if !session.users.contains(owner) {
            return Err(AppError::UnknownUser(owner.clone()));
        }
    }

    let task = &mut tasks[index];
    if let Some(owner) = edit.owner {
        task.owner = owner;
    }
    if let Some(due_date) = edit.due_date {
        task.due_date = due_date;
    }
    let updated = task.clone();

    store.save_all(&tasks)?;
    debug!(task_id, owner = %updated.owner, "task edited");
    Ok(updated)
}

/// Admin-only user registration.
pub fn register_user(session: &mut Session, username: &str, password: &str, confirmation: &str) -> Result<(), AppError> {
    session.require_admin()?;
    session.users.register(username, password, confirmation)
}
