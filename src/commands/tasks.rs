//! Interactive task tracker: login, then a role-gated menu.
//!
//! A failed login re-prompts without limit. Rejected operations are reported
//! and the menu comes back; only storage failures end the session.

use crate::{
    libs::{
        config::Config,
        error::AppError,
        messages::Message,
        prompt::{ConsolePrompt, Prompt},
        report,
        session::{Role, Session},
        task::{TaskEdit, TaskFilter},
        task_store::{TaskPaths, TaskStore},
        tracker::{self, NewTask},
        users::UserDirectory,
        validation::{get_valid_date, parse_date},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    RegisterUser,
    AddTask,
    ViewAll,
    ViewMine,
    GenerateReports,
    DisplayStatistics,
    Exit,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::RegisterUser => "Register a user",
            MenuAction::AddTask => "Add a task",
            MenuAction::ViewAll => "View all tasks",
            MenuAction::ViewMine => "View my tasks",
            MenuAction::GenerateReports => "Generate reports",
            MenuAction::DisplayStatistics => "Display statistics",
            MenuAction::Exit => "Exit",
        }
    }

    pub fn for_role(role: Role) -> Vec<MenuAction> {
        match role {
            Role::Admin => vec![
                MenuAction::RegisterUser,
                MenuAction::AddTask,
                MenuAction::ViewAll,
                MenuAction::ViewMine,
                MenuAction::GenerateReports,
                MenuAction::DisplayStatistics,
                MenuAction::Exit,
            ],
            Role::Standard => vec![MenuAction::AddTask, MenuAction::ViewAll, MenuAction::ViewMine, MenuAction::Exit],
        }
    }
}

const TASK_ACTIONS: [&str; 3] = ["Mark as complete", "Edit task", "Back"];

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let paths = config.task_paths()?;
    let mut prompt = ConsolePrompt::new();

    run(&paths, &config.admin_user(), &mut prompt, Local::now().date_naive())
}

/// Prepares storage, logs a user in and runs the menu until exit.
pub fn run(paths: &TaskPaths, admin_user: &str, prompt: &mut dyn Prompt, today: NaiveDate) -> Result<()> {
    let users = UserDirectory::load(&paths.users)?;
    let store = TaskStore::new(&paths.tasks);
    store.ensure_exists()?;

    let mut session = login(&users, admin_user, prompt)?;
    menu(&mut session, &store, paths, prompt, today)
}

pub fn login(users: &UserDirectory, admin_user: &str, prompt: &mut dyn Prompt) -> Result<Session> {
    loop {
        let username = prompt.input(&Message::PromptUsername.to_string())?;
        let password = prompt.password(&Message::PromptPassword.to_string())?;
        if let Some(session) = Session::login(users, admin_user, username.trim(), &password) {
            msg_success!(Message::LoginSuccessful(session.current_user.clone()));
            return Ok(session);
        }
        msg_error!(Message::InvalidCredentials);
    }
}

pub fn menu(session: &mut Session, store: &TaskStore, paths: &TaskPaths, prompt: &mut dyn Prompt, today: NaiveDate) -> Result<()> {
    let actions = MenuAction::for_role(session.role);
    let labels: Vec<String> = actions.iter().map(|a| a.label().to_string()).collect();

    loop {
        let choice = prompt.select(&Message::PromptMenuChoice.to_string(), &labels)?;
        let action = actions.get(choice).copied().unwrap_or(MenuAction::Exit);
        debug!(?action, user = %session.current_user, "menu action");

        match action {
            MenuAction::RegisterUser => reg_user(session, prompt)?,
            MenuAction::AddTask => add_task(session, store, prompt, today)?,
            MenuAction::ViewAll => view_all(store)?,
            MenuAction::ViewMine => view_mine(session, store, prompt)?,
            MenuAction::GenerateReports => generate_reports(session, store, paths, today)?,
            MenuAction::DisplayStatistics => display_statistics(session, store, paths, today)?,
            MenuAction::Exit => {
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        }
    }
}

/// Reports a recoverable failure and yields `None`; storage failures are returned.
fn recover<T>(result: Result<T, AppError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_fatal() => Err(e.into()),
        Err(e) => {
            msg_error!(e);
            Ok(None)
        }
    }
}

pub fn reg_user(session: &mut Session, prompt: &mut dyn Prompt) -> Result<()> {
    if recover(session.require_admin())?.is_none() {
        return Ok(());
    }

    let username = prompt.input(&Message::PromptNewUsername.to_string())?;
    let username = username.trim().to_string();
    if session.users.contains(&username) {
        msg_error!(AppError::DuplicateUser(username));
        return Ok(());
    }

    let password = prompt.password(&Message::PromptNewPassword.to_string())?;
    let confirmation = prompt.password(&Message::PromptConfirmPassword.to_string())?;
    if recover(tracker::register_user(session, &username, &password, &confirmation))?.is_some() {
        msg_success!(Message::UserRegistered(username));
    }
    Ok(())
}

pub fn add_task(session: &Session, store: &TaskStore, prompt: &mut dyn Prompt, today: NaiveDate) -> Result<()> {
    let assignee = prompt.input(&Message::PromptAssignee.to_string())?;
    let assignee = assignee.trim().to_string();
    if !session.users.contains(&assignee) {
        msg_error!(AppError::UnknownUser(assignee));
        return Ok(());
    }

    let title = prompt.input(&Message::PromptTaskTitle.to_string())?;
    let description = prompt.input(&Message::PromptTaskDescription.to_string())?;
    let due_date = get_valid_date(prompt, &Message::PromptDueDate.to_string())?;

    let new_task = NewTask {
        assignee,
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        due_date,
    };
    if let Some(task) = recover(tracker::add_task(session, store, new_task, today))? {
        msg_success!(Message::TaskAdded(task.title));
    }
    Ok(())
}

pub fn view_all(store: &TaskStore) -> Result<()> {
    let Some(tasks) = recover(tracker::fetch_tasks(store, TaskFilter::All))? else {
        return Ok(());
    };
    if tasks.is_empty() {
        msg_info!(Message::NoTasksToDisplay);
        return Ok(());
    }

    msg_print!(Message::AllTasksHeader, true);
    View::tasks(&tasks, true);
    Ok(())
}

pub fn view_mine(session: &Session, store: &TaskStore, prompt: &mut dyn Prompt) -> Result<()> {
    let Some(mine) = recover(tracker::my_tasks(session, store))? else {
        return Ok(());
    };
    if mine.is_empty() {
        msg_info!(Message::NoTasksAssigned);
        return Ok(());
    }

    msg_print!(Message::MyTasksHeader, true);
    View::tasks(&mine, false);

    let answer = prompt.input(&Message::PromptTaskNumber.to_string())?;
    let number = match answer.trim().parse::<i64>() {
        Ok(-1) => return Ok(()),
        Ok(n) if n >= 1 && (n as usize) <= mine.len() => n as usize,
        Ok(_) => {
            msg_error!(Message::InvalidTaskNumber);
            return Ok(());
        }
        Err(_) => {
            msg_error!(Message::InvalidInput);
            return Ok(());
        }
    };
    let selected = &mine[number - 1];

    let items: Vec<String> = TASK_ACTIONS.iter().map(|a| a.to_string()).collect();
    match prompt.select(&Message::PromptTaskAction.to_string(), &items)? {
        0 => {
            if recover(tracker::mark_complete(session, store, selected.id))?.is_some() {
                msg_success!(Message::TaskMarkedComplete(selected.title.clone()));
            }
        }
        1 => {
            if selected.completed {
                msg_error!(AppError::AlreadyCompleted);
                return Ok(());
            }

            let owner = prompt.input(&Message::PromptReassignUser(selected.owner.clone()).to_string())?;
            let owner = owner.trim();
            if !owner.is_empty() && !session.users.contains(owner) {
                msg_error!(Message::TaskNotReassigned(owner.to_string()));
                return Ok(());
            }

            let due = prompt.input(&Message::PromptNewDueDate(selected.format_due_date()).to_string())?;
            let due_date = match due.trim() {
                "" => None,
                value => match parse_date(value) {
                    Ok(date) => Some(date),
                    Err(e) => {
                        msg_error!(e);
                        msg_error!(Message::TaskNotUpdated);
                        return Ok(());
                    }
                },
            };

            let edit = TaskEdit {
                owner: (!owner.is_empty()).then(|| owner.to_string()),
                due_date,
            };
            if edit == TaskEdit::default() {
                msg_info!(Message::NoChangesDetected);
                return Ok(());
            }
            if recover(tracker::edit_task(session, store, selected.id, edit))?.is_some() {
                msg_success!(Message::TaskUpdated);
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn generate_reports(session: &Session, store: &TaskStore, paths: &TaskPaths, today: NaiveDate) -> Result<()> {
    if recover(session.require_admin())?.is_none() {
        return Ok(());
    }
    if recover(report::generate_reports(&session.users, store, paths, today))?.is_some() {
        msg_success!(Message::ReportsGenerated(
            paths.task_overview.display().to_string(),
            paths.user_overview.display().to_string()
        ));
    }
    Ok(())
}

pub fn display_statistics(session: &Session, store: &TaskStore, paths: &TaskPaths, today: NaiveDate) -> Result<()> {
    if let Some((task_overview, user_overview)) = recover(report::display_statistics(session, store, paths, today))? {
        msg_print!(task_overview);
        msg_print!(user_overview);
    }
    Ok(())
}
