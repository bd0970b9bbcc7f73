use crate::libs::validation::DATE_FORMAT;
use chrono::NaiveDate;

pub const COMPLETED_YES: &str = "Yes";
pub const COMPLETED_NO: &str = "No";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier, unique within the tasks file
    pub id: u32,
    pub owner: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub assigned_date: NaiveDate,
    pub completed: bool,
}

impl Task {
    /// New incomplete task assigned on `today`. The id is set when the task is stored.
    pub fn new(owner: &str, title: &str, description: &str, due_date: NaiveDate, today: NaiveDate) -> Self {
        Task {
            id: 0,
            owner: owner.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            assigned_date: today,
            completed: false,
        }
    }

    /// Incomplete with a due date strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }

    pub fn completed_token(&self) -> &'static str {
        if self.completed {
            COMPLETED_YES
        } else {
            COMPLETED_NO
        }
    }

    pub fn parse_completed(token: &str) -> Option<bool> {
        match token.trim() {
            t if t.eq_ignore_ascii_case(COMPLETED_YES) => Some(true),
            t if t.eq_ignore_ascii_case(COMPLETED_NO) => Some(false),
            _ => None,
        }
    }

    pub fn format_due_date(&self) -> String {
        self.due_date.format(DATE_FORMAT).to_string()
    }

    pub fn format_assigned_date(&self) -> String {
        self.assigned_date.format(DATE_FORMAT).to_string()
    }
}

/// Changes requested by the edit flow; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub owner: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Owner(String),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Owner(owner) => task.owner == *owner,
        }
    }
}
