//! Tasks file persistence.
//!
//! Each line holds `id, owner, title, description, due_date, assigned_date,
//! completed`. Lines written before ids existed carry only the last six
//! fields; they receive ids after the largest stored id, in file order, and
//! keep them once the file is rewritten. Lines that do not parse are skipped
//! on load but written back verbatim by every rewrite.

use crate::libs::error::AppError;
use crate::libs::flat_file::{self, SourceRecord};
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::validation::{parse_date, DATE_FORMAT};
use crate::msg_debug;
use csv::StringRecord;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const FIELDS_WITH_ID: usize = 7;
const LEGACY_FIELDS: usize = 6;

/// Locations of every file the task tracker reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPaths {
    pub users: PathBuf,
    pub tasks: PathBuf,
    pub task_overview: PathBuf,
    pub user_overview: PathBuf,
}

impl TaskPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        TaskPaths {
            users: dir.join("user.txt"),
            tasks: dir.join("tasks.txt"),
            task_overview: dir.join("task_overview.txt"),
            user_overview: dir.join("user_overview.txt"),
        }
    }
}

/// Tasks file contents as loaded.
#[derive(Debug, Clone, Default)]
pub struct TaskFile {
    pub tasks: Vec<Task>,
    /// Lines that did not parse, kept byte for byte so rewrites carry them along
    pub unparsed: Vec<Vec<u8>>,
    /// Some tasks had no usable stored id and were numbered while loading
    pub renumbered: bool,
}

pub struct TaskStore {
    path: PathBuf,
}

fn successor(id: Option<u32>) -> Option<u32> {
    match id {
        Some(id) => id.checked_add(1),
        None => Some(1),
    }
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty tasks file on first run.
    pub fn ensure_exists(&self) -> Result<(), AppError> {
        if flat_file::ensure_file(&self.path, "")? {
            msg_debug!(Message::StorageCreated(self.path.display().to_string()));
        }
        Ok(())
    }

    /// Loads every well-formed task in file order.
    pub fn load(&self) -> Result<Vec<Task>, AppError> {
        Ok(self.read()?.tasks)
    }

    /// Loads the whole file, warning about every line that is skipped.
    pub fn read(&self) -> Result<TaskFile, AppError> {
        self.scan(true)
    }

    fn scan(&self, report: bool) -> Result<TaskFile, AppError> {
        let skip = |line: u64, reason: String| {
            if report {
                flat_file::warn_skipped(&self.path, line, reason);
            }
        };

        let mut file = TaskFile::default();
        let mut parsed = Vec::new();
        for SourceRecord { line, raw, fields } in flat_file::read_source_records(&self.path)? {
            match fields.and_then(|record| parse_record(&record)) {
                Ok((id, task)) => parsed.push((id, task, line, raw)),
                Err(reason) => {
                    skip(line, reason);
                    file.unparsed.push(raw);
                }
            }
        }

        let mut next_id = successor(parsed.iter().filter_map(|(id, ..)| *id).max());
        let mut seen = HashSet::new();
        for (id, mut task, line, raw) in parsed {
            task.id = match id {
                Some(id) if seen.insert(id) => id,
                _ => match next_id {
                    Some(id) => {
                        next_id = id.checked_add(1);
                        seen.insert(id);
                        file.renumbered = true;
                        id
                    }
                    None => {
                        skip(line, "no free task id left".to_string());
                        file.unparsed.push(raw);
                        continue;
                    }
                },
            };
            file.tasks.push(task);
        }

        Ok(file)
    }

    /// Rewrites the file with `tasks`. Lines that never parsed are kept after them unchanged.
    pub fn save_all(&self, tasks: &[Task]) -> Result<(), AppError> {
        let unparsed = self.scan(false)?.unparsed;
        self.write(tasks, &unparsed)
    }

    fn write(&self, tasks: &[Task], unparsed: &[Vec<u8>]) -> Result<(), AppError> {
        let records: Vec<Vec<String>> = tasks.iter().map(to_record).collect();
        flat_file::write_records(&self.path, &records, unparsed)
    }

    /// Stores `task` under the next free id and returns the stored copy.
    ///
    /// Ids handed out while loading are persisted first, so they stay the same
    /// once a new explicit id is on file.
    pub fn append(&self, task: &Task) -> Result<Task, AppError> {
        let file = self.scan(false)?;
        let next_id = successor(file.tasks.iter().map(|t| t.id).max()).ok_or(AppError::TaskIdsExhausted)?;
        let stored = Task { id: next_id, ..task.clone() };

        if file.renumbered {
            let mut tasks = file.tasks;
            tasks.push(stored.clone());
            self.write(&tasks, &file.unparsed)?;
        } else {
            flat_file::append_record(&self.path, &to_record(&stored))?;
        }
        Ok(stored)
    }
}

fn to_record(task: &Task) -> Vec<String> {
    vec![
        task.id.to_string(),
        task.owner.clone(),
        task.title.clone(),
        task.description.clone(),
        task.due_date.format(DATE_FORMAT).to_string(),
        task.assigned_date.format(DATE_FORMAT).to_string(),
        task.completed_token().to_string(),
    ]
}

fn parse_record(record: &StringRecord) -> Result<(Option<u32>, Task), String> {
    let (id, fields): (Option<u32>, Vec<&str>) = match record.len() {
        FIELDS_WITH_ID => {
            let id = record[0].parse::<u32>().map_err(|_| format!("invalid task id '{}'", &record[0]))?;
            (Some(id), record.iter().skip(1).collect())
        }
        LEGACY_FIELDS => (None, record.iter().collect()),
        n => return Err(format!("expected {} or {} fields, found {}", LEGACY_FIELDS, FIELDS_WITH_ID, n)),
    };

    let due_date = parse_date(fields[3]).map_err(|e| e.to_string())?;
    let assigned_date = parse_date(fields[4]).map_err(|e| e.to_string())?;
    let completed = Task::parse_completed(fields[5]).ok_or_else(|| format!("invalid completion flag '{}'", fields[5]))?;

    Ok((
        id,
        Task {
            id: id.unwrap_or(0),
            owner: fields[0].to_string(),
            title: fields[1].to_string(),
            description: fields[2].to_string(),
            due_date,
            assigned_date,
            completed,
        },
    ))
}
