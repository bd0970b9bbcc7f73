//! Credential directory for the task tracker.
//!
//! Users are kept in file order. Passwords are stored and compared as plain
//! text, matching the existing `username, password` credentials files.

use crate::libs::error::AppError;
use crate::libs::flat_file::{self, record_line};
use crate::libs::messages::Message;
use crate::msg_info;
use csv::StringRecord;
use std::path::{Path, PathBuf};

pub const DEFAULT_ADMIN_USER: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

fn skip_reason(record: &StringRecord) -> Option<String> {
    match record.len() {
        2 if record[0].is_empty() => Some("empty username".to_string()),
        2 => None,
        n => Some(format!("expected 2 fields, found {}", n)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct UserDirectory {
    path: PathBuf,
    users: Vec<User>,
}

impl UserDirectory {
    /// Loads the credentials file, creating it with the default admin account when absent.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let default_line = format!("{}, {}\n", DEFAULT_ADMIN_USER, DEFAULT_ADMIN_PASSWORD);
        if flat_file::ensure_file(&path, &default_line)? {
            msg_info!(Message::DefaultAdminCreated(path.display().to_string()));
        }

        let mut directory = UserDirectory { path, users: Vec::new() };
        for (index, record) in flat_file::read_records(&directory.path)?.iter().enumerate() {
            if let Some(reason) = skip_reason(record) {
                flat_file::warn_skipped(&directory.path, record_line(record, index), reason);
                continue;
            }
            directory.upsert(&record[0], &record[1]);
        }

        Ok(directory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // A repeated username keeps its first position and takes the latest password
    fn upsert(&mut self, username: &str, password: &str) {
        match self.users.iter_mut().find(|u| u.username == username) {
            Some(user) => user.password = password.to_string(),
            None => self.users.push(User {
                username: username.to_string(),
                password: password.to_string(),
            }),
        }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.users.iter().any(|u| u.username == username && u.password == password)
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(|u| u.username.as_str())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Adds a user in memory and appends it to the credentials file.
    pub fn register(&mut self, username: &str, password: &str, confirmation: &str) -> Result<(), AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::Validation(Message::UsernameEmpty.to_string()));
        }
        if self.contains(username) {
            return Err(AppError::DuplicateUser(username.to_string()));
        }
        if password != confirmation {
            return Err(AppError::PasswordMismatch);
        }

        flat_file::append_record(&self.path, &[username.to_string(), password.to_string()])?;
        self.upsert(username, password);
        Ok(())
    }
}
