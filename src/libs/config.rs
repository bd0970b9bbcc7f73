//! Configuration management for the shelftrack tools.
//!
//! Settings live in a JSON file inside the platform data directory. Each tool
//! owns an optional section; a missing file or section means defaults, so
//! both tools run without any setup.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shelftrack::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.books_db_path()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::libs::task_store::TaskPaths;
use crate::msg_print;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BooksConfig {
    /// SQLite database file, relative names resolve against the data directory
    pub db_file: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TasksConfig {
    pub users_file: String,
    pub tasks_file: String,
    pub task_overview_file: String,
    pub user_overview_file: String,
    /// Username granted the admin role
    pub admin_user: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<BooksConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<TasksConfig>,
}

impl Default for BooksConfig {
    fn default() -> Self {
        BooksConfig {
            db_file: DB_FILE_NAME.to_string(),
        }
    }
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig {
            users_file: "user.txt".to_string(),
            tasks_file: "tasks.txt".to_string(),
            task_overview_file: "task_overview.txt".to_string(),
            user_overview_file: "user_overview.txt".to_string(),
            admin_user: "admin".to_string(),
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration at `path`, falling back to defaults when the file is absent.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    fn storage(&self) -> DataStorage {
        match &self.data_dir {
            Some(dir) => DataStorage::with_base(dir),
            None => DataStorage::new(),
        }
    }

    pub fn books_db_path(&self) -> Result<PathBuf> {
        let books = self.books.clone().unwrap_or_default();
        Ok(self.storage().get_path(&books.db_file)?)
    }

    pub fn admin_user(&self) -> String {
        self.tasks.clone().unwrap_or_default().admin_user
    }

    pub fn task_paths(&self) -> Result<TaskPaths> {
        let tasks = self.tasks.clone().unwrap_or_default();
        let storage = self.storage();
        Ok(TaskPaths {
            users: storage.get_path(&tasks.users_file)?,
            tasks: storage.get_path(&tasks.tasks_file)?,
            task_overview: storage.get_path(&tasks.task_overview_file)?,
            user_overview: storage.get_path(&tasks.user_overview_file)?,
        })
    }

    /// Interactive setup wizard, pre-filled with the currently saved values.
    pub fn init(prompt: &mut dyn Prompt) -> Result<Self> {
        Self::read().unwrap_or_default().configure(prompt)
    }

    /// Asks which sections to change, then asks for each of their values.
    pub fn configure(mut self, prompt: &mut dyn Prompt) -> Result<Self> {
        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: "Data directory".to_string(),
            },
            ConfigModule {
                key: "books".to_string(),
                name: "Bookstore".to_string(),
            },
            ConfigModule {
                key: "tasks".to_string(),
                name: "Task tracker".to_string(),
            },
        ];
        let names: Vec<String> = modules.iter().map(|module| module.name.clone()).collect();

        let selected = prompt.multi_select(&Message::PromptSelectModules.to_string(), &names)?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    let default = self.storage().base_path().display().to_string();
                    msg_print!(Message::ConfigModuleStorage);
                    let dir = prompt.input_with_default(&Message::PromptDataDir.to_string(), &default)?;
                    self.data_dir = Some(PathBuf::from(dir.trim()));
                }
                "books" => {
                    let default = self.books.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleBooks);
                    self.books = Some(BooksConfig {
                        db_file: prompt.input_with_default(&Message::PromptDbFile.to_string(), &default.db_file)?,
                    });
                }
                "tasks" => {
                    let default = self.tasks.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTasks);
                    self.tasks = Some(TasksConfig {
                        users_file: prompt.input_with_default(&Message::PromptUsersFile.to_string(), &default.users_file)?,
                        tasks_file: prompt.input_with_default(&Message::PromptTasksFile.to_string(), &default.tasks_file)?,
                        task_overview_file: prompt
                            .input_with_default(&Message::PromptTaskOverviewFile.to_string(), &default.task_overview_file)?,
                        user_overview_file: prompt
                            .input_with_default(&Message::PromptUserOverviewFile.to_string(), &default.user_overview_file)?,
                        admin_user: prompt.input_with_default(&Message::PromptAdminUser.to_string(), &default.admin_user)?,
                    });
                }
                _ => {}
            }
        }

        Ok(self)
    }
}
