//! Core library modules for the shelftrack tools.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging, errors
//! - **Input**: Prompt abstraction and validation helpers
//! - **Bookstore Model**: Authors, books and operation outcomes
//! - **Task Tracking**: Task model, flat-file storage, users, sessions
//! - **Reporting**: Task and user overviews
//! - **User Interface**: Console tables

pub mod book;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod flat_file;
pub mod messages;
pub mod prompt;
pub mod report;
pub mod session;
pub mod task;
pub mod task_store;
pub mod tracker;
pub mod users;
pub mod validation;
pub mod view;
