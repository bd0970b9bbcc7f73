//! # Shelftrack
//!
//! Two independent console tools sharing one binary:
//!
//! - **Bookstore manager**: an SQLite catalog of authors and books with
//!   create, search, update and delete operations.
//! - **Task tracker**: flat-file users and tasks with login, per-user task
//!   editing and overview reports.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shelftrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
