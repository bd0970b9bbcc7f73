//! Database layer for the bookstore manager.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shelftrack::db::catalog::Catalog;
//! use std::path::Path;
//!
//! let mut catalog = Catalog::open(Path::new("ebookstore.db"))?;
//! catalog.seed()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// SQLite connection setup.
///
/// Opens the database with foreign keys enforced and applies migrations.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Author and book queries.
pub mod catalog;
