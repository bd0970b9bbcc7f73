use super::migrations::MigrationManager;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "ebookstore.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the catalog database at `path` and applies pending migrations.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Self::open_without_migrations(path)?;
        MigrationManager::new().run_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Raw connection with foreign keys enforced, schema left as found.
    pub fn open_without_migrations(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path).with_context(|| format!("Failed to open database {}", path.display()))?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }

    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", true)?;
        MigrationManager::new().run_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
