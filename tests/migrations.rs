#[cfg(test)]
mod tests {
    use shelftrack::db::db::Db;
    use shelftrack::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("ebookstore.db");
            MigrationTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        assert!(get_db_version(&db.conn).unwrap() > 0);
        assert!(!needs_migration(&db.conn).unwrap());

        let tables: Vec<String> = db
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('author', 'book') ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tables, vec!["author".to_string(), "book".to_string()]);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, entry) in history.iter().enumerate() {
            assert_eq!(entry.0 as usize, i + 1);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_adopts_existing_catalog(ctx: &mut MigrationTestContext) {
        {
            let conn = rusqlite::Connection::open(&ctx.db_path).unwrap();
            conn.execute_batch(
                "CREATE TABLE author (id INTEGER PRIMARY KEY, name TEXT NOT NULL, country TEXT NOT NULL);
                 CREATE TABLE book (id INTEGER PRIMARY KEY, title TEXT NOT NULL, authorID INTEGER NOT NULL, qty INTEGER NOT NULL,
                     FOREIGN KEY (authorID) REFERENCES author(id));
                 INSERT INTO author VALUES (1111, 'Existing Author', 'Nowhere');",
            )
            .unwrap();
        }

        let db = Db::open(&ctx.db_path).unwrap();
        let name: String = db.conn.query_row("SELECT name FROM author WHERE id = 1111", [], |row| row.get(0)).unwrap();
        assert_eq!(name, "Existing Author");
    }
}
