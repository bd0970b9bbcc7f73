#[cfg(test)]
mod tests {
    use shelftrack::libs::config::{BooksConfig, Config, TasksConfig};
    use shelftrack::libs::prompt::ScriptedPrompt;
    use shelftrack::libs::task_store::TaskPaths;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigContext {
        fn setup() -> Self {
            ConfigContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join("config.json")).unwrap();

        assert!(config.data_dir.is_none());
        assert_eq!(config.admin_user(), "admin");
        assert_eq!(config.books.unwrap_or_default().db_file, "ebookstore.db");
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_round_trip(ctx: &mut ConfigContext) {
        let path = ctx.temp_dir.path().join("config.json");
        let config = Config {
            data_dir: Some(ctx.temp_dir.path().join("data")),
            books: Some(BooksConfig {
                db_file: "shop.db".to_string(),
            }),
            tasks: Some(TasksConfig {
                admin_user: "manager".to_string(),
                ..TasksConfig::default()
            }),
        };

        config.save_to(&path).unwrap();
        let loaded = Config::read_from(&path).unwrap();

        assert_eq!(loaded.data_dir, config.data_dir);
        assert_eq!(loaded.books, config.books);
        assert_eq!(loaded.tasks, config.tasks);
        assert_eq!(loaded.admin_user(), "manager");
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_partial_file_keeps_other_defaults(ctx: &mut ConfigContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "books": { "db_file": "other.db" } }"#).unwrap();

        let config = Config::read_from(&path).unwrap();

        assert_eq!(config.books.clone().unwrap().db_file, "other.db");
        assert!(config.tasks.is_none());
        assert_eq!(config.admin_user(), "admin");
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_paths_resolve_against_data_dir(ctx: &mut ConfigContext) {
        let data_dir = ctx.temp_dir.path().join("data");
        let config = Config {
            data_dir: Some(data_dir.clone()),
            ..Config::default()
        };

        assert_eq!(config.task_paths().unwrap(), TaskPaths::in_dir(&data_dir));
        assert_eq!(config.books_db_path().unwrap(), data_dir.join("ebookstore.db"));
        assert!(data_dir.is_dir());
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_absolute_file_names_are_kept(ctx: &mut ConfigContext) {
        let absolute = ctx.temp_dir.path().join("elsewhere").join("books.db");
        let config = Config {
            data_dir: Some(ctx.temp_dir.path().join("data")),
            books: Some(BooksConfig {
                db_file: absolute.display().to_string(),
            }),
            tasks: None,
        };

        assert_eq!(config.books_db_path().unwrap(), absolute);
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_invalid_json_is_an_error(ctx: &mut ConfigContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::read_from(&path).is_err());
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_wizard_updates_selected_sections(ctx: &mut ConfigContext) {
        let data_dir = ctx.temp_dir.path().join("data");
        let mut prompt = ScriptedPrompt::new([
            "Data directory, Task tracker".to_string(),
            data_dir.display().to_string(),
            "".to_string(),
            "jobs.txt".to_string(),
            "".to_string(),
            "".to_string(),
            "manager".to_string(),
        ]);
        let current = Config {
            books: Some(BooksConfig {
                db_file: "kept.db".to_string(),
            }),
            ..Config::default()
        };

        let config = current.configure(&mut prompt).unwrap();

        assert_eq!(prompt.remaining(), 0);
        assert_eq!(config.data_dir, Some(data_dir.clone()));
        assert_eq!(config.books.clone().unwrap().db_file, "kept.db");
        let tasks = config.tasks.clone().unwrap();
        assert_eq!(tasks.users_file, "user.txt");
        assert_eq!(tasks.tasks_file, "jobs.txt");
        assert_eq!(tasks.admin_user, "manager");
        assert_eq!(config.task_paths().unwrap().tasks, data_dir.join("jobs.txt"));
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_wizard_with_nothing_selected(ctx: &mut ConfigContext) {
        let path = ctx.temp_dir.path().join("config.json");
        let mut prompt = ScriptedPrompt::new([""]);

        let config = Config::default().configure(&mut prompt).unwrap();
        config.save_to(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "{}");
        assert_eq!(prompt.asked().len(), 1);
    }
}
