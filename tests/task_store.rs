#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shelftrack::libs::error::AppError;
    use shelftrack::libs::task::Task;
    use shelftrack::libs::task_store::{TaskPaths, TaskStore};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskStoreContext {
        _temp_dir: TempDir,
        paths: TaskPaths,
        store: TaskStore,
    }

    impl TestContext for TaskStoreContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let paths = TaskPaths::in_dir(temp_dir.path());
            let store = TaskStore::new(&paths.tasks);
            TaskStoreContext { _temp_dir: temp_dir, paths, store }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_ensure_exists_creates_empty_file(ctx: &mut TaskStoreContext) {
        ctx.store.ensure_exists().unwrap();
        assert_eq!(fs::read_to_string(&ctx.paths.tasks).unwrap(), "");
        assert!(ctx.store.load().unwrap().is_empty());

        // An existing file is left alone
        fs::write(&ctx.paths.tasks, "1,admin,a,b,2024-01-01,2024-01-01,No\n").unwrap();
        ctx.store.ensure_exists().unwrap();
        assert_eq!(ctx.store.load().unwrap().len(), 1);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_rewrite_preserves_order_and_fields(ctx: &mut TaskStoreContext) {
        let today = date(2024, 3, 1);
        let first = ctx.store.append(&Task::new("admin", "Stock count", "Count the shelves", date(2024, 3, 8), today)).unwrap();
        let second = ctx.store.append(&Task::new("bob", "Reorder", "Call the supplier, then email", date(2024, 2, 1), today)).unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let mut tasks = ctx.store.load().unwrap();
        assert_eq!(tasks, vec![first.clone(), second.clone()]);

        tasks[1].completed = true;
        ctx.store.save_all(&tasks).unwrap();

        let reloaded = ctx.store.load().unwrap();
        assert_eq!(reloaded[0], first);
        assert_eq!(reloaded[1].description, "Call the supplier, then email");
        assert!(reloaded[1].completed);
        assert_eq!(reloaded[1].assigned_date, today);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_legacy_records_receive_ids(ctx: &mut TaskStoreContext) {
        fs::write(
            &ctx.paths.tasks,
            "admin, Shelve returns, Put back the returned books, 2024-01-10, 2024-01-01, No\n\
             7,bob,Inventory,Yearly count,2024-02-01,2024-01-02,Yes\n\
             bob, Dust, Top shelves, 2024-01-20, 2024-01-03, no\n",
        )
        .unwrap();

        let tasks = ctx.store.load().unwrap();
        let ids: Vec<u32> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![8, 7, 9]);
        assert_eq!(tasks[0].title, "Shelve returns");
        assert!(tasks[1].completed);
        assert!(!tasks[2].completed);

        // Ids stick once the file is rewritten
        ctx.store.save_all(&tasks).unwrap();
        let ids: Vec<u32> = ctx.store.load().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![8, 7, 9]);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_malformed_records_are_skipped(ctx: &mut TaskStoreContext) {
        fs::write(
            &ctx.paths.tasks,
            "1,admin,Good,Fine,2024-01-10,2024-01-01,No\n\
             too,few,fields\n\
             2,admin,Bad date,Oops,2024-13-40,2024-01-01,No\n\
             3,admin,Bad flag,Oops,2024-01-10,2024-01-01,Maybe\n\
             x,admin,Bad id,Oops,2024-01-10,2024-01-01,No\n\
             \n\
             4,bob,Also good,Fine,2024-01-11,2024-01-02,Yes\n",
        )
        .unwrap();

        let tasks = ctx.store.load().unwrap();
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Good", "Also good"]);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_duplicate_ids_are_reassigned(ctx: &mut TaskStoreContext) {
        fs::write(
            &ctx.paths.tasks,
            "2,admin,One,a,2024-01-10,2024-01-01,No\n2,admin,Two,b,2024-01-10,2024-01-01,No\n",
        )
        .unwrap();

        let tasks = ctx.store.load().unwrap();
        assert_eq!(tasks[0].id, 2);
        assert_eq!(tasks[1].id, 3);

        let appended = ctx.store.append(&Task::new("admin", "Three", "c", date(2024, 1, 10), date(2024, 1, 1))).unwrap();
        assert_eq!(appended.id, 4);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_append_to_file_without_trailing_newline(ctx: &mut TaskStoreContext) {
        fs::write(&ctx.paths.tasks, "1,admin,One,a,2024-01-10,2024-01-01,No").unwrap();

        ctx.store.append(&Task::new("admin", "Two", "b", date(2024, 1, 12), date(2024, 1, 2))).unwrap();

        let tasks = ctx.store.load().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].title, "Two");
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_rewrite_keeps_unparsed_lines(ctx: &mut TaskStoreContext) {
        let stray = "admin, Fix shelves, paint too, Before opening, 2024-01-12, 2024-01-01, No";
        fs::write(
            &ctx.paths.tasks,
            format!("admin, Inventory, Count shelves, 2024-01-10, 2024-01-01, No\n{}\n", stray),
        )
        .unwrap();

        let file = ctx.store.read().unwrap();
        assert_eq!(file.tasks.len(), 1);
        assert_eq!(file.unparsed, vec![stray.as_bytes().to_vec()]);

        let mut tasks = file.tasks;
        tasks[0].completed = true;
        ctx.store.save_all(&tasks).unwrap();

        let contents = fs::read_to_string(&ctx.paths.tasks).unwrap();
        assert_eq!(contents, format!("1,admin,Inventory,Count shelves,2024-01-10,2024-01-01,Yes\n{}\n", stray));

        // A second rewrite leaves the line where it is
        ctx.store.save_all(&ctx.store.load().unwrap()).unwrap();
        assert_eq!(fs::read_to_string(&ctx.paths.tasks).unwrap(), contents);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_append_keeps_unparsed_lines(ctx: &mut TaskStoreContext) {
        fs::write(&ctx.paths.tasks, "7,admin,One,a,2024-01-10,2024-01-01,No\nnot a task\n").unwrap();

        let stored = ctx.store.append(&Task::new("admin", "Two", "b", date(2024, 1, 12), date(2024, 1, 2))).unwrap();

        assert_eq!(stored.id, 8);
        let contents = fs::read_to_string(&ctx.paths.tasks).unwrap();
        assert!(contents.contains("not a task\n"));
        assert_eq!(ctx.store.load().unwrap().len(), 2);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_largest_id_does_not_overflow(ctx: &mut TaskStoreContext) {
        let before = format!(
            "{},admin,Last,a,2024-01-10,2024-01-01,No\nadmin, Legacy, b, 2024-01-11, 2024-01-01, No\n",
            u32::MAX
        );
        fs::write(&ctx.paths.tasks, &before).unwrap();

        let file = ctx.store.read().unwrap();
        assert_eq!(file.tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![u32::MAX]);
        assert_eq!(file.unparsed, vec![b"admin, Legacy, b, 2024-01-11, 2024-01-01, No".to_vec()]);

        let result = ctx.store.append(&Task::new("admin", "More", "c", date(2024, 1, 12), date(2024, 1, 2)));
        assert!(matches!(result, Err(AppError::TaskIdsExhausted)));
        assert_eq!(fs::read_to_string(&ctx.paths.tasks).unwrap(), before);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_assigned_ids_survive_append(ctx: &mut TaskStoreContext) {
        fs::write(
            &ctx.paths.tasks,
            "5,admin,First,a,2024-01-10,2024-01-01,No\nbob, Legacy, b, 2024-01-11, 2024-01-01, No\n",
        )
        .unwrap();
        assert!(ctx.store.read().unwrap().renumbered);

        let stored = ctx.store.append(&Task::new("bob", "New", "c", date(2024, 1, 12), date(2024, 1, 2))).unwrap();
        assert_eq!(stored.id, 7);

        let file = ctx.store.read().unwrap();
        assert!(!file.renumbered);
        let ids: Vec<(u32, &str)> = file.tasks.iter().map(|t| (t.id, t.title.as_str())).collect();
        assert_eq!(ids, vec![(5, "First"), (6, "Legacy"), (7, "New")]);
    }
}
