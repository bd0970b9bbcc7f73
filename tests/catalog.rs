#[cfg(test)]
mod tests {
    use shelftrack::db::catalog::{Catalog, SEED_AUTHORS, SEED_BOOKS};
    use shelftrack::libs::book::{Author, Book, BookQuery, BookUpdate, DeleteOutcome, InsertOutcome, UpdateOutcome};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CatalogTestContext {
        _temp_dir: TempDir,
        catalog: Catalog,
    }

    impl TestContext for CatalogTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut catalog = Catalog::open(&temp_dir.path().join("ebookstore.db")).unwrap();
            catalog.seed().unwrap();
            CatalogTestContext { _temp_dir: temp_dir, catalog }
        }
    }

    fn book_count(catalog: &Catalog) -> i64 {
        catalog.conn.query_row("SELECT COUNT(*) FROM book", [], |row| row.get(0)).unwrap()
    }

    #[test_context(CatalogTestContext)]
    #[test]
    fn test_seed_is_idempotent(ctx: &mut CatalogTestContext) {
        assert_eq!(ctx.catalog.seed().unwrap(), 0);
        assert_eq!(book_count(&ctx.catalog), SEED_BOOKS.len() as i64);
        assert_eq!(ctx.catalog.all_details().unwrap().len(), SEED_AUTHORS.len());
    }

    #[test_context(CatalogTestContext)]
    #[test]
    fn test_search_by_id(ctx: &mut CatalogTestContext) {
        let found = ctx.catalog.search(&BookQuery::ById(3002)).unwrap();
        assert_eq!(found, vec![Book::new(3002, "Harry Potter and the Philosopher's Stone", 8937, 40)]);

        assert!(ctx.catalog.search(&BookQuery::ById(4000)).unwrap().is_empty());
    }

    #[test_context(CatalogTestContext)]
    #[test]
    fn test_search_by_title_substring(ctx: &mut CatalogTestContext) {
        let found = ctx.catalog.search(&BookQuery::ByTitle("Lord".to_string())).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3004);
        assert_eq!(found[0].author_id, 6380);

        // Default collation matches ASCII case-insensitively
        assert_eq!(ctx.catalog.search(&BookQuery::ByTitle("lord".to_string())).unwrap().len(), 1);
        // Wildcards in the query are literal
        assert!(ctx.catalog.search(&BookQuery::ByTitle("%".to_string())).unwrap().is_empty());
    }

    #[test_context(CatalogTestContext)]
    #[test]
    fn test_create_book_with_new_author(ctx: &mut CatalogTestContext) {
        let author = Author::new(7001, "Frank Herbert", "USA");
        let book = Book::new(3006, "Dune", 7001, 5);

        assert_eq!(ctx.catalog.create_book(&book, Some(&author)).unwrap(), InsertOutcome::Inserted);

        assert_eq!(ctx.catalog.author(7001).unwrap(), Some(author));
        let details = ctx.catalog.book_details(3006).unwrap().unwrap();
        assert_eq!(details.title, "Dune");
        assert_eq!(details.author.name, "Frank Herbert");
    }

    #[test_context(CatalogTestContext)]
    #[test]
    fn test_duplicate_book_is_reported(ctx: &mut CatalogTestContext) {
        let duplicate = Book::new(3001, "Another Title", 1290, 1);
        let stray_author = Author::new(7002, "Nobody", "Nowhere");

        let outcome = ctx.catalog.create_book(&duplicate, Some(&stray_author)).unwrap();

        assert_eq!(outcome, InsertOutcome::AlreadyExists);
        assert_eq!(ctx.catalog.book(3001).unwrap().unwrap().title, "A Tale of Two Cities");
        assert_eq!(ctx.catalog.author(7002).unwrap(), None);
        assert_eq!(ctx.catalog.insert_author(&Author::new(1290, "X", "Y")).unwrap(), InsertOutcome::AlreadyExists);
    }

    #[test_context(CatalogTestContext)]
    #[test]
    fn test_unknown_author_is_rejected(ctx: &mut CatalogTestContext) {
        let orphan = Book::new(3007, "Orphan", 9999, 1);
        assert!(ctx.catalog.create_book(&orphan, None).is_err());
        assert_eq!(ctx.catalog.book(3007).unwrap(), None);
    }

    #[test_context(CatalogTestContext)]
    #[test]
    fn test_update_each_field(ctx: &mut CatalogTestContext) {
        let catalog = &mut ctx.catalog;

        assert_eq!(catalog.update(3004, &BookUpdate::Quantity(12)).unwrap(), UpdateOutcome::Updated);
        assert_eq!(catalog.update(3004, &BookUpdate::Title("The Fellowship of the Ring".to_string())).unwrap(), UpdateOutcome::Updated);
        assert_eq!(catalog.update(3004, &BookUpdate::AuthorName("John Ronald Reuel Tolkien".to_string())).unwrap(), UpdateOutcome::Updated);
        assert_eq!(catalog.update(3004, &BookUpdate::AuthorCountry("England".to_string())).unwrap(), UpdateOutcome::Updated);

        let details = catalog.book_details(3004).unwrap().unwrap();
        assert_eq!(details.quantity, 12);
        assert_eq!(details.title, "The Fellowship of the Ring");
        assert_eq!(details.author.id, 6380);
        assert_eq!(details.author.name, "John Ronald Reuel Tolkien");
        assert_eq!(details.author.country, "England");

        // Renaming the author keeps the book's foreign key intact
        assert_eq!(catalog.book(3004).unwrap().unwrap().author_id, 6380);
    }

    #[test_context(CatalogTestContext)]
    #[test]
    fn test_update_missing_book(ctx: &mut CatalogTestContext) {
        let before = ctx.catalog.all_details().unwrap();
        assert_eq!(ctx.catalog.update(4242, &BookUpdate::Quantity(1)).unwrap(), UpdateOutcome::NotFound);
        assert_eq!(ctx.catalog.all_details().unwrap(), before);
    }

    #[test_context(CatalogTestContext)]
    #[test]
    fn test_delete_is_idempotent(ctx: &mut CatalogTestContext) {
        assert_eq!(ctx.catalog.delete_book(4242).unwrap(), DeleteOutcome::NotFound);
        assert_eq!(ctx.catalog.delete_book(4242).unwrap(), DeleteOutcome::NotFound);
        assert_eq!(book_count(&ctx.catalog), SEED_BOOKS.len() as i64);

        assert_eq!(ctx.catalog.delete_book(3005).unwrap(), DeleteOutcome::Deleted);
        assert_eq!(ctx.catalog.delete_book(3005).unwrap(), DeleteOutcome::NotFound);
        assert_eq!(book_count(&ctx.catalog), SEED_BOOKS.len() as i64 - 1);
    }

    #[test]
    fn test_in_memory_catalog() {
        let mut catalog = Catalog::in_memory().unwrap();
        assert!(catalog.all_details().unwrap().is_empty());
        catalog.seed().unwrap();
        let details = catalog.all_details().unwrap();
        assert_eq!(details.first().map(|d| d.book_id), Some(3001));
        assert_eq!(details.last().map(|d| d.book_id), Some(3005));
    }
}
