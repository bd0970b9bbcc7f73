//! Bookstore catalog: authors and the books that reference them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shelftrack::db::catalog::Catalog;
//! use shelftrack::libs::book::BookQuery;
//! use std::path::Path;
//!
//! let mut catalog = Catalog::open(Path::new("ebookstore.db"))?;
//! catalog.seed()?;
//! let found = catalog.search(&BookQuery::ByTitle("Lord".to_string()))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use crate::libs::book::{Author, Book, BookDetails, BookQuery, BookUpdate, DeleteOutcome, InsertOutcome, UpdateOutcome};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

const INSERT_AUTHOR: &str = "INSERT OR IGNORE INTO author (id, name, country) VALUES (?1, ?2, ?3)";
const INSERT_BOOK: &str = "INSERT OR IGNORE INTO book (id, title, authorID, qty) VALUES (?1, ?2, ?3, ?4)";
const SELECT_AUTHOR: &str = "SELECT id, name, country FROM author WHERE id = ?1";
const SELECT_BOOK: &str = "SELECT id, title, authorID, qty FROM book WHERE id = ?1";
const SEARCH_BOOKS: &str = "SELECT id, title, authorID, qty FROM book WHERE title LIKE ?1 ESCAPE '\\' ORDER BY id";
const SELECT_DETAILS: &str = "SELECT b.id, b.title, b.qty, a.id, a.name, a.country FROM book b INNER JOIN author a ON b.authorID = a.id";
const UPDATE_QTY: &str = "UPDATE book SET qty = ?1 WHERE id = ?2";
const UPDATE_TITLE: &str = "UPDATE book SET title = ?1 WHERE id = ?2";
const UPDATE_AUTHOR_NAME: &str = "UPDATE author SET name = ?1 WHERE id = ?2";
const UPDATE_AUTHOR_COUNTRY: &str = "UPDATE author SET country = ?1 WHERE id = ?2";
const DELETE_BOOK: &str = "DELETE FROM book WHERE id = ?1";

/// Sample authors loaded on startup.
pub const SEED_AUTHORS: [(u32, &str, &str); 5] = [
    (1290, "Charles Dickens", "England"),
    (8937, "J.K. Rowling", "England"),
    (2356, "C.S. Lewis", "Ireland"),
    (6380, "J.R.R. Tolkien", "South Africa"),
    (5620, "Lewis Carroll", "England"),
];

/// Sample books loaded on startup as `(id, title, author id, quantity)`.
pub const SEED_BOOKS: [(u32, &str, u32, u32); 5] = [
    (3001, "A Tale of Two Cities", 1290, 30),
    (3002, "Harry Potter and the Philosopher's Stone", 8937, 40),
    (3003, "The Lion, the Witch and the Wardrobe", 2356, 25),
    (3004, "The Lord of the Rings", 6380, 37),
    (3005, "Alice’s Adventures in Wonderland", 5620, 12),
];

pub struct Catalog {
    pub conn: Connection,
}

fn book_from_row(row: &Row) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author_id: row.get(2)?,
        quantity: row.get(3)?,
    })
}

fn details_from_row(row: &Row) -> rusqlite::Result<BookDetails> {
    Ok(BookDetails {
        book_id: row.get(0)?,
        title: row.get(1)?,
        quantity: row.get(2)?,
        author: Author {
            id: row.get(3)?,
            name: row.get(4)?,
            country: row.get(5)?,
        },
    })
}

fn like_pattern(query: &str) -> String {
    let escaped = query.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    format!("%{}%", escaped)
}

impl Catalog {
    pub fn new(db: Db) -> Self {
        Catalog { conn: db.conn }
    }

    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(Db::open(path)?))
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(Db::in_memory()?))
    }

    /// Inserts the sample rows that are not present yet. Returns how many were added.
    pub fn seed(&mut self) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        for (id, name, country) in SEED_AUTHORS {
            inserted += tx.execute(INSERT_AUTHOR, params![id, name, country])?;
        }
        for (id, title, author_id, qty) in SEED_BOOKS {
            inserted += tx.execute(INSERT_BOOK, params![id, title, author_id, qty])?;
        }
        tx.commit()?;

        debug!(inserted, "catalog seeded");
        Ok(inserted)
    }

    pub fn author(&self, id: u32) -> Result<Option<Author>> {
        let author = self
            .conn
            .query_row(SELECT_AUTHOR, params![id], |row| {
                Ok(Author {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    country: row.get(2)?,
                })
            })
            .optional()?;
        Ok(author)
    }

    pub fn insert_author(&mut self, author: &Author) -> Result<InsertOutcome> {
        let affected = self.conn.execute(INSERT_AUTHOR, params![author.id, author.name, author.country])?;
        Ok(if affected == 0 { InsertOutcome::AlreadyExists } else { InsertOutcome::Inserted })
    }

    /// Inserts `book`, creating `new_author` first when given. Both writes commit together;
    /// a duplicate book id rolls back the author as well.
    pub fn create_book(&mut self, book: &Book, new_author: Option<&Author>) -> Result<InsertOutcome> {
        let tx = self.conn.transaction()?;
        if let Some(author) = new_author {
            tx.execute(INSERT_AUTHOR, params![author.id, author.name, author.country])?;
        }
        let affected = tx.execute(INSERT_BOOK, params![book.id, book.title, book.author_id, book.quantity])?;
        if affected == 0 {
            tx.rollback()?;
            return Ok(InsertOutcome::AlreadyExists);
        }
        tx.commit()?;

        debug!(book_id = book.id, author_id = book.author_id, "book created");
        Ok(InsertOutcome::Inserted)
    }

    pub fn book(&self, id: u32) -> Result<Option<Book>> {
        Ok(self.conn.query_row(SELECT_BOOK, params![id], book_from_row).optional()?)
    }

    pub fn search(&self, query: &BookQuery) -> Result<Vec<Book>> {
        match query {
            BookQuery::ById(id) => Ok(self.book(*id)?.into_iter().collect()),
            BookQuery::ByTitle(title) => {
                let mut stmt = self.conn.prepare(SEARCH_BOOKS)?;
                let books = stmt
                    .query_map(params![like_pattern(title)], book_from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(books)
            }
        }
    }

    pub fn book_details(&self, id: u32) -> Result<Option<BookDetails>> {
        let sql = format!("{} WHERE b.id = ?1", SELECT_DETAILS);
        Ok(self.conn.query_row(&sql, params![id], details_from_row).optional()?)
    }

    /// Every book that has an author, ordered by book id.
    pub fn all_details(&self) -> Result<Vec<BookDetails>> {
        let sql = format!("{} ORDER BY b.id", SELECT_DETAILS);
        let mut stmt = self.conn.prepare(&sql)?;
        let details = stmt.query_map([], details_from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(details)
    }

    /// Applies one field change. Books without a matching author row count as not found.
    pub fn update(&mut self, id: u32, update: &BookUpdate) -> Result<UpdateOutcome> {
        let Some(details) = self.book_details(id)? else {
            return Ok(UpdateOutcome::NotFound);
        };

        let affected = match update {
            BookUpdate::Quantity(qty) => self.conn.execute(UPDATE_QTY, params![qty, details.book_id])?,
            BookUpdate::Title(title) => self.conn.execute(UPDATE_TITLE, params![title, details.book_id])?,
            BookUpdate::AuthorName(name) => self.conn.execute(UPDATE_AUTHOR_NAME, params![name, details.author.id])?,
            BookUpdate::AuthorCountry(country) => self.conn.execute(UPDATE_AUTHOR_COUNTRY, params![country, details.author.id])?,
        };

        debug!(book_id = id, ?update, affected, "book updated");
        Ok(if affected == 0 { UpdateOutcome::NotFound } else { UpdateOutcome::Updated })
    }

    pub fn delete_book(&mut self, id: u32) -> Result<DeleteOutcome> {
        let affected = self.conn.execute(DELETE_BOOK, params![id])?;
        Ok(if affected == 0 { DeleteOutcome::NotFound } else { DeleteOutcome::Deleted })
    }
}
