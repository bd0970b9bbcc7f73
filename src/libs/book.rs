#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: u32,
    pub name: String,
    pub country: String,
}

impl Author {
    pub fn new(id: u32, name: &str, country: &str) -> Self {
        Author {
            id,
            name: name.to_string(),
            country: country.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author_id: u32,
    pub quantity: u32,
}

impl Book {
    pub fn new(id: u32, title: &str, author_id: u32, quantity: u32) -> Self {
        Book {
            id,
            title: title.to_string(),
            author_id,
            quantity,
        }
    }
}

/// A book joined with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub book_id: u32,
    pub title: String,
    pub quantity: u32,
    pub author: Author,
}

#[derive(Debug, Clone)]
pub enum BookQuery {
    ById(u32),
    /// Substring match on the title
    ByTitle(String),
}

/// One of the four editable attributes, in menu order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookUpdate {
    Quantity(u32),
    Title(String),
    AuthorName(String),
    AuthorCountry(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}
