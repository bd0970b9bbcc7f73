//! Interactive bookstore manager.
//!
//! Opens the catalog, loads the sample rows and loops over the main menu
//! until the user exits.

use crate::{
    db::catalog::Catalog,
    libs::{
        book::{Author, Book, BookQuery, BookUpdate, DeleteOutcome, InsertOutcome, UpdateOutcome},
        config::Config,
        messages::Message,
        prompt::{ConsolePrompt, Prompt},
        validation::{get_non_empty, get_valid_id, get_valid_integer},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;

const MENU: [&str; 6] = [
    "Enter book",
    "Update book",
    "Delete book",
    "Search books",
    "View details of all books",
    "Exit",
];

const UPDATE_OPTIONS: [&str; 4] = ["Update quantity", "Update title", "Update author name", "Update author country"];

const SEARCH_OPTIONS: [&str; 2] = ["Search by ID", "Search by title"];

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut catalog = Catalog::open(&config.books_db_path()?)?;
    let mut prompt = ConsolePrompt::new();

    run(&mut catalog, &mut prompt)
}

/// Seeds the catalog and runs the menu loop against `prompt`.
pub fn run(catalog: &mut Catalog, prompt: &mut dyn Prompt) -> Result<()> {
    catalog.seed()?;

    let menu = labels(&MENU);
    loop {
        let choice = prompt.select(&Message::PromptMenuChoice.to_string(), &menu)?;
        match choice {
            0 => enter_book(catalog, prompt)?,
            1 => update_book(catalog, prompt)?,
            2 => delete_book(catalog, prompt)?,
            3 => search_books(catalog, prompt)?,
            4 => view_book_details(catalog)?,
            _ => {
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        }
    }
}

pub fn enter_book(catalog: &mut Catalog, prompt: &mut dyn Prompt) -> Result<()> {
    let id = get_valid_id(prompt, &Message::PromptBookId.to_string())?;
    if catalog.book(id)?.is_some() {
        msg_error!(Message::BookAlreadyExists(id));
        return Ok(());
    }

    let title = get_non_empty(prompt, &Message::PromptBookTitle.to_string())?;
    let author_id = get_valid_id(prompt, &Message::PromptAuthorId.to_string())?;
    let quantity = get_valid_integer(prompt, &Message::PromptQuantity.to_string(), None)?;

    let new_author = match catalog.author(author_id)? {
        Some(_) => None,
        None => {
            msg_info!(Message::AuthorNotFoundEnterDetails);
            let name = get_non_empty(prompt, &Message::PromptAuthorName.to_string())?;
            let country = get_non_empty(prompt, &Message::PromptAuthorCountry.to_string())?;
            Some(Author::new(author_id, &name, &country))
        }
    };

    let book = Book::new(id, &title, author_id, quantity);
    match catalog.create_book(&book, new_author.as_ref())? {
        InsertOutcome::Inserted => msg_success!(Message::BookAdded(id)),
        InsertOutcome::AlreadyExists => msg_error!(Message::BookAlreadyExists(id)),
    }
    Ok(())
}

pub fn update_book(catalog: &mut Catalog, prompt: &mut dyn Prompt) -> Result<()> {
    let id = get_valid_id(prompt, &Message::PromptBookIdToUpdate.to_string())?;
    let Some(details) = catalog.book_details(id)? else {
        msg_error!(Message::BookNotFound(id));
        return Ok(());
    };

    msg_print!(Message::CurrentDetails, true);
    View::book_details(std::slice::from_ref(&details));

    let choice = prompt.select(&Message::PromptUpdateOption.to_string(), &labels(&UPDATE_OPTIONS))?;
    let update = match choice {
        0 => BookUpdate::Quantity(get_valid_integer(prompt, &Message::PromptNewQuantity.to_string(), None)?),
        1 => BookUpdate::Title(get_non_empty(prompt, &Message::PromptNewTitle.to_string())?),
        2 => BookUpdate::AuthorName(get_non_empty(prompt, &Message::PromptNewAuthorName.to_string())?),
        3 => BookUpdate::AuthorCountry(get_non_empty(prompt, &Message::PromptNewAuthorCountry.to_string())?),
        _ => {
            msg_error!(Message::InvalidChoice);
            return Ok(());
        }
    };

    match catalog.update(id, &update)? {
        UpdateOutcome::Updated => msg_success!(Message::BookUpdated(id)),
        UpdateOutcome::NotFound => msg_error!(Message::BookNotFound(id)),
    }
    Ok(())
}

pub fn delete_book(catalog: &mut Catalog, prompt: &mut dyn Prompt) -> Result<()> {
    let id = get_valid_id(prompt, &Message::PromptBookIdToDelete.to_string())?;
    match catalog.delete_book(id)? {
        DeleteOutcome::Deleted => msg_success!(Message::BookDeleted(id)),
        DeleteOutcome::NotFound => msg_error!(Message::BookNotFound(id)),
    }
    Ok(())
}

pub fn search_books(catalog: &mut Catalog, prompt: &mut dyn Prompt) -> Result<()> {
    let choice = prompt.select(&Message::PromptSearchOption.to_string(), &labels(&SEARCH_OPTIONS))?;
    let query = match choice {
        0 => BookQuery::ById(get_valid_id(prompt, &Message::PromptSearchId.to_string())?),
        _ => BookQuery::ByTitle(get_non_empty(prompt, &Message::PromptSearchTitle.to_string())?),
    };

    let books = catalog.search(&query)?;
    if books.is_empty() {
        msg_info!(Message::NoMatchingBooks);
        return Ok(());
    }

    msg_print!(Message::FoundBooks(books.len()), true);
    View::books(&books);
    Ok(())
}

pub fn view_book_details(catalog: &Catalog) -> Result<()> {
    let details = catalog.all_details()?;
    if details.is_empty() {
        msg_info!(Message::NoBooksToDisplay);
        return Ok(());
    }

    msg_print!(Message::BookDetailsHeader, true);
    View::book_details(&details);
    Ok(())
}
