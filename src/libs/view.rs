use super::book::{Book, BookDetails};
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn books(books: &[Book]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "AUTHOR ID", "QUANTITY"]);
        for book in books {
            table.add_row(row![book.id, book.title, book.author_id, book.quantity]);
        }
        table.printstd();
    }

    pub fn book_details(details: &[BookDetails]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "AUTHOR", "COUNTRY", "QUANTITY"]);
        for item in details {
            table.add_row(row![item.book_id, item.title, item.author.name, item.author.country, item.quantity]);
        }
        table.printstd();
    }

    /// Prints tasks numbered from 1. The owner column is shown only for the full listing.
    pub fn tasks(tasks: &[Task], with_owner: bool) {
        let mut table = Table::new();

        if with_owner {
            table.add_row(row!["#", "USER", "TITLE", "DESCRIPTION", "DUE", "ASSIGNED", "COMPLETED"]);
        } else {
            table.add_row(row!["#", "TITLE", "DESCRIPTION", "DUE", "ASSIGNED", "COMPLETED"]);
        }
        for (index, task) in tasks.iter().enumerate() {
            let number = index + 1;
            if with_owner {
                table.add_row(row![
                    number,
                    task.owner,
                    task.title,
                    task.description,
                    task.format_due_date(),
                    task.format_assigned_date(),
                    task.completed_token()
                ]);
            } else {
                table.add_row(row![
                    number,
                    task.title,
                    task.description,
                    task.format_due_date(),
                    task.format_assigned_date(),
                    task.completed_token()
                ]);
            }
        }
        table.printstd();
    }
}
