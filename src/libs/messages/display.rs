//! Display implementation for shelftrack messages.
//!
//! All user-facing wording lives here, so prompts, confirmations and errors
//! read consistently across both tools.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === GENERAL MESSAGES ===
            Message::PromptMenuChoice => "Select one of the following options".to_string(),
            Message::Goodbye => "Goodbye!".to_string(),
            Message::InvalidChoice => "Invalid choice. Please try again.".to_string(),
            Message::InvalidInput => "Invalid input.".to_string(),
            Message::InputExhausted(prompt) => format!("No more input available for prompt '{}'", prompt),
            Message::InputRequired => "A value is required.".to_string(),
            Message::InputMustBeNumber => "Input must be a number.".to_string(),
            Message::InputMustHaveDigits(length) => format!("Input must be {} digits.", length),
            Message::InputTooLarge => "Input is too large.".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageCreated(path) => format!("Created {}", path),
            Message::SkippedRecord { file, line, reason } => format!("Skipping malformed record at {}:{} ({})", file, line, reason),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully.".to_string(),
            Message::ConfigDeleted => "Configuration removed.".to_string(),
            Message::ConfigModuleStorage => "Data directory settings".to_string(),
            Message::ConfigModuleBooks => "Bookstore settings".to_string(),
            Message::ConfigModuleTasks => "Task tracker settings".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptDataDir => "Enter the data directory".to_string(),
            Message::PromptDbFile => "Enter the bookstore database file".to_string(),
            Message::PromptUsersFile => "Enter the users file".to_string(),
            Message::PromptTasksFile => "Enter the tasks file".to_string(),
            Message::PromptTaskOverviewFile => "Enter the task overview report file".to_string(),
            Message::PromptUserOverviewFile => "Enter the user overview report file".to_string(),
            Message::PromptAdminUser => "Enter the admin username".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),

            // === BOOK MESSAGES ===
            Message::PromptBookId => "Enter book ID (4 digits)".to_string(),
            Message::PromptBookTitle => "Enter book title".to_string(),
            Message::PromptAuthorId => "Enter author ID (4 digits)".to_string(),
            Message::PromptQuantity => "Enter quantity".to_string(),
            Message::PromptAuthorName => "Enter author's name".to_string(),
            Message::PromptAuthorCountry => "Enter author's country".to_string(),
            Message::AuthorNotFoundEnterDetails => "Author not found. Please enter author details.".to_string(),
            Message::BookAdded(id) => format!("Book {} added to the database", id),
            Message::BookAlreadyExists(id) => format!("A book with ID {} already exists", id),
            Message::PromptBookIdToUpdate => "Enter 4-digit book ID to update".to_string(),
            Message::CurrentDetails => "Current details:".to_string(),
            Message::PromptUpdateOption => "Select what to update".to_string(),
            Message::PromptNewQuantity => "Enter new quantity".to_string(),
            Message::PromptNewTitle => "Enter new title".to_string(),
            Message::PromptNewAuthorName => "Enter new author name".to_string(),
            Message::PromptNewAuthorCountry => "Enter new author country".to_string(),
            Message::BookUpdated(id) => format!("Book {} updated successfully!", id),
            Message::BookNotFound(id) => format!("No book found with ID {}", id),
            Message::PromptBookIdToDelete => "Enter 4-digit book ID to delete".to_string(),
            Message::BookDeleted(id) => format!("Book {} deleted successfully.", id),
            Message::PromptSearchOption => "Search books".to_string(),
            Message::PromptSearchId => "Enter book ID".to_string(),
            Message::PromptSearchTitle => "Enter book title".to_string(),
            Message::FoundBooks(count) => format!("Found {} book(s):", count),
            Message::NoMatchingBooks => "No matching books found.".to_string(),
            Message::BookDetailsHeader => "Details".to_string(),
            Message::NoBooksToDisplay => "No books to display.".to_string(),

            // === USER MESSAGES ===
            Message::DefaultAdminCreated(path) => format!("Created {} with the default admin account", path),
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::LoginSuccessful(user) => format!("Login successful. Welcome, {}!", user),
            Message::InvalidCredentials => "Invalid credentials.".to_string(),
            Message::PromptNewUsername => "Enter new username".to_string(),
            Message::PromptNewPassword => "Enter new password".to_string(),
            Message::PromptConfirmPassword => "Confirm password".to_string(),
            Message::UsernameEmpty => "Username cannot be empty.".to_string(),
            Message::UserRegistered(user) => format!("New user '{}' registered successfully.", user),

            // === TASK MESSAGES ===
            Message::PromptAssignee => "Enter username of the person the task is assigned to".to_string(),
            Message::PromptTaskTitle => "Enter task title".to_string(),
            Message::PromptTaskDescription => "Enter task description".to_string(),
            Message::PromptDueDate => "Enter due date (YYYY-MM-DD)".to_string(),
            Message::TaskAdded(title) => format!("Task '{}' added successfully.", title),
            Message::AllTasksHeader => "All tasks:".to_string(),
            Message::NoTasksToDisplay => "No tasks to display.".to_string(),
            Message::MyTasksHeader => "Your tasks:".to_string(),
            Message::NoTasksAssigned => "No tasks assigned to you.".to_string(),
            Message::PromptTaskNumber => "Enter task number to edit/mark complete (-1 to return)".to_string(),
            Message::InvalidTaskNumber => "Invalid task number.".to_string(),
            Message::PromptTaskAction => "Choose an action".to_string(),
            Message::TaskMarkedComplete(title) => format!("Task '{}' marked as complete.", title),
            Message::PromptReassignUser(owner) => format!("Enter new username (blank keeps '{}')", owner),
            Message::PromptNewDueDate(due) => format!("Enter new due date YYYY-MM-DD (blank keeps {})", due),
            Message::TaskNotReassigned(user) => format!("Invalid username '{}'. Task not reassigned.", user),
            Message::TaskNotUpdated => "Task not updated.".to_string(),
            Message::TaskUpdated => "Task updated successfully.".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportsGenerated(task_overview, user_overview) => {
                format!("Reports written to {} and {}", task_overview, user_overview)
            }
        };
        write!(f, "{}", text)
    }
}
