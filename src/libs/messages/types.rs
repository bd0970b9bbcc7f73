#[derive(Debug, Clone)]
pub enum Message {
    // === GENERAL MESSAGES ===
    PromptMenuChoice,
    Goodbye,
    InvalidChoice,
    InvalidInput,
    InputExhausted(String), // prompt
    InputRequired,
    InputMustBeNumber,
    InputMustHaveDigits(usize),
    InputTooLarge,
    NoChangesDetected,

    // === STORAGE MESSAGES ===
    StorageCreated(String), // path
    SkippedRecord {
        file: String,
        line: u64,
        reason: String,
    },

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleStorage,
    ConfigModuleBooks,
    ConfigModuleTasks,
    PromptSelectModules,
    PromptDataDir,
    PromptDbFile,
    PromptUsersFile,
    PromptTasksFile,
    PromptTaskOverviewFile,
    PromptUserOverviewFile,
    PromptAdminUser,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error

    // === BOOK MESSAGES ===
    PromptBookId,
    PromptBookTitle,
    PromptAuthorId,
    PromptQuantity,
    PromptAuthorName,
    PromptAuthorCountry,
    AuthorNotFoundEnterDetails,
    BookAdded(u32),
    BookAlreadyExists(u32),
    PromptBookIdToUpdate,
    CurrentDetails,
    PromptUpdateOption,
    PromptNewQuantity,
    PromptNewTitle,
    PromptNewAuthorName,
    PromptNewAuthorCountry,
    BookUpdated(u32),
    BookNotFound(u32),
    PromptBookIdToDelete,
    BookDeleted(u32),
    PromptSearchOption,
    PromptSearchId,
    PromptSearchTitle,
    FoundBooks(usize),
    NoMatchingBooks,
    BookDetailsHeader,
    NoBooksToDisplay,

    // === USER MESSAGES ===
    DefaultAdminCreated(String), // path
    PromptUsername,
    PromptPassword,
    LoginSuccessful(String),
    InvalidCredentials,
    PromptNewUsername,
    PromptNewPassword,
    PromptConfirmPassword,
    UsernameEmpty,
    UserRegistered(String),

    // === TASK MESSAGES ===
    PromptAssignee,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptDueDate,
    TaskAdded(String), // title
    AllTasksHeader,
    NoTasksToDisplay,
    MyTasksHeader,
    NoTasksAssigned,
    PromptTaskNumber,
    InvalidTaskNumber,
    PromptTaskAction,
    TaskMarkedComplete(String),   // title
    PromptReassignUser(String),   // current owner
    PromptNewDueDate(String),     // current due date
    TaskNotReassigned(String),    // rejected username
    TaskNotUpdated,
    TaskUpdated,

    // === REPORT MESSAGES ===
    ReportsGenerated(String, String), // task overview path, user overview path
}
