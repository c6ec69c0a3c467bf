/// Port the server listens on when neither `--port` nor `PORT` is given
pub const DEFAULT_PORT: u16 = 3001;

/// SQLite database used when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "phonebook.db";

/// Special SQLite path for a throwaway store living in a single connection
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// File name prefix for the rotating log files
pub const LOG_FILE_NAME: &str = "phonebook.log";

/// Error body sent when a path id cannot be turned into a store id
pub const MALFORMATTED_ID: &str = "malformatted id";

/// Error body sent when a handler dereferenced a document that does not exist
pub const SOMETHING_HAPPENED: &str = "Something happened";

/// Error body sent for any route the service does not serve
pub const UNKNOWN_ENDPOINT: &str = "unknown endpoint";

/// Minimum amount of digits a phone number carries, area code included
pub const MIN_NUMBER_DIGITS: usize = 8;

/// Largest request body accepted, matching axum's default JSON limit
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Run on every pooled SQLite connection
pub const SQLITE_CONNECTION_PRAGMAS: &str = "PRAGMA busy_timeout = 5000; PRAGMA journal_mode = WAL;";

pub const CREATE_PERSONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS persons (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    number TEXT NOT NULL,
    version INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";
