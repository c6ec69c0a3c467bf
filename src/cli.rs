use crate::constants::{DEFAULT_DATABASE_URL, DEFAULT_PORT};
use clap::Parser;
use std::path::PathBuf;

/// Command line interface for the phonebook server.
/// Every flag can also be supplied through its environment variable or a `.env` file.
#[derive(Parser, Debug, Clone)]
#[command(name = "phonebook", about = "Phonebook HTTP API")]
pub struct Cli {
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite database path, or ":memory:" for a throwaway store
    #[arg(long, env = "DATABASE_URL", default_value_t = String::from(DEFAULT_DATABASE_URL))]
    pub database_url: String,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    #[arg(long, env = "LOG_LEVEL", default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Directory for daily rotating log files; stdout only when unset
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "phonebook",
            "--port",
            "8080",
            "--database-url",
            ":memory:",
            "--log-dir",
            "logs",
        ])
        .unwrap();
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.database_url, ":memory:");
        assert_eq!(cli.log_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["phonebook", "--port", "http"]).is_err());
    }
}
