mod models;
mod person_repository;
mod store;

use crate::constants::{CREATE_PERSONS_TABLE, IN_MEMORY_DATABASE, SQLITE_CONNECTION_PRAGMAS};
use crate::errors::Error;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{Builder, ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use tracing::info;

pub use models::*;
pub use person_repository::*;
pub use store::*;

/// Applied to every pooled connection so concurrent writers wait for the
/// lock instead of failing with `database is locked`.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(SQLITE_CONNECTION_PRAGMAS)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl Database {
    /// Opens the pool and makes sure the `persons` table exists.
    ///
    /// An in-memory database lives inside a single connection, so the pool is
    /// pinned to that one connection and never recycles it. File databases run
    /// in WAL mode with a busy timeout.
    pub fn new(database_url: &str) -> Result<Self, Error> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let builder: Builder<ConnectionManager<SqliteConnection>> = if database_url == IN_MEMORY_DATABASE {
            Pool::builder()
                .max_size(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            Pool::builder()
        };
        let pool = builder
            .connection_customizer(Box::new(SqlitePragmas))
            .build(manager)?;

        let database = Database {
            pool: Arc::new(pool),
        };
        database.get_conn()?.batch_execute(CREATE_PERSONS_TABLE)?;
        info!("Opened person store at {}", database_url);

        Ok(database)
    }

    pub fn get_conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, Error> {
        Ok(self.pool.get()?)
    }
}
