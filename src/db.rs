//! SQLite connection pool shared by every request handler.

use std::path::Path;
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, PooledConnection};
use diesel::sqlite::SqliteConnection;
use thiserror::Error;

/// Pool of SQLite connections.
pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
/// A connection checked out of [`DbPool`]; returned to the pool on drop.
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Errors raised while preparing the database at startup.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to prepare database location: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to open connection pool: {0}")]
    Pool(#[from] r2d2::PoolError),
    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

/// Sizing and timeouts for [`establish_connection_pool`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// Maximum number of simultaneously open connections.
    pub max_size: u32,
    /// How long a request waits for a free connection before failing.
    pub connection_timeout: Duration,
    /// How long SQLite waits on a locked database before returning `SQLITE_BUSY`.
    pub busy_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_size: 10,
            connection_timeout: Duration::from_secs(30),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Per-connection pragmas applied when the pool opens a connection.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA foreign_keys = ON;",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Make sure the database file can be created.
///
/// SQLite creates the file itself on first connect; only the containing
/// directory has to exist.
pub fn ensure_database(database_url: &str) -> Result<(), DbError> {
    if database_url == ":memory:" || database_url.starts_with("file:") {
        return Ok(());
    }

    if let Some(parent) = Path::new(database_url).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Create the database if needed and open a bounded pool against it.
///
/// The pool eagerly opens its connections, so an unreachable database fails
/// here rather than on the first request.
pub fn establish_connection_pool(
    database_url: &str,
    settings: &PoolSettings,
) -> Result<DbPool, DbError> {
    ensure_database(database_url)?;

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .max_size(settings.max_size)
        .connection_timeout(settings.connection_timeout)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: settings.busy_timeout,
        }))
        .build(manager)?;

    Ok(pool)
}
