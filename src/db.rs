//! SQLite connection pool.
//!
//! Repositories acquire one pooled connection per call; it goes back to the
//! pool when dropped, on every return path.

use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Builds a connection pool for the SQLite database at `database_url`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}

#[cfg(feature = "server")]
mod migrations {
    use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

    use super::DbPool;

    pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

    /// Applies pending migrations, returning how many ran.
    pub fn run_migrations(
        pool: &DbPool,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let mut conn = pool.get()?;
        let applied = conn.run_pending_migrations(MIGRATIONS)?;
        Ok(applied.len())
    }
}

#[cfg(feature = "server")]
pub use migrations::{MIGRATIONS, run_migrations};
