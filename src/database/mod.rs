//! Database setup.
//!
//! The API stores everything in a single SQLite database. The schema lives in
//! `database/migrations` and is embedded into the binary at compile time.

use std::str::FromStr;

use sqlx::pool::PoolOptions;
use sqlx::sqlite::SqliteConnectOptions;
use url::Url;

pub(crate) type Driver = sqlx::Sqlite;
pub(crate) type Pool = sqlx::Pool<Driver>;

/// The minimum amount of open database connections to keep in the pool.
pub(crate) const MIN_CONNECTIONS: u32 = 1;

/// The maximum amount of open database connections to keep in the pool.
pub(crate) const MAX_CONNECTIONS: u32 = 8;

/// Connects to the database at the given `url`.
///
/// The database file will be created if it doesn't exist yet.
#[tracing::instrument(fields(database_url = %database_url), err)]
pub(crate) async fn connect(database_url: &Url) -> sqlx::Result<Pool>
{
	let options = SqliteConnectOptions::from_str(database_url.as_str())?
		.create_if_missing(true)
		.foreign_keys(true);

	PoolOptions::<Driver>::new()
		.min_connections(MIN_CONNECTIONS)
		.max_connections(MAX_CONNECTIONS)
		.connect_with(options)
		.await
}

/// Creates a pool backed by a fresh in-memory database.
///
/// Every SQLite connection to `:memory:` opens its own database, so the pool
/// is pinned to a single connection that is never recycled.
#[cfg(test)]
pub(crate) async fn connect_in_memory() -> sqlx::Result<Pool>
{
	let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

	PoolOptions::<Driver>::new()
		.min_connections(1)
		.max_connections(1)
		.idle_timeout(None)
		.max_lifetime(None)
		.connect_with(options)
		.await
}

/// Applies any pending migrations.
#[tracing::instrument(skip_all, err)]
pub(crate) async fn migrate(database: &Pool) -> Result<(), sqlx::migrate::MigrateError>
{
	sqlx::migrate!("./database/migrations").run(database).await
}
