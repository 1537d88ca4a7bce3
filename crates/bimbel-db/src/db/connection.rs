use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

use crate::db::{ConnectionFuture, DbProvider};
use crate::error::DbError;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection<'pool> = PooledConnection<'pool, AsyncPgConnection>;

/// ## Summary
/// Creates the pool the schedule repository draws connections from.
///
/// Apart from `max_size` the pool keeps bb8's defaults, including the
/// connection check on checkout.
///
/// ## Errors
/// Returns an error if the pool cannot be built with the provided database URL.
#[tracing::instrument(skip(database_url))]
pub async fn create_pool(database_url: &str, max_size: u32) -> anyhow::Result<DbPool> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);

    let pool = Pool::builder().max_size(max_size).build(manager).await?;

    tracing::info!(max_size, "Database connection pool ready");

    Ok(pool)
}

impl DbProvider for DbPool {
    fn get_connection(&self) -> ConnectionFuture<'_> {
        Box::pin(async move { self.get().await.map_err(DbError::from) })
    }
}
