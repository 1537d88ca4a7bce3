//! Transaction helper for multi-step writes.
//!
//! ```rust,ignore
//! use diesel_async::scoped_futures::ScopedFutureExt;
//!
//! with_transaction(&mut conn, |tx| {
//!     async move { schedule::insert_batch(tx, &entries).await }.scope_boxed()
//! })
//! .await?;
//! ```

use diesel_async::{AsyncConnection, AsyncPgConnection, scoped_futures::ScopedBoxFuture};

/// ## Summary
/// Runs `callback` inside a database transaction and returns its result.
///
/// The transaction commits when the callback returns `Ok` and rolls back
/// otherwise.
///
/// ## Errors
/// Returns any error produced by the callback, or errors raised while
/// starting or committing the transaction.
pub async fn with_transaction<'a, 'conn, T, E, F>(
    conn: &'conn mut AsyncPgConnection,
    callback: F,
) -> Result<T, E>
where
    F: for<'r> FnOnce(&'r mut AsyncPgConnection) -> ScopedBoxFuture<'a, 'r, Result<T, E>>
        + Send
        + 'a,
    E: From<diesel::result::Error> + Send + 'a,
    T: Send + 'a,
    'a: 'conn,
{
    conn.transaction(callback).await
}
