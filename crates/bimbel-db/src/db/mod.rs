use futures::future::BoxFuture;

use crate::error::DbResult;

pub mod connection;
pub mod enums;
pub mod migrate;
pub mod query;
pub mod schema;
pub mod transaction;

/// A pooled connection borrowed from its provider.
pub type ConnectionFuture<'a> = BoxFuture<'a, DbResult<connection::DbConnection<'a>>>;

/// Source of pooled connections for repositories.
pub trait DbProvider: Send + Sync {
    fn get_connection(&self) -> ConnectionFuture<'_>;
}
