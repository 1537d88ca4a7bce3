//! Persistence seam for schedule generation.

use std::sync::Arc;

use diesel_async::scoped_futures::ScopedFutureExt;
use futures::future::BoxFuture;
use uuid::Uuid;

use bimbel_db::db::DbProvider;
use bimbel_db::db::query::class::{self, ClassPackage};
use bimbel_db::db::query::schedule;
use bimbel_db::db::transaction::with_transaction;
use bimbel_db::error::DbError;
use bimbel_db::model::schedule::{NewSchedule, Schedule};

use crate::error::ServiceResult;

pub type RepoFuture<'a, T> = BoxFuture<'a, ServiceResult<T>>;

/// Storage operations the schedule service depends on.
pub trait ScheduleRepository: Send + Sync {
    /// Resolves class -> order -> package -> recurrence days; `None` if any link is missing.
    fn find_class_package(&self, class_id: Uuid) -> RepoFuture<'_, Option<ClassPackage>>;

    fn class_exists(&self, class_id: Uuid) -> RepoFuture<'_, bool>;

    /// Writes all entries as one atomic batch and returns the inserted count.
    fn insert_schedules<'a>(&'a self, entries: &'a [NewSchedule]) -> RepoFuture<'a, usize>;

    /// All entries of a class ordered ascending by date.
    fn schedules_for_class(&self, class_id: Uuid) -> RepoFuture<'_, Vec<Schedule>>;
}

/// `PostgreSQL` implementation backed by the connection pool.
#[derive(Clone)]
pub struct PgScheduleRepository {
    provider: Arc<dyn DbProvider>,
}

impl PgScheduleRepository {
    #[must_use]
    pub fn new(provider: Arc<dyn DbProvider>) -> Self {
        Self { provider }
    }
}

impl ScheduleRepository for PgScheduleRepository {
    #[tracing::instrument(skip(self))]
    fn find_class_package(&self, class_id: Uuid) -> RepoFuture<'_, Option<ClassPackage>> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;
            let snapshot = class::find_package_for_class(&mut conn, class_id)
                .await
                .map_err(DbError::from)?;
            Ok(snapshot)
        })
    }

    #[tracing::instrument(skip(self))]
    fn class_exists(&self, class_id: Uuid) -> RepoFuture<'_, bool> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;
            let found = class::by_id(&mut conn, class_id)
                .await
                .map_err(DbError::from)?;
            Ok(found.is_some())
        })
    }

    #[tracing::instrument(skip(self, entries), fields(count = entries.len()))]
    fn insert_schedules<'a>(&'a self, entries: &'a [NewSchedule]) -> RepoFuture<'a, usize> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;
            let inserted = with_transaction(&mut conn, |tx| {
                async move { schedule::insert_batch(tx, entries).await }.scope_boxed()
            })
            .await
            .map_err(DbError::from)?;
            Ok(inserted)
        })
    }

    #[tracing::instrument(skip(self))]
    fn schedules_for_class(&self, class_id: Uuid) -> RepoFuture<'_, Vec<Schedule>> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;
            let rows = schedule::by_class(&mut conn, class_id)
                .await
                .map_err(DbError::from)?;
            Ok(rows)
        })
    }
}
