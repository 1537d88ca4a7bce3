//! In-process `ScheduleRepository` for tests and local runs without `PostgreSQL`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::sync::Mutex;
use uuid::Uuid;

use bimbel_db::db::query::class::ClassPackage;
use bimbel_db::error::DbError;
use bimbel_db::model::schedule::{NewSchedule, Schedule};

use crate::error::ServiceError;

use super::repository::{RepoFuture, ScheduleRepository};

#[derive(Debug, Default)]
pub struct InMemoryScheduleRepository {
    classes: Mutex<HashMap<Uuid, ClassPackage>>,
    schedules: Mutex<Vec<Schedule>>,
    fail_writes: AtomicBool,
}

impl InMemoryScheduleRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class together with its package snapshot.
    #[must_use]
    pub fn with_class(mut self, snapshot: ClassPackage) -> Self {
        self.classes
            .get_mut()
            .insert(snapshot.class_id, snapshot);
        self
    }

    pub async fn add_class(&self, snapshot: ClassPackage) {
        self.classes
            .lock()
            .await
            .insert(snapshot.class_id, snapshot);
    }

    /// Makes every subsequent insert fail as a database error would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Total stored entries across all classes.
    pub async fn schedule_count(&self) -> usize {
        self.schedules.lock().await.len()
    }
}

impl ScheduleRepository for InMemoryScheduleRepository {
    fn find_class_package(&self, class_id: Uuid) -> RepoFuture<'_, Option<ClassPackage>> {
        Box::pin(async move { Ok(self.classes.lock().await.get(&class_id).cloned()) })
    }

    fn class_exists(&self, class_id: Uuid) -> RepoFuture<'_, bool> {
        Box::pin(async move { Ok(self.classes.lock().await.contains_key(&class_id)) })
    }

    fn insert_schedules<'a>(&'a self, entries: &'a [NewSchedule]) -> RepoFuture<'a, usize> {
        Box::pin(async move {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(ServiceError::from(DbError::from(DieselError::DatabaseError(
                    DatabaseErrorKind::Unknown,
                    Box::new("simulated write failure".to_string()),
                ))));
            }

            let created_at = Utc::now();
            let mut schedules = self.schedules.lock().await;
            schedules.extend(entries.iter().cloned().map(|e| e.into_schedule(created_at)));
            Ok(entries.len())
        })
    }

    fn schedules_for_class(&self, class_id: Uuid) -> RepoFuture<'_, Vec<Schedule>> {
        Box::pin(async move {
            let mut rows: Vec<Schedule> = self
                .schedules
                .lock()
                .await
                .iter()
                .filter(|s| s.class_id == class_id)
                .cloned()
                .collect();
            rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.meet.cmp(&b.meet)));
            Ok(rows)
        })
    }
}
