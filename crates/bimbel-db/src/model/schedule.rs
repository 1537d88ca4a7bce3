use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::{enums::ScheduleStatus, schema};
use crate::model::class::Class;

/// One dated meeting of a class.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Identifiable,
    Queryable,
    Selectable,
    Associations,
    Serialize,
    Deserialize,
)]
#[diesel(table_name = schema::schedule)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(Class, foreign_key = class_id))]
pub struct Schedule {
    pub id: uuid::Uuid,
    pub class_id: uuid::Uuid,
    pub date: chrono::DateTime<chrono::Utc>,
    pub meet: i32,
    pub status: ScheduleStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Insert struct for generated schedule entries
#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = schema::schedule)]
pub struct NewSchedule {
    pub id: uuid::Uuid,
    pub class_id: uuid::Uuid,
    pub date: chrono::DateTime<chrono::Utc>,
    pub meet: i32,
    pub status: ScheduleStatus,
}

impl NewSchedule {
    /// ## Summary
    /// Materializes the row as it reads back after insertion.
    #[must_use]
    pub fn into_schedule(self, created_at: chrono::DateTime<chrono::Utc>) -> Schedule {
        Schedule {
            id: self.id,
            class_id: self.class_id,
            date: self.date,
            meet: self.meet,
            status: self.status,
            created_at,
        }
    }
}
