use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bimbel_db::db::enums::ScheduleStatus;
use bimbel_db::model::schedule::Schedule;

/// ## Summary
/// Create schedules request payload
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSchedulesRequest {
    pub class_id: Uuid,
}

/// ## Summary
/// Schedule entry response payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub id: Uuid,
    pub class_id: Uuid,
    pub date: DateTime<Utc>,
    pub meet: i32,
    pub status: ScheduleStatus,
}

impl From<Schedule> for ScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        Self {
            id: schedule.id,
            class_id: schedule.class_id,
            date: schedule.date,
            meet: schedule.meet,
            status: schedule.status,
        }
    }
}
