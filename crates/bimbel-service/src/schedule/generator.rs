//! Recurring class-schedule generation.
//!
//! ## Summary
//! Walks forward from the invocation time, one weekly cycle at a time, and
//! places one meeting on each recurrence day of the cycle. Days are searched
//! in the order the package lists them, each search starting from the
//! previously placed meeting, so the output is strictly increasing by date
//! and `meet` counts up from 1 without gaps.

use bimbel_db::db::enums::ScheduleStatus;
use bimbel_db::model::schedule::NewSchedule;
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use uuid::Uuid;

use super::plan::SchedulePlan;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Generates the schedule entries of a class without touching storage.
///
/// The search for each recurrence day begins on the calendar day after the
/// cursor, so a meeting is never placed on the invocation day itself and
/// never on the same day as the meeting before it. Every placed date is
/// therefore strictly later than the cursor and no same-day skip is needed.
///
/// ## Errors
/// Returns `ServiceError::InvalidInput` if the calendar ends before every
/// cycle is placed. A partial schedule is never returned.
pub fn generate_schedule(
    class_id: Uuid,
    plan: &SchedulePlan,
    now: DateTime<Utc>,
) -> ServiceResult<Vec<NewSchedule>> {
    let mut entries = Vec::with_capacity(plan.nominal_entry_count());
    let mut cursor = now;
    let mut meet: i32 = 1;

    for _ in 0..plan.cycles() {
        for day in &plan.days {
            let Some(date) = next_weekday_after(cursor.date_naive(), day.to_weekday()) else {
                tracing::warn!(
                    %class_id,
                    %cursor,
                    placed = entries.len(),
                    "Ran out of calendar while generating schedule"
                );
                return Err(ServiceError::InvalidInput(format!(
                    "no {day} left in the calendar after {cursor}"
                )));
            };

            let timestamp = date.and_time(plan.time).and_utc();

            entries.push(NewSchedule {
                id: Uuid::now_v7(),
                class_id,
                date: timestamp,
                meet,
                status: ScheduleStatus::Scheduled,
            });
            meet += 1;
            cursor = timestamp;
        }
    }

    Ok(entries)
}

/// First date strictly after `from` that falls on `target`.
fn next_weekday_after(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    from.iter_days().skip(1).find(|date| date.weekday() == target)
}
