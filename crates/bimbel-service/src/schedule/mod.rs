//! Class schedule generation and lookup.

pub mod generator;
pub mod memory;
pub mod plan;
pub mod repository;


use chrono::{DateTime, Utc};
use uuid::Uuid;

use bimbel_db::model::schedule::Schedule;

use crate::error::{ServiceError, ServiceResult};

pub use generator::generate_schedule;
pub use memory::InMemoryScheduleRepository;
pub use plan::{SchedulePlan, WEEKS_PER_MEETING_UNIT};
pub use repository::{PgScheduleRepository, ScheduleRepository};

/// ## Summary
/// Generates and stores the meeting schedule of a class, then returns every
/// stored entry of that class ordered by date.
///
/// All reads and validation happen before the single batch write. Calling
/// this again for the same class appends a second batch; existing entries
/// are neither checked nor replaced.
///
/// ## Side Effects
/// - Inserts one `schedule` row per generated meeting
///
/// ## Errors
/// Returns `ServiceError::NotFound` if the class or its order/package chain is
/// missing, `ServiceError::InvalidInput` if the package cannot be planned or
/// the calendar cannot fit the full schedule, and
/// a database error if storage fails. Nothing is written on any error.
#[tracing::instrument(skip(repo, now))]
pub async fn create_schedules(
    repo: &dyn ScheduleRepository,
    class_id: Uuid,
    now: DateTime<Utc>,
) -> ServiceResult<Vec<Schedule>> {
    let Some(snapshot) = repo.find_class_package(class_id).await? else {
        tracing::debug!("Class not found");
        return Err(ServiceError::NotFound(format!("class {class_id}")));
    };

    let plan = SchedulePlan::from_package(&snapshot).inspect_err(|e| {
        tracing::warn!(package_id = %snapshot.package.id, error = %e, "Package cannot be scheduled");
    })?;

    tracing::debug!(
        days = ?plan.days,
        cycles = plan.cycles(),
        time = %plan.time,
        "Resolved schedule plan"
    );

    let entries = generate_schedule(class_id, &plan, now)?;
    let inserted = repo.insert_schedules(&entries).await?;

    tracing::info!(count = inserted, "Schedule entries created");

    repo.schedules_for_class(class_id).await
}

/// ## Summary
/// Returns the stored schedule of a class ordered by date.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if the class does not exist, or a database
/// error if storage fails.
#[tracing::instrument(skip(repo))]
pub async fn list_schedules(
    repo: &dyn ScheduleRepository,
    class_id: Uuid,
) -> ServiceResult<Vec<Schedule>> {
    if !repo.class_exists(class_id).await? {
        return Err(ServiceError::NotFound(format!("class {class_id}")));
    }

    repo.schedules_for_class(class_id).await
}
