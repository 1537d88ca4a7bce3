//! Validation of a class's package into a generation plan.

use bimbel_core::types::DayName;
use bimbel_db::db::query::class::ClassPackage;
use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::error::{ServiceError, ServiceResult};

/// Each unit of `total_meetings` expands to this many weekly cycles.
///
/// Packages describe `total_meetings` as a session count, but generation has
/// always read it as months of four weeks. Existing schedules depend on that
/// reading, so it is kept as is.
pub const WEEKS_PER_MEETING_UNIT: u32 = 4;

/// Upper bound on the entries a single generation run may produce.
pub const MAX_GENERATED_ENTRIES: usize = 5000;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Validated inputs for schedule generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulePlan {
    pub total_meetings: u32,
    /// Session time-of-day in UTC, seconds always zero.
    pub time: NaiveTime,
    /// Recurrence days in the order they were attached to the package.
    pub days: Vec<DayName>,
}

impl SchedulePlan {
    /// ## Summary
    /// Builds a plan from a class's package snapshot.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidInput` if the package time does not parse,
    /// the recurrence days are empty or contain an unknown name, or
    /// `total_meetings` is not positive or would generate too many entries.
    pub fn from_package(snapshot: &ClassPackage) -> ServiceResult<Self> {
        let time = parse_time_of_day(&snapshot.package.time)?;

        if snapshot.day_names.is_empty() {
            return Err(ServiceError::InvalidInput(format!(
                "package {} has no recurrence days",
                snapshot.package.id
            )));
        }

        let days = snapshot
            .day_names
            .iter()
            .map(|name| {
                DayName::from_name(name).map_err(|e| ServiceError::InvalidInput(e.to_string()))
            })
            .collect::<ServiceResult<Vec<_>>>()?;

        let total_meetings = u32::try_from(snapshot.package.total_meetings)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                ServiceError::InvalidInput(format!(
                    "total_meetings must be positive, got {}",
                    snapshot.package.total_meetings
                ))
            })?;

        let plan = Self {
            total_meetings,
            time,
            days,
        };

        if plan.nominal_entry_count() > MAX_GENERATED_ENTRIES {
            return Err(ServiceError::InvalidInput(format!(
                "package would generate {} entries, limit is {MAX_GENERATED_ENTRIES}",
                plan.nominal_entry_count()
            )));
        }

        Ok(plan)
    }

    /// Number of weekly cycles the generator walks.
    #[must_use]
    pub fn cycles(&self) -> u32 {
        self.total_meetings.saturating_mul(WEEKS_PER_MEETING_UNIT)
    }

    /// `cycles * |days|`, the entry count before any same-day skips.
    #[must_use]
    pub fn nominal_entry_count(&self) -> usize {
        usize::try_from(self.cycles())
            .unwrap_or(usize::MAX)
            .saturating_mul(self.days.len())
    }
}

/// ## Summary
/// Extracts hour and minute from a stored package time.
///
/// Accepts an RFC 3339 timestamp (converted to UTC), a naive timestamp read
/// as UTC, or a bare `HH:MM[:SS]`. The date portion and seconds are dropped.
///
/// ## Errors
/// Returns `ServiceError::InvalidInput` if none of the formats match.
pub fn parse_time_of_day(raw: &str) -> ServiceResult<NaiveTime> {
    let raw = raw.trim();

    let parsed = DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).time())
        .or_else(|| {
            NAIVE_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.time())
        })
        .or_else(|| {
            TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
        })
        .ok_or_else(|| {
            ServiceError::InvalidInput(format!("package time {raw:?} is not a valid timestamp"))
        })?;

    NaiveTime::from_hms_opt(parsed.hour(), parsed.minute(), 0)
        .ok_or_else(|| ServiceError::InvalidInput(format!("package time {raw:?} is out of range")))
}
