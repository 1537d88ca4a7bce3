//! Query composition for `schedule`.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::schema::schedule;
use crate::model::schedule::{NewSchedule, Schedule};

/// ## Summary
/// Inserts schedule entries as a single multi-row statement.
///
/// Returns the number of inserted rows. An empty slice is a no-op.
///
/// ## Errors
/// Returns an error if the database operation fails; no rows are written in that case.
pub async fn insert_batch(
    conn: &mut AsyncPgConnection,
    entries: &[NewSchedule],
) -> QueryResult<usize> {
    if entries.is_empty() {
        return Ok(0);
    }

    diesel::insert_into(schedule::table)
        .values(entries)
        .execute(conn)
        .await
}

/// ## Summary
/// Loads all schedule entries of a class, earliest first.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn by_class(conn: &mut DbConnection<'_>, class_id: Uuid) -> QueryResult<Vec<Schedule>> {
    schedule::table
        .filter(schedule::class_id.eq(class_id))
        .order((schedule::date.asc(), schedule::meet.asc()))
        .select(Schedule::as_select())
        .load::<Schedule>(conn)
        .await
}
