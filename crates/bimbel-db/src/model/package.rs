use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Catalog offering a class is ordered from.
///
/// `time` holds the session time-of-day as a timestamp string; only its hour
/// and minute are meaningful.
#[derive(
    Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::bimbel_package)]
#[diesel(check_for_backend(Pg))]
pub struct BimbelPackage {
    pub id: uuid::Uuid,
    pub name: String,
    pub total_meetings: i32,
    pub time: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable)]
#[diesel(table_name = schema::day)]
#[diesel(check_for_backend(Pg))]
pub struct Day {
    pub id: i32,
    pub days_name: String,
}
