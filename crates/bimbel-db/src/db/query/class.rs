//! Class lookups that resolve the package a class was ordered from.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::schema::{bimbel_package, class, day, order, package_day};
use crate::model::class::Class;
use crate::model::package::{BimbelPackage, Day};

/// Snapshot of everything schedule generation reads about a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPackage {
    pub class_id: Uuid,
    pub package: BimbelPackage,
    /// Recurrence day names in the order they were attached to the package.
    pub day_names: Vec<String>,
}

/// ## Summary
/// Resolves class -> order -> package and the package's recurrence days.
///
/// Returns `Ok(None)` if the class does not exist or its order/package chain
/// is broken.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn find_package_for_class(
    conn: &mut DbConnection<'_>,
    class_id: Uuid,
) -> QueryResult<Option<ClassPackage>> {
    let Some(package) = class::table
        .inner_join(order::table.inner_join(bimbel_package::table))
        .filter(class::id.eq(class_id))
        .select(BimbelPackage::as_select())
        .first::<BimbelPackage>(conn)
        .await
        .optional()?
    else {
        return Ok(None);
    };

    let days = package_day::table
        .inner_join(day::table)
        .filter(package_day::package_id.eq(package.id))
        .order(package_day::id.asc())
        .select(Day::as_select())
        .load::<Day>(conn)
        .await?;

    Ok(Some(ClassPackage {
        class_id,
        package,
        day_names: days.into_iter().map(|d| d.days_name).collect(),
    }))
}

/// ## Summary
/// Loads a class by ID.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn by_id(conn: &mut DbConnection<'_>, class_id: Uuid) -> QueryResult<Option<Class>> {
    class::table
        .filter(class::id.eq(class_id))
        .select(Class::as_select())
        .first::<Class>(conn)
        .await
        .optional()
}
