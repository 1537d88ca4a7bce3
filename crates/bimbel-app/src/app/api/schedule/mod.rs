//! Class schedule endpoints.

mod create;
mod list;
mod types;

#[cfg(test)]
mod tests;

use salvo::Router;

use super::{CLASSES_ROUTE_COMPONENT, SCHEDULES_ROUTE_COMPONENT};

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(Router::with_path(SCHEDULES_ROUTE_COMPONENT).post(create::create_schedules_handler))
        .push(
            Router::with_path(format!(
                "{CLASSES_ROUTE_COMPONENT}/{{class_id}}/{SCHEDULES_ROUTE_COMPONENT}"
            ))
            .get(list::list_schedules_handler),
        )
}
