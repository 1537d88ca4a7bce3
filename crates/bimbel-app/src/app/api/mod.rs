mod app_specific;
mod schedule;

use salvo::Router;

pub use bimbel_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_COMPONENT, CLASSES_ROUTE_COMPONENT,
    CLASSES_ROUTE_PREFIX,
    SCHEDULES_ROUTE_COMPONENT, SCHEDULES_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(schedule::routes())
}
