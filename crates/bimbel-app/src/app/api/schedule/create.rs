use chrono::Utc;
use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};

use bimbel_service::schedule::create_schedules;

use super::types::{CreateSchedulesRequest, ScheduleResponse};
use crate::error::AppError;
use crate::repository_handler::get_repository_from_depot;

/// ## Summary
/// POST /api/schedules - Generate the meeting schedule of a class
///
/// ## Side Effects
/// - Inserts one schedule row per generated meeting. Repeated calls append
///   another batch.
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed or the class's package cannot be scheduled
/// Returns HTTP 404 if the class (or its order/package) does not exist
/// Returns HTTP 500 if storage fails
#[handler]
pub async fn create_schedules_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing create schedules request");

    let create_req: CreateSchedulesRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            AppError::BadRequest(format!("Invalid request body: {e}")).render(res);
            return;
        }
    };

    let repository = match get_repository_from_depot(depot) {
        Ok(r) => r,
        Err(e) => {
            e.render(res);
            return;
        }
    };

    match create_schedules(repository.as_ref(), create_req.class_id, Utc::now()).await {
        Ok(schedules) => {
            tracing::info!(
                class_id = %create_req.class_id,
                count = schedules.len(),
                "Schedules generated"
            );
            let body: Vec<ScheduleResponse> =
                schedules.into_iter().map(ScheduleResponse::from).collect();
            res.status_code(StatusCode::CREATED);
            res.render(Json(body));
        }
        Err(e) => AppError::from(e).render(res),
    }
}
