use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};

use bimbel_service::schedule::list_schedules;

use super::types::ScheduleResponse;
use crate::error::AppError;
use crate::repository_handler::get_repository_from_depot;

/// ## Summary
/// GET /`api/classes/{class_id}/schedules` - List a class's schedule, earliest first
///
/// ## Errors
/// Returns HTTP 400 if `class_id` is not a UUID
/// Returns HTTP 404 if the class does not exist
/// Returns HTTP 500 if storage fails
#[handler]
pub async fn list_schedules_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(class_id) = req
        .param::<String>("class_id")
        .and_then(|raw| uuid::Uuid::parse_str(&raw).ok())
    else {
        AppError::BadRequest("Invalid class ID format".to_string()).render(res);
        return;
    };

    let repository = match get_repository_from_depot(depot) {
        Ok(r) => r,
        Err(e) => {
            e.render(res);
            return;
        }
    };

    match list_schedules(repository.as_ref(), class_id).await {
        Ok(schedules) => {
            let body: Vec<ScheduleResponse> =
                schedules.into_iter().map(ScheduleResponse::from).collect();
            res.status_code(StatusCode::OK);
            res.render(Json(body));
        }
        Err(e) => AppError::from(e).render(res),
    }
}
