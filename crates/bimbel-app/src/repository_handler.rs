use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use bimbel_core::error::CoreError;
use bimbel_service::schedule::ScheduleRepository;

pub struct ScheduleRepositoryHandler {
    pub repository: Arc<dyn ScheduleRepository>,
}

#[async_trait]
impl salvo::Handler for ScheduleRepositoryHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.repository));
    }
}

/// ## Summary
/// Retrieves the schedule repository from the depot.
///
/// ## Errors
/// Returns an error if no repository was injected for this request.
pub fn get_repository_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn ScheduleRepository>> {
    depot
        .obtain::<Arc<dyn ScheduleRepository>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Schedule repository not found in depot").into())
}
