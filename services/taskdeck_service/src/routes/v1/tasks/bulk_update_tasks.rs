use axum::{Json, extract::State};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::Deserialize;

use crate::{
    data::tasks::Task,
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    services::BulkUpdateTasks,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/tasks/bulk-update")]
pub struct BulkUpdateTasksPath;

#[utoipa::path(
    post,
    path = "/tasks/bulk-update",
    tag = "tasks",
    description = "Move tasks between status columns; all tasks must share a workspace",
    request_body = BulkUpdateTasks,
    responses(
        (status = OK, description = "Success", body = Data<Vec<Task>>),
        (status = BAD_REQUEST, description = "Invalid input", body = crate::response::error::ErrorBody),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "A task does not exist", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn bulk_update_tasks(
    _: BulkUpdateTasksPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(Json(input), _): WithRejection<
        Json<BulkUpdateTasks>,
        ApiError,
    >,
) -> Result<Json<Data<Vec<Task>>>, ApiError> {
    let tasks = state
        .provider
        .task_service()
        .bulk_update(&user.id, input)
        .await?;

    Ok(Json(Data::new(tasks)))
}
