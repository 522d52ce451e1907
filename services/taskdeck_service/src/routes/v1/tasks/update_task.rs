use axum::{Json, extract::State};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::Deserialize;

use crate::{
    data::tasks::{Task, TaskId},
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    services::UpdateTask,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/tasks/{task_id}")]
pub struct UpdateTaskPath {
    pub task_id: TaskId,
}

#[utoipa::path(
    patch,
    path = "/tasks/{task_id}",
    tag = "tasks",
    params(("task_id" = String, Path, description = "Task id")),
    request_body = UpdateTask,
    responses(
        (status = OK, description = "Success", body = Data<Task>),
        (status = BAD_REQUEST, description = "Invalid input", body = crate::response::error::ErrorBody),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn update_task(
    UpdateTaskPath { task_id }: UpdateTaskPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(Json(input), _): WithRejection<Json<UpdateTask>, ApiError>,
) -> Result<Json<Data<Task>>, ApiError> {
    let task = state
        .provider
        .task_service()
        .update(&user.id, &task_id, input)
        .await?;

    Ok(Json(Data::new(task)))
}
