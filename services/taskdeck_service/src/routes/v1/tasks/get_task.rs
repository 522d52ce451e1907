use axum::{Json, extract::State};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::tasks::TaskId,
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    services::PopulatedTask,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/tasks/{task_id}")]
pub struct GetTaskPath {
    pub task_id: TaskId,
}

#[utoipa::path(
    get,
    path = "/tasks/{task_id}",
    tag = "tasks",
    params(("task_id" = String, Path, description = "Task id")),
    responses(
        (status = OK, description = "Success", body = Data<PopulatedTask>),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_task(
    GetTaskPath { task_id }: GetTaskPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Data<PopulatedTask>>, ApiError> {
    let task = state
        .provider
        .task_service()
        .get(&user.id, &task_id)
        .await?;

    Ok(Json(Data::new(task)))
}
