use axum::{Json, extract::State};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::tasks::TaskId,
    extractors::CurrentUser,
    response::{
        data::{Data, Deleted},
        error::ApiError,
    },
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/tasks/{task_id}")]
pub struct DeleteTaskPath {
    pub task_id: TaskId,
}

#[utoipa::path(
    delete,
    path = "/tasks/{task_id}",
    tag = "tasks",
    params(("task_id" = String, Path, description = "Task id")),
    responses(
        (status = OK, description = "Success", body = Data<Deleted<TaskId>>),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_task(
    DeleteTaskPath { task_id }: DeleteTaskPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Data<Deleted<TaskId>>>, ApiError> {
    let id = state
        .provider
        .task_service()
        .delete(&user.id, &task_id)
        .await?;

    Ok(Json(Data::new(Deleted::new(id))))
}
