use axum::{Json, extract::State};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::Deserialize;

use crate::{
    data::tasks::Task,
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    services::CreateTask,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/tasks")]
pub struct CreateTaskPath;

#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    description = "Create a task at the end of its status column",
    request_body = CreateTask,
    responses(
        (status = OK, description = "Success", body = Data<Task>),
        (status = BAD_REQUEST, description = "Invalid input", body = crate::response::error::ErrorBody),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn create_task(
    _: CreateTaskPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(Json(input), _): WithRejection<Json<CreateTask>, ApiError>,
) -> Result<Json<Data<Task>>, ApiError> {
    let task = state
        .provider
        .task_service()
        .create(&user.id, input)
        .await?;

    Ok(Json(Data::new(task)))
}
