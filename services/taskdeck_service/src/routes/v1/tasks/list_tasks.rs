use std::str::FromStr as _;

use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    data::{tasks::TaskStatus, workspaces::WorkspaceId},
    extractors::CurrentUser,
    response::{
        data::{Data, Documents},
        error::ApiError,
    },
    routes::v1::common::{non_empty, parse_due_date},
    services::{PopulatedTask, TaskFilter},
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/tasks")]
pub struct ListTasksPath;

#[derive(Deserialize, IntoParams, Debug)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListTasksQuery {
    pub workspace_id: WorkspaceId,
    pub project_id: Option<String>,
    /// One of BACKLOG, TODO, IN_PROGRESS, IN_REVIEW, DONE
    pub status: Option<String>,
    pub assignee_id: Option<String>,
    /// Case-insensitive match on the task name
    pub search: Option<String>,
    /// A calendar day, `YYYY-MM-DD`, or an RFC 3339 instant
    pub due_date: Option<String>,
}

impl ListTasksQuery {
    fn into_filter(self) -> Result<TaskFilter, ApiError> {
        let status = non_empty(self.status)
            .map(|status| {
                TaskStatus::from_str(status.trim()).map_err(|_| {
                    ApiError::bad_request(format!("Invalid status '{status}'"))
                })
            })
            .transpose()?;
        let due_date = non_empty(self.due_date)
            .map(|date| parse_due_date(&date))
            .transpose()?;

        Ok(TaskFilter {
            workspace_id: self.workspace_id,
            project_id: non_empty(self.project_id).map(Into::into),
            status,
            assignee_id: non_empty(self.assignee_id).map(Into::into),
            search: non_empty(self.search),
            due_date,
        })
    }
}

#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    description = "Tasks of a workspace matching every given filter, newest first",
    params(ListTasksQuery),
    responses(
        (status = OK, description = "Success", body = Data<Documents<PopulatedTask>>),
        (status = BAD_REQUEST, description = "Invalid filter", body = crate::response::error::ErrorBody),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_tasks(
    _: ListTasksPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(Query(query), _): WithRejection<
        Query<ListTasksQuery>,
        ApiError,
    >,
) -> Result<Json<Data<Documents<PopulatedTask>>>, ApiError> {
    let tasks = state
        .provider
        .task_service()
        .list(&user.id, query.into_filter()?)
        .await?;

    Ok(Json(Data::new(tasks.into())))
}
