mod bulk_update_tasks;
mod create_task;
mod delete_task;
mod get_task;
mod list_tasks;
mod update_task;

pub use bulk_update_tasks::*;
pub use create_task::*;
pub use delete_task::*;
pub use get_task::*;
pub use list_tasks::*;
pub use update_task::*;

use axum::Router;
use axum_extra::routing::RouterExt;
use utoipa::OpenApi;

use crate::{
    data::tasks::{Task, TaskId, TaskStatus},
    response::{
        data::{Data, Deleted, Documents},
        error::ErrorBody,
    },
    services::{
        BulkUpdateTasks, CreateTask, PopulatedMember, PopulatedTask, TaskMove,
        UpdateTask,
    },
    state::ServiceState,
};

pub fn build_router() -> Router<ServiceState> {
    Router::new()
        .typed_get(list_tasks)
        .typed_post(create_task)
        .typed_post(bulk_update_tasks)
        .typed_get(get_task)
        .typed_patch(update_task)
        .typed_delete(delete_task)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list_tasks,
        create_task,
        bulk_update_tasks,
        get_task,
        update_task,
        delete_task,
    ),
    components(
        schemas(
            Data<Documents<PopulatedTask>>,
            Data<PopulatedTask>,
            Data<Task>,
            Data<Vec<Task>>,
            Data<Deleted<TaskId>>,
            PopulatedMember,
            CreateTask,
            UpdateTask,
            BulkUpdateTasks,
            TaskMove,
            TaskStatus,
            ErrorBody,
        )
    ),
    tags((name = "tasks", description = "Tasks on the board")),
)]
pub struct TasksApiDoc;
