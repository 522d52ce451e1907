use async_trait::async_trait;
use derive_new::new;

use crate::{
    clock::DynClock,
    data::{
        members::{DynMemberRepository, MemberId},
        projects::{DynProjectRepository, ProjectId},
        tasks::{DynTaskRepository, Task, TaskChanges, TaskId},
        users::{DynUserRepository, UserId},
        workspaces::WorkspaceId,
    },
    services::{
        BulkUpdateTasks, CreateTask, DynMembershipService, POSITION_STEP,
        PopulatedMember, PopulatedTask, ServiceError, TaskFilter, TaskService,
        UpdateTask, normalize_name, validate_input,
    },
};

#[derive(new)]
pub struct DefaultTaskService {
    task_repository: DynTaskRepository,
    project_repository: DynProjectRepository,
    member_repository: DynMemberRepository,
    user_repository: DynUserRepository,
    membership: DynMembershipService,
    clock: DynClock,
}

impl DefaultTaskService {
    async fn load_guarded(
        &self,
        user_id: &UserId,
        task_id: &TaskId,
    ) -> Result<Task, ServiceError> {
        let task = self
            .task_repository
            .get(task_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Task"))?;

        self.membership
            .require_member(&task.workspace_id, user_id)
            .await?;

        Ok(task)
    }

    async fn ensure_project_in_workspace(
        &self,
        project_id: &ProjectId,
        workspace_id: &WorkspaceId,
    ) -> Result<(), ServiceError> {
        match self.project_repository.get(project_id).await? {
            Some(project) if project.workspace_id == *workspace_id => Ok(()),
            _ => Err(ServiceError::validation(
                "Project does not belong to this workspace",
            )),
        }
    }

    async fn ensure_assignee_in_workspace(
        &self,
        member_id: &MemberId,
        workspace_id: &WorkspaceId,
    ) -> Result<(), ServiceError> {
        match self.member_repository.get(member_id).await? {
            Some(member) if member.workspace_id == *workspace_id => Ok(()),
            _ => Err(ServiceError::validation(
                "Assignee is not a member of this workspace",
            )),
        }
    }

    /// Attaches each task's project and assignee.
    async fn populate(
        &self,
        workspace_id: &WorkspaceId,
        tasks: Vec<Task>,
    ) -> Result<Vec<PopulatedTask>, ServiceError> {
        if tasks.is_empty() {
            return Ok(vec![]);
        }

        let projects =
            self.project_repository.list_by_workspace(workspace_id).await?;
        let members =
            self.member_repository.list_by_workspace(workspace_id).await?;
        let user_ids = members
            .iter()
            .map(|member| member.user_id.clone())
            .collect::<Vec<_>>();
        let users = self.user_repository.get_many(&user_ids).await?;

        Ok(tasks
            .into_iter()
            .map(|task| {
                let project = projects
                    .iter()
                    .find(|project| project.id == task.project_id)
                    .cloned();
                let assignee = task.assignee_id.as_ref().and_then(|id| {
                    members.iter().find(|member| member.id == *id).map(
                        |member| {
                            let user = users
                                .iter()
                                .find(|user| user.id == member.user_id);
                            PopulatedMember::new(member.clone(), user)
                        },
                    )
                });

                PopulatedTask {
                    task,
                    project,
                    assignee,
                }
            })
            .collect())
    }
}

#[async_trait]
impl TaskService for DefaultTaskService {
    async fn list(
        &self,
        user_id: &UserId,
        filter: TaskFilter,
    ) -> Result<Vec<PopulatedTask>, ServiceError> {
        self.membership
            .require_member(&filter.workspace_id, user_id)
            .await?;

        let tasks = self.task_repository.list(&filter.to_query()).await?;

        self.populate(&filter.workspace_id, tasks).await
    }

    async fn create(
        &self,
        user_id: &UserId,
        input: CreateTask,
    ) -> Result<Task, ServiceError> {
        self.membership
            .require_member(&input.workspace_id, user_id)
            .await?;

        let input = CreateTask {
            name: normalize_name(&input.name),
            ..input
        };
        validate_input(&input)?;

        self.ensure_project_in_workspace(&input.project_id, &input.workspace_id)
            .await?;
        if let Some(assignee_id) = &input.assignee_id {
            self.ensure_assignee_in_workspace(assignee_id, &input.workspace_id)
                .await?;
        }

        let position = self
            .task_repository
            .highest_position(&input.workspace_id, input.status)
            .await?
            .map_or(POSITION_STEP, |highest| {
                highest.saturating_add(POSITION_STEP)
            });

        let now = self.clock.now();
        let task = self
            .task_repository
            .create(Task::new(
                TaskId::generate(),
                input.workspace_id,
                input.project_id,
                input.name,
                input.description,
                input.status,
                input.assignee_id,
                input.due_date,
                position,
                now,
                now,
            ))
            .await?;

        tracing::info!(task_id = %task.id, position, "created task");

        Ok(task)
    }

    async fn get(
        &self,
        user_id: &UserId,
        task_id: &TaskId,
    ) -> Result<PopulatedTask, ServiceError> {
        let task = self.load_guarded(user_id, task_id).await?;
        let workspace_id = task.workspace_id.clone();

        self.populate(&workspace_id, vec![task])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::not_found("Task"))
    }

    async fn update(
        &self,
        user_id: &UserId,
        task_id: &TaskId,
        input: UpdateTask,
    ) -> Result<Task, ServiceError> {
        let task = self.load_guarded(user_id, task_id).await?;

        let input = UpdateTask {
            name: input.name.as_deref().map(normalize_name),
            ..input
        };
        validate_input(&input)?;

        if let Some(project_id) = &input.project_id {
            self.ensure_project_in_workspace(project_id, &task.workspace_id)
                .await?;
        }
        if let Some(Some(assignee_id)) = &input.assignee_id {
            self.ensure_assignee_in_workspace(assignee_id, &task.workspace_id)
                .await?;
        }

        let changes = TaskChanges {
            name: input.name,
            description: input.description,
            status: input.status,
            project_id: input.project_id,
            assignee_id: input.assignee_id,
            due_date: input.due_date,
            position: input.position,
        };

        self.task_repository
            .update(task_id, changes, self.clock.now())
            .await?
            .ok_or_else(|| ServiceError::not_found("Task"))
    }

    async fn delete(
        &self,
        user_id: &UserId,
        task_id: &TaskId,
    ) -> Result<TaskId, ServiceError> {
        self.load_guarded(user_id, task_id).await?;
        self.task_repository.delete(task_id).await?;

        Ok(task_id.clone())
    }

    async fn bulk_update(
        &self,
        user_id: &UserId,
        input: BulkUpdateTasks,
    ) -> Result<Vec<Task>, ServiceError> {
        validate_input(&input)?;

        let mut ids = input
            .tasks
            .iter()
            .map(|task| task.id.clone())
            .collect::<Vec<_>>();
        ids.sort();
        ids.dedup();

        let existing = self.task_repository.get_many(&ids).await?;

        let mut workspace_ids = existing
            .iter()
            .map(|task| &task.workspace_id)
            .collect::<Vec<_>>();
        workspace_ids.sort();
        workspace_ids.dedup();

        // membership is checked before existence
        for workspace_id in &workspace_ids {
            self.membership.require_member(workspace_id, user_id).await?;
        }

        if existing.len() != ids.len() {
            return Err(ServiceError::not_found("Task"));
        }

        let workspace_id = match workspace_ids.as_slice() {
            [workspace_id] => (*workspace_id).clone(),
            _ => {
                return Err(ServiceError::validation(
                    "All tasks must belong to the same workspace",
                ));
            }
        };

        let changes = input
            .tasks
            .into_iter()
            .map(|task| {
                (
                    task.id,
                    TaskChanges {
                        status: Some(task.status),
                        position: Some(task.position),
                        ..Default::default()
                    },
                )
            })
            .collect::<Vec<_>>();

        let updated = self
            .task_repository
            .update_many(changes, self.clock.now())
            .await?;

        tracing::debug!(
            workspace_id = %workspace_id,
            count = updated.len(),
            "moved tasks"
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        data::{members::MemberRole, tasks::TaskStatus},
        services::{
            BulkUpdateTasks, CreateTask, ServiceErrorKind, TaskFilter,
            TaskMove, UpdateTask, test_utils::Fixture,
        },
    };

    fn create_input(
        workspace_id: &str,
        project_id: &str,
        status: TaskStatus,
    ) -> CreateTask {
        CreateTask {
            workspace_id: workspace_id.into(),
            project_id: project_id.into(),
            name: "Draft announcement".to_string(),
            status,
            assignee_id: None,
            due_date: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_appends_to_status_column() {
        let fixture = Fixture::new();
        let (workspace, _) = fixture.workspace_with_admin("admin", "Acme");
        let project = fixture.project(&workspace.id, "Launch");
        let service = fixture.provider.task_service();
        let input = create_input(
            workspace.id.as_str(),
            project.id.as_str(),
            TaskStatus::Todo,
        );

        let first = service
            .create(&"admin".into(), input.clone())
            .await
            .expect("should create");
        let second = service
            .create(&"admin".into(), input)
            .await
            .expect("should create");
        let other_column = service
            .create(
                &"admin".into(),
                create_input(
                    workspace.id.as_str(),
                    project.id.as_str(),
                    TaskStatus::Done,
                ),
            )
            .await
            .expect("should create");

        assert_eq!(first.position, 1000);
        assert_eq!(second.position, 2000);
        assert_eq!(other_column.position, 1000);
    }

    #[tokio::test]
    async fn test_create_rejects_foreign_project() {
        let fixture = Fixture::new();
        let (workspace, _) = fixture.workspace_with_admin("admin", "Acme");
        let (other, _) = fixture.workspace_with_admin("admin", "Other");
        let foreign = fixture.project(&other.id, "Elsewhere");

        let error = fixture
            .provider
            .task_service()
            .create(
                &"admin".into(),
                create_input(
                    workspace.id.as_str(),
                    foreign.id.as_str(),
                    TaskStatus::Todo,
                ),
            )
            .await
            .expect_err("foreign project should be rejected");

        assert_eq!(error.kind(), ServiceErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_list_filters_and_populates() {
        let fixture = Fixture::new();
        let (workspace, admin) = fixture.workspace_with_admin("admin", "Acme");
        let project = fixture.project(&workspace.id, "Launch");
        let mut due = fixture.task(&project, Some(&admin.id), "Ship Beta");
        due.due_date = Some(time::macros::datetime!(2024-03-20 18:00 UTC));
        fixture.replace_task(due);
        fixture.task(&project, None, "Write docs");

        let mut filter = TaskFilter::new(workspace.id.clone());
        filter.search = Some("beta".to_string());
        filter.due_date = Some(date!(2024-03-20));

        let tasks = fixture
            .provider
            .task_service()
            .list(&"admin".into(), filter)
            .await
            .expect("should list");

        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.task.name, "Ship Beta");
        assert_eq!(task.project.as_ref().map(|p| &p.id), Some(&project.id));
        let assignee = task.assignee.as_ref().expect("should have assignee");
        assert_eq!(assignee.name, "Ada Admin");
    }

    #[tokio::test]
    async fn test_update_clears_assignee() {
        let fixture = Fixture::new();
        let (workspace, admin) = fixture.workspace_with_admin("admin", "Acme");
        let project = fixture.project(&workspace.id, "Launch");
        let task = fixture.task(&project, Some(&admin.id), "Review");

        let updated = fixture
            .provider
            .task_service()
            .update(
                &"admin".into(),
                &task.id,
                UpdateTask {
                    assignee_id: Some(None),
                    status: Some(TaskStatus::InReview),
                    ..Default::default()
                },
            )
            .await
            .expect("should update");

        assert!(updated.assignee_id.is_none());
        assert_eq!(updated.status, TaskStatus::InReview);
        assert_eq!(updated.name, "Review");
    }

    #[tokio::test]
    async fn test_bulk_update_requires_single_workspace() {
        let fixture = Fixture::new();
        let (first, _) = fixture.workspace_with_admin("admin", "Acme");
        let (second, _) = fixture.workspace_with_admin("admin", "Other");
        let a = fixture.task(&fixture.project(&first.id, "A"), None, "a");
        let b = fixture.task(&fixture.project(&second.id, "B"), None, "b");
        let service = fixture.provider.task_service();

        let moves = |ids: &[&crate::data::tasks::Task]| BulkUpdateTasks {
            tasks: ids
                .iter()
                .map(|task| TaskMove {
                    id: task.id.clone(),
                    status: TaskStatus::Done,
                    position: 3000,
                })
                .collect(),
        };

        let error = service
            .bulk_update(&"admin".into(), moves(&[&a, &b]))
            .await
            .expect_err("mixed workspaces should be rejected");
        assert_eq!(error.kind(), ServiceErrorKind::Validation);

        let updated = service
            .bulk_update(&"admin".into(), moves(&[&a]))
            .await
            .expect("should move");
        assert_eq!(updated[0].status, TaskStatus::Done);
        assert_eq!(updated[0].position, 3000);
    }

    #[tokio::test]
    async fn test_bulk_update_requires_membership() {
        let fixture = Fixture::new();
        let (workspace, _) = fixture.workspace_with_admin("admin", "Acme");
        fixture.add_member(&workspace.id, "member", MemberRole::Member);
        let task =
            fixture.task(&fixture.project(&workspace.id, "A"), None, "a");

        let error = fixture
            .provider
            .task_service()
            .bulk_update(
                &"stranger".into(),
                BulkUpdateTasks {
                    tasks: vec![TaskMove {
                        id: task.id,
                        status: TaskStatus::Todo,
                        position: 1000,
                    }],
                },
            )
            .await
            .expect_err("stranger should be rejected");

        assert_eq!(error.kind(), ServiceErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn test_bulk_update_hides_unknown_ids_from_non_members() {
        let fixture = Fixture::new();
        let (workspace, _) = fixture.workspace_with_admin("admin", "Acme");
        let task =
            fixture.task(&fixture.project(&workspace.id, "A"), None, "a");
        let service = fixture.provider.task_service();

        let moves = BulkUpdateTasks {
            tasks: vec![
                TaskMove {
                    id: task.id,
                    status: TaskStatus::Todo,
                    position: 1000,
                },
                TaskMove {
                    id: "made-up".into(),
                    status: TaskStatus::Todo,
                    position: 2000,
                },
            ],
        };

        let error = service
            .bulk_update(&"stranger".into(), moves.clone())
            .await
            .expect_err("stranger should be rejected");
        assert_eq!(error.kind(), ServiceErrorKind::Unauthorized);

        let error = service
            .bulk_update(&"admin".into(), moves)
            .await
            .expect_err("unknown id should be rejected");
        assert_eq!(error.kind(), ServiceErrorKind::NotFound);
    }
}
