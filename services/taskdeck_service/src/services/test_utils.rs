use std::sync::Arc;

use time::{OffsetDateTime, macros::datetime};

use crate::{
    clock::ManualClock,
    config::UnorderedMap,
    data::{
        members::{Member, MemberId, MemberRole},
        projects::{Project, ProjectId},
        tasks::{Task, TaskId, TaskStatus},
        users::{User, UserId},
        workspaces::{Workspace, WorkspaceId},
    },
    data_impl::in_memory::{InMemoryDatabase, Tables},
    providers::{DependencyProvider, InMemoryDependencyProvider},
};

/// An in-memory store seeded with a few users and a pinned clock.
pub(crate) struct Fixture {
    pub db: Arc<InMemoryDatabase>,
    pub clock: Arc<ManualClock>,
    pub provider: Arc<dyn DependencyProvider>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::at(datetime!(2024-03-15 12:00 UTC))
    }

    pub fn at(now: OffsetDateTime) -> Self {
        let users = [
            ("admin", "Ada Admin"),
            ("member", "Max Member"),
            ("joiner", "Jo Joiner"),
            ("stranger", "Sam Stranger"),
        ]
        .into_iter()
        .map(|(id, name)| {
            User::new(UserId::new(id), name, format!("{id}@example.com"))
        })
        .collect();

        let db = Arc::new(InMemoryDatabase::new(Tables {
            users,
            ..Default::default()
        }));
        let clock = Arc::new(ManualClock::new(now));
        let provider = Arc::new(InMemoryDependencyProvider::new(
            db.clone(),
            Arc::new(UnorderedMap::default()),
            clock.clone(),
            12,
        ));

        Self {
            db,
            clock,
            provider,
        }
    }

    fn now(&self) -> OffsetDateTime {
        use crate::clock::Clock as _;
        self.clock.now()
    }

    pub fn workspace_with_admin(
        &self,
        user_id: &str,
        name: &str,
    ) -> (Workspace, Member) {
        let now = self.now();
        let workspace = Workspace::new(
            WorkspaceId::generate(),
            name,
            UserId::new(user_id),
            "abc123",
            None,
            now,
            now,
        );
        self.db.write().workspaces.push(workspace.clone());

        let admin = self.add_member(&workspace.id, user_id, MemberRole::Admin);

        (workspace, admin)
    }

    pub fn add_member(
        &self,
        workspace_id: &WorkspaceId,
        user_id: &str,
        role: MemberRole,
    ) -> Member {
        let member = Member::new(
            MemberId::generate(),
            UserId::new(user_id),
            workspace_id.clone(),
            role,
            self.now(),
        );
        self.db.write().members.push(member.clone());
        member
    }

    pub fn project(&self, workspace_id: &WorkspaceId, name: &str) -> Project {
        let now = self.now();
        let project = Project::new(
            ProjectId::generate(),
            workspace_id.clone(),
            name,
            None,
            now,
            now,
        );
        self.db.write().projects.push(project.clone());
        project
    }

    pub fn task(
        &self,
        project: &Project,
        assignee_id: Option<&MemberId>,
        name: &str,
    ) -> Task {
        self.insert_task(project, assignee_id.cloned(), name, self.now())
    }

    pub fn task_created_at(
        &self,
        project: &Project,
        created_at: OffsetDateTime,
    ) -> Task {
        self.insert_task(project, None, "Task", created_at)
    }

    /// Overwrites the stored task with the same id.
    pub fn replace_task(&self, task: Task) {
        let mut tables = self.db.write();
        if let Some(stored) =
            tables.tasks.iter_mut().find(|stored| stored.id == task.id)
        {
            *stored = task;
        }
    }

    fn insert_task(
        &self,
        project: &Project,
        assignee_id: Option<MemberId>,
        name: &str,
        created_at: OffsetDateTime,
    ) -> Task {
        let task = Task::new(
            TaskId::generate(),
            project.workspace_id.clone(),
            project.id.clone(),
            name,
            None,
            TaskStatus::Todo,
            assignee_id,
            None,
            1000,
            created_at,
            created_at,
        );
        self.db.write().tasks.push(task.clone());
        task
    }
}
