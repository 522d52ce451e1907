use std::sync::Arc;

use derive_new::new;

use crate::{
    clock::DynClock,
    config::{SessionConfiguration, UnorderedMap},
    data::{
        members::DynMemberRepository, projects::DynProjectRepository,
        tasks::DynTaskRepository, users::DynUserRepository,
        workspaces::DynWorkspaceRepository,
    },
    data_impl::in_memory::{
        InMemoryDatabase, InMemoryMemberRepository, InMemoryProjectRepository,
        InMemoryTaskRepository, InMemoryUserRepository,
        InMemoryWorkspaceRepository,
    },
    providers::DependencyProvider,
    security::{DynSessionService, InMemorySessionService},
    services::{
        DefaultAnalyticsService, DefaultMemberService,
        DefaultMembershipService, DefaultProjectService, DefaultTaskService,
        DefaultWorkspaceService, DynAnalyticsService, DynMemberService,
        DynMembershipService, DynProjectService, DynTaskService,
        DynWorkspaceService,
    },
};

#[derive(Clone, new)]
pub struct InMemoryDependencyProvider {
    data: Arc<InMemoryDatabase>,
    sessions: Arc<UnorderedMap<String, SessionConfiguration>>,
    clock: DynClock,
    invite_code_length: usize,
}

impl DependencyProvider for InMemoryDependencyProvider {
    fn user_repository(&self) -> DynUserRepository {
        Box::new(InMemoryUserRepository::new(self.data.clone()))
    }

    fn workspace_repository(&self) -> DynWorkspaceRepository {
        Box::new(InMemoryWorkspaceRepository::new(self.data.clone()))
    }

    fn member_repository(&self) -> DynMemberRepository {
        Box::new(InMemoryMemberRepository::new(self.data.clone()))
    }

    fn project_repository(&self) -> DynProjectRepository {
        Box::new(InMemoryProjectRepository::new(self.data.clone()))
    }

    fn task_repository(&self) -> DynTaskRepository {
        Box::new(InMemoryTaskRepository::new(self.data.clone()))
    }

    fn membership_service(&self) -> DynMembershipService {
        Box::new(DefaultMembershipService::new(self.member_repository()))
    }

    fn analytics_service(&self) -> DynAnalyticsService {
        Box::new(DefaultAnalyticsService::new(
            self.task_repository(),
            self.project_repository(),
            self.membership_service(),
            self.clock.clone(),
        ))
    }

    fn workspace_service(&self) -> DynWorkspaceService {
        Box::new(DefaultWorkspaceService::new(
            self.workspace_repository(),
            self.member_repository(),
            self.project_repository(),
            self.task_repository(),
            self.membership_service(),
            self.clock.clone(),
            self.invite_code_length,
        ))
    }

    fn project_service(&self) -> DynProjectService {
        Box::new(DefaultProjectService::new(
            self.project_repository(),
            self.task_repository(),
            self.membership_service(),
            self.clock.clone(),
        ))
    }

    fn task_service(&self) -> DynTaskService {
        Box::new(DefaultTaskService::new(
            self.task_repository(),
            self.project_repository(),
            self.member_repository(),
            self.user_repository(),
            self.membership_service(),
            self.clock.clone(),
        ))
    }

    fn member_service(&self) -> DynMemberService {
        Box::new(DefaultMemberService::new(
            self.member_repository(),
            self.user_repository(),
            self.membership_service(),
        ))
    }

    fn session_service(&self) -> DynSessionService {
        Box::new(InMemorySessionService::new(
            self.sessions.clone(),
            self.user_repository(),
            self.clock.clone(),
        ))
    }
}
