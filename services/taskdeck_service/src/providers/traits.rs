use crate::{
    data::{
        members::DynMemberRepository, projects::DynProjectRepository,
        tasks::DynTaskRepository, users::DynUserRepository,
        workspaces::DynWorkspaceRepository,
    },
    security::DynSessionService,
    services::{
        DynAnalyticsService, DynMemberService, DynMembershipService,
        DynProjectService, DynTaskService, DynWorkspaceService,
    },
};

pub trait DependencyProvider: Send + Sync + 'static {
    fn user_repository(&self) -> DynUserRepository;
    fn workspace_repository(&self) -> DynWorkspaceRepository;
    fn member_repository(&self) -> DynMemberRepository;
    fn project_repository(&self) -> DynProjectRepository;
    fn task_repository(&self) -> DynTaskRepository;
    fn membership_service(&self) -> DynMembershipService;
    fn analytics_service(&self) -> DynAnalyticsService;
    fn workspace_service(&self) -> DynWorkspaceService;
    fn project_service(&self) -> DynProjectService;
    fn task_service(&self) -> DynTaskService;
    fn member_service(&self) -> DynMemberService;
    fn session_service(&self) -> DynSessionService;
}
