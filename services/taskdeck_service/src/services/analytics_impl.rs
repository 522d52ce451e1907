use async_trait::async_trait;
use derive_new::new;

use crate::{
    clock::DynClock,
    data::{
        members::Member,
        projects::{DynProjectRepository, ProjectId},
        tasks::{DateWindow, DynTaskRepository, TaskQuery},
        users::UserId,
        workspaces::WorkspaceId,
    },
    services::{
        Analytics, AnalyticsService, DynMembershipService, Metric,
        ServiceError,
    },
};

#[derive(new)]
pub struct DefaultAnalyticsService {
    task_repository: DynTaskRepository,
    project_repository: DynProjectRepository,
    membership: DynMembershipService,
    clock: DynClock,
}

impl DefaultAnalyticsService {
    /// Counts every metric for the current and previous UTC month of
    /// creation dates.
    async fn aggregate(
        &self,
        scope: TaskQuery,
        member: &Member,
    ) -> Result<Analytics, ServiceError> {
        let now = self.clock.now();
        let current = DateWindow::month_of(now).map_err(ServiceError::custom)?;
        let previous = current.previous_month().map_err(ServiceError::custom)?;

        let mut analytics = Analytics::default();

        for metric in Metric::ALL.iter().copied() {
            let query = metric.refine(scope.clone(), member, now);

            let this_month = self
                .task_repository
                .count(&query.clone().created_within(current))
                .await?;
            let last_month = self
                .task_repository
                .count(&query.created_within(previous))
                .await?;

            tracing::trace!(%metric, this_month, last_month, "counted metric");

            analytics.record(metric, this_month, last_month);
        }

        Ok(analytics)
    }
}

#[async_trait]
impl AnalyticsService for DefaultAnalyticsService {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn workspace_analytics(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Analytics, ServiceError> {
        let member =
            self.membership.require_member(workspace_id, user_id).await?;

        self.aggregate(TaskQuery::in_workspace(workspace_id.clone()), &member)
            .await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn project_analytics(
        &self,
        user_id: &UserId,
        project_id: &ProjectId,
    ) -> Result<Analytics, ServiceError> {
        let project = self
            .project_repository
            .get(project_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Project"))?;

        let member = self
            .membership
            .require_member(&project.workspace_id, user_id)
            .await?;

        self.aggregate(TaskQuery::in_project(project.id), &member)
            .await
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, macros::datetime};

    use crate::{
        data::{members::MemberRole, tasks::TaskStatus},
        services::{Metric, ServiceErrorKind, test_utils::Fixture},
    };

    #[tokio::test]
    async fn test_month_over_month_totals() {
        let fixture = Fixture::at(datetime!(2024-03-20 12:00 UTC));
        let (workspace, _) = fixture.workspace_with_admin("admin", "Acme");
        let project = fixture.project(&workspace.id, "Launch");

        for day in 1..=10 {
            fixture.task_created_at(
                &project,
                datetime!(2024-03-01 00:00 UTC) + Duration::days(day),
            );
        }
        for day in 0..6 {
            fixture.task_created_at(
                &project,
                datetime!(2024-02-01 00:00 UTC) + Duration::days(day),
            );
        }
        // older tasks fall outside both windows
        fixture.task_created_at(&project, datetime!(2024-01-31 23:59 UTC));

        let analytics = fixture
            .provider
            .analytics_service()
            .workspace_analytics(&"admin".into(), &workspace.id)
            .await
            .expect("should aggregate");

        assert_eq!(analytics.task_count, 10);
        assert_eq!(analytics.task_difference, 4);
        assert_eq!(analytics.incomplete_tasks_count, 10);
        assert_eq!(analytics.completed_tasks_count, 0);
    }

    #[tokio::test]
    async fn test_window_boundaries_are_inclusive() {
        let fixture = Fixture::at(datetime!(2024-03-31 23:59:59 UTC));
        let (workspace, _) = fixture.workspace_with_admin("admin", "Acme");
        let project = fixture.project(&workspace.id, "Launch");
        fixture.task_created_at(&project, datetime!(2024-03-01 00:00 UTC));
        fixture.task_created_at(&project, datetime!(2024-03-31 23:59:59 UTC));
        fixture.task_created_at(&project, datetime!(2024-02-29 23:59:59 UTC));

        let analytics = fixture
            .provider
            .analytics_service()
            .workspace_analytics(&"admin".into(), &workspace.id)
            .await
            .expect("should aggregate");

        assert_eq!(analytics.count(Metric::Total), 2);
        assert_eq!(analytics.difference(Metric::Total), 1);
    }

    #[tokio::test]
    async fn test_overdue_and_assigned_metrics() {
        let now = datetime!(2024-03-20 12:00 UTC);
        let fixture = Fixture::at(now);
        let (workspace, admin) = fixture.workspace_with_admin("admin", "Acme");
        let project = fixture.project(&workspace.id, "Launch");

        let mut past_due = fixture.task(&project, Some(&admin.id), "Late");
        past_due.due_date = Some(now - Duration::days(1));
        fixture.replace_task(past_due);

        let mut done = fixture.task(&project, Some(&admin.id), "Done late");
        done.due_date = Some(now - Duration::days(1));
        done.status = TaskStatus::Done;
        fixture.replace_task(done);

        let mut future = fixture.task(&project, None, "Upcoming");
        future.due_date = Some(now + Duration::days(1));
        fixture.replace_task(future);

        fixture.task(&project, None, "No due date");

        let analytics = fixture
            .provider
            .analytics_service()
            .project_analytics(&"admin".into(), &project.id)
            .await
            .expect("should aggregate");

        assert_eq!(analytics.task_count, 4);
        assert_eq!(analytics.assigned_tasks_count, 2);
        assert_eq!(analytics.completed_tasks_count, 1);
        assert_eq!(analytics.incomplete_tasks_count, 3);
        assert_eq!(analytics.overdue_tasks_count, 1);
        assert_eq!(analytics.overdue_tasks_difference, 1);
    }

    #[tokio::test]
    async fn test_non_member_is_unauthorized() {
        let fixture = Fixture::new();
        let (workspace, _) = fixture.workspace_with_admin("admin", "Acme");
        let project = fixture.project(&workspace.id, "Launch");
        fixture.add_member(&workspace.id, "member", MemberRole::Member);
        let service = fixture.provider.analytics_service();

        let error = service
            .workspace_analytics(&"stranger".into(), &workspace.id)
            .await
            .expect_err("stranger should be rejected");
        assert_eq!(error.kind(), ServiceErrorKind::Unauthorized);

        assert!(
            service
                .project_analytics(&"member".into(), &project.id)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_missing_project_is_not_found() {
        let fixture = Fixture::new();

        let error = fixture
            .provider
            .analytics_service()
            .project_analytics(&"admin".into(), &"missing".into())
            .await
            .expect_err("missing project");

        assert_eq!(error.kind(), ServiceErrorKind::NotFound);
    }
}
