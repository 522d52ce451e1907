use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::{
    data::{
        members::Member,
        projects::ProjectId,
        tasks::{StatusFilter, TaskQuery, TaskStatus},
        users::UserId,
        workspaces::WorkspaceId,
    },
    services::ServiceError,
};

#[async_trait]
pub trait AnalyticsService: Send + Sync + 'static {
    async fn workspace_analytics(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Analytics, ServiceError>;

    async fn project_analytics(
        &self,
        user_id: &UserId,
        project_id: &ProjectId,
    ) -> Result<Analytics, ServiceError>;
}

pub type DynAnalyticsService = Box<dyn AnalyticsService>;

/// A month-over-month task statistic. Each metric narrows the scope query;
/// the aggregator counts it once per month window.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, VariantArray,
)]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    Total,
    Assigned,
    Completed,
    Incomplete,
    Overdue,
}

impl Metric {
    pub const ALL: &'static [Metric] = Self::VARIANTS;

    pub fn refine(
        self,
        query: TaskQuery,
        member: &Member,
        now: OffsetDateTime,
    ) -> TaskQuery {
        match self {
            Metric::Total => query,
            Metric::Assigned => query.assigned_to(member.id.clone()),
            Metric::Completed => {
                query.status(StatusFilter::Is(TaskStatus::Done))
            }
            Metric::Incomplete => {
                query.status(StatusFilter::IsNot(TaskStatus::Done))
            }
            Metric::Overdue => query
                .status(StatusFilter::IsNot(TaskStatus::Done))
                .due_before(now),
        }
    }
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub task_count: u64,
    pub task_difference: i64,
    pub assigned_tasks_count: u64,
    pub assigned_task_difference: i64,
    pub completed_tasks_count: u64,
    pub completed_tasks_difference: i64,
    pub incomplete_tasks_count: u64,
    pub incomplete_tasks_difference: i64,
    pub overdue_tasks_count: u64,
    pub overdue_tasks_difference: i64,
}

impl Analytics {
    /// Stores the current-month count and its change since last month.
    pub fn record(&mut self, metric: Metric, current: u64, previous: u64) {
        let difference = current as i64 - previous as i64;
        let (count, diff) = self.slots(metric);
        *count = current;
        *diff = difference;
    }

    pub fn count(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Total => self.task_count,
            Metric::Assigned => self.assigned_tasks_count,
            Metric::Completed => self.completed_tasks_count,
            Metric::Incomplete => self.incomplete_tasks_count,
            Metric::Overdue => self.overdue_tasks_count,
        }
    }

    pub fn difference(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Total => self.task_difference,
            Metric::Assigned => self.assigned_task_difference,
            Metric::Completed => self.completed_tasks_difference,
            Metric::Incomplete => self.incomplete_tasks_difference,
            Metric::Overdue => self.overdue_tasks_difference,
        }
    }

    fn slots(&mut self, metric: Metric) -> (&mut u64, &mut i64) {
        match metric {
            Metric::Total => (&mut self.task_count, &mut self.task_difference),
            Metric::Assigned => (
                &mut self.assigned_tasks_count,
                &mut self.assigned_task_difference,
            ),
            Metric::Completed => (
                &mut self.completed_tasks_count,
                &mut self.completed_tasks_difference,
            ),
            Metric::Incomplete => (
                &mut self.incomplete_tasks_count,
                &mut self.incomplete_tasks_difference,
            ),
            Metric::Overdue => (
                &mut self.overdue_tasks_count,
                &mut self.overdue_tasks_difference,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::data::members::MemberRole;

    #[test]
    fn test_record_computes_signed_difference() {
        let mut analytics = Analytics::default();

        analytics.record(Metric::Total, 10, 6);
        analytics.record(Metric::Overdue, 1, 3);

        assert_eq!(analytics.task_count, 10);
        assert_eq!(analytics.task_difference, 4);
        assert_eq!(analytics.count(Metric::Overdue), 1);
        assert_eq!(analytics.difference(Metric::Overdue), -2);
    }

    #[test]
    fn test_overdue_refinement() {
        let now = datetime!(2024-03-15 00:00 UTC);
        let member = Member::new(
            "m1".into(),
            "u1".into(),
            "ws".into(),
            MemberRole::Member,
            now,
        );

        let query = Metric::Overdue.refine(
            TaskQuery::in_workspace("ws".into()),
            &member,
            now,
        );

        assert_eq!(query.due_before, Some(now));
        assert_eq!(
            query.status,
            Some(StatusFilter::IsNot(TaskStatus::Done))
        );
    }

    #[test]
    fn test_response_field_names() {
        let json = serde_json::to_value(Analytics::default())
            .expect("should serialize");

        for key in [
            "taskCount",
            "taskDifference",
            "assignedTasksCount",
            "assignedTaskDifference",
            "completedTasksCount",
            "completedTasksDifference",
            "incompleteTasksCount",
            "incompleteTasksDifference",
            "overdueTasksCount",
            "overdueTasksDifference",
        ] {
            assert!(json.get(key).is_some(), "missing '{key}'");
        }
    }
}
