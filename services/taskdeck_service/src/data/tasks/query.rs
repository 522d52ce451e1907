use time::{
    Date, Duration, Month, OffsetDateTime, UtcOffset, error::ComponentRange,
};

use crate::data::{
    members::MemberId,
    projects::ProjectId,
    tasks::{Task, TaskStatus},
    workspaces::WorkspaceId,
};

/// An inclusive range of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl DateWindow {
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self { start, end }
    }

    /// The UTC calendar month containing `instant`, from its first
    /// nanosecond to its last.
    pub fn month_of(instant: OffsetDateTime) -> Result<Self, ComponentRange> {
        let date = instant.to_offset(UtcOffset::UTC).date();
        let first = Date::from_calendar_date(date.year(), date.month(), 1)?;
        let next = if first.month() == Month::December {
            Date::from_calendar_date(first.year() + 1, Month::January, 1)?
        } else {
            Date::from_calendar_date(first.year(), first.month().next(), 1)?
        };

        Ok(Self {
            start: first.midnight().assume_utc(),
            end: next.midnight().assume_utc() - Duration::nanoseconds(1),
        })
    }

    /// The calendar month immediately before this window's month.
    pub fn previous_month(&self) -> Result<Self, ComponentRange> {
        Self::month_of(self.start - Duration::nanoseconds(1))
    }

    pub fn contains(&self, instant: OffsetDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    Is(TaskStatus),
    IsNot(TaskStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::Is(expected) => status == *expected,
            StatusFilter::IsNot(excluded) => status != *excluded,
        }
    }
}

/// Conjunction of task predicates. Unset predicates match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub workspace_id: Option<WorkspaceId>,
    pub project_id: Option<ProjectId>,
    pub assignee_id: Option<MemberId>,
    pub status: Option<StatusFilter>,
    pub due_before: Option<OffsetDateTime>,
    pub due_on: Option<Date>,
    pub created_within: Option<DateWindow>,
    pub search: Option<String>,
}

impl TaskQuery {
    pub fn in_workspace(workspace_id: WorkspaceId) -> Self {
        Self {
            workspace_id: Some(workspace_id),
            ..Default::default()
        }
    }

    pub fn in_project(project_id: ProjectId) -> Self {
        Self {
            project_id: Some(project_id),
            ..Default::default()
        }
    }

    pub fn project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn assigned_to(mut self, assignee_id: MemberId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    pub fn due_before(mut self, instant: OffsetDateTime) -> Self {
        self.due_before = Some(instant);
        self
    }

    pub fn due_on(mut self, date: Date) -> Self {
        self.due_on = Some(date);
        self
    }

    pub fn created_within(mut self, window: DateWindow) -> Self {
        self.created_within = Some(window);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(workspace_id) = &self.workspace_id
            && task.workspace_id != *workspace_id
        {
            return false;
        }

        if let Some(project_id) = &self.project_id
            && task.project_id != *project_id
        {
            return false;
        }

        if let Some(assignee_id) = &self.assignee_id
            && task.assignee_id.as_ref() != Some(assignee_id)
        {
            return false;
        }

        if let Some(status) = &self.status
            && !status.matches(task.status)
        {
            return false;
        }

        // tasks without a due date never match a due date predicate
        if let Some(instant) = self.due_before
            && !task.due_date.is_some_and(|due| due < instant)
        {
            return false;
        }

        if let Some(date) = self.due_on
            && !task
                .due_date
                .is_some_and(|due| due.to_offset(UtcOffset::UTC).date() == date)
        {
            return false;
        }

        if let Some(window) = &self.created_within
            && !window.contains(task.created_at)
        {
            return false;
        }

        if let Some(search) = &self.search {
            let search = search.trim().to_lowercase();
            if !search.is_empty() && !task.name.to_lowercase().contains(&search)
            {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    fn task(status: TaskStatus, due_date: Option<OffsetDateTime>) -> Task {
        let created_at = datetime!(2024-03-10 12:00 UTC);

        Task::new(
            "task-1".into(),
            "ws-1".into(),
            "project-1".into(),
            "Write release notes",
            None,
            status,
            Some("member-1".into()),
            due_date,
            1000,
            created_at,
            created_at,
        )
    }

    #[test]
    fn test_month_of_mid_month() {
        let window = DateWindow::month_of(datetime!(2024-02-15 08:30 UTC))
            .expect("should compute window");

        assert_eq!(window.start, datetime!(2024-02-01 00:00 UTC));
        assert_eq!(
            window.end,
            datetime!(2024-03-01 00:00 UTC) - Duration::nanoseconds(1)
        );
    }

    #[test]
    fn test_month_of_december_rolls_over_year() {
        let window = DateWindow::month_of(datetime!(2023-12-31 23:59 UTC))
            .expect("should compute window");

        assert_eq!(window.start, datetime!(2023-12-01 00:00 UTC));
        assert!(window.contains(datetime!(2023-12-31 23:59:59.999 UTC)));
        assert!(!window.contains(datetime!(2024-01-01 00:00 UTC)));
    }

    #[test]
    fn test_previous_month_of_january() {
        let window = DateWindow::month_of(datetime!(2024-01-20 00:00 UTC))
            .expect("should compute window")
            .previous_month()
            .expect("should compute previous window");

        assert_eq!(window.start, datetime!(2023-12-01 00:00 UTC));
        assert_eq!(
            window.end,
            datetime!(2024-01-01 00:00 UTC) - Duration::nanoseconds(1)
        );
    }

    #[test]
    fn test_month_of_normalizes_offsets_to_utc() {
        let local = datetime!(2024-03-01 01:00 +02:00);
        let window =
            DateWindow::month_of(local).expect("should compute window");

        assert_eq!(window.start, datetime!(2024-02-01 00:00 UTC));
    }

    #[test]
    fn test_windows_do_not_overlap() {
        let current = DateWindow::month_of(datetime!(2024-05-05 00:00 UTC))
            .expect("should compute window");
        let previous =
            current.previous_month().expect("should compute window");

        assert!(previous.end < current.start);
    }

    #[test]
    fn test_due_before_ignores_tasks_without_due_date() {
        let now = datetime!(2024-03-15 00:00 UTC);
        let query = TaskQuery::default().due_before(now);

        assert!(!query.matches(&task(TaskStatus::Todo, None)));
        assert!(query.matches(&task(
            TaskStatus::Todo,
            Some(datetime!(2024-03-14 00:00 UTC))
        )));
        assert!(!query.matches(&task(
            TaskStatus::Todo,
            Some(datetime!(2024-03-16 00:00 UTC))
        )));
    }

    #[test]
    fn test_status_filters() {
        let done = task(TaskStatus::Done, None);
        let todo = task(TaskStatus::Todo, None);
        let not_done =
            TaskQuery::default().status(StatusFilter::IsNot(TaskStatus::Done));

        assert!(!not_done.matches(&done));
        assert!(not_done.matches(&todo));
        assert!(
            TaskQuery::default()
                .status(StatusFilter::Is(TaskStatus::Done))
                .matches(&done)
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let task = task(TaskStatus::Todo, None);

        assert!(TaskQuery::default().search("RELEASE").matches(&task));
        assert!(TaskQuery::default().search("  ").matches(&task));
        assert!(!TaskQuery::default().search("deploy").matches(&task));
    }

    #[test]
    fn test_due_on_compares_calendar_day() {
        let task = task(
            TaskStatus::Todo,
            Some(datetime!(2024-03-20 23:30 UTC)),
        );

        assert!(TaskQuery::default().due_on(date!(2024-03-20)).matches(&task));
        assert!(!TaskQuery::default().due_on(date!(2024-03-21)).matches(&task));
    }

    #[test]
    fn test_scope_predicates() {
        let task = task(TaskStatus::Todo, None);

        assert!(TaskQuery::in_workspace("ws-1".into()).matches(&task));
        assert!(!TaskQuery::in_workspace("ws-2".into()).matches(&task));
        assert!(TaskQuery::in_project("project-1".into()).matches(&task));
        assert!(
            !TaskQuery::default()
                .assigned_to("member-2".into())
                .matches(&task)
        );
    }
}
