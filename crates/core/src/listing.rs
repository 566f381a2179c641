//! Derived, non-persisted views over a list of projects.
//!
//! Used by the client against its cached copy of the project list. None of
//! these values are ever stored; they are recomputed from the cached
//! records each time they are needed.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::project::ProjectStatus;
use crate::types::Timestamp;

/// Display format for due dates, e.g. `Jan 5, 2025`.
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Read access to the fields the listing rules need.
pub trait ProjectView {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn status(&self) -> ProjectStatus;
    fn due_date(&self) -> NaiveDate;
}

// ---------------------------------------------------------------------------
// Overdue
// ---------------------------------------------------------------------------

/// A project is overdue when it is not completed and the start of its due
/// date (00:00 UTC) is strictly before `now`.
pub fn is_overdue(due_date: NaiveDate, status: ProjectStatus, now: Timestamp) -> bool {
    if status == ProjectStatus::Completed {
        return false;
    }
    due_date.and_time(NaiveTime::MIN).and_utc() < now
}

pub fn format_due_date(due_date: NaiveDate) -> String {
    due_date.format(DISPLAY_DATE_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Status half of the filter: the wildcard or one exact status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Search term and status selection, ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl ProjectFilter {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// Case-insensitive substring match on name or description, plus the
    /// status selection. An empty search term matches everything.
    pub fn matches<P: ProjectView>(&self, project: &P) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = project.name().to_lowercase().contains(&needle)
            || project
                .description()
                .is_some_and(|d| d.to_lowercase().contains(&needle));

        matches_search && self.status.matches(project.status())
    }

    pub fn apply<'a, P: ProjectView>(&self, projects: &'a [P]) -> Vec<&'a P> {
        projects.iter().filter(|p| self.matches(*p)).collect()
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Number of projects per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn tally<P: ProjectView>(projects: &[P]) -> Self {
        projects
            .iter()
            .fold(Self::default(), |mut counts, p| {
                match p.status() {
                    ProjectStatus::Pending => counts.pending += 1,
                    ProjectStatus::InProgress => counts.in_progress += 1,
                    ProjectStatus::Completed => counts.completed += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    struct Item {
        name: &'static str,
        description: Option<&'static str>,
        status: ProjectStatus,
        due_date: NaiveDate,
    }

    impl ProjectView for Item {
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> Option<&str> {
            self.description
        }
        fn status(&self) -> ProjectStatus {
            self.status
        }
        fn due_date(&self) -> NaiveDate {
            self.due_date
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                name: "Website Redesign",
                description: Some("New landing page"),
                status: ProjectStatus::InProgress,
                due_date: date(2025, 3, 1),
            },
            Item {
                name: "Launch",
                description: None,
                status: ProjectStatus::Pending,
                due_date: date(2025, 1, 1),
            },
            Item {
                name: "Audit",
                description: Some("Security review of the LANDING flow"),
                status: ProjectStatus::Completed,
                due_date: date(2024, 6, 30),
            },
        ]
    }

    // -- is_overdue -----------------------------------------------------------

    #[test]
    fn completed_is_never_overdue() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert!(!is_overdue(date(2000, 1, 1), ProjectStatus::Completed, now));
    }

    #[test]
    fn past_due_date_is_overdue_unless_completed() {
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 9, 0, 0).unwrap();
        assert!(is_overdue(date(2025, 1, 1), ProjectStatus::Pending, now));
        assert!(is_overdue(date(2025, 1, 1), ProjectStatus::InProgress, now));
    }

    #[test]
    fn future_due_date_is_not_overdue() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(!is_overdue(date(2025, 1, 2), ProjectStatus::Pending, now));
    }

    #[test]
    fn due_date_boundary_is_strict() {
        let midnight = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(!is_overdue(date(2025, 1, 1), ProjectStatus::Pending, midnight));

        let just_after = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 1).unwrap();
        assert!(is_overdue(date(2025, 1, 1), ProjectStatus::Pending, just_after));
    }

    // -- ProjectFilter --------------------------------------------------------

    #[test]
    fn empty_filter_matches_everything() {
        let items = items();
        assert_eq!(ProjectFilter::default().apply(&items).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let items = items();
        let hits = ProjectFilter::new("landing", StatusFilter::All).apply(&items);
        let names: Vec<_> = hits.iter().map(|p| p.name).collect();
        assert_eq!(names, ["Website Redesign", "Audit"]);

        let hits = ProjectFilter::new("LAUNCH", StatusFilter::All).apply(&items);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Launch");
    }

    #[test]
    fn search_and_status_are_anded() {
        let items = items();
        let hits =
            ProjectFilter::new("landing", StatusFilter::Only(ProjectStatus::Completed))
                .apply(&items);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Audit");

        let none =
            ProjectFilter::new("launch", StatusFilter::Only(ProjectStatus::Completed))
                .apply(&items);
        assert!(none.is_empty());
    }

    // -- StatusCounts ---------------------------------------------------------

    #[test]
    fn tally_counts_each_status() {
        let counts = StatusCounts::tally(&items());
        assert_eq!(
            counts,
            StatusCounts {
                pending: 1,
                in_progress: 1,
                completed: 1,
            }
        );
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn display_format() {
        assert_eq!(format_due_date(date(2025, 1, 5)), "Jan 5, 2025");
    }
}
