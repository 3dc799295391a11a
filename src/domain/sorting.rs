use crate::domain::project::{Project, ProjectStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Fields available for ordering a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    People,
    Created,
    Status,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "people" => Ok(SortField::People),
            "created" => Ok(SortField::Created),
            "status" => Ok(SortField::Status),
            _ => Err(format!(
                "Invalid sort field '{}'. Valid fields: title, people, created, status",
                s
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid orders: asc, desc",
                s
            )),
        }
    }
}

/// Sorts projects in place by the given field and direction
///
/// The sort is stable, so projects that compare equal keep their insertion
/// order.
///
/// # Examples
/// ```
/// use projboard_core::domain::sorting::{sort_projects, SortField, SortOrder};
/// use projboard_core::ProjectState;
///
/// let mut state = ProjectState::new();
/// state.add_project("Zeta".to_string(), String::new(), 2);
/// state.add_project("alpha".to_string(), String::new(), 7);
///
/// let mut projects = state.snapshot();
/// sort_projects(&mut projects, SortField::Title, SortOrder::Ascending);
/// assert_eq!(projects[0].title, "alpha");
/// ```
pub fn sort_projects(projects: &mut [Project], field: SortField, order: SortOrder) {
    projects.sort_by(|a, b| {
        let cmp = match field {
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::People => a.people.cmp(&b.people),
            SortField::Created => a.created_at.cmp(&b.created_at),
            SortField::Status => compare_status(a.status, b.status),
        };

        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

/// Active sorts before Finished
fn compare_status(a: ProjectStatus, b: ProjectStatus) -> Ordering {
    fn status_order(s: ProjectStatus) -> u8 {
        match s {
            ProjectStatus::Active => 0,
            ProjectStatus::Finished => 1,
        }
    }
    status_order(a).cmp(&status_order(b))
}
