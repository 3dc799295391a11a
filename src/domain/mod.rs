pub mod project;
pub mod sorting;
pub mod validation;

pub use project::{Project, ProjectId, ProjectStatus};
pub use sorting::{sort_projects, SortField, SortOrder};
pub use validation::{describe_violations, validate, Constraint, FieldValue, Validatable};
