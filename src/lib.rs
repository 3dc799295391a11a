//! # Projboard Core
//!
//! State, validation and views for a two-column project board.
//!
//! Projects are added through a validated form and moved between the
//! Active and Finished columns by drag and drop. The observable
//! [`ProjectState`] is the single source of truth; views subscribe to it and
//! render through a [`ui::Dom`] implementation supplied by the host.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod state;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use config::{BoardConfig, FieldRules, FormRules};
pub use domain::{
    project::{Project, ProjectId, ProjectStatus},
    validation::{validate, Validatable},
};
pub use error::{BoardError, Result};
pub use state::{ProjectState, SharedState};
