use crate::domain::project::{Project, ProjectId, ProjectStatus};
use crate::state::observable::Observable;
use std::{cell::RefCell, rc::Rc};
use tracing::debug;

/// Handle to the board state, shared by every view
pub type SharedState = Rc<RefCell<ProjectState>>;

/// Authoritative list of projects on the board
///
/// Every mutation is followed by a synchronous notification that hands each
/// listener its own copy of the full list. Listeners run while the state is
/// mutably borrowed, so they must not call back into a [`SharedState`].
#[derive(Debug, Default)]
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Observable<Project>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a fresh state in a shareable handle
    pub fn shared() -> SharedState {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Registers a listener called after every mutation
    pub fn add_listener(&mut self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.subscribe(listener);
    }

    /// Creates an active project and notifies listeners
    ///
    /// Input is trusted: title, description and a headcount of at least one
    /// are checked by the caller, normally [`crate::ui::ProjectInput`].
    pub fn add_project(&mut self, title: String, description: String, people: u32) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id.clone();
        debug!(project_id = %id, title = %project.title, people, "project added");

        self.projects.push(project);
        self.notify_listeners();
        id
    }

    /// Moves a project to `new_status`
    ///
    /// Returns false, without notifying, when the id is unknown or the project
    /// already has that status.
    pub fn move_project(&mut self, id: &ProjectId, new_status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) else {
            debug!(project_id = %id, "move ignored: unknown project");
            return false;
        };

        if project.status == new_status {
            debug!(project_id = %id, status = %new_status, "move ignored: status unchanged");
            return false;
        }

        debug!(project_id = %id, from = %project.status, to = %new_status, "project moved");
        project.status = new_status;
        self.notify_listeners();
        true
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Owned copy of every project, in insertion order
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn by_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify_listeners(&mut self) {
        self.listeners.notify(&self.projects);
    }
}
