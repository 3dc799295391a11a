use crate::config::BoardConfig;
use crate::domain::project::ProjectStatus;
use crate::error::Result;
use crate::state::{ProjectState, SharedState};
use crate::ui::{NodeId, ProjectInput, ProjectList, SharedDom};
use std::rc::Rc;
use tracing::{info, warn};

/// A wired-up board: one state container, the form and both columns
pub struct App {
    state: SharedState,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

impl App {
    /// Builds the state container and mounts every view against `dom`
    ///
    /// On error, views mounted so far are detached again, so the host is left
    /// as it was found.
    pub fn bootstrap(dom: SharedDom, config: BoardConfig) -> Result<Self> {
        let state = ProjectState::shared();

        let input = ProjectInput::new(Rc::clone(&state), Rc::clone(&dom), &config)?;
        let active = ProjectList::new(
            ProjectStatus::Active,
            Rc::clone(&state),
            Rc::clone(&dom),
            &config,
        )
        .map_err(|err| {
            unmount(&dom, &[input.element()]);
            err
        })?;
        let finished = ProjectList::new(
            ProjectStatus::Finished,
            Rc::clone(&state),
            Rc::clone(&dom),
            &config,
        )
        .map_err(|err| {
            unmount(&dom, &[input.element(), active.element()]);
            err
        })?;

        info!(host = %config.host_id, "project board mounted");
        Ok(Self {
            state,
            input,
            active,
            finished,
        })
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    /// The column showing projects with `status`
    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }
}

fn unmount(dom: &SharedDom, elements: &[NodeId]) {
    let mut dom = dom.borrow_mut();
    for element in elements {
        if let Err(err) = dom.detach(*element) {
            warn!(%element, error = %err, "failed to unmount view");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::ui::{DataTransfer, Dom, DragTarget, Draggable, MemoryDom, Template};
    use std::cell::RefCell;

    fn boot() -> (Rc<RefCell<MemoryDom>>, App) {
        let dom = Rc::new(RefCell::new(MemoryDom::with_board_templates()));
        let shared: SharedDom = dom.clone();
        let app = App::bootstrap(shared, BoardConfig::default()).unwrap();
        (dom, app)
    }

    #[test]
    fn test_bootstrap_layout() {
        let (dom, app) = boot();
        let dom = dom.borrow();

        let host = dom.element_by_id("app").unwrap();
        assert_eq!(
            dom.children(host),
            &[
                app.input().element(),
                app.list(ProjectStatus::Active).element(),
                app.list(ProjectStatus::Finished).element(),
            ]
        );
        assert_eq!(app.state().borrow().listener_count(), 2);
    }

    #[test]
    fn test_submit_then_drag_to_finished() {
        let (dom, app) = boot();
        {
            let mut dom = dom.borrow_mut();
            dom.set_value(app.input().title_input(), "Build API").unwrap();
            dom.set_value(app.input().description_input(), "").unwrap();
            dom.set_value(app.input().people_input(), "5").unwrap();
        }

        let id = app.input().submit_handler().unwrap().unwrap();
        let active = app.list(ProjectStatus::Active);
        let finished = app.list(ProjectStatus::Finished);
        assert_eq!(active.items().len(), 1);

        let mut transfer = DataTransfer::new();
        active.item(&id).unwrap().drag_start_handler(&mut transfer);
        assert!(finished.drag_over_handler(&transfer).unwrap());
        finished.drop_handler(&transfer).unwrap();

        assert!(active.items().is_empty());
        let item = finished.item(&id).unwrap();
        assert_eq!(item.project().status, ProjectStatus::Finished);

        let dom = dom.borrow();
        let h3 = dom.query(item.element(), "h3").unwrap();
        assert_eq!(dom.text(h3), Some("5 persons assigned"));
        assert_eq!(dom.element_by_id(id.as_str()), Some(item.element()));
    }

    #[test]
    fn test_bootstrap_with_custom_host() {
        let dom = Rc::new(RefCell::new(MemoryDom::with_board_templates()));
        let shared: SharedDom = dom.clone();
        let config = BoardConfig::from_json(r#"{"host_id": "board"}"#).unwrap();

        let result = App::bootstrap(shared, config);
        assert!(matches!(result, Err(BoardError::HostNotFound(_))));
    }

    #[test]
    fn test_failed_bootstrap_leaves_host_empty() {
        let mut board = MemoryDom::new();
        let root = board.root();
        let host = board.append_element(root, "div", Some("app"));
        board.register_template(
            "project-input",
            Template::new("form")
                .child(Template::new("input").with_id("title"))
                .child(Template::new("textarea").with_id("description"))
                .child(Template::new("input").with_id("people")),
        );
        let dom = Rc::new(RefCell::new(board));
        let shared: SharedDom = dom.clone();

        let result = App::bootstrap(shared, BoardConfig::default());

        assert!(matches!(result, Err(BoardError::TemplateNotFound(_))));
        let dom = dom.borrow();
        assert!(dom.children(host).is_empty());
        assert!(dom.element_by_id("user-input").is_none());
    }
}
