use crate::config::{BoardConfig, ListSort};
use crate::domain::project::{Project, ProjectId, ProjectStatus};
use crate::domain::sorting::sort_projects;
use crate::error::{BoardError, Result};
use crate::state::SharedState;
use crate::ui::component::{mount, select};
use crate::ui::dom::{Dom, InsertPosition, NodeId, SharedDom};
use crate::ui::drag::{DataTransfer, DragTarget, PLAIN_TEXT};
use crate::ui::item::ProjectItem;
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, warn};

const DROPPABLE_CLASS: &str = "droppable";

/// Re-renders one column from each state snapshot
struct ListRenderer {
    status: ProjectStatus,
    dom: SharedDom,
    list_id: String,
    item_template: String,
    sort: Option<ListSort>,
    items: RefCell<Vec<ProjectItem>>,
}

impl ListRenderer {
    fn render_projects(&self, projects: Vec<Project>) -> Result<()> {
        let mut assigned: Vec<Project> = projects
            .into_iter()
            .filter(|p| p.status == self.status)
            .collect();
        if let Some(sort) = self.sort {
            sort_projects(&mut assigned, sort.field, sort.order);
        }

        let mut dom = self.dom.borrow_mut();
        let list = dom
            .element_by_id(&self.list_id)
            .ok_or_else(|| BoardError::HostNotFound(self.list_id.clone()))?;
        dom.clear_children(list)?;

        let mut rendered = Vec::with_capacity(assigned.len());
        for project in assigned {
            rendered.push(ProjectItem::mount(
                &mut *dom,
                &self.item_template,
                &self.list_id,
                project,
            )?);
        }
        *self.items.borrow_mut() = rendered;
        Ok(())
    }
}

/// Column of projects sharing one status; also the drop target for that status
pub struct ProjectList {
    status: ProjectStatus,
    state: SharedState,
    dom: SharedDom,
    element: NodeId,
    list_element: NodeId,
    renderer: Rc<ListRenderer>,
}

impl ProjectList {
    /// Mounts the column and subscribes it to `state`
    pub fn new(
        status: ProjectStatus,
        state: SharedState,
        dom: SharedDom,
        config: &BoardConfig,
    ) -> Result<Self> {
        let slug = status.slug();
        let list_id = format!("{}-projects-list", slug);

        let (element, list_element) = {
            let mut dom = dom.borrow_mut();
            let element = mount(
                &mut *dom,
                &config.templates.list,
                &config.host_id,
                InsertPosition::BeforeEnd,
                Some(format!("{}-projects", slug).as_str()),
            )?;

            let list_element = select(&*dom, element, "ul")?;
            dom.set_element_id(list_element, &list_id)?;
            let heading = select(&*dom, element, "h2")?;
            dom.set_text(heading, &format!("{} PROJECTS", status.to_string().to_uppercase()))?;
            (element, list_element)
        };

        let renderer = Rc::new(ListRenderer {
            status,
            dom: Rc::clone(&dom),
            list_id,
            item_template: config.templates.item.clone(),
            sort: config.sort,
            items: RefCell::new(Vec::new()),
        });

        let list = Self {
            status,
            state,
            dom,
            element,
            list_element,
            renderer,
        };
        list.configure()?;
        Ok(list)
    }

    fn configure(&self) -> Result<()> {
        let snapshot = self.state.borrow().snapshot();
        self.renderer.render_projects(snapshot)?;

        let renderer = Rc::clone(&self.renderer);
        self.state.borrow_mut().add_listener(move |projects| {
            if let Err(err) = renderer.render_projects(projects) {
                warn!(status = %renderer.status, error = %err, "failed to render project list");
            }
        });
        Ok(())
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Root element of the column
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// The `ul` items are rendered into
    pub fn list_element(&self) -> NodeId {
        self.list_element
    }

    /// Items currently rendered, in display order
    pub fn items(&self) -> Vec<ProjectItem> {
        self.renderer.items.borrow().clone()
    }

    pub fn item(&self, id: &ProjectId) -> Option<ProjectItem> {
        self.renderer
            .items
            .borrow()
            .iter()
            .find(|item| &item.project().id == id)
            .cloned()
    }
}

impl DragTarget for ProjectList {
    fn drag_over_handler(&self, transfer: &DataTransfer) -> Result<bool> {
        if !transfer.carries_plain_text() {
            return Ok(false);
        }
        self.dom
            .borrow_mut()
            .add_class(self.list_element, DROPPABLE_CLASS)?;
        Ok(true)
    }

    fn drop_handler(&self, transfer: &DataTransfer) -> Result<()> {
        let id = ProjectId::from(transfer.get_data(PLAIN_TEXT).as_str());
        let moved = self.state.borrow_mut().move_project(&id, self.status);
        debug!(project_id = %id, status = %self.status, moved, "project dropped");

        self.dom
            .borrow_mut()
            .remove_class(self.list_element, DROPPABLE_CLASS)
    }

    fn drag_leave_handler(&self) -> Result<()> {
        self.dom
            .borrow_mut()
            .remove_class(self.list_element, DROPPABLE_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProjectState;
    use crate::ui::drag::Draggable;
    use crate::ui::memory::MemoryDom;

    struct Fixture {
        dom: Rc<RefCell<MemoryDom>>,
        state: SharedState,
        active: ProjectList,
        finished: ProjectList,
    }

    fn fixture(config: &BoardConfig) -> Fixture {
        let dom = Rc::new(RefCell::new(MemoryDom::with_board_templates()));
        let shared: SharedDom = dom.clone();
        let state = ProjectState::shared();

        let active =
            ProjectList::new(ProjectStatus::Active, Rc::clone(&state), Rc::clone(&shared), config)
                .unwrap();
        let finished =
            ProjectList::new(ProjectStatus::Finished, Rc::clone(&state), shared, config).unwrap();

        Fixture {
            dom,
            state,
            active,
            finished,
        }
    }

    fn add(state: &SharedState, title: &str, people: u32) -> ProjectId {
        state
            .borrow_mut()
            .add_project(title.to_string(), String::new(), people)
    }

    fn titles(list: &ProjectList) -> Vec<String> {
        list.items()
            .iter()
            .map(|item| item.project().title.clone())
            .collect()
    }

    #[test]
    fn test_mount_sets_ids_and_heading() {
        let fx = fixture(&BoardConfig::default());
        let dom = fx.dom.borrow();

        assert_eq!(dom.element_by_id("active-projects"), Some(fx.active.element()));
        assert_eq!(
            dom.element_by_id("finished-projects-list"),
            Some(fx.finished.list_element())
        );
        let heading = dom.query(fx.active.element(), "h2").unwrap();
        assert_eq!(dom.text(heading), Some("ACTIVE PROJECTS"));
        assert_eq!(fx.state.borrow().listener_count(), 2);
    }

    #[test]
    fn test_lists_filter_by_status() {
        let fx = fixture(&BoardConfig::default());
        let id = add(&fx.state, "First", 1);
        add(&fx.state, "Second", 2);

        assert_eq!(titles(&fx.active), vec!["First", "Second"]);
        assert!(fx.finished.items().is_empty());

        fx.state.borrow_mut().move_project(&id, ProjectStatus::Finished);

        assert_eq!(titles(&fx.active), vec!["Second"]);
        assert_eq!(titles(&fx.finished), vec!["First"]);
        assert_eq!(
            fx.dom.borrow().children(fx.finished.list_element()).len(),
            1
        );
    }

    #[test]
    fn test_rerender_replaces_items() {
        let fx = fixture(&BoardConfig::default());
        add(&fx.state, "One", 1);
        add(&fx.state, "Two", 1);
        add(&fx.state, "Three", 1);

        let dom = fx.dom.borrow();
        assert_eq!(dom.children(fx.active.list_element()).len(), 3);
    }

    #[test]
    fn test_drag_and_drop_moves_project() {
        let fx = fixture(&BoardConfig::default());
        let id = add(&fx.state, "Move me", 3);

        let item = fx.active.item(&id).unwrap();
        let mut transfer = DataTransfer::new();
        item.drag_start_handler(&mut transfer);

        assert!(fx.finished.drag_over_handler(&transfer).unwrap());
        assert!(fx
            .dom
            .borrow()
            .has_class(fx.finished.list_element(), DROPPABLE_CLASS));

        fx.finished.drop_handler(&transfer).unwrap();

        assert_eq!(
            fx.state.borrow().get(&id).unwrap().status,
            ProjectStatus::Finished
        );
        assert!(fx.active.items().is_empty());
        assert!(fx.finished.item(&id).is_some());
        assert!(!fx
            .dom
            .borrow()
            .has_class(fx.finished.list_element(), DROPPABLE_CLASS));
    }

    #[test]
    fn test_drag_over_rejects_other_types() {
        let fx = fixture(&BoardConfig::default());
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/html", "<p>nope</p>");

        assert!(!fx.active.drag_over_handler(&transfer).unwrap());
        assert!(!fx
            .dom
            .borrow()
            .has_class(fx.active.list_element(), DROPPABLE_CLASS));
    }

    #[test]
    fn test_drag_leave_clears_highlight() {
        let fx = fixture(&BoardConfig::default());
        let mut transfer = DataTransfer::new();
        transfer.set_data(PLAIN_TEXT, "whatever");

        fx.active.drag_over_handler(&transfer).unwrap();
        fx.active.drag_leave_handler().unwrap();

        assert!(!fx
            .dom
            .borrow()
            .has_class(fx.active.list_element(), DROPPABLE_CLASS));
    }

    #[test]
    fn test_drop_unknown_or_empty_id_is_noop() {
        let fx = fixture(&BoardConfig::default());
        add(&fx.state, "Stay", 1);
        let before = fx.state.borrow().snapshot();

        let mut transfer = DataTransfer::new();
        transfer.set_data(PLAIN_TEXT, "");
        fx.finished.drop_handler(&transfer).unwrap();

        let mut transfer = DataTransfer::new();
        transfer.set_data(PLAIN_TEXT, "no-such-project");
        fx.finished.drop_handler(&transfer).unwrap();

        assert_eq!(fx.state.borrow().snapshot(), before);
        assert!(fx.finished.items().is_empty());
    }

    #[test]
    fn test_drop_on_own_column_keeps_items() {
        let fx = fixture(&BoardConfig::default());
        let id = add(&fx.state, "Here", 1);

        let mut transfer = DataTransfer::new();
        fx.active.item(&id).unwrap().drag_start_handler(&mut transfer);
        fx.active.drop_handler(&transfer).unwrap();

        assert_eq!(titles(&fx.active), vec!["Here"]);
    }

    #[test]
    fn test_configured_sort_orders_items() {
        let config = BoardConfig::from_json(r#"{"sort": {"field": "people", "order": "desc"}}"#)
            .unwrap();
        let fx = fixture(&config);
        add(&fx.state, "Small", 1);
        add(&fx.state, "Large", 9);
        add(&fx.state, "Medium", 4);

        assert_eq!(titles(&fx.active), vec!["Large", "Medium", "Small"]);
    }

    #[test]
    fn test_late_list_renders_existing_projects() {
        let dom = Rc::new(RefCell::new(MemoryDom::with_board_templates()));
        let state = ProjectState::shared();
        add(&state, "Early", 2);

        let shared: SharedDom = dom.clone();
        let config = BoardConfig::default();
        let list = ProjectList::new(ProjectStatus::Active, state, shared, &config).unwrap();

        assert_eq!(titles(&list), vec!["Early"]);
    }

    #[test]
    fn test_missing_host_fails() {
        let dom: SharedDom = Rc::new(RefCell::new(MemoryDom::new()));
        let result = ProjectList::new(
            ProjectStatus::Active,
            ProjectState::shared(),
            dom,
            &BoardConfig::default(),
        );
        assert!(matches!(result, Err(BoardError::HostNotFound(_))));
    }
}
