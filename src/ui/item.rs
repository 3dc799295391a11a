use crate::domain::project::Project;
use crate::error::Result;
use crate::ui::component::{mount, select};
use crate::ui::dom::{Dom, InsertPosition, NodeId};
use crate::ui::drag::{DataTransfer, Draggable, EffectAllowed, PLAIN_TEXT};
use tracing::trace;

/// One rendered project; the drag source of the board
#[derive(Debug, Clone)]
pub struct ProjectItem {
    project: Project,
    element: NodeId,
}

impl ProjectItem {
    /// Mounts an item for `project` at the end of `host_id`
    pub fn mount(
        dom: &mut dyn Dom,
        template_id: &str,
        host_id: &str,
        project: Project,
    ) -> Result<Self> {
        let element = mount(
            dom,
            template_id,
            host_id,
            InsertPosition::BeforeEnd,
            Some(project.id.as_str()),
        )?;
        let item = Self { project, element };
        item.render_content(dom)?;
        Ok(item)
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    fn render_content(&self, dom: &mut dyn Dom) -> Result<()> {
        let title = select(dom, self.element, "h2")?;
        dom.set_text(title, &self.project.title)?;

        let people = select(dom, self.element, "h3")?;
        dom.set_text(people, &format!("{} assigned", self.project.persons()))?;

        let description = select(dom, self.element, "p")?;
        dom.set_text(description, &self.project.description)?;
        Ok(())
    }
}

impl Draggable for ProjectItem {
    fn drag_start_handler(&self, transfer: &mut DataTransfer) {
        transfer.set_data(PLAIN_TEXT, self.project.id.as_str());
        transfer.effect_allowed = EffectAllowed::Move;
    }

    fn drag_end_handler(&self, _transfer: &DataTransfer) {
        trace!(project_id = %self.project.id, "drag ended");
    }
}
