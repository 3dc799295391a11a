use crate::error::{BoardError, Result};
use crate::ui::dom::{Dom, InsertPosition, NodeId};

/// Clones `template_id`, optionally renames its root, and attaches it to `host_id`
///
/// Returns the root of the new element, ready to be populated.
pub fn mount(
    dom: &mut dyn Dom,
    template_id: &str,
    host_id: &str,
    position: InsertPosition,
    element_id: Option<&str>,
) -> Result<NodeId> {
    let host = dom
        .element_by_id(host_id)
        .ok_or_else(|| BoardError::HostNotFound(host_id.to_string()))?;

    let element = dom.clone_template(template_id)?;
    if let Some(id) = element_id {
        dom.set_element_id(element, id)?;
    }

    dom.insert(host, element, position)?;
    Ok(element)
}

/// Looks up a required descendant of `root`
pub(crate) fn select(dom: &dyn Dom, root: NodeId, selector: &str) -> Result<NodeId> {
    dom.query(root, selector)
        .ok_or_else(|| BoardError::NodeNotFound(format!("{} under {}", selector, root)))
}
