use crate::error::Result;
use std::{cell::RefCell, fmt, rc::Rc};

/// Handle to an element owned by a [`Dom`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Where a mounted element goes inside its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// First child of the host
    AfterBegin,
    /// Last child of the host
    BeforeEnd,
}

/// Rendering collaborator driven by the views
///
/// Selectors passed to [`Dom::query`] are either `#id` or a bare tag name.
pub trait Dom {
    /// Instantiates a detached copy of a template's root element
    fn clone_template(&mut self, template_id: &str) -> Result<NodeId>;

    /// Finds an attached element by id
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    fn set_element_id(&mut self, node: NodeId, id: &str) -> Result<()>;

    fn element_id(&self, node: NodeId) -> Option<String>;

    fn insert(&mut self, host: NodeId, node: NodeId, position: InsertPosition) -> Result<()>;

    /// First descendant of `root` matching `selector`
    fn query(&self, root: NodeId, selector: &str) -> Option<NodeId>;

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()>;

    fn clear_children(&mut self, node: NodeId) -> Result<()>;

    /// Removes `node` from its parent; a detached node is left as is
    fn detach(&mut self, node: NodeId) -> Result<()>;

    fn add_class(&mut self, node: NodeId, class: &str) -> Result<()>;

    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<()>;

    /// Current value of a form field
    fn value(&self, node: NodeId) -> Result<String>;

    fn set_value(&mut self, node: NodeId, value: &str) -> Result<()>;

    /// Blocking user-facing message
    fn alert(&mut self, message: &str);
}

/// Handle to the rendering collaborator, shared by every view
pub type SharedDom = Rc<RefCell<dyn Dom>>;
