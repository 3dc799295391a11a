//! In-memory [`Dom`] for headless hosts and tests.

use crate::error::{BoardError, Result};
use crate::ui::dom::{Dom, InsertPosition, NodeId};
use std::collections::{BTreeSet, HashMap};

/// Blueprint an element tree is cloned from
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    tag: String,
    id: Option<String>,
    children: Vec<Template>,
}

impl Template {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn child(mut self, child: Template) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    text: String,
    value: String,
    classes: BTreeSet<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

/// Arena-backed element tree
///
/// Subtrees removed by [`Dom::clear_children`] go back to a free list and
/// their slots are reused, so handles into a cleared subtree are stale.
/// Nodes detached any other way stay allocated and can be reinserted.
#[derive(Debug)]
pub struct MemoryDom {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    root: NodeId,
    templates: HashMap<String, Template>,
    alerts: Vec<String>,
}

impl MemoryDom {
    /// Creates a document with only a `body` root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                tag: "body".to_string(),
                ..Node::default()
            }],
            free: Vec::new(),
            root: NodeId(0),
            templates: HashMap::new(),
            alerts: Vec::new(),
        }
    }

    /// Document with an `#app` host and the input, list and item templates
    pub fn with_board_templates() -> Self {
        let mut dom = Self::new();
        let root = dom.root();
        dom.append_element(root, "div", Some("app"));

        dom.register_template(
            "project-input",
            Template::new("form")
                .child(Template::new("input").with_id("title"))
                .child(Template::new("textarea").with_id("description"))
                .child(Template::new("input").with_id("people"))
                .child(Template::new("button")),
        );
        dom.register_template(
            "project-list",
            Template::new("section")
                .child(Template::new("header").child(Template::new("h2")))
                .child(Template::new("ul")),
        );
        dom.register_template(
            "single-project",
            Template::new("li")
                .child(Template::new("h2"))
                .child(Template::new("h3"))
                .child(Template::new("p")),
        );
        dom
    }

    pub fn register_template(&mut self, id: &str, template: Template) {
        self.templates.insert(id.to_string(), template);
    }

    /// Creates an element and appends it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str, id: Option<&str>) -> NodeId {
        let node = self.push_node(tag, id.map(str::to_string));
        self.nodes[node.0].parent = Some(parent);
        if let Some(parent_node) = self.nodes.get_mut(parent.0) {
            parent_node.children.push(node);
        }
        node
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.text.as_str())
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.tag.as_str())
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(node.0)
            .map(|n| n.classes.contains(class))
            .unwrap_or(false)
    }

    /// Messages raised through [`Dom::alert`], oldest first
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Slots in the arena, live or free
    pub fn allocated(&self) -> usize {
        self.nodes.len()
    }

    fn push_node(&mut self, tag: &str, id: Option<String>) -> NodeId {
        let fresh = Node {
            tag: tag.to_string(),
            id,
            ..Node::default()
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot.0] = fresh;
                slot
            }
            None => {
                self.nodes.push(fresh);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Returns `node` and everything below it to the free list
    fn release(&mut self, node: NodeId) {
        let mut subtree = self.descendants(node);
        subtree.push(node);
        for slot in subtree {
            self.nodes[slot.0] = Node::default();
            self.free.push(slot);
        }
    }

    fn node(&self, node: NodeId) -> Result<&Node> {
        self.nodes
            .get(node.0)
            .ok_or_else(|| BoardError::NodeNotFound(node.to_string()))
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(node.0)
            .ok_or_else(|| BoardError::NodeNotFound(node.to_string()))
    }

    fn instantiate(&mut self, template: &Template) -> NodeId {
        let node = self.push_node(&template.tag, template.id.clone());
        for child in &template.children {
            let child_node = self.instantiate(child);
            self.nodes[child_node.0].parent = Some(node);
            self.nodes[node.0].children.push(child_node);
        }
        node
    }

    /// Pre-order descendants of `root`, excluding `root` itself
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            found.push(node);
            stack.extend(self.children(node).iter().rev());
        }
        found
    }

    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.nodes.get(n.0).and_then(|n| n.parent);
        }
        false
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        let Some(n) = self.nodes.get(node.0) else {
            return false;
        };
        match selector.strip_prefix('#') {
            Some(id) => n.id.as_deref() == Some(id),
            None => n.tag == selector,
        }
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for MemoryDom {
    fn clone_template(&mut self, template_id: &str) -> Result<NodeId> {
        let template = self
            .templates
            .get(template_id)
            .cloned()
            .ok_or_else(|| BoardError::TemplateNotFound(template_id.to_string()))?;
        Ok(self.instantiate(&template))
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let selector = format!("#{}", id);
        self.descendants(self.root)
            .into_iter()
            .find(|node| self.matches(*node, &selector))
    }

    fn set_element_id(&mut self, node: NodeId, id: &str) -> Result<()> {
        self.node_mut(node)?.id = Some(id.to_string());
        Ok(())
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        self.nodes.get(node.0).and_then(|n| n.id.clone())
    }

    fn insert(&mut self, host: NodeId, node: NodeId, position: InsertPosition) -> Result<()> {
        self.node(host)?;
        if self.is_ancestor(node, host) {
            return Err(BoardError::NodeNotFound(format!(
                "{} cannot be inserted into its own subtree",
                node
            )));
        }

        if let Some(old_parent) = self.node(node)?.parent {
            self.node_mut(old_parent)?.children.retain(|c| *c != node);
        }
        self.node_mut(node)?.parent = Some(host);

        let children = &mut self.node_mut(host)?.children;
        match position {
            InsertPosition::AfterBegin => children.insert(0, node),
            InsertPosition::BeforeEnd => children.push(node),
        }
        Ok(())
    }

    fn query(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|node| self.matches(*node, selector))
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        self.node_mut(node)?.text = text.to_string();
        Ok(())
    }

    fn clear_children(&mut self, node: NodeId) -> Result<()> {
        let children = std::mem::take(&mut self.node_mut(node)?.children);
        for child in children {
            self.release(child);
        }
        Ok(())
    }

    fn detach(&mut self, node: NodeId) -> Result<()> {
        if let Some(parent) = self.node_mut(node)?.parent.take() {
            self.node_mut(parent)?.children.retain(|c| *c != node);
        }
        Ok(())
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> Result<()> {
        self.node_mut(node)?.classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<()> {
        self.node_mut(node)?.classes.remove(class);
        Ok(())
    }

    fn value(&self, node: NodeId) -> Result<String> {
        Ok(self.node(node)?.value.clone())
    }

    fn set_value(&mut self, node: NodeId, value: &str) -> Result<()> {
        self.node_mut(node)?.value = value.to_string();
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
