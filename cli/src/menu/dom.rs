//! # WebRS Menu DOM Model
//!
//! File: cli/src/menu/dom.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! A deliberately small element-tree model carrying exactly what the menu
//! controllers observe and mutate: tag name, class list, attributes, the
//! inline `max-height` style, and parent/child links. Nodes live in an
//! arena and are addressed by `NodeId`, which keeps the borrow story simple
//! when controllers walk ancestors while mutating classes.
//!
use std::collections::{BTreeMap, BTreeSet};

/// Arena index of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    max_height: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed element tree.
#[derive(Debug, Default)]
pub struct MenuDom {
    nodes: Vec<Node>,
}

impl MenuDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element with the given tag and classes.
    pub fn element(&mut self, tag: &str, classes: &[&str]) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Node::default()
        });
        id
    }

    /// Appends `child` under `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        self.nodes[id.0].classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.nodes[id.0].classes.remove(class);
    }

    /// Adds the class if absent, removes it if present.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) {
        if !self.nodes[id.0].classes.remove(class) {
            self.nodes[id.0].classes.insert(class.to_string());
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id.0].classes.contains(class)
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        self.nodes[id.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0].attrs.get(name).map(String::as_str)
    }

    /// Sets or clears the inline `max-height` style.
    pub fn set_max_height(&mut self, id: NodeId, value: Option<&str>) {
        self.nodes[id.0].max_height = value.map(str::to_string);
    }

    pub fn max_height(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].max_height.as_deref()
    }

    /// All elements under `root` (excluding `root`), preorder.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[root.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }
}
