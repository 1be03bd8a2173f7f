//! Headless document tree the page renders into.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. Removed nodes stay in the arena detached from the tree, so
//! ids held by callers never dangle.

use crate::dom::html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element(String),
    Fragment,
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) text: String,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
        }
    }
}

pub const SELECT_MENU_ID: &str = "selectMenu";

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Builds the page skeleton: a header holding the employee select menu
    /// and an empty `<main>`.
    pub fn new() -> Self {
        let mut doc = Self::empty();

        let header = doc.create_element("header");
        let select = doc.create_element("select");
        doc.set_attribute(select, "id", SELECT_MENU_ID);
        let placeholder = doc.create_element("option");
        doc.set_attribute(placeholder, "value", "");
        doc.set_text_content(placeholder, "Employees");
        doc.append(select, placeholder);
        doc.append(header, select);

        let main = doc.create_element("main");
        doc.append(doc.body, header);
        doc.append(doc.body, main);
        doc
    }

    /// A document with nothing but `<body>`.
    pub fn empty() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Element("body".to_string()))],
            body: NodeId(0),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(tag.to_ascii_lowercase()))
    }

    pub fn create_fragment(&mut self) -> NodeId {
        self.push(NodeKind::Fragment)
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(Node::new(kind));
        NodeId(self.nodes.len() - 1)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Element(tag) => Some(tag),
            NodeKind::Fragment => None,
        }
    }

    pub fn is_fragment(&self, id: NodeId) -> bool {
        self.node(id).kind == NodeKind::Fragment
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.last().copied()
    }

    /// Appends `child` to `parent`. A fragment hands over its children and is
    /// left empty; any other node is first detached from its current parent.
    /// Appending a node under itself or one of its descendants is ignored.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        if self.is_inclusive_ancestor(child, parent) {
            tracing::warn!("Refusing to append node {} under its own subtree", child.0);
            return;
        }
        if self.is_fragment(child) {
            let moved = std::mem::take(&mut self.node_mut(child).children);
            for grandchild in moved {
                self.node_mut(grandchild).parent = None;
                self.append(parent, grandchild);
            }
            return;
        }

        if let Some(old_parent) = self.node(child).parent {
            self.node_mut(old_parent).children.retain(|c| *c != child);
        }
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    pub fn append_all(&mut self, parent: NodeId, children: &[NodeId]) {
        for child in children {
            self.append(parent, *child);
        }
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let siblings = &mut self.node_mut(parent).children;
        let before = siblings.len();
        siblings.retain(|c| *c != child);
        if siblings.len() == before {
            return false;
        }
        self.node_mut(child).parent = None;
        true
    }

    /// Removes children last-first until none remain.
    pub fn remove_all_children(&mut self, parent: NodeId) -> NodeId {
        while let Some(child) = self.last_child(parent) {
            self.remove_child(parent, child);
        }
        parent
    }

    /// Replaces the node's children with a single run of text.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        self.remove_all_children(id);
        self.node_mut(id).text = text.to_string();
    }

    /// Own text followed by every descendant's text, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = self.node(id).text.clone();
        for child in self.children(id) {
            out.push_str(&self.text_content(*child));
        }
        out
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        &self.node(id).attributes
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let attributes = &mut self.node_mut(id).attributes;
        match attributes.iter().position(|(key, _)| key == name) {
            Some(index) => attributes[index].1 = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        self.node_mut(id).attributes.retain(|(key, _)| key != name);
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attribute(id, "class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let mut classes: Vec<String> = self.class_list(id);
        classes.push(class.to_string());
        self.set_attribute(id, "class", &classes.join(" "));
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            return;
        }
        let classes: Vec<String> = self
            .class_list(id)
            .into_iter()
            .filter(|c| c != class)
            .collect();
        self.set_attribute(id, "class", &classes.join(" "));
    }

    /// Returns whether the class is present after the toggle.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            true
        }
    }

    pub fn class_list(&self, id: NodeId) -> Vec<String> {
        self.attribute(id, "class")
            .map(|classes| classes.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `dataset` style access: `post_id` maps to `data-post-id`.
    pub fn set_data(&mut self, id: NodeId, key: &str, value: &str) {
        self.set_attribute(id, &data_attribute_name(key), value);
    }

    pub fn data(&self, id: NodeId, key: &str) -> Option<&str> {
        self.attribute(id, &data_attribute_name(key))
    }

    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) {
        if disabled {
            self.set_attribute(id, "disabled", "");
        } else {
            self.remove_attribute(id, "disabled");
        }
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.attribute(id, "disabled").is_some()
    }

    /// Whether the node is reachable from `<body>`.
    pub fn is_connected(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.body {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Pre-order walk of everything below `root`, excluding `root`.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    pub fn descendants_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.tag(*id) == Some(tag))
            .collect()
    }

    pub fn first_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|id| self.tag(*id) == Some(tag))
    }

    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|id| self.attribute(*id, "id") == Some(element_id))
    }

    /// First connected `tag[data-post-id="value"]`.
    pub fn query_by_data_post_id(&self, tag: &str, value: &str) -> Option<NodeId> {
        self.descendants(self.body).into_iter().find(|id| {
            self.tag(*id) == Some(tag) && self.data(*id, "post_id") == Some(value)
        })
    }

    pub fn to_html(&self, id: NodeId) -> String {
        html::serialize(self, id)
    }

    pub fn document_html(&self) -> String {
        html::serialize(self, self.body)
    }
}

fn data_attribute_name(key: &str) -> String {
    format!("data-{}", key.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_has_select_menu_and_main() {
        let doc = Document::new();
        let select = doc.get_element_by_id(SELECT_MENU_ID).unwrap();
        assert_eq!(doc.tag(select), Some("select"));
        assert_eq!(doc.children(select).len(), 1);
        assert!(doc.first_by_tag("main").is_some());
        assert!(!doc.is_disabled(select));
    }

    #[test]
    fn test_fragment_append_moves_children() {
        let mut doc = Document::new();
        let main = doc.first_by_tag("main").unwrap();
        let fragment = doc.create_fragment();
        let a = doc.create_element("article");
        let b = doc.create_element("article");
        doc.append_all(fragment, &[a, b]);

        doc.append(main, fragment);

        assert_eq!(doc.children(main), &[a, b]);
        assert!(doc.children(fragment).is_empty());
        assert_eq!(doc.parent(a), Some(main));
    }

    #[test]
    fn test_append_reparents_node() {
        let mut doc = Document::empty();
        let first = doc.create_element("div");
        let second = doc.create_element("div");
        let child = doc.create_element("p");
        doc.append(first, child);
        doc.append(second, child);

        assert!(doc.children(first).is_empty());
        assert_eq!(doc.children(second), &[child]);
    }

    #[test]
    fn test_append_under_own_subtree_is_ignored() {
        let mut doc = Document::empty();
        let outer = doc.create_element("div");
        let inner = doc.create_element("section");
        doc.append(outer, inner);

        doc.append(inner, outer);
        doc.append(outer, outer);

        assert_eq!(doc.parent(outer), None);
        assert_eq!(doc.children(outer), &[inner]);
        assert!(doc.children(inner).is_empty());
        assert_eq!(doc.to_html(outer), "<div><section></section></div>");
    }

    #[test]
    fn test_remove_all_children_detaches() {
        let mut doc = Document::new();
        let main = doc.first_by_tag("main").unwrap();
        let p = doc.create_element("p");
        let q = doc.create_element("p");
        doc.append_all(main, &[p, q]);

        assert_eq!(doc.remove_all_children(main), main);
        assert!(doc.children(main).is_empty());
        assert!(!doc.is_connected(p));
        assert_eq!(doc.parent(q), None);
    }

    #[test]
    fn test_class_list_operations() {
        let mut doc = Document::empty();
        let section = doc.create_element("section");
        doc.add_class(section, "comments");
        doc.add_class(section, "hide");
        doc.add_class(section, "hide");
        assert_eq!(doc.attribute(section, "class"), Some("comments hide"));

        assert!(!doc.toggle_class(section, "hide"));
        assert_eq!(doc.class_list(section), vec!["comments"]);
        assert!(doc.toggle_class(section, "hide"));
        assert!(doc.has_class(section, "hide"));
    }

    #[test]
    fn test_dataset_maps_to_kebab_case_attribute() {
        let mut doc = Document::new();
        let main = doc.first_by_tag("main").unwrap();
        let button = doc.create_element("button");
        doc.set_data(button, "post_id", "101");
        assert_eq!(doc.attribute(button, "data-post-id"), Some("101"));

        assert_eq!(doc.query_by_data_post_id("button", "101"), None);
        doc.append(main, button);
        assert_eq!(doc.query_by_data_post_id("button", "101"), Some(button));
        assert_eq!(doc.query_by_data_post_id("section", "101"), None);
    }

    #[test]
    fn test_text_content_replaces_children() {
        let mut doc = Document::empty();
        let article = doc.create_element("article");
        let h2 = doc.create_element("h2");
        doc.set_text_content(h2, "title");
        doc.append(article, h2);
        assert_eq!(doc.text_content(article), "title");

        doc.set_text_content(article, "plain");
        assert!(doc.children(article).is_empty());
        assert_eq!(doc.text_content(article), "plain");
    }

    #[test]
    fn test_descendants_in_document_order() {
        let mut doc = Document::new();
        let main = doc.first_by_tag("main").unwrap();
        let article = doc.create_element("article");
        let first = doc.create_element("button");
        let nested = doc.create_element("section");
        let second = doc.create_element("button");
        doc.append(article, first);
        doc.append(nested, second);
        doc.append(article, nested);
        doc.append(main, article);

        assert_eq!(doc.descendants_by_tag(main, "button"), vec![first, second]);
    }
}
