//! Arena-backed metadata tree and its search primitives.

use std::ops::Index;

use crate::{CloneData, EntryData, Error, Node, NodeId, NodeKind, Result};

/// A rooted tree of metadata nodes.
///
/// Nodes are only ever appended, so a [`NodeId`] handed out by a tree stays
/// valid for that tree's lifetime. Children keep their insertion order, which
/// is the document order every search follows.
///
/// # Example
///
/// ```
/// use metagen_model::{EntryData, MetadataTree};
///
/// let mut tree = MetadataTree::new();
/// let flash = tree.add_section(tree.root(), "flash").unwrap();
/// let controls = tree.add_kind(flash, "controls").unwrap();
/// let mode = tree.add_entry(controls, "mode", EntryData::new("enum")).unwrap();
///
/// assert_eq!(tree[mode].name(), "mode");
/// assert_eq!(tree.entries(controls), vec![mode]);
/// ```
#[derive(Debug, Clone)]
pub struct MetadataTree {
    nodes: Vec<Node>,
}

impl MetadataTree {
    /// Create a tree holding only the `Metadata` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: String::new(),
                kind: NodeKind::Metadata,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root, so this is never true.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node, failing for ids that belong to another tree.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(Error::UnknownNode { id })
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    // =========================================================================
    // Building
    // =========================================================================

    pub fn add_section(&mut self, parent: NodeId, name: impl Into<String>) -> Result<NodeId> {
        self.insert(parent, name.into(), NodeKind::Section)
    }

    /// Add a `Kind` grouping; the parent must be a `Section`.
    pub fn add_kind(&mut self, section: NodeId, name: impl Into<String>) -> Result<NodeId> {
        self.insert(section, name.into(), NodeKind::Kind)
    }

    pub fn add_namespace(&mut self, parent: NodeId, name: impl Into<String>) -> Result<NodeId> {
        self.insert(parent, name.into(), NodeKind::InnerNamespace)
    }

    pub fn add_entry(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        data: EntryData,
    ) -> Result<NodeId> {
        self.insert(parent, name.into(), NodeKind::Entry(data))
    }

    /// Add a `Clone` of an existing entry.
    pub fn add_clone(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        data: CloneData,
    ) -> Result<NodeId> {
        let name = name.into();
        let target = self.node(data.target)?;
        if !matches!(target.kind, NodeKind::Entry(_)) {
            return Err(Error::InvalidCloneTarget {
                name,
                found: target.kind.label(),
            });
        }
        self.insert(parent, name, NodeKind::Clone(data))
    }

    fn insert(&mut self, parent: NodeId, name: String, kind: NodeKind) -> Result<NodeId> {
        let parent_kind = &self.node(parent)?.kind;
        let allowed = match (&kind, parent_kind) {
            (NodeKind::Metadata, _) => false,
            (_, NodeKind::Entry(_) | NodeKind::Clone(_)) => false,
            (NodeKind::Kind, parent_kind) => matches!(parent_kind, NodeKind::Section),
            _ => true,
        };
        if !allowed {
            return Err(Error::InvalidParent {
                parent: parent_kind.label(),
                child: kind.label(),
            });
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    // =========================================================================
    // Searching
    // =========================================================================

    /// All descendants of `start` (excluding `start`) matching `pred`,
    /// depth-first in document order.
    pub fn find_all<P>(&self, start: NodeId, pred: P) -> Vec<NodeId>
    where
        P: Fn(&Node) -> bool,
    {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self[start].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = &self[id];
            if pred(node) {
                found.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    /// Ancestors of `id` matching `pred`, nearest first.
    pub fn find_parents<'a, P>(&'a self, id: NodeId, pred: P) -> impl Iterator<Item = NodeId> + 'a
    where
        P: Fn(&Node) -> bool + 'a,
    {
        std::iter::successors(self[id].parent, move |&p| self[p].parent)
            .filter(move |&p| pred(&self[p]))
    }

    /// The nearest ancestor of `id` matching `pred`.
    pub fn find_parent_first<P>(&self, id: NodeId, pred: P) -> Option<NodeId>
    where
        P: Fn(&Node) -> bool,
    {
        std::iter::successors(self[id].parent, |&p| self[p].parent).find(|&p| pred(&self[p]))
    }

    /// Direct `Entry` and `Clone` children of `id`.
    pub fn entries(&self, id: NodeId) -> Vec<NodeId> {
        self.children_where(id, |n| n.kind.is_entry_like())
    }

    /// Direct `Kind` children of `id`.
    pub fn kinds(&self, id: NodeId) -> Vec<NodeId> {
        self.children_where(id, |n| matches!(n.kind, NodeKind::Kind))
    }

    fn children_where(&self, id: NodeId, pred: impl Fn(&Node) -> bool) -> Vec<NodeId> {
        self[id]
            .children
            .iter()
            .copied()
            .filter(|&c| pred(&self[c]))
            .collect()
    }
}

impl Default for MetadataTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Panics when `id` was not issued by this tree; use [`MetadataTree::node`]
/// for a fallible lookup.
impl Index<NodeId> for MetadataTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tree: &MetadataTree, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| tree[id].name().to_string()).collect()
    }

    #[test]
    fn test_new_tree_has_root() {
        let tree = MetadataTree::new();
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree[tree.root()].kind(), &NodeKind::Metadata);
        assert_eq!(tree[tree.root()].parent(), None);
    }

    #[test]
    fn test_find_all_is_depth_first_document_order() {
        let mut tree = MetadataTree::new();
        let a = tree.add_section(tree.root(), "a").unwrap();
        let a_ns = tree.add_namespace(a, "a_ns").unwrap();
        tree.add_namespace(a_ns, "a_ns_inner").unwrap();
        let b = tree.add_section(tree.root(), "b").unwrap();
        tree.add_kind(b, "controls").unwrap();

        let all = tree.find_all(tree.root(), |_| true);
        assert_eq!(
            names(&tree, &all),
            vec!["a", "a_ns", "a_ns_inner", "b", "controls"]
        );
    }

    #[test]
    fn test_find_all_excludes_start() {
        let mut tree = MetadataTree::new();
        let a = tree.add_section(tree.root(), "a").unwrap();
        let inner = tree.add_section(a, "inner").unwrap();

        assert_eq!(tree.find_all(a, |n| n.kind().is_section_like()), vec![inner]);
    }

    #[test]
    fn test_find_parents_nearest_first() {
        let mut tree = MetadataTree::new();
        let sec = tree.add_section(tree.root(), "sec").unwrap();
        let kind = tree.add_kind(sec, "static").unwrap();
        let ns = tree.add_namespace(kind, "ns").unwrap();
        let entry = tree.add_entry(ns, "e", EntryData::new("byte")).unwrap();

        let parents: Vec<_> = tree.find_parents(entry, |_| true).collect();
        assert_eq!(parents, vec![ns, kind, sec, tree.root()]);
        assert_eq!(
            tree.find_parent_first(entry, |n| matches!(n.kind(), NodeKind::Kind)),
            Some(kind)
        );
        assert_eq!(tree.find_parent_first(entry, |n| n.name() == "missing"), None);
    }

    #[test]
    fn test_entries_and_kinds() {
        let mut tree = MetadataTree::new();
        let sec = tree.add_section(tree.root(), "sec").unwrap();
        let controls = tree.add_kind(sec, "controls").unwrap();
        let dynamic = tree.add_kind(sec, "dynamic").unwrap();
        let x = tree.add_entry(controls, "x", EntryData::new("int32")).unwrap();
        tree.add_namespace(controls, "ns").unwrap();
        let y = tree.add_clone(controls, "y", CloneData::new(x)).unwrap();

        assert_eq!(tree.kinds(sec), vec![controls, dynamic]);
        assert_eq!(tree.entries(controls), vec![x, y]);
        assert!(tree.entries(dynamic).is_empty());
    }

    #[test]
    fn test_kind_requires_section_parent() {
        let mut tree = MetadataTree::new();
        let sec = tree.add_section(tree.root(), "sec").unwrap();
        let ns = tree.add_namespace(sec, "ns").unwrap();

        let err = tree.add_kind(ns, "controls").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParent {
                parent: "inner namespace",
                child: "kind"
            }
        ));
    }

    #[test]
    fn test_entries_are_leaves() {
        let mut tree = MetadataTree::new();
        let sec = tree.add_section(tree.root(), "sec").unwrap();
        let entry = tree.add_entry(sec, "e", EntryData::new("byte")).unwrap();

        assert!(tree.add_namespace(entry, "ns").is_err());
        assert!(tree.add_entry(entry, "f", EntryData::new("byte")).is_err());
    }

    #[test]
    fn test_clone_target_must_be_entry() {
        let mut tree = MetadataTree::new();
        let sec = tree.add_section(tree.root(), "sec").unwrap();

        let err = tree.add_clone(sec, "c", CloneData::new(sec)).unwrap_err();
        assert!(matches!(err, Error::InvalidCloneTarget { found: "section", .. }));
        assert_eq!(
            err.to_string(),
            "clone 'c' must target an entry, found a section node"
        );
    }

    #[test]
    fn test_unknown_node() {
        let big = {
            let mut t = MetadataTree::new();
            t.add_section(t.root(), "a").unwrap();
            t.add_section(t.root(), "b").unwrap()
        };
        let mut tree = MetadataTree::new();

        assert!(tree.get(big).is_none());
        assert!(matches!(tree.node(big), Err(Error::UnknownNode { .. })));
        assert!(tree.add_section(big, "x").is_err());
    }
}
