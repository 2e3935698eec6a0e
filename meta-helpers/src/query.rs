//! Tree query helpers.
//!
//! Sections and inner namespaces are both "sections" in generated code, so
//! every helper here classifies them together through
//! [`NodeKind::is_section_like`].

use indexmap::IndexMap;
use metagen_model::{MergedEntry, MetadataTree, Node, NodeId, NodeKind};
use tracing::{debug, trace};

use crate::{Error, Result};

fn is_section_like(node: &Node) -> bool {
    node.kind().is_section_like()
}

/// Find every section or inner namespace below `root`, in document order.
pub fn find_all_sections(tree: &MetadataTree, root: NodeId) -> Vec<NodeId> {
    tree.find_all(root, is_section_like)
}

/// Find the closest ancestor of an entry that is a section or inner namespace.
pub fn find_parent_section(tree: &MetadataTree, entry: NodeId) -> Option<NodeId> {
    tree.find_parent_first(entry, is_section_like)
}

/// Collect the uniquely named entries of a section, without recursing into
/// inner namespaces.
///
/// For a `Section` the entries of all its kinds are searched; for an
/// `InnerNamespace`, its direct entries. Entries sharing a fully qualified
/// name collapse into one: the last one seen wins, at the position of the
/// first.
///
/// # Errors
///
/// Returns [`Error::NotASection`] when `node` is neither a section nor an
/// inner namespace.
pub fn find_unique_entries(tree: &MetadataTree, node: NodeId) -> Result<UniqueEntries<'_>> {
    let scope = match tree.node(node)?.kind() {
        NodeKind::Section => tree
            .kinds(node)
            .into_iter()
            .flat_map(|kind| tree.entries(kind))
            .collect(),
        NodeKind::InnerNamespace => tree.entries(node),
        other => return Err(Error::NotASection { found: other.label() }),
    };

    let mut unique: IndexMap<String, NodeId> = IndexMap::new();
    for &entry in &scope {
        let name = path_name(tree, entry);
        if let Some(previous) = unique.insert(name, entry) {
            trace!(%previous, replacement = %entry, "entry replaced by later declaration");
        }
    }
    debug!(
        section = %path_name(tree, node),
        scanned = scope.len(),
        unique = unique.len(),
        "collected unique entries"
    );

    Ok(UniqueEntries {
        tree,
        ids: unique.into_values(),
    })
}

/// Lazy sequence of merged entries returned by [`find_unique_entries`].
#[derive(Debug)]
pub struct UniqueEntries<'a> {
    tree: &'a MetadataTree,
    ids: indexmap::map::IntoValues<String, NodeId>,
}

impl Iterator for UniqueEntries<'_> {
    type Item = MergedEntry;

    fn next(&mut self) -> Option<MergedEntry> {
        loop {
            let id = self.ids.next()?;
            if let Some(merged) = self.tree.merge(id) {
                return Some(merged);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.ids.len()))
    }
}

/// Period-separated path from the root to `node`, skipping the `Metadata`
/// root and `Kind` groupings.
///
/// ```
/// use metagen_helpers::query::path_name;
/// use metagen_model::{EntryData, MetadataTree};
///
/// let mut tree = MetadataTree::new();
/// let flash = tree.add_section(tree.root(), "flash").unwrap();
/// let statics = tree.add_kind(flash, "static").unwrap();
/// let info = tree.add_namespace(statics, "info").unwrap();
/// let available = tree.add_entry(info, "available", EntryData::new("enum")).unwrap();
///
/// assert_eq!(path_name(&tree, available), "flash.info.available");
/// ```
pub fn path_name(tree: &MetadataTree, node: NodeId) -> String {
    let mut path: Vec<NodeId> = tree
        .find_parents(node, |n| {
            !matches!(n.kind(), NodeKind::Metadata | NodeKind::Kind)
        })
        .collect();
    path.reverse();
    path.push(node);

    path.iter()
        .map(|&id| tree[id].name())
        .collect::<Vec<_>>()
        .join(".")
}
