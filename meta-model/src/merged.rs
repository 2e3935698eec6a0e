//! Merged view of entries.

use serde::Serialize;

use crate::{MetadataTree, NodeId, NodeKind};

/// A single logical property, as seen by templates.
///
/// Produced from either an `Entry` or a `Clone`. A clone contributes its own
/// name and enclosing kind, and inherits everything else from its target
/// unless overridden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedEntry {
    /// The node this view was built from.
    pub source: NodeId,
    pub name: String,
    /// Name of the enclosing `Kind`, if the entry sits under one.
    pub kind: Option<String>,
    pub ty: String,
    pub container: Option<String>,
    pub enum_values: Vec<String>,
    pub description: Option<String>,
    pub units: Option<String>,
    pub is_clone: bool,
}

impl MetadataTree {
    /// Build the merged view of an `Entry` or `Clone` node.
    ///
    /// Returns `None` for any other node kind.
    pub fn merge(&self, id: NodeId) -> Option<MergedEntry> {
        let node = self.get(id)?;
        let (data, overrides) = match &node.kind {
            NodeKind::Entry(data) => (data, None),
            NodeKind::Clone(clone) => match &self.get(clone.target)?.kind {
                NodeKind::Entry(data) => (data, Some(&clone.overrides)),
                _ => return None,
            },
            _ => return None,
        };

        let kind = self
            .find_parent_first(id, |n| matches!(n.kind, NodeKind::Kind))
            .map(|k| self[k].name.clone());

        let mut merged = MergedEntry {
            source: id,
            name: node.name.clone(),
            kind,
            ty: data.ty.clone(),
            container: data.container.clone(),
            enum_values: data.enum_values.clone(),
            description: data.description.clone(),
            units: data.units.clone(),
            is_clone: overrides.is_some(),
        };
        if let Some(overrides) = overrides {
            if let Some(description) = &overrides.description {
                merged.description = Some(description.clone());
            }
            if let Some(units) = &overrides.units {
                merged.units = Some(units.clone());
            }
        }
        Some(merged)
    }
}
