//! Node types stored in a [`MetadataTree`](crate::MetadataTree).

use std::fmt;

use serde::Serialize;

/// Index of a node inside its owning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The id of the `Metadata` root of every tree.
    pub const ROOT: Self = Self(0);

    /// Position of the node in the tree's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The type of a node, with the payload leaf nodes carry.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Root of the tree.
    Metadata,
    /// Top-level grouping, rendered as a "section" in generated code.
    Section,
    /// Nested grouping; treated exactly like a section by the helpers.
    InnerNamespace,
    /// Groups the entries of a section by role (e.g. controls, static, dynamic).
    Kind,
    /// A named property.
    Entry(EntryData),
    /// A re-declaration of an existing entry, usually under another kind.
    Clone(CloneData),
}

impl NodeKind {
    /// Returns true for structural groupings rendered as sections.
    pub fn is_section_like(&self) -> bool {
        matches!(self, Self::Section | Self::InnerNamespace)
    }

    /// Returns true for nodes that describe a property.
    pub fn is_entry_like(&self) -> bool {
        matches!(self, Self::Entry(_) | Self::Clone(_))
    }

    /// Human-readable kind name for diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::Section => "section",
            Self::InnerNamespace => "inner namespace",
            Self::Kind => "kind",
            Self::Entry(_) => "entry",
            Self::Clone(_) => "clone",
        }
    }
}

/// A node in the metadata tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// The node's own (unqualified) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Parent node, `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Data declared by an `Entry` node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntryData {
    /// Declared value type token (e.g. "byte", "int32", "float", "enum").
    pub ty: String,
    /// Container shape ("array", "tuple"), if any.
    pub container: Option<String>,
    /// Names of enumeration values, in declaration order.
    pub enum_values: Vec<String>,
    pub description: Option<String>,
    pub units: Option<String>,
}

impl EntryData {
    /// Create entry data with the given value type.
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            ..Self::default()
        }
    }

    pub fn container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    pub fn enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }
}

/// Data declared by a `Clone` node.
#[derive(Debug, Clone, PartialEq)]
pub struct CloneData {
    /// The `Entry` being re-declared.
    pub target: NodeId,
    pub overrides: CloneOverrides,
}

impl CloneData {
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            overrides: CloneOverrides::default(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.overrides.description = Some(description.into());
        self
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.overrides.units = Some(units.into());
        self
    }
}

/// Fields a clone may replace on its target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloneOverrides {
    pub description: Option<String>,
    pub units: Option<String>,
}
