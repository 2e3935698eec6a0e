use miette::Diagnostic;
use thiserror::Error;

use crate::NodeId;

/// Result type for metadata tree operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("node {id} does not exist in this tree")]
    #[diagnostic(code(metagen::model::unknown_node))]
    UnknownNode { id: NodeId },

    #[error("a {child} node cannot be placed under a {parent} node")]
    #[diagnostic(
        code(metagen::model::invalid_parent),
        help("kinds belong to sections, and entries or clones cannot have children")
    )]
    InvalidParent {
        parent: &'static str,
        child: &'static str,
    },

    #[error("clone '{name}' must target an entry, found a {found} node")]
    #[diagnostic(code(metagen::model::invalid_clone_target))]
    InvalidCloneTarget { name: String, found: &'static str },
}
