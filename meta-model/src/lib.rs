//! Metadata object model for metagen.
//!
//! A [`MetadataTree`] is an arena of typed nodes rooted at a single
//! `Metadata` node:
//!
//! ```text
//! Metadata
//! └─ Section            (e.g. "android.control")
//!    ├─ Kind            (e.g. "controls", "static", "dynamic")
//!    │  ├─ Entry
//!    │  ├─ Clone        (re-declares an Entry under another Kind)
//!    │  └─ InnerNamespace
//!    │     └─ Entry
//!    └─ InnerNamespace
//! ```
//!
//! The tree only offers generic search primitives ([`MetadataTree::find_all`],
//! [`MetadataTree::find_parents`], ...). Template-facing helpers live in
//! `metagen-helpers`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod merged;
mod node;
mod tree;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
pub use merged::MergedEntry;
pub use node::{CloneData, CloneOverrides, EntryData, Node, NodeId, NodeKind};
pub use tree::MetadataTree;
