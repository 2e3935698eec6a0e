//! Template helpers for metadata-driven code generation.
//!
//! These are the functions a template calls while rendering generated
//! sources from a [`metagen_model::MetadataTree`].
//!
//! # Module Organization
//!
//! - [`query`] - Tree queries (sections, parent section, unique entries, path names)
//! - [`naming`] - Symbol filters (`csym`, `csyml`, `ctype_enum`)
//! - [`render`] - Column tracking and padding (`RenderContext`, `pad`, `ljust`)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
pub mod naming;
pub mod query;
pub mod render;

pub use error::{Error, Result};
pub use naming::{csym, csyml, ctype_enum};
pub use query::{
    UniqueEntries, find_all_sections, find_parent_section, find_unique_entries, path_name,
};
#[allow(deprecated)]
pub use render::{OutputBuffer, RenderContext, RenderOptions, ljust, pad};
