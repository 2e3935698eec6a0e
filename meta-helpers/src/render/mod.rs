//! Column-aligned rendering.
//!
//! - [`OutputBuffer`] - Text buffer that tracks its current column
//! - [`RenderContext`] - Buffer binding and options for one render pass
//! - [`pad`] - Align the next token to a fixed column
//! - [`ljust`] - Fixed-width justification (deprecated)
//! - [`RenderOptions`] - TOML-configurable helper options

mod buffer;
mod context;
mod options;
mod pad;

pub use buffer::OutputBuffer;
pub use context::RenderContext;
pub use options::{DEFAULT_LJUST_INDENT, RenderOptions};
#[allow(deprecated)]
pub use pad::{Pad, ljust, ljust_with_indent, pad};
