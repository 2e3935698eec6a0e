//! Render options.

use std::str::FromStr;

use serde::Deserialize;

use crate::{Error, Result};

/// Indent added after the wrapped line by [`ljust`](super::ljust).
pub const DEFAULT_LJUST_INDENT: usize = 4;

/// Options shared by the padding helpers of a [`RenderContext`](super::RenderContext).
///
/// Parsed from TOML:
///
/// ```
/// use metagen_helpers::render::RenderOptions;
///
/// let options: RenderOptions = "ljust_indent = 8".parse().unwrap();
/// assert_eq!(options.ljust_indent, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Extra spaces after the newline inserted by `ljust` on overflow.
    pub ljust_indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ljust_indent: DEFAULT_LJUST_INDENT,
        }
    }
}

impl FromStr for RenderOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|source| Error::InvalidOptions { source })
    }
}
