//! Padding filters.

use tracing::trace;

use super::{DEFAULT_LJUST_INDENT, RenderContext};
use crate::Result;

/// Create a filter that pads a string so the output lands on column `col`.
///
/// The filter reads the current column from the context's buffer, so it
/// aligns correctly no matter what was written earlier on the line. If the
/// string does not fit before `col`, it is followed by a newline and `col`
/// spaces instead.
///
/// ```
/// use metagen_helpers::render::{OutputBuffer, RenderContext, pad};
///
/// let ctx = RenderContext::with_buffer(OutputBuffer::from_text("  "));
/// assert_eq!(pad(8).apply(&ctx, "hello").unwrap(), "hello ");
/// ```
pub fn pad(col: usize) -> Pad {
    Pad { col }
}

/// Column padding filter returned by [`pad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pad {
    col: usize,
}

impl Pad {
    /// Target column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Pad `what` against the context's current column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferNotSet`](crate::Error::BufferNotSet) when the
    /// context has no output buffer.
    pub fn apply(&self, ctx: &RenderContext, what: &str) -> Result<String> {
        let current = ctx.current_column()?;
        Ok(self.apply_at(current, what))
    }

    /// Pad `what` as if the cursor were at column `current`.
    pub fn apply_at(&self, current: usize, what: &str) -> String {
        let remaining = self.col.saturating_sub(current);
        if what.chars().count() > remaining {
            trace!(col = self.col, current, what, "padding wraps to a new line");
            format!("{what}\n{}", " ".repeat(self.col))
        } else {
            format!("{what:<remaining$}")
        }
    }
}

/// Create a filter that pads a string with spaces to `size` characters.
///
/// A string longer than `size` is followed by a newline and
/// `size + 4` spaces instead.
///
/// ```
/// # #![allow(deprecated)]
/// use metagen_helpers::render::ljust;
///
/// assert_eq!(ljust(8)("hello"), "hello   ");
/// ```
#[deprecated(note = "use `pad`, which aligns correctly after text already on the line")]
pub fn ljust(size: usize) -> impl Fn(&str) -> String {
    left_justify(size, DEFAULT_LJUST_INDENT)
}

/// [`ljust`] with an explicit overflow indent.
#[deprecated(note = "use `pad`, which aligns correctly after text already on the line")]
pub fn ljust_with_indent(size: usize, indent: usize) -> impl Fn(&str) -> String {
    left_justify(size, indent)
}

pub(super) fn left_justify(size: usize, indent: usize) -> impl Fn(&str) -> String {
    move |what: &str| {
        if what.chars().count() > size {
            format!("{what}\n{}", " ".repeat(indent + size))
        } else {
            format!("{what:<size$}")
        }
    }
}
