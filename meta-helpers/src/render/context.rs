//! Render context handed to the padding helpers.

use tracing::debug;

use super::{OutputBuffer, RenderOptions, pad::left_justify, pad};
use crate::{Error, Result};

/// State shared by the helpers of one render pass.
///
/// Holds the output buffer the template engine writes into. Helpers that
/// depend on the current column fail with [`Error::BufferNotSet`] until a
/// buffer has been bound with [`set_buffer`](Self::set_buffer).
///
/// # Example
///
/// ```
/// use metagen_helpers::render::{OutputBuffer, RenderContext};
///
/// let mut ctx = RenderContext::with_buffer(OutputBuffer::new());
/// ctx.write_str("#define ")?;
/// ctx.write_padded(24, "FLASH_MODE")?;
/// ctx.write_str("1\n")?;
///
/// assert_eq!(ctx.into_output()?, "#define FLASH_MODE      1\n");
/// # Ok::<(), metagen_helpers::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    buffer: Option<OutputBuffer>,
    options: RenderOptions,
}

impl RenderContext {
    /// Create a context without a buffer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            buffer: None,
            options,
        }
    }

    /// Create a context with default options writing into `buffer`.
    pub fn with_buffer(buffer: OutputBuffer) -> Self {
        let mut ctx = Self::default();
        ctx.set_buffer(buffer);
        ctx
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Bind the output buffer, returning the previously bound one.
    pub fn set_buffer(&mut self, buffer: OutputBuffer) -> Option<OutputBuffer> {
        debug!(column = buffer.column(), len = buffer.len(), "output buffer bound");
        self.buffer.replace(buffer)
    }

    /// Unbind and return the output buffer.
    pub fn take_buffer(&mut self) -> Option<OutputBuffer> {
        self.buffer.take()
    }

    pub fn has_buffer(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn buffer(&self) -> Result<&OutputBuffer> {
        self.buffer.as_ref().ok_or(Error::BufferNotSet)
    }

    pub fn buffer_mut(&mut self) -> Result<&mut OutputBuffer> {
        self.buffer.as_mut().ok_or(Error::BufferNotSet)
    }

    /// Column the next write will start at.
    pub fn current_column(&self) -> Result<usize> {
        Ok(self.buffer()?.column())
    }

    /// Append literal text to the buffer.
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.buffer_mut()?.push_str(s);
        Ok(())
    }

    /// Pad `what` to column `col` without writing it.
    pub fn pad(&self, col: usize, what: &str) -> Result<String> {
        pad(col).apply(self, what)
    }

    /// Pad `what` to column `col` and append it to the buffer.
    pub fn write_padded(&mut self, col: usize, what: &str) -> Result<()> {
        let padded = self.pad(col, what)?;
        self.write_str(&padded)
    }

    /// `ljust` filter using this context's configured overflow indent.
    #[deprecated(note = "use `pad`, which aligns correctly after text already on the line")]
    pub fn ljust(&self, size: usize) -> impl Fn(&str) -> String {
        left_justify(size, self.options.ljust_indent)
    }

    /// Consume the context and return everything rendered so far.
    pub fn into_output(self) -> Result<String> {
        self.buffer
            .map(OutputBuffer::into_string)
            .ok_or(Error::BufferNotSet)
    }
}
