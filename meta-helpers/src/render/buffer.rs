//! Output buffer with column tracking.

use std::fmt;

/// Append-only text buffer that knows which column it will write to next.
///
/// The column is the number of characters written since the last newline
/// (or since the start of the buffer), kept up to date on every append.
///
/// # Example
///
/// ```
/// use metagen_helpers::render::OutputBuffer;
///
/// let mut buf = OutputBuffer::new();
/// buf.push_str("#define ").push_str("FLASH");
/// assert_eq!(buf.column(), 13);
///
/// buf.push_str("\n  ");
/// assert_eq!(buf.column(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    text: String,
    column: usize,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap text that has already been rendered.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let column = column_after(0, &text);
        Self { text, column }
    }

    /// Append text and advance the column.
    pub fn push_str(&mut self, s: &str) -> &mut Self {
        self.column = column_after(self.column, s);
        self.text.push_str(s);
        self
    }

    pub fn push(&mut self, c: char) -> &mut Self {
        self.column = if c == '\n' { 0 } else { self.column + 1 };
        self.text.push(c);
        self
    }

    /// Distance from the write position back to the last newline.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the buffer and return the rendered text.
    pub fn into_string(self) -> String {
        self.text
    }
}

fn column_after(column: usize, s: &str) -> usize {
    match s.rfind('\n') {
        Some(i) => s[i + 1..].chars().count(),
        None => column + s.chars().count(),
    }
}

impl fmt::Write for OutputBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Display for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<OutputBuffer> for String {
    fn from(buf: OutputBuffer) -> Self {
        buf.text
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use super::*;

    /// Column computed by scanning back from the end of the text.
    fn scanned_column(text: &str) -> usize {
        text.chars().rev().take_while(|&c| c != '\n').count()
    }

    #[test]
    fn test_empty_buffer_column() {
        let buf = OutputBuffer::new();
        assert_eq!(buf.column(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_column_tracks_appends() {
        let mut buf = OutputBuffer::new();
        buf.push_str("abc");
        assert_eq!(buf.column(), 3);
        buf.push_str("de");
        assert_eq!(buf.column(), 5);
        buf.push_str("\n");
        assert_eq!(buf.column(), 0);
        buf.push_str("xy\nz");
        assert_eq!(buf.column(), 1);
        buf.push('!');
        assert_eq!(buf.column(), 2);
        buf.push('\n');
        assert_eq!(buf.column(), 0);
    }

    #[test]
    fn test_column_matches_backward_scan() {
        let pieces = ["#define ", "ANDROID_FLASH", "\n", "  ", "", "a\nbb\n", "ccc", "é"];
        let mut buf = OutputBuffer::new();
        for piece in pieces {
            buf.push_str(piece);
            assert_eq!(buf.column(), scanned_column(buf.as_str()), "after {piece:?}");
        }
    }

    #[test]
    fn test_column_counts_chars_not_bytes() {
        let buf = OutputBuffer::from_text("line\n// µs");
        assert_eq!(buf.column(), 5);
        assert_eq!(buf.len(), 11);
    }

    #[test]
    fn test_from_text() {
        assert_eq!(OutputBuffer::from_text("").column(), 0);
        assert_eq!(OutputBuffer::from_text("abc").column(), 3);
        assert_eq!(OutputBuffer::from_text("abc\n").column(), 0);
        assert_eq!(OutputBuffer::from_text("a\nbcd").column(), 3);
    }

    #[test]
    fn test_fmt_write() {
        let mut buf = OutputBuffer::new();
        write!(buf, "{}_{}", "FLASH", 3).unwrap();
        assert_eq!(buf.as_str(), "FLASH_3");
        assert_eq!(buf.column(), 7);
        assert_eq!(String::from(buf), "FLASH_3");
    }
}
