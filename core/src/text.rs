use std::ops::Range;

/// The style of line endings used in a file
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineEnding {
    /// The line ending was `\n`
    Lf,
    /// The line ending was `\r\n`
    Crlf,
    /// No line ending was found before EOF
    None,
}
impl LineEnding {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Lf => 1,
            Self::Crlf => 2,
            Self::None => 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// A single line of a buffer, without its line ending
#[derive(Debug, Clone)]
pub struct Line<'a> {
    /// The 0-based index of this line in the buffer
    pub index: usize,
    /// The byte range of the line content, excluding the line ending
    pub span: Range<usize>,
    pub ending: LineEnding,
    pub content: &'a str,
}
impl<'a> Line<'a> {
    /// The 1-based line number, as displayed to users
    #[inline(always)]
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Splits a buffer into [Line]s, recognizing both `\n` and `\r\n` endings.
///
/// A trailing line ending does not produce an extra empty line, so
/// `"a\nb\n"` and `"a\nb"` both contain two lines.
pub struct Lines<'a> {
    buffer: &'a str,
    offset: usize,
    index: usize,
}
impl<'a> Lines<'a> {
    pub fn new(buffer: &'a str) -> Self {
        Self {
            buffer,
            offset: 0,
            index: 0,
        }
    }
}
impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.buffer.as_bytes();
        let start = self.offset;
        if start >= bytes.len() {
            return None;
        }

        let (end, ending) = match memchr::memchr(b'\n', &bytes[start..]) {
            Some(index) => {
                let newline = start + index;
                if newline > start && bytes[newline - 1] == b'\r' {
                    (newline - 1, LineEnding::Crlf)
                } else {
                    (newline, LineEnding::Lf)
                }
            }
            None => (bytes.len(), LineEnding::None),
        };

        self.offset = end + ending.len();
        let line = Line {
            index: self.index,
            span: start..end,
            ending,
            content: &self.buffer[start..end],
        };
        self.index += 1;
        Some(line)
    }
}

/// Returns an iterator over the lines of `buffer`
#[inline]
pub fn lines(buffer: &str) -> Lines<'_> {
    Lines::new(buffer)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lines_with_mixed_endings_test() {
        let buffer = "first\r\nsecond\n\nlast";
        let lines = lines(buffer).collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].content, "first");
        assert_eq!(lines[0].ending, LineEnding::Crlf);
        assert_eq!(lines[1].content, "second");
        assert_eq!(lines[1].span, 7..13);
        assert_eq!(lines[2].content, "");
        assert_eq!(lines[3].content, "last");
        assert_eq!(lines[3].ending, LineEnding::None);
        assert_eq!(lines[3].number(), 4);
    }

    #[test]
    fn trailing_newline_does_not_add_line_test() {
        assert_eq!(lines("hello world\n").count(), 1);
        assert_eq!(lines("a\n\n").count(), 2);
        assert_eq!(lines("").count(), 0);
    }
}
