use outputcheck_core::text;

use crate::common::*;

/// The checked output, fully buffered and split into lines
#[derive(Debug, Clone)]
pub struct InputFile {
    source: ArcSource,
    lines: Vec<Range<usize>>,
}
impl InputFile {
    pub fn new(source: ArcSource) -> Self {
        let lines = text::lines(&source).map(|line| line.span).collect();
        Self { source, lines }
    }

    pub fn name(&self) -> FileName {
        self.source.name()
    }

    pub fn source(&self) -> &ArcSource {
        &self.source
    }

    /// The number of lines in the input
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the content of the line at `index`, without its line ending.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn line(&self, index: usize) -> &str {
        &self.source[self.lines[index].clone()]
    }

    /// Like [Self::line], but returns `None` when `index` is out of bounds
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines
            .get(index)
            .map(|span| &self.source[span.clone()])
    }

    pub fn lines(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.lines.iter().map(|span| &self.source[span.clone()])
    }

    /// The span of the line at `index`.
    ///
    /// For an index past the last line, this is an empty span at the end of the input.
    pub fn span(&self, index: usize) -> SourceSpan {
        match self.lines.get(index) {
            Some(span) => SourceSpan::from(span.clone()),
            None => SourceSpan::from(self.source.len()..self.source.len()),
        }
    }

    /// The location of the line at `index`, as displayed to users
    pub fn location(&self, index: usize) -> SourceLocation {
        SourceLocation::new(self.name(), index + 1)
    }
}
