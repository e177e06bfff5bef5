pub use miette::{bail, Diagnostic, IntoDiagnostic, Report, SourceCode, SourceSpan, WrapErr};

pub mod reporting {
    pub use miette::set_hook;

    #[cfg(feature = "fancy-diagnostics")]
    pub type ReportHandlerOpts = miette::MietteHandlerOpts;
}

#[cfg(feature = "fancy-diagnostics")]
pub use miette::set_panic_hook;

pub type DiagResult<T> = miette::Result<T>;

use std::{borrow::Cow, fmt, ops::Deref, path::Path, sync::Arc};

use miette::{MietteError, MietteSpanContents, SpanContents};

use crate::StaticCow;

/// The name of a file read by outputcheck, used when rendering locations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileName {
    Stdin,
    Path(Box<Path>),
    Virtual(StaticCow<str>),
}
impl From<&Path> for FileName {
    fn from(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::Path(path.to_path_buf().into_boxed_path())
        }
    }
}
impl From<std::path::PathBuf> for FileName {
    fn from(path: std::path::PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::Path(path.into_boxed_path())
        }
    }
}
impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        if name == "-" {
            Self::Stdin
        } else {
            Self::Virtual(Cow::Owned(name.to_string()))
        }
    }
}
impl From<String> for FileName {
    fn from(name: String) -> Self {
        if name == "-" {
            Self::Stdin
        } else {
            Self::Virtual(Cow::Owned(name))
        }
    }
}
impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::Path(ref path) => write!(f, "{}", path.display()),
            Self::Virtual(ref name) => f.write_str(name),
        }
    }
}

/// A line in a named file, e.g. `check.py:12`
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: FileName,
    pub line: usize,
}
impl SourceLocation {
    pub fn new(file: FileName, line: usize) -> Self {
        Self { file, line }
    }
}
impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", &self.file, self.line)
    }
}

pub trait SourceFile {
    fn source(&self) -> &str;
    fn span(&self) -> SourceSpan {
        SourceSpan::from(0..self.source().len())
    }
}
impl SourceFile for str {
    fn source(&self) -> &str {
        self
    }
}
impl SourceFile for String {
    fn source(&self) -> &str {
        self.as_str()
    }
}

pub trait NamedSourceFile: SourceFile {
    fn name(&self) -> FileName {
        FileName::Stdin
    }
}
impl NamedSourceFile for str {}
impl NamedSourceFile for String {}

/// The fully-buffered contents of a file, along with its name
#[derive(Debug)]
pub struct Source<'a> {
    pub name: FileName,
    pub code: Cow<'a, str>,
}
impl<'a> Source<'a> {
    pub fn new<N, S>(name: N, code: S) -> Self
    where
        FileName: From<N>,
        Cow<'a, str>: From<S>,
    {
        Self {
            name: FileName::from(name),
            code: Cow::from(code),
        }
    }
}
impl<'a> From<&'a str> for Source<'a> {
    fn from(code: &'a str) -> Self {
        Self {
            name: FileName::Stdin,
            code: Cow::Borrowed(code),
        }
    }
}
impl From<String> for Source<'static> {
    fn from(code: String) -> Self {
        Self {
            name: FileName::Stdin,
            code: Cow::Owned(code),
        }
    }
}
impl<'a> SourceFile for Source<'a> {
    fn source(&self) -> &str {
        self.code.as_ref()
    }
}
impl<'a> NamedSourceFile for Source<'a> {
    fn name(&self) -> FileName {
        self.name.clone()
    }
}
impl<'s> SourceCode for Source<'s> {
    fn read_span<'a>(
        &'a self,
        span: &SourceSpan,
        context_lines_before: usize,
        context_lines_after: usize,
    ) -> Result<Box<dyn SpanContents<'a> + 'a>, MietteError> {
        let code: &str = &self.code;
        let contents = code.read_span(span, context_lines_before, context_lines_after)?;
        Ok(Box::new(MietteSpanContents::new_named(
            self.name.to_string(),
            contents.data(),
            *contents.span(),
            contents.line(),
            contents.column(),
            contents.line_count(),
        )))
    }
}

/// A cheaply-cloneable [Source], suitable for attaching to diagnostics
#[derive(Debug, Clone)]
pub struct ArcSource(Arc<Source<'static>>);
impl ArcSource {
    pub fn new(source: Source<'static>) -> Self {
        Self(Arc::new(source))
    }
}
impl From<Source<'static>> for ArcSource {
    fn from(source: Source<'static>) -> Self {
        Self::new(source)
    }
}
impl From<String> for ArcSource {
    fn from(s: String) -> Self {
        Self::new(Source::from(s))
    }
}
impl From<&'static str> for ArcSource {
    fn from(s: &'static str) -> Self {
        Self::new(Source::new(FileName::Stdin, Cow::Borrowed(s)))
    }
}
impl Deref for ArcSource {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.source()
    }
}
impl AsRef<str> for ArcSource {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.0.source()
    }
}
impl SourceFile for ArcSource {
    fn source(&self) -> &str {
        self.0.source()
    }
}
impl NamedSourceFile for ArcSource {
    fn name(&self) -> FileName {
        self.0.name()
    }
}
impl SourceCode for ArcSource {
    #[inline(always)]
    fn read_span<'a>(
        &'a self,
        span: &SourceSpan,
        context_lines_before: usize,
        context_lines_after: usize,
    ) -> Result<Box<dyn SpanContents<'a> + 'a>, MietteError> {
        self.0
            .read_span(span, context_lines_before, context_lines_after)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn source_location_display_test() {
        let location = SourceLocation::new(FileName::from("checks.py"), 12);
        assert_eq!(location.to_string(), "checks.py:12");

        let location = SourceLocation::new(FileName::from("-"), 3);
        assert_eq!(location.to_string(), "<stdin>:3");
    }

    #[test]
    fn arc_source_named_span_test() {
        let source = ArcSource::new(Source::new("output.txt", "first\nsecond\n"));
        assert_eq!(source.name(), FileName::from("output.txt"));

        let contents = source
            .read_span(&SourceSpan::from(6..12), 0, 0)
            .expect("span should be readable");
        assert_eq!(contents.name(), Some("output.txt"));
        assert_eq!(contents.line(), 1);
    }
}
