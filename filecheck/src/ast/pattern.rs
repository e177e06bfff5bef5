use crate::common::*;

/// A compiled regular expression from a single directive line of a check file
#[derive(Debug, Clone)]
pub struct CheckPattern {
    regex: Regex,
    /// The line of the check file this pattern was written on
    pub location: SourceLocation,
    /// The span of the pattern text in the check file
    pub span: SourceSpan,
}
impl CheckPattern {
    /// Compile `pattern` into a [CheckPattern].
    ///
    /// The pattern is handed to the regex engine verbatim, no escaping or
    /// trimming is performed.
    pub fn new(pattern: &str, location: SourceLocation, span: SourceSpan) -> ParseResult<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Ok(Self {
                regex,
                location,
                span,
            }),
            Err(error) => Err(ParserError::InvalidRegex {
                location,
                span,
                error,
            }),
        }
    }

    /// The source of the compiled regular expression
    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if the pattern matches anywhere within `line`
    #[inline]
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}
impl fmt::Display for CheckPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} pattern '{}'", &self.location, self.as_str())
    }
}
