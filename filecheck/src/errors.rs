use crate::common::*;

/// The error produced by a test run, i.e. the first directive that was not satisfied
#[derive(Diagnostic, Debug, thiserror::Error)]
#[error("{test_from} failed")]
#[diagnostic(help("see below for details"))]
pub struct TestFailed {
    pub test_from: TestInputType,
    #[related]
    errors: Vec<CheckFailedError>,
    /// Directives which were satisfied before the failure
    matches: Vec<MatchInfo>,
}
impl TestFailed {
    pub fn new(error: CheckFailedError, matches: Vec<MatchInfo>, match_file: FileName) -> Self {
        Self {
            test_from: TestInputType(match_file),
            errors: vec![error],
            matches,
        }
    }

    /// The errors raised by the test.
    ///
    /// Checking stops at the first unmet directive, so there is always exactly one.
    pub fn errors(&self) -> &[CheckFailedError] {
        self.errors.as_slice()
    }

    /// The directives that were satisfied before the failing one, in order
    pub fn matches(&self) -> &[MatchInfo] {
        self.matches.as_slice()
    }
}

#[derive(Debug)]
pub struct TestInputType(FileName);
impl fmt::Display for TestInputType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            FileName::Stdin => f.write_str("test from standard input"),
            FileName::Path(path) => write!(f, "test at {}", path.display()),
            FileName::Virtual(name) => write!(f, "test '{name}'"),
        }
    }
}

/// An unmet directive.
///
/// Each variant describes the directive that failed, and carries the check file
/// so that the offending pattern can be rendered. Where a specific line of the
/// checked output is relevant, it is attached as a [RelatedInputError].
#[derive(Diagnostic, Debug, thiserror::Error)]
pub enum CheckFailedError {
    /// A CHECK directive found no matching line
    #[error("could not find a match for {directive}")]
    #[diagnostic(help("no line of the checked output starting from {search_start} matched"))]
    MatchNoneButExpected {
        directive: String,
        search_start: SourceLocation,
        #[label("pattern at this location was not matched")]
        span: SourceSpan,
        #[source_code]
        match_file: ArcSource,
    },
    /// A CHECK-NEXT directive did not match the line after the previous match
    #[error("could not find a match for {directive} expected at {expected}")]
    #[diagnostic()]
    MatchNextLineMismatch {
        directive: String,
        expected: SourceLocation,
        #[label("this pattern must match on the next line")]
        span: SourceSpan,
        #[source_code]
        match_file: ArcSource,
        #[related]
        input: Option<RelatedInputError>,
    },
    /// A CHECK-NEXT directive was reached after the last line of the checked output
    #[error("could not find a match for {directive} expected at {expected}")]
    #[diagnostic(help("the checked output ended before this directive could be matched"))]
    UnexpectedEndOfInput {
        directive: String,
        expected: SourceLocation,
        #[label("this pattern must match on the next line")]
        span: SourceSpan,
        #[source_code]
        match_file: ArcSource,
    },
    /// A CHECK-NOT directive found a forbidden match
    #[error("found a match for {directive} in {found}")]
    #[diagnostic(help("the pattern '{pattern}' from {pattern_location} matched"))]
    MatchFoundButExcluded {
        directive: String,
        found: SourceLocation,
        pattern: String,
        pattern_location: SourceLocation,
        #[label("this pattern must not match")]
        span: SourceSpan,
        #[source_code]
        match_file: ArcSource,
        #[related]
        input: Option<RelatedInputError>,
    },
}
/// This is used to associate a line of the checked output with an error
/// whose primary label is in the check file.
#[derive(Diagnostic, Debug, thiserror::Error)]
#[error("see line {line} of the checked output")]
#[diagnostic()]
pub struct RelatedInputError {
    line: usize,
    label: &'static str,
    #[label("{label}")]
    pub span: SourceSpan,
    #[source_code]
    pub input_file: ArcSource,
}
impl RelatedInputError {
    pub fn new(input: &InputFile, index: usize, label: &'static str) -> Self {
        Self {
            line: index + 1,
            label,
            span: input.span(index),
            input_file: input.source().clone(),
        }
    }
}
