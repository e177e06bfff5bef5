mod parser;
mod patterns;
mod substitution;

use crate::common::*;

pub use self::parser::CheckFileParser;
pub use self::patterns::DirectivePattern;

/// An error in a check file, raised before any output is checked
#[derive(Diagnostic, Debug, thiserror::Error)]
pub enum ParserError {
    #[error("failed to parse regular expression at {location}")]
    #[diagnostic()]
    InvalidRegex {
        location: SourceLocation,
        #[label("this is not a valid regular expression")]
        span: SourceSpan,
        #[source]
        error: regex::Error,
    },
    #[error("invalid substitution at {location}")]
    #[diagnostic(help("{reason}"))]
    InvalidSubstitution {
        location: SourceLocation,
        #[label("this substitution could not be expanded")]
        span: SourceSpan,
        reason: String,
    },
    #[error(
        "unable to recognize {kind} directives with comment prefix '{comment_prefix}' and check prefix '{check_prefix}'"
    )]
    #[diagnostic(help("try a shorter comment or check prefix"))]
    InvalidPrefix {
        kind: Check,
        comment_prefix: String,
        check_prefix: String,
        #[source]
        error: regex::Error,
    },
    #[error("'{file}' does not contain any directives")]
    #[diagnostic(help(
        "directives must follow a one-line comment, e.g. `// CHECK: pattern`, check the comment and directive prefixes"
    ))]
    Empty { file: FileName },
    #[error(
        "{directive} must have a CHECK: or CHECK-NEXT: directive before it instead of a {predecessor}"
    )]
    #[diagnostic()]
    InvalidPredecessor {
        directive: String,
        predecessor: String,
        #[label("this directive")]
        span: SourceSpan,
        #[label("cannot follow this directive")]
        predecessor_span: SourceSpan,
    },
    #[error("{directive} must have a CHECK: directive after it instead of a {successor}")]
    #[diagnostic()]
    InvalidSuccessor {
        directive: String,
        successor: String,
        #[label("this directive")]
        span: SourceSpan,
        #[label("cannot be followed by this directive")]
        successor_span: SourceSpan,
    },
}

pub type ParseResult<T> = Result<T, ParserError>;
