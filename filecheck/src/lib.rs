pub mod ast;
pub mod check;
pub mod errors;
pub mod parse;
pub mod rules;
mod test;

pub use self::ast::{Check, CheckFile, Directive};
pub use self::check::{FileChecker, InputFile, MatchInfo, TestResult};
pub use self::errors::{CheckFailedError, RelatedInputError, TestFailed};
pub use self::parse::{CheckFileParser, ParserError};
pub use self::test::Test;

use std::path::Path;

use clap::Args;
use outputcheck_core::{
    comment::{self, CommentPrefixError},
    diagnostics::FileName,
};

pub(crate) mod common {
    pub use std::{borrow::Cow, fmt, ops::Range};

    pub use outputcheck_core::diagnostics::{
        ArcSource, DiagResult, Diagnostic, FileName, NamedSourceFile, Report, SourceFile,
        SourceLocation, SourceSpan,
    };
    pub use regex::Regex;
    pub use smallvec::{smallvec, SmallVec};

    pub use crate::ast::{Check, CheckFile, CheckPattern, Directive};
    pub use crate::check::{InputFile, MatchContext, MatchInfo};
    pub use crate::errors::{CheckFailedError, RelatedInputError};
    pub use crate::parse::{ParseResult, ParserError};
    pub use crate::rules::{CheckNext, CheckNot, CheckPlain, Rule};
    pub use crate::Config;

    #[cfg(test)]
    pub use crate::test::TestContext;
    #[cfg(test)]
    pub use outputcheck_core::diagnostics::Source;
}

pub const DEFAULT_CHECK_PREFIX: &str = "CHECK";

/// OutputCheck reads a check file containing directives embedded in
/// one-line comments, and verifies the output of a program against them.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Which prefix to treat as the start of a directive.
    ///
    /// For example, in the directive `CHECK-NEXT:`, `CHECK` is the prefix.
    #[arg(
        long = "check-prefix",
        value_name = "PREFIX",
        default_value = DEFAULT_CHECK_PREFIX,
        value_parser = parse_check_prefix,
        help_heading = "Syntax"
    )]
    pub check_prefix: Box<str>,
    /// Force the symbol used for one-line comments in the check file.
    ///
    /// By default, or when empty, this is guessed from the extension of the check file.
    #[arg(
        long = "comment",
        value_name = "PREFIX",
        value_parser = parse_comment_prefix,
        help_heading = "Syntax"
    )]
    pub comment_prefix: Option<Box<str>>,
    /// Disable `${LINE}`, `${LINE:+N}` and `${LINE:-N}` substitutions in patterns
    #[arg(long, default_value_t = false, help_heading = "Matching")]
    pub disable_substitutions: bool,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            check_prefix: DEFAULT_CHECK_PREFIX.to_string().into_boxed_str(),
            comment_prefix: None,
            disable_substitutions: false,
        }
    }
}
impl Config {
    pub fn with_comment_prefix(mut self, prefix: impl Into<Box<str>>) -> Self {
        self.comment_prefix = Some(prefix.into());
        self
    }

    pub fn with_check_prefix(mut self, prefix: impl Into<Box<str>>) -> Self {
        self.check_prefix = prefix.into();
        self
    }

    /// Determine the one-line comment prefix to use for the check file `name`.
    ///
    /// An explicitly configured, non-empty prefix always wins, otherwise it is
    /// guessed from the file extension.
    pub fn line_comment_prefix(&self, name: &FileName) -> Result<&str, CommentPrefixError> {
        let configured = self.comment_prefix.as_deref().filter(|prefix| !prefix.is_empty());
        if let Some(prefix) = configured {
            log::info!("assuming single line comment prefix is '{prefix}'");
            return Ok(prefix);
        }
        let prefix = match name {
            FileName::Path(path) => comment::line_comment_prefix(path)?,
            other => comment::line_comment_prefix(Path::new(&other.to_string()))?,
        };
        log::debug!("line comment prefix is '{prefix}'");
        Ok(prefix)
    }
}

fn parse_check_prefix(s: &str) -> Result<Box<str>, String> {
    if s.is_empty() {
        Err("the check prefix must not be empty".to_string())
    } else {
        Ok(s.to_owned().into_boxed_str())
    }
}

fn parse_comment_prefix(s: &str) -> Result<Box<str>, std::convert::Infallible> {
    Ok(s.to_owned().into_boxed_str())
}
