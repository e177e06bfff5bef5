//! Maps check file extensions to the symbol used for one-line comments in that language.
use std::path::Path;

use crate::diagnostics::Diagnostic;

/// Extensions with a known one-line comment symbol
pub const LINE_COMMENT_PREFIXES: &[(&str, &str)] = &[
    ("sh", "#"),
    ("py", "#"),
    ("c", "//"),
    ("cpp", "//"),
    ("cxx", "//"),
    ("smt", ";"),
    ("smt2", ";"),
    ("cvc", "%"),
];

#[derive(Diagnostic, Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CommentPrefixError {
    #[error("check file '{file}' is missing a file extension")]
    #[diagnostic(help(
        "if you know what symbols are used for one line comments then use the --comment flag"
    ))]
    MissingExtension { file: String },
    #[error("the file extension \"{extension}\" is not supported")]
    #[diagnostic(help(
        "if you know what symbols are used for one line comments then use the --comment flag"
    ))]
    Unsupported { extension: String },
}

/// Guess the one-line comment prefix for `path` from its extension
pub fn line_comment_prefix(path: &Path) -> Result<&'static str, CommentPrefixError> {
    let extension = path
        .extension()
        .ok_or_else(|| CommentPrefixError::MissingExtension {
            file: path.display().to_string(),
        })?
        .to_string_lossy();

    LINE_COMMENT_PREFIXES
        .iter()
        .find_map(|(ext, prefix)| (*ext == extension).then_some(*prefix))
        .ok_or_else(|| CommentPrefixError::Unsupported {
            extension: extension.into_owned(),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_extensions_test() {
        assert_eq!(line_comment_prefix(Path::new("test.py")), Ok("#"));
        assert_eq!(line_comment_prefix(Path::new("dir/run.sh")), Ok("#"));
        assert_eq!(line_comment_prefix(Path::new("main.cpp")), Ok("//"));
        assert_eq!(line_comment_prefix(Path::new("a.b/query.smt2")), Ok(";"));
        assert_eq!(line_comment_prefix(Path::new("query.cvc")), Ok("%"));
    }

    #[test]
    fn missing_extension_test() {
        assert_eq!(
            line_comment_prefix(Path::new("checks/Makefile")),
            Err(CommentPrefixError::MissingExtension {
                file: "checks/Makefile".to_string()
            })
        );
    }

    #[test]
    fn unsupported_extension_test() {
        assert_eq!(
            line_comment_prefix(Path::new("notes.txt")),
            Err(CommentPrefixError::Unsupported {
                extension: "txt".to_string()
            })
        );
    }
}
