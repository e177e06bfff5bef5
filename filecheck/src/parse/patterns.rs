use crate::common::*;

/// A regular expression which recognizes one kind of directive on a line of a check file.
///
/// The pattern text following the directive token is captured in the `pattern` group.
#[derive(Debug, Clone)]
pub struct DirectivePattern {
    pub kind: Check,
    regex: Regex,
}
impl DirectivePattern {
    /// Build the recognition pattern for `kind`, i.e.
    /// `^\s*<comment_prefix>\s*<check_prefix><token>\s*(.+)$`
    ///
    /// Both prefixes are matched literally. Building the regex can still fail
    /// when the prefixes are too long for its size limit.
    pub fn new(kind: Check, comment_prefix: &str, check_prefix: &str) -> ParseResult<Self> {
        let raw = format!(
            r"^\s*{comment}\s*{prefix}{token}\s*(?<pattern>.+)$",
            comment = regex::escape(comment_prefix),
            prefix = regex::escape(check_prefix),
            token = regex::escape(kind.suffix()),
        );
        let regex = Regex::new(&raw).map_err(|error| ParserError::InvalidPrefix {
            kind,
            comment_prefix: comment_prefix.to_string(),
            check_prefix: check_prefix.to_string(),
            error,
        })?;
        Ok(Self { kind, regex })
    }

    /// Generate the recognition patterns for every directive kind, in [Check::ALL] order
    pub fn generate(comment_prefix: &str, check_prefix: &str) -> ParseResult<Vec<Self>> {
        Check::ALL
            .iter()
            .map(|kind| Self::new(*kind, comment_prefix, check_prefix))
            .collect()
    }

    /// If `line` introduces a directive of this kind, return the byte range
    /// of its pattern text within `line`
    pub fn recognize(&self, line: &str) -> Option<Range<usize>> {
        self.regex
            .captures(line)
            .and_then(|captures| captures.name("pattern"))
            .map(|pattern| pattern.range())
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
