use crate::common::*;

#[derive(Debug, Clone)]
pub struct CheckNext {
    pattern: CheckPattern,
}
impl CheckNext {
    pub fn new(pattern: CheckPattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &CheckPattern {
        &self.pattern
    }

    /// Match the pattern against the single line at `position` of the input.
    ///
    /// If `position` is past the end of the input, there is nothing left to
    /// match against, and the rule fails.
    pub fn apply(&self, context: &MatchContext<'_>, position: usize) -> Result<(), CheckFailedError> {
        let input = context.input();
        let expected = input.location(position);
        let Some(line) = input.get(position) else {
            return Err(CheckFailedError::UnexpectedEndOfInput {
                directive: self.to_string(),
                expected,
                span: self.pattern.span,
                match_file: context.match_file().clone(),
            });
        };

        if self.pattern.is_match(line) {
            log::debug!("found match for '{}' at {expected}", self.pattern.as_str());
            Ok(())
        } else {
            Err(CheckFailedError::MatchNextLineMismatch {
                directive: self.to_string(),
                expected,
                span: self.pattern.span,
                match_file: context.match_file().clone(),
                input: Some(RelatedInputError::new(
                    input,
                    position,
                    "expected a match on this line",
                )),
            })
        }
    }
}
impl Rule for CheckNext {
    fn kind(&self) -> Check {
        Check::Next
    }

    fn location(&self) -> &SourceLocation {
        &self.pattern.location
    }

    fn span(&self) -> SourceSpan {
        self.pattern.span
    }

    /// Every CHECK-NEXT, apart from the first directive in a file, must be
    /// immediately preceded by a CHECK or CHECK-NEXT
    fn validate(directives: &[Directive]) -> ParseResult<()> {
        for (index, directive) in directives.iter().enumerate().skip(1) {
            if !matches!(directive, Directive::Next(_)) {
                continue;
            }
            let before = &directives[index - 1];
            if !matches!(before, Directive::Plain(_) | Directive::Next(_)) {
                return Err(ParserError::InvalidPredecessor {
                    directive: directive.to_string(),
                    predecessor: before.to_string(),
                    span: directive.span(),
                    predecessor_span: before.span(),
                });
            }
        }

        Ok(())
    }
}
impl fmt::Display for CheckNext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} directive ({})", self.kind(), &self.pattern)
    }
}
