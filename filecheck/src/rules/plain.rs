use crate::common::*;

#[derive(Debug, Clone)]
pub struct CheckPlain {
    pattern: CheckPattern,
}
impl CheckPlain {
    pub fn new(pattern: CheckPattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &CheckPattern {
        &self.pattern
    }

    /// Search `region` of the input top-to-bottom, returning the index of the
    /// first line on which the pattern matches.
    pub fn apply(
        &self,
        context: &MatchContext<'_>,
        region: Range<usize>,
    ) -> Result<usize, CheckFailedError> {
        let input = context.input();
        let search_start = region.start;
        for index in region {
            let line = input.line(index);
            if self.pattern.is_match(line) {
                log::debug!("found match on line {}", index + 1);
                log::trace!("line is '{line}'");
                return Ok(index);
            }
        }

        Err(CheckFailedError::MatchNoneButExpected {
            directive: self.to_string(),
            search_start: input.location(search_start),
            span: self.pattern.span,
            match_file: context.match_file().clone(),
        })
    }
}
impl Rule for CheckPlain {
    fn kind(&self) -> Check {
        Check::Plain
    }

    fn location(&self) -> &SourceLocation {
        &self.pattern.location
    }

    fn span(&self) -> SourceSpan {
        self.pattern.span
    }

    /// CHECK may appear anywhere in a check file
    fn validate(_directives: &[Directive]) -> ParseResult<()> {
        Ok(())
    }
}
impl fmt::Display for CheckPlain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} directive ({})", self.kind(), &self.pattern)
    }
}
