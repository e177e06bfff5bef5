use crate::common::*;

/// A group of consecutive CHECK-NOT lines, each with its own pattern
#[derive(Debug, Clone)]
pub struct CheckNot {
    patterns: SmallVec<[CheckPattern; 1]>,
}
impl CheckNot {
    pub fn new(pattern: CheckPattern) -> Self {
        Self {
            patterns: smallvec![pattern],
        }
    }

    /// Extend this directive with the pattern from a subsequent CHECK-NOT line
    pub fn add_pattern(&mut self, pattern: CheckPattern) {
        self.patterns.push(pattern);
    }

    pub fn patterns(&self) -> &[CheckPattern] {
        self.patterns.as_slice()
    }

    /// Verify that no pattern matches any line in `region` of the input.
    ///
    /// Lines are visited top-to-bottom, and each line is tested against every
    /// pattern in the order they were written. The first match found fails the rule.
    pub fn apply(
        &self,
        context: &MatchContext<'_>,
        region: Range<usize>,
    ) -> Result<(), CheckFailedError> {
        let input = context.input();
        for index in region {
            let line = input.line(index);
            let Some(pattern) = self.patterns.iter().find(|p| p.is_match(line)) else {
                continue;
            };
            log::debug!("found excluded match on line {}", index + 1);
            log::trace!("line is '{line}'");
            return Err(CheckFailedError::MatchFoundButExcluded {
                directive: self.to_string(),
                found: input.location(index),
                pattern: pattern.as_str().to_string(),
                pattern_location: pattern.location.clone(),
                span: pattern.span,
                match_file: context.match_file().clone(),
                input: Some(RelatedInputError::new(
                    input,
                    index,
                    "excluded pattern matched here",
                )),
            });
        }

        Ok(())
    }
}
impl Rule for CheckNot {
    fn kind(&self) -> Check {
        Check::Not
    }

    fn location(&self) -> &SourceLocation {
        &self.patterns[0].location
    }

    fn span(&self) -> SourceSpan {
        self.patterns[0].span
    }

    /// Every CHECK-NOT which is not the last directive in a file must be
    /// immediately followed by a CHECK, whose match bounds the region searched
    fn validate(directives: &[Directive]) -> ParseResult<()> {
        for (index, directive) in directives.iter().enumerate() {
            if !matches!(directive, Directive::Not(_)) {
                continue;
            }
            match directives.get(index + 1) {
                None | Some(Directive::Plain(_)) => continue,
                Some(after) => {
                    return Err(ParserError::InvalidSuccessor {
                        directive: directive.to_string(),
                        successor: after.to_string(),
                        span: directive.span(),
                        successor_span: after.span(),
                    });
                }
            }
        }

        Ok(())
    }
}
impl fmt::Display for CheckNot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} directive (", self.kind())?;
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{pattern}")?;
        }
        f.write_str(")")
    }
}
