use outputcheck_core::text;

use super::{substitution::expand_line_substitutions, DirectivePattern};
use crate::common::*;

/// Scans a check file for directives, producing a validated [CheckFile]
pub struct CheckFileParser {
    patterns: Vec<DirectivePattern>,
    substitutions: bool,
}
impl CheckFileParser {
    /// Create a parser recognizing directives introduced by `comment_prefix`
    /// followed by `check_prefix`, e.g. `//` and `CHECK` for `// CHECK: foo`
    pub fn new(comment_prefix: &str, check_prefix: &str) -> ParseResult<Self> {
        let patterns = DirectivePattern::generate(comment_prefix, check_prefix)?;
        for pattern in patterns.iter() {
            log::debug!("recognizing {} directives with '{}'", pattern.kind, pattern.as_str());
        }
        Ok(Self {
            patterns,
            substitutions: true,
        })
    }

    /// Create a parser for the check file `name` using the given configuration
    pub fn from_config(config: &Config, name: &FileName) -> DiagResult<Self> {
        let comment_prefix = config.line_comment_prefix(name)?;
        let parser = Self::new(comment_prefix, &config.check_prefix)?;
        Ok(parser.with_substitutions(!config.disable_substitutions))
    }

    /// Enable or disable `${LINE}` substitutions in patterns
    pub fn with_substitutions(mut self, enabled: bool) -> Self {
        self.substitutions = enabled;
        self
    }

    pub fn parse<S>(&self, code: &S) -> ParseResult<CheckFile>
    where
        S: NamedSourceFile + ?Sized,
    {
        let name = code.name();
        let mut directives: Vec<Directive> = vec![];
        for line in text::lines(code.source()) {
            let Some((kind, range)) = self
                .patterns
                .iter()
                .find_map(|p| p.recognize(line.content).map(|range| (p.kind, range)))
            else {
                continue;
            };

            let location = SourceLocation::new(name.clone(), line.number());
            let span = SourceSpan::from(line.span.start + range.start..line.span.start + range.end);
            let raw = &line.content[range];
            let pattern = if self.substitutions {
                expand_line_substitutions(raw, &location, span)?
            } else {
                Cow::Borrowed(raw)
            };
            let pattern = CheckPattern::new(&pattern, location, span)?;

            match (kind, directives.last_mut()) {
                (Check::Not, Some(Directive::Not(previous))) => {
                    log::debug!(
                        "{}: adding pattern '{}' to {previous}",
                        &pattern.location,
                        pattern.as_str()
                    );
                    previous.add_pattern(pattern);
                }
                _ => {
                    let directive = Directive::new(kind, pattern);
                    log::debug!("{}: creating {directive}", directive.location());
                    directives.push(directive);
                }
            }
        }

        CheckFile::new(name, directives)
    }
}
