use crate::common::*;

/// This enum represents the kind of directive that was parsed
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Check {
    /// The base CHECK directive, i.e. the pattern must match somewhere at or
    /// after the current position in the output
    Plain,
    /// The CHECK-NEXT directive, i.e. the pattern must match on the line
    /// immediately following the previous match.
    Next,
    /// The CHECK-NOT directive, i.e. none of the patterns may match between the
    /// current position and the match of the following CHECK, or the end of
    /// the output if there is no following directive.
    Not,
}
impl Check {
    /// Every directive kind, in the order their recognition patterns are tried
    pub const ALL: [Check; 3] = [Self::Plain, Self::Next, Self::Not];

    /// The literal token which follows the directive prefix in a check file
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Plain => ":",
            Self::Next => "-NEXT:",
            Self::Not => "-NOT:",
        }
    }
}
impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("CHECK"),
            Self::Next => f.write_str("CHECK-NEXT"),
            Self::Not => f.write_str("CHECK-NOT"),
        }
    }
}

/// A single parsed directive from a check file
#[derive(Debug, Clone)]
pub enum Directive {
    Plain(CheckPlain),
    Next(CheckNext),
    Not(CheckNot),
}
impl Directive {
    pub(crate) fn new(kind: Check, pattern: CheckPattern) -> Self {
        match kind {
            Check::Plain => Self::Plain(CheckPlain::new(pattern)),
            Check::Next => Self::Next(CheckNext::new(pattern)),
            Check::Not => Self::Not(CheckNot::new(pattern)),
        }
    }

    #[inline]
    pub fn kind(&self) -> Check {
        match self {
            Self::Plain(rule) => rule.kind(),
            Self::Next(rule) => rule.kind(),
            Self::Not(rule) => rule.kind(),
        }
    }

    /// The location of the (first) line this directive was written on
    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::Plain(rule) => rule.location(),
            Self::Next(rule) => rule.location(),
            Self::Not(rule) => rule.location(),
        }
    }

    /// The span of this directive's (first) pattern in the check file
    pub fn span(&self) -> SourceSpan {
        match self {
            Self::Plain(rule) => rule.span(),
            Self::Next(rule) => rule.span(),
            Self::Not(rule) => rule.span(),
        }
    }

    pub fn patterns(&self) -> &[CheckPattern] {
        match self {
            Self::Plain(rule) => core::slice::from_ref(rule.pattern()),
            Self::Next(rule) => core::slice::from_ref(rule.pattern()),
            Self::Not(rule) => rule.patterns(),
        }
    }
}
impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Plain(rule) => fmt::Display::fmt(rule, f),
            Self::Next(rule) => fmt::Display::fmt(rule, f),
            Self::Not(rule) => fmt::Display::fmt(rule, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn directive_tokens_are_distinct_test() {
        assert_eq!(Check::Plain.suffix(), ":");
        assert_eq!(Check::Next.suffix(), "-NEXT:");
        assert_eq!(Check::Not.suffix(), "-NOT:");
        assert_eq!(Check::ALL.len(), 3);
    }

    #[test]
    fn directive_display_test() {
        let pattern = CheckPattern::new(
            "foo",
            SourceLocation::new(FileName::from("test.py"), 2),
            SourceSpan::from(10..13),
        )
        .unwrap();
        let directive = Directive::new(Check::Next, pattern);
        assert_eq!(directive.kind(), Check::Next);
        assert_eq!(directive.location().line, 2);
        assert_eq!(
            directive.to_string(),
            "CHECK-NEXT directive (test.py:2 pattern 'foo')"
        );
    }
}
