use crate::common::*;

/// Information about a satisfied directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInfo {
    /// The kind of directive which was satisfied
    pub kind: Check,
    /// Where the directive was written in the check file
    pub location: SourceLocation,
    /// The line of the checked output which the directive matched.
    ///
    /// This is `None` for CHECK-NOT, which is satisfied by the absence of a match.
    pub matched: Option<SourceLocation>,
}
impl MatchInfo {
    pub fn found(directive: &Directive, input: &InputFile, index: usize) -> Self {
        Self {
            kind: directive.kind(),
            location: directive.location().clone(),
            matched: Some(input.location(index)),
        }
    }

    pub fn absent(directive: &Directive) -> Self {
        Self {
            kind: directive.kind(),
            location: directive.location().clone(),
            matched: None,
        }
    }
}

/// Information about a successful test run
#[derive(Debug, Default)]
pub struct TestResult {
    /// One entry per satisfied directive, in check file order
    matches: Vec<MatchInfo>,
}
impl TestResult {
    pub fn new(matches: Vec<MatchInfo>) -> Self {
        Self { matches }
    }

    /// The number of directives that were satisfied
    pub fn num_passed(&self) -> usize {
        self.matches.len()
    }

    /// The number of directives satisfied by a positive match, i.e. excluding CHECK-NOT
    pub fn num_matched(&self) -> usize {
        self.matches.iter().filter(|m| m.matched.is_some()).count()
    }

    pub fn matches(&self) -> &[MatchInfo] {
        self.matches.as_slice()
    }
}
