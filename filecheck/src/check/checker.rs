use crate::{common::*, errors::TestFailed};

use super::TestResult;

/// Applies the directives of a [CheckFile] to checked output.
///
/// Directives are enforced in check file order, by advancing a cursor over the
/// lines of the output which never moves backwards. Checking stops at the first
/// directive which is not satisfied.
pub struct FileChecker<'a> {
    check_file: &'a CheckFile,
    match_file: ArcSource,
}
impl<'a> FileChecker<'a> {
    /// Create a checker for `check_file`, which was parsed from `match_file`
    pub fn new(check_file: &'a CheckFile, match_file: ArcSource) -> Self {
        Self {
            check_file,
            match_file,
        }
    }

    /// Check `input` against the directives of this [FileChecker]
    pub fn check(&self, input: &InputFile) -> Result<TestResult, TestFailed> {
        let mut matches = Vec::with_capacity(self.check_file.len());
        match self.run(input, &mut matches) {
            Ok(()) => Ok(TestResult::new(matches)),
            Err(error) => Err(TestFailed::new(
                error,
                matches,
                self.check_file.name().clone(),
            )),
        }
    }

    fn run(&self, input: &InputFile, matches: &mut Vec<MatchInfo>) -> Result<(), CheckFailedError> {
        let context = MatchContext::new(&self.match_file, input);
        let directives = self.check_file.directives();
        let end = input.len();
        let mut line_num = 0;
        let mut index = 0;

        while index < directives.len() {
            let directive = &directives[index];
            log::trace!("applying {directive} from line {}", line_num + 1);
            match directive {
                Directive::Plain(rule) => {
                    let found = rule.apply(&context, line_num..end)?;
                    matches.push(MatchInfo::found(directive, input, found));
                    line_num = core::cmp::min(found + 1, end);
                }
                Directive::Next(rule) => {
                    rule.apply(&context, line_num)?;
                    matches.push(MatchInfo::found(directive, input, line_num));
                    line_num = core::cmp::min(line_num + 1, end);
                }
                Directive::Not(rule) => match directives.get(index + 1) {
                    None => {
                        rule.apply(&context, line_num..end)?;
                        matches.push(MatchInfo::absent(directive));
                    }
                    Some(next @ Directive::Plain(bound)) => {
                        // The region searched by CHECK-NOT ends at the line matched by the
                        // following CHECK, which is committed here rather than re-applied.
                        let end_region = bound.apply(&context, line_num..end)?;
                        rule.apply(&context, line_num..end_region)?;
                        matches.push(MatchInfo::absent(directive));
                        matches.push(MatchInfo::found(next, input, end_region));
                        line_num = core::cmp::min(end_region + 1, end);
                        index += 2;
                        continue;
                    }
                    Some(next) => {
                        unreachable!("validation rejects {next} immediately after a CHECK-NOT")
                    }
                },
            }
            index += 1;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn check_ordering_is_enforced_test() {
        let context = TestContext::new()
            .with_checks(
                "# CHECK: second
# CHECK: first
",
            )
            .with_input("first\nsecond\n");
        let err = context.check().unwrap_err();
        assert!(matches!(
            err.errors(),
            [CheckFailedError::MatchNoneButExpected { span, .. }] if *span == context.checks().directives()[1].span()
        ));
    }

    #[test]
    fn check_never_rematches_previous_line_test() {
        let context = TestContext::new()
            .with_checks(
                "# CHECK: foo
# CHECK: foo
",
            )
            .with_input("foo bar\n");
        assert!(context.check().is_err());

        let context = context.with_input("foo bar\nfoo baz\n");
        let result = context.check().expect("expected checks to pass");
        let lines = result
            .matches()
            .iter()
            .map(|m| m.matched.as_ref().map(|l| l.line))
            .collect::<Vec<_>>();
        assert_eq!(lines, vec![Some(1), Some(2)]);
    }

    #[test]
    fn check_next_adjacency_test() {
        let context = TestContext::new()
            .with_checks(
                "# CHECK: foo
# CHECK-NEXT: bar
",
            )
            .with_input("foo\nbar\n");
        assert!(context.check().is_ok());

        let context = context.with_input("foo\nbaz\nbar\n");
        let err = context.check().unwrap_err();
        assert!(matches!(
            err.errors(),
            [CheckFailedError::MatchNextLineMismatch { expected, .. }] if expected.line == 2
        ));
    }

    #[test]
    fn check_next_as_first_directive_test() {
        let context = TestContext::new()
            .with_checks("# CHECK-NEXT: x")
            .with_input("x\ny\n");
        assert!(context.check().is_ok());

        let context = context.with_input("y\nx\n");
        assert!(context.check().is_err());
    }

    #[test]
    fn check_next_at_end_of_input_test() {
        let context = TestContext::new()
            .with_checks(
                "# CHECK: last
# CHECK-NEXT: more
",
            )
            .with_input("first\nlast\n");
        let err = context.check().unwrap_err();
        assert!(matches!(
            err.errors(),
            [CheckFailedError::UnexpectedEndOfInput { expected, .. }] if expected.line == 3
        ));
    }

    #[test]
    fn check_not_bounded_by_following_check_test() {
        let context = TestContext::new()
            .with_checks(
                "# CHECK-NOT: error
# CHECK: done
",
            )
            .with_input("step1\ndone\n");
        let result = context.check().expect("expected checks to pass");
        assert_eq!(result.num_passed(), 2);
        assert_eq!(result.num_matched(), 1);

        let context = context.with_input("step1\nerror\ndone\n");
        let err = context.check().unwrap_err();
        assert!(matches!(
            err.errors(),
            [CheckFailedError::MatchFoundButExcluded { found, .. }] if found.line == 2
        ));

        // A forbidden match after the bounding CHECK is outside the region
        let context = context.with_input("step1\ndone\nerror\n");
        assert!(context.check().is_ok());
    }

    #[test]
    fn check_not_does_not_search_bounding_line_test() {
        let context = TestContext::new()
            .with_checks(
                "# CHECK-NOT: error
# CHECK: done
",
            )
            .with_input("done with error\n");
        assert!(context.check().is_ok());
    }

    #[test]
    fn check_not_with_missing_bound_reports_check_test() {
        let context = TestContext::new()
            .with_checks(
                "# CHECK-NOT: error
# CHECK: done
",
            )
            .with_input("error\nstill running\n");
        let err = context.check().unwrap_err();
        assert!(matches!(
            err.errors(),
            [CheckFailedError::MatchNoneButExpected { .. }]
        ));
    }

    #[test]
    fn trailing_check_not_searches_rest_of_input_test() {
        let context = TestContext::new()
            .with_checks(
                "# CHECK: start
# CHECK-NOT: error
",
            )
            .with_input("error before\nstart\nok\nfine\n");
        assert!(context.check().is_ok());

        let context = context.with_input("start\nok\nfine\nlast error\n");
        let err = context.check().unwrap_err();
        assert!(matches!(
            err.errors(),
            [CheckFailedError::MatchFoundButExcluded { found, .. }] if found.line == 4
        ));
    }

    #[test]
    fn check_not_only_file_test() {
        let context = TestContext::new()
            .with_checks("# CHECK-NOT: panic")
            .with_input("");
        assert!(context.check().is_ok());
    }

    #[test]
    fn fail_fast_test() {
        let context = TestContext::new()
            .with_checks(
                "# CHECK: one
# CHECK: missing
# CHECK: three
# CHECK-NEXT: four
# CHECK: five
",
            )
            .with_input("one\ntwo\nthree\nfour\nfive\n");
        let err = context.check().unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.matches().len(), 1);
        assert_eq!(err.matches()[0].location.line, 1);
        assert!(matches!(
            err.errors(),
            [CheckFailedError::MatchNoneButExpected { directive, .. }] if directive.contains("'missing'")
        ));
    }

    #[test]
    fn checker_can_be_reused_test() {
        let context = TestContext::new().with_checks("# CHECK: hello");
        let checker = FileChecker::new(context.checks(), context.match_file().clone());

        let input = InputFile::new(ArcSource::from("hello world\n"));
        assert!(checker.check(&input).is_ok());
        let input = InputFile::new(ArcSource::from("goodbye\n"));
        assert!(checker.check(&input).is_err());
        let input = InputFile::new(ArcSource::from("hello again\n"));
        assert!(checker.check(&input).is_ok());
    }
}
