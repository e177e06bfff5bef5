
#[cfg(test)]
pub use self::testing::TestContext;

use std::path::Path;

use outputcheck_core::{
    diagnostics::{IntoDiagnostic, WrapErr},
    Input,
};

use crate::{
    check::{FileChecker, TestResult},
    common::*,
    parse::CheckFileParser,
};

/// A single check file, which can be verified against one or more outputs.
///
/// This is the primary entrypoint for running outputcheck tests.
pub struct Test<'a> {
    config: &'a Config,
    match_file: ArcSource,
}
impl<'a> Test<'a> {
    /// Create a new test from the given match file (containing directives) and configuration
    ///
    /// The match file is not parsed until verification is requested.
    pub fn new(match_file: impl Into<ArcSource>, config: &'a Config) -> Self {
        Self {
            config,
            match_file: match_file.into(),
        }
    }

    /// Create a test from the check file at `path`
    pub fn from_file(path: impl AsRef<Path>, config: &'a Config) -> DiagResult<Self> {
        let input = Input::from(path.as_ref());
        let match_file = input
            .into_arc_source()
            .into_diagnostic()
            .wrap_err_with(|| format!("unable to read check file '{}'", input.filename()))?;
        Ok(Self::new(match_file, config))
    }

    pub fn match_file(&self) -> &ArcSource {
        &self.match_file
    }

    /// Parse and validate the directives of the check file
    pub fn parse(&self) -> DiagResult<CheckFile> {
        let parser = CheckFileParser::from_config(self.config, &self.match_file.name())?;
        parser
            .parse(&self.match_file)
            .map_err(|err| Report::new(err).with_source_code(self.match_file.clone()))
    }

    /// Apply previously parsed directives to `input`
    pub fn check(&self, check_file: &CheckFile, input: ArcSource) -> DiagResult<TestResult> {
        let input = InputFile::new(input);
        log::debug!(
            "checking {} lines of '{}' against {} directives",
            input.len(),
            input.name(),
            check_file.len()
        );
        FileChecker::new(check_file, self.match_file.clone())
            .check(&input)
            .map_err(Report::new)
    }

    /// Verify the given output passes this test.
    ///
    /// First the check file is parsed for directives, which are then applied
    /// to `input` in order, stopping at the first which is not satisfied.
    pub fn verify(&self, input: impl Into<ArcSource>) -> DiagResult<TestResult> {
        let check_file = self.parse()?;
        self.check(&check_file, input.into())
    }

    /// Verify the file at the given path passes this test.
    ///
    /// See [Self::verify] for details.
    pub fn verify_file(&self, path: impl AsRef<Path>) -> DiagResult<TestResult> {
        let input = Input::from(path.as_ref());
        let source = input
            .into_arc_source()
            .into_diagnostic()
            .wrap_err_with(|| format!("unable to read '{}'", input.filename()))?;
        self.verify(source)
    }
}

#[cfg(test)]
mod tests {
    use outputcheck_core::comment::CommentPrefixError;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::errors::TestFailed;

    fn source(name: &'static str, code: &'static str) -> ArcSource {
        ArcSource::new(Source::new(name, code))
    }

    #[test]
    fn verify_passing_output_test() {
        let config = Config::default();
        let test = Test::new(source("hello.py", "# CHECK: hello\n# CHECK-NEXT: world\n"), &config);
        let result = test
            .verify(source("output.txt", "hello\nworld\n"))
            .expect("expected test to pass");
        assert_eq!(result.num_passed(), 2);
    }

    #[test]
    fn verify_failing_output_test() {
        let config = Config::default();
        let test = Test::new(source("hello.py", "# CHECK: hello\n# CHECK-NEXT: world\n"), &config);
        let report = test
            .verify(source("output.txt", "hello\nthere\nworld\n"))
            .unwrap_err();
        let failed = report
            .downcast_ref::<TestFailed>()
            .expect("expected a TestFailed error");
        assert_eq!(failed.matches().len(), 1);
    }

    #[test]
    fn unsupported_extension_test() {
        let config = Config::default();
        let test = Test::new(source("hello.txt", "# CHECK: hello\n"), &config);
        let report = test.parse().unwrap_err();
        assert!(report.downcast_ref::<CommentPrefixError>().is_some());

        let config = Config::default().with_comment_prefix("#");
        let test = Test::new(source("hello.txt", "# CHECK: hello\n"), &config);
        assert_eq!(test.parse().map(|file| file.len()).ok(), Some(1));
    }

    #[test]
    fn parse_error_is_reported_test() {
        let config = Config::default();
        let test = Test::new(source("empty.c", "int main() {}\n"), &config);
        let report = test.parse().unwrap_err();
        assert_eq!(report.to_string(), "'empty.c' does not contain any directives");
    }
}
