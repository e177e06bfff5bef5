use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use filecheck::{Config, Test};
use outputcheck_core::{
    diagnostics::{bail, ArcSource, DiagResult, IntoDiagnostic, WrapErr},
    text, Input,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}
impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// Check the output of a program against directives embedded in a check file.
///
/// Directives are written in one-line comments of the check file, e.g.
/// `// CHECK: pattern`, and are applied in order to the file to check.
#[derive(Debug, Parser)]
#[command(name = "outputcheck", author, version)]
pub struct OutputCheck {
    /// The file containing the directives to check for
    #[arg(value_name = "CHECK_FILE")]
    pub check_file: Input,
    /// The file to check.
    ///
    /// By default this reads from standard input
    #[arg(long = "file-to-check", value_name = "PATH", default_value = "-")]
    pub file_to_check: Input,
    /// The minimum level of log messages to emit
    #[arg(short = 'l', long, value_enum, value_name = "LEVEL", default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
    /// Print the contents of the file to check once it has been checked
    #[arg(short = 'd', long = "dump-file-to-check", default_value_t = false)]
    pub dump_file_to_check: bool,
    #[command(flatten)]
    pub config: Config,
}
impl OutputCheck {
    pub fn run(self) -> DiagResult<ExitCode> {
        if self.check_file.is_stdin() && self.file_to_check.is_stdin() {
            bail!("the check file and the file to check cannot both be read from standard input");
        }

        let match_file = read(&self.check_file)?;
        let test = Test::new(match_file, &self.config);
        let check_file = test.parse()?;

        let input = read(&self.file_to_check)?;
        let result = test.check(&check_file, input.clone());
        if self.dump_file_to_check {
            dump(&input);
        }

        let result = result?;
        log::debug!(
            "{} of {} directives satisfied",
            result.num_passed(),
            check_file.len()
        );
        Ok(ExitCode::SUCCESS)
    }
}

fn read(input: &Input) -> DiagResult<ArcSource> {
    input
        .into_arc_source()
        .into_diagnostic()
        .wrap_err_with(|| format!("unable to read '{}'", input.filename()))
}

fn dump(input: &ArcSource) {
    if input.is_empty() {
        return;
    }
    log::info!("file to check contained:");
    for line in text::lines(input) {
        println!("{}", line.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_test() {
        let command = OutputCheck::try_parse_from(["outputcheck", "test.py"]).unwrap();
        assert!(command.file_to_check.is_stdin());
        assert_eq!(command.log_level, LogLevel::Info);
        assert!(!command.dump_file_to_check);
        assert_eq!(&*command.config.check_prefix, "CHECK");
        assert_eq!(command.config.comment_prefix, None);
        assert!(!command.config.disable_substitutions);
    }

    #[test]
    fn cli_options_test() {
        let command = OutputCheck::try_parse_from([
            "outputcheck",
            "test.txt",
            "--file-to-check",
            "out.log",
            "--check-prefix",
            "MY_CHECK",
            "--comment",
            "%",
            "-l",
            "warning",
            "-d",
            "--disable-substitutions",
        ])
        .unwrap();
        assert_eq!(command.file_to_check.path(), std::path::Path::new("out.log"));
        assert_eq!(command.log_level, LogLevel::Warning);
        assert!(command.dump_file_to_check);
        assert_eq!(&*command.config.check_prefix, "MY_CHECK");
        assert_eq!(command.config.comment_prefix.as_deref(), Some("%"));
        assert!(command.config.disable_substitutions);
    }

    #[test]
    fn cli_rejects_invalid_check_prefix_test() {
        let parse = |args: &[&str]| OutputCheck::try_parse_from(args.iter().copied());
        assert!(parse(&["outputcheck", "test.py", "--check-prefix="]).is_err());
        assert!(parse(&["outputcheck", "test.py", "-l", "verbose"]).is_err());
        assert!(parse(&["outputcheck"]).is_err());
    }

    #[test]
    fn cli_prefix_edge_cases_test() {
        let command =
            OutputCheck::try_parse_from(["outputcheck", "test.py", "--check-prefix", "32BIT"])
                .unwrap();
        assert_eq!(&*command.config.check_prefix, "32BIT");

        let command =
            OutputCheck::try_parse_from(["outputcheck", "test.py", "--comment="]).unwrap();
        assert_eq!(command.config.comment_prefix.as_deref(), Some(""));
        assert_eq!(
            command.config.line_comment_prefix(&"test.py".into()),
            Ok("#")
        );
    }
}
