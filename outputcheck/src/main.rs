mod command;
use self::command::{LogLevel, OutputCheck};

use std::process::ExitCode;

use clap::Parser;
use outputcheck_core::diagnostics::{self, DiagResult, IntoDiagnostic};

pub fn main() -> DiagResult<ExitCode> {
    let command = OutputCheck::parse();
    init_logger(command.log_level);

    diagnostics::reporting::set_hook(Box::new(|_| {
        Box::new(diagnostics::reporting::ReportHandlerOpts::new().build())
    }))?;
    diagnostics::set_panic_hook();
    exit_on_interrupt()?;

    command.run()
}

/// Exit with status 1 if the process is interrupted, e.g. while waiting on stdin
fn exit_on_interrupt() -> DiagResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .into_diagnostic()?;

    // Registered eagerly, so interrupts are caught as soon as this returns
    #[cfg(unix)]
    let mut interrupt = {
        use tokio::signal::unix::{signal, SignalKind};
        let _guard = runtime.enter();
        signal(SignalKind::interrupt()).into_diagnostic()?
    };
    #[cfg(windows)]
    let mut interrupt = {
        let _guard = runtime.enter();
        tokio::signal::windows::ctrl_c().into_diagnostic()?
    };

    std::thread::spawn(move || {
        if runtime.block_on(interrupt.recv()).is_some() {
            log::debug!("interrupted, exiting");
            std::process::exit(1);
        }
    });
    Ok(())
}

/// Initialize logging at `level`, unless overridden by `OUTPUTCHECK_TRACE`
fn init_logger(level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    builder.format_indent(Some(2));
    builder.filter_level(level.into());
    builder.parse_env("OUTPUTCHECK_TRACE");
    if let Ok(precision) = std::env::var("OUTPUTCHECK_TRACE_TIMING") {
        match precision.as_str() {
            "s" => builder.format_timestamp_secs(),
            "ms" => builder.format_timestamp_millis(),
            "us" => builder.format_timestamp_micros(),
            "ns" => builder.format_timestamp_nanos(),
            other => {
                eprintln!(
                    "invalid OUTPUTCHECK_TRACE_TIMING precision, expected one of [s, ms, us, ns], got '{}'",
                    other
                );
                std::process::exit(1);
            }
        };
    } else {
        builder.format_timestamp(None);
    }
    builder.init();
}
