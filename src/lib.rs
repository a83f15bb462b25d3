use std::{ffi::OsString, io::Write, process::ExitCode};

use anyhow::Context;
use clap::{CommandFactory, Parser};

pub mod cli;
pub mod commands;
pub mod error;
pub mod number;

pub use commands::{greet::greeting, sum::calculate_sum};
pub use number::{is_even, Number};

pub type Result<T> = anyhow::Result<T>;

/// Process exit status of a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// No command given, or the command itself rejected its input.
    Failure,
    /// The command line could not be parsed.
    Usage,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
            Status::Usage => 2,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Entry point used by the binary crate.
pub fn run() -> Result<Status> {
    init_tracing();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock())
}

/// Parses `argv`, runs the selected command and reports on the given streams.
///
/// Only failures to write output surface as `Err`; usage and input errors are
/// reported on `stderr` and mapped onto the returned [`Status`].
pub fn run_with<I, T, O, E>(argv: I, stdout: &mut O, stderr: &mut E) -> Result<Status>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let args = match cli::Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => {
            let rendered = err.render();
            if err.use_stderr() {
                tracing::debug!(kind = ?err.kind(), "rejected command line");
                write!(stderr, "{rendered}").context("failed to write usage error")?;
                return Ok(Status::Usage);
            }
            // --help and --version land here.
            write!(stdout, "{rendered}").context("failed to write help")?;
            return Ok(Status::Success);
        }
    };

    let Some(command) = args.command else {
        let help = cli::Args::command().render_help();
        write!(stdout, "{help}").context("failed to write help")?;
        return Ok(Status::Failure);
    };

    match commands::execute(&command) {
        Ok(message) => {
            writeln!(stdout, "{message}").context("failed to write result")?;
            Ok(Status::Success)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command rejected its input");
            writeln!(stderr, "Error: {err}").context("failed to write error")?;
            Ok(Status::Failure)
        }
    }
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
