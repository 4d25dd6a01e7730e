//! The run itself: enumerate → create placeholders → wrapped command → cleanup.
//!
//! Returns `CliResult<ExitCode>` instead of calling `process::exit`. Error handling and exits happen
//! in the top-level `run()`.

use std::io::Write;

use crate::enumerate::{PackageLister, enumerate};
use crate::reconcile::{PlaceholderRecord, create_placeholders, remove_placeholders};
use crate::wrapped::WrappedCommand;

use super::config::Config;
use super::{CliError, CliResult, ExitCode};

/// Line printed on stdout once a run completes.
pub const DONE_MESSAGE: &str = "All done!";

/// Execute one full run.
///
/// `stdout` receives the wrapped command's output and the final [`DONE_MESSAGE`]; nothing else is
/// written to it.
///
/// ## Errors
///
/// - Discovery failure: nothing has been written yet.
/// - Wrapped-command failure without `silent_fail`: the placeholders have already been removed and
///   the error carries the command's exit code.
/// - Failure to write to `stdout`: the placeholders have already been removed.
pub fn run_session(config: &Config, lister: &dyn PackageLister, stdout: &mut dyn Write) -> CliResult<ExitCode> {
    let packages = enumerate(lister, &config.pattern)
        .map_err(|e| CliError::failure(format!("Error during packages acquiring: {e}")))?;
    tracing::info!(packages = packages.len(), "discovered packages");

    let record = create_placeholders(&packages, config.naming);

    let record = match &config.command {
        Some(command) => run_wrapped(command, record, config.silent_fail, stdout)?,
        None => Some(record),
    };

    if let Some(record) = record.filter(|_| config.cleanup) {
        remove_placeholders(record);
    }

    writeln!(stdout, "{DONE_MESSAGE}")
        .and_then(|()| stdout.flush())
        .map_err(|e| CliError::failure(format!("Error during writing to stdout: {e}")))?;

    Ok(ExitCode::SUCCESS)
}

/// Run the wrapped command and forward its output.
///
/// On any failure the placeholders are removed before returning, and `Ok(None)` signals that the
/// record has already been consumed.
fn run_wrapped(
    command: &WrappedCommand,
    record: PlaceholderRecord,
    silent_fail: bool,
    stdout: &mut dyn Write,
) -> CliResult<Option<PlaceholderRecord>> {
    tracing::info!(command = %command.display(), "running wrapped command");

    let failure = match command.run() {
        Ok(output) => {
            return match stdout.write_all(&output).and_then(|()| stdout.flush()) {
                Ok(()) => Ok(Some(record)),
                Err(e) => {
                    remove_placeholders(record);
                    Err(CliError::failure(format!("Error during writing to stdout: {e}")))
                }
            };
        }
        Err(failure) => failure,
    };

    remove_placeholders(record);

    if silent_fail {
        tracing::warn!("{failure}");
        return Ok(None);
    }

    Err(CliError::with_code(failure.to_string(), failure.exit_code()))
}
