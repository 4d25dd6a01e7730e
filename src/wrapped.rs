//! The wrapped command: whatever the user asked to run once placeholders are in place.
//!
//! The child runs synchronously with stdin closed. Its stdout and stderr share a single pipe, so the
//! captured output keeps the interleaving the child produced.

use std::ffi::OsString;
use std::io::{self, Read};
use std::process::{Command, ExitStatus, Output, Stdio};

use thiserror::Error;

/// Errors from running the wrapped command.
#[derive(Debug, Error)]
pub enum WrappedCommandError {
    #[error("Error occurred: cannot start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Error occurred: I/O failure while running `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Error occurred: {output}, {status}")]
    Failed { status: ExitStatus, output: String },
}

impl WrappedCommandError {
    /// Exit code the orchestrator should terminate with.
    ///
    /// The child's own code when it exited with one, otherwise 1 (spawn failure, killed by signal).
    pub fn exit_code(&self) -> i32 {
        match self {
            WrappedCommandError::Failed { status, .. } => status.code().filter(|code| *code != 0).unwrap_or(1),
            WrappedCommandError::Spawn { .. } | WrappedCommandError::Io { .. } => 1,
        }
    }
}

/// A command line to run after the placeholders have been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl WrappedCommand {
    /// Build from trailing positional arguments. Returns `None` when there are none.
    pub fn from_argv<I, S>(argv: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next()?;
        Some(Self {
            program,
            args: argv.collect(),
        })
    }

    /// Space-joined command line, for logs.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion and return the combined stdout/stderr output.
    ///
    /// ## Errors
    ///
    /// - [`WrappedCommandError::Spawn`] when the program cannot be started.
    /// - [`WrappedCommandError::Io`] when the output pipe cannot be set up or read.
    /// - [`WrappedCommandError::Failed`] when the program exits unsuccessfully; the trimmed output is
    ///   part of the error.
    #[tracing::instrument(skip_all, fields(command = %self.display()))]
    pub fn run(&self) -> Result<Vec<u8>, WrappedCommandError> {
        let (mut reader, writer) = io::pipe().map_err(|source| self.io_error(source))?;
        let stderr_writer = writer.try_clone().map_err(|source| self.io_error(source))?;

        // The `Command` (and with it our copies of the write end) is dropped at the end of this
        // statement, so the read below sees EOF once the child exits.
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(stderr_writer)
            .spawn()
            .map_err(|source| WrappedCommandError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        let mut output = Vec::new();
        let read = reader.read_to_end(&mut output);
        let status = child.wait().map_err(|source| self.io_error(source))?;
        read.map_err(|source| self.io_error(source))?;

        tracing::debug!(%status, output_len = output.len(), "wrapped command finished");

        if status.success() {
            Ok(output)
        } else {
            Err(WrappedCommandError::Failed {
                status,
                output: format_output(&output),
            })
        }
    }

    fn io_error(&self, source: io::Error) -> WrappedCommandError {
        WrappedCommandError::Io {
            program: self.program.to_string_lossy().into_owned(),
            source,
        }
    }
}

/// Decode captured output for a diagnostic message, trimming surrounding whitespace.
pub(crate) fn format_output(output: &[u8]) -> String {
    String::from_utf8_lossy(output).trim().to_string()
}

/// Stdout followed by stderr of a finished process.
pub(crate) fn combined_output(output: &Output) -> Vec<u8> {
    let mut combined = Vec::with_capacity(output.stdout.len() + output.stderr.len());
    combined.extend_from_slice(&output.stdout);
    combined.extend_from_slice(&output.stderr);
    combined
}
