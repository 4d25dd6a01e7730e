//! CLI module for dummytest
//!
//! ```text
//! dummytest [--tpkgs PATTERN] [--cleanup] [--pkgnames] [--silent-fail] [--go PROGRAM] [COMMAND]...
//! ```
//!
//! ## Modules
//!
//! - `config` - `Config` built from flags and `GO_TEST_PACKAGES`
//! - `commands` - the run itself
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod config;

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::process;

use clap::Parser;
use dummytest_core::DEFAULT_PATTERN;

use crate::enumerate::GoListCommand;
use crate::version::DUMMYTEST_VERSION;
use config::Config;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Create placeholder tests for Go packages without tests, then run a command
#[derive(Parser, Debug)]
#[command(name = "dummytest")]
#[command(version = DUMMYTEST_VERSION)]
#[command(about = "Create placeholder tests for Go packages without tests, then run a command", long_about = None)]
pub struct Cli {
    /// Packages to create placeholder tests for (GO_TEST_PACKAGES overrides this)
    #[arg(long = "tpkgs", value_name = "PATTERN", default_value = DEFAULT_PATTERN)]
    pub packages: String,

    /// Clean up placeholder tests after usage
    #[arg(long)]
    pub cleanup: bool,

    /// Use '{package}_test.go' instead of 'dummy_test.go' for placeholder files
    #[arg(long = "pkgnames")]
    pub package_names: bool,

    /// Exit successfully even when the wrapped command fails
    #[arg(long)]
    pub silent_fail: bool,

    /// Go toolchain binary used to list packages
    #[arg(long = "go", value_name = "PROGRAM", default_value = "go")]
    pub go_program: OsString,

    /// Command (and its arguments) to run once placeholders are in place
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<OsString>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();
    let config = Config::from_env(cli);

    match execute(&config) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute a run against the real toolchain and stdout.
fn execute(config: &Config) -> CliResult<ExitCode> {
    let lister = GoListCommand::new(config.go_program.clone());
    let stdout = io::stdout();
    commands::run_session(config, &lister, &mut stdout.lock())
}

// ============================================================================
// Tests
// ============================================================================
