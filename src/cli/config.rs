//! Run configuration.
//!
//! Built once from the parsed command line plus the environment, then passed by reference to every
//! stage of the run.

use std::env;
use std::ffi::OsString;

use dummytest_core::{PATTERN_ENV_VAR, PlaceholderNaming};

use super::Cli;
use crate::wrapped::WrappedCommand;

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Package pattern handed to the lister (whitespace-separated selectors).
    pub pattern: String,
    /// Remove the created placeholders at the end of the run.
    pub cleanup: bool,
    pub naming: PlaceholderNaming,
    /// Downgrade wrapped-command failure to a warning and a successful exit.
    pub silent_fail: bool,
    /// Go toolchain binary used for `go list`.
    pub go_program: OsString,
    pub command: Option<WrappedCommand>,
}

impl Config {
    /// Combine parsed flags with an optional pattern override.
    ///
    /// ## Notes
    /// - `env_pattern` wins over `--tpkgs` whenever it is `Some`, including `Some("")`.
    pub fn resolve(cli: Cli, env_pattern: Option<String>) -> Self {
        let pattern = match env_pattern {
            Some(pattern) => {
                tracing::debug!(env = PATTERN_ENV_VAR, "package pattern taken from the environment");
                pattern
            }
            None => cli.packages,
        };

        Self {
            pattern,
            cleanup: cli.cleanup,
            naming: PlaceholderNaming::from_flag(cli.package_names),
            silent_fail: cli.silent_fail,
            go_program: cli.go_program,
            command: WrappedCommand::from_argv(cli.command),
        }
    }

    /// [`Config::resolve`] with the override read from `GO_TEST_PACKAGES`.
    pub fn from_env(cli: Cli) -> Self {
        let env_pattern = env::var_os(PATTERN_ENV_VAR).map(|value| value.to_string_lossy().into_owned());
        Self::resolve(cli, env_pattern)
    }
}
