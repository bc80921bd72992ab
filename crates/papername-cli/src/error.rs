//! Error types for the papername command line tool.

use thiserror::Error;

use super::*;

/// Result alias for the CLI.
pub type Result<T> = core::result::Result<T, PapernameCliError>;

/// Errors that stop the whole run. Failures on a single file are reported as an
/// [`Outcome`](papername::Outcome) instead and never end up here.
#[derive(Error, Debug)]
pub enum PapernameCliError {
  /// Setting up the library failed, e.g. an invalid configuration file.
  #[error(transparent)]
  Papername(#[from] PapernameError),

  /// The interactive file prompt failed.
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// A path argument is not a valid glob pattern.
  #[error(transparent)]
  Pattern(#[from] glob::PatternError),

  /// Reading the working directory or writing to the terminal failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// There is nothing to process.
  #[error("{0}")]
  Selection(String),
}
