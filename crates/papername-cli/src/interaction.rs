//! Console output and prompts.

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, MultiSelect};

use super::*;

pub static INFO_PREFIX: &str = "ℹ ";
pub static SUCCESS_PREFIX: &str = "✓ ";
pub static ERROR_PREFIX: &str = "✗ ";
pub static WARNING_PREFIX: &str = "! ";
pub static PROMPT_PREFIX: &str = "❯ ";
pub static BULLET: &str = "•";

/// Something to tell the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// The result of processing one file
  Outcome(&'a Outcome),
  /// End-of-run counts
  Summary(&'a Summary),
  /// Neutral information
  Info(&'a str),
  /// Something was skipped
  Warning(&'a str),
  /// The run is aborted
  Error(PapernameCliError),
}

/// How the tool talks to the user.
pub trait UserInteraction {
  /// Prints a message.
  fn reply(&self, content: ResponseContent) -> Result<()>;

  /// Lets the user pick any number of `candidates`. An empty result means nothing was picked.
  fn select(&self, candidates: &[PathBuf]) -> Result<Vec<PathBuf>>;
}

/// Running counts of outcomes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
  /// Files renamed, planned, or already named correctly
  pub succeeded: usize,
  /// Files without an identifier
  pub skipped:   usize,
  /// Files that hit an error
  pub failed:    usize,
  /// Whether names were only planned
  pub dry_run:   bool,
}

impl Summary {
  /// Counts one outcome.
  pub fn record(&mut self, outcome: &Outcome) {
    if outcome.is_success() {
      self.succeeded += 1;
    } else if outcome.is_failure() {
      self.failed += 1;
    } else {
      self.skipped += 1;
    }
  }
}

/// Interaction through the process's terminal.
#[derive(Debug, Default)]
pub struct Terminal;

impl UserInteraction for Terminal {
  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Outcome(outcome) => {
        let prefix = if outcome.is_success() {
          style(SUCCESS_PREFIX).green()
        } else if outcome.is_failure() {
          style(ERROR_PREFIX).red()
        } else {
          style(WARNING_PREFIX).yellow()
        };
        println!("{prefix}{outcome}");
      },
      ResponseContent::Summary(summary) => {
        let verb = if summary.dry_run { "to rename" } else { "renamed" };
        println!(
          "{}{} {verb} {BULLET} {} skipped {BULLET} {} failed",
          style(INFO_PREFIX).cyan(),
          style(summary.succeeded).green(),
          style(summary.skipped).yellow(),
          style(summary.failed).red(),
        );
      },
      ResponseContent::Info(message) => println!("{}{message}", style(INFO_PREFIX).cyan()),
      ResponseContent::Warning(message) => println!("{}{message}", style(WARNING_PREFIX).yellow()),
      ResponseContent::Error(error) => eprintln!("{}{error}", style(ERROR_PREFIX).red()),
    }
    Ok(())
  }

  fn select(&self, candidates: &[PathBuf]) -> Result<Vec<PathBuf>> {
    // The prompt owns the terminal only for the duration of this call.
    let term = Term::stderr();
    if !term.is_term() {
      return Err(PapernameCliError::Selection(
        "No PDF files given and no terminal to choose them from".to_string(),
      ));
    }

    let names = candidates
      .iter()
      .map(|path| match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
      })
      .collect::<Vec<_>>();

    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
      .with_prompt(format!("{PROMPT_PREFIX}Select PDF files (space to toggle, enter to confirm)"))
      .items(&names)
      .interact_on_opt(&term)?
      .unwrap_or_default();

    Ok(chosen.into_iter().map(|index| candidates[index].clone()).collect())
  }
}
