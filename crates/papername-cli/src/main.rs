//! Command line interface for renaming academic PDFs with the `papername` library.
//!
//! Each selected PDF is searched for a DOI (anywhere in the text) or an arXiv banner (on the
//! first page), its metadata is fetched from Crossref or arXiv, and the file is renamed to
//! `year_lastAuthor_journal_title.pdf` in place.
//!
//! # Usage
//!
//! ```bash
//! # Rename specific files
//! papername paper.pdf ~/Downloads/2301.07041v2.pdf
//!
//! # Rename everything matching a pattern, showing the new names first
//! papername --dry-run "downloads/*.pdf"
//!
//! # Choose among the PDFs in the current directory
//! papername
//!
//! # Let an unresolvable DOI fall back to the arXiv banner
//! papername --arxiv-fallback preprint.pdf
//! ```
//!
//! Files are processed one after another. A file that cannot be identified, looked up or
//! renamed is reported and left untouched; the run carries on with the next file.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Parser};
use papername::{error::PapernameError, Config, Fallback, Outcome, Renamer};
use tracing::{debug, trace, warn};
use tracing_subscriber::EnvFilter;

pub mod error;
pub mod interaction;
pub mod select;

use crate::{error::*, interaction::*, select::*};

/// Command line interface configuration and argument parsing
#[derive(Parser, Debug)]
#[command(author, version, about = "Rename academic PDFs after their DOI or arXiv metadata")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Configuration file to use instead of the per-user one
  #[arg(long, short)]
  config: Option<PathBuf>,

  /// Show the new names without renaming anything
  #[arg(long, short = 'n')]
  dry_run: bool,

  /// Try the arXiv banner when a DOI was found but could not be resolved
  #[arg(long)]
  arxiv_fallback: bool,

  /// PDF files or glob patterns. Without any, choose among the PDFs in the current directory
  paths: Vec<String>,
}

impl Cli {
  /// Loads the configuration file and applies the command line overrides.
  fn config(&self) -> Result<Config> {
    let mut config = match &self.config {
      Some(path) => Config::from_path(path)?,
      None => Config::load_default()?,
    };
    if self.dry_run {
      config = config.with_dry_run(true);
    }
    if self.arxiv_fallback {
      config = config.with_fallback(Fallback::LookupFailure);
    }
    Ok(config)
  }
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set. Logs go to stderr so they never mix with the per-file
/// status lines on stdout.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Selects the files and processes them one at a time.
async fn run<I: UserInteraction>(cli: &Cli, interaction: &I) -> Result<Summary> {
  let config = cli.config()?;
  trace!("Using configuration {config:?}");
  let renamer = Renamer::new(config)?;

  let files = select_pdfs(interaction, &cli.paths, &std::env::current_dir()?)?;
  if files.is_empty() {
    interaction.reply(ResponseContent::Info("No files selected."))?;
    return Ok(Summary::default());
  }

  let mut summary = Summary { dry_run: renamer.config().dry_run, ..Summary::default() };
  for file in &files {
    let outcome = renamer.process(file).await;
    summary.record(&outcome);
    interaction.reply(ResponseContent::Outcome(&outcome))?;
  }
  interaction.reply(ResponseContent::Summary(&summary))?;
  Ok(summary)
}

/// Entry point for the papername CLI application
///
/// Exits with status 1 when the run cannot start (bad configuration, bad pattern, nothing to
/// select). Failures on individual files are reported but do not change the exit status.
#[tokio::main(flavor = "current_thread")]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);
  debug!("Starting with {cli:?}");

  let interaction = Terminal;
  if let Err(e) = run(&cli, &interaction).await {
    if let Err(reply_error) = interaction.reply(ResponseContent::Error(e)) {
      eprintln!("{reply_error}");
    }
    std::process::exit(1);
  }
}
