//! Rename academic PDFs from the metadata behind their DOI or arXiv identifier.
//!
//! `papername` reads the text of a PDF, finds the identifier printed in it, asks the matching
//! public registry for the paper's metadata and renames the file to
//!
//! ```text
//! {year}_{last author}_{journal abbreviation}_{title}.pdf
//! ```
//!
//! # Features
//!
//! - **Identifier detection**: DOIs anywhere in the document, arXiv banners on the first page
//! - **Two registries**:
//!   - Crossref for DOIs (JSON works API)
//!   - arXiv for preprints (Atom query API), named with the `arXiv` journal tag
//! - **Safe renames**: illegal file name characters are stripped and existing files are never
//!   overwritten
//! - **Explicit fallback policy**: choose whether an unresolvable DOI may fall back to arXiv
//!
//! # Getting Started
//!
//! ```no_run
//! use papername::{Config, Outcome, Renamer};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let renamer = Renamer::new(Config::default())?;
//!
//!   match renamer.process("downloads/paper.pdf").await {
//!     Outcome::Renamed { to, .. } => println!("Renamed to {}", to.display()),
//!     other => println!("{other}"),
//!   }
//!
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`pdf`]: Text extraction from PDF pages
//! - [`identifier`]: DOI and arXiv identifier detection
//! - [`client`]: Crossref and arXiv metadata clients
//! - [`details`]: The [`PublicationDetails`] record produced by a lookup
//! - [`format`]: File name sanitization
//! - [`rename`]: Moving a file to its new name
//! - [`renamer`]: The per-file driver tying everything together

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod client;
pub mod config;
pub mod details;
pub mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod fixture;
pub mod format;
pub mod identifier;
pub mod pdf;
pub mod rename;
pub mod renamer;

pub use crate::{
  config::{Config, Fallback},
  details::PublicationDetails,
  renamer::{Outcome, Renamer},
};
use crate::{client::*, error::*, identifier::*};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use papername::prelude::*;
///
/// async fn example() -> Result<(), PapernameError> {
///   let renamer = Renamer::new(Config::default())?;
///   let outcome = renamer.process("paper.pdf").await;
///   println!("{outcome}");
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    config::{Config, Fallback},
    details::PublicationDetails,
    error::PapernameError,
    identifier::Identifier,
    renamer::{Outcome, Renamer},
  };
}
