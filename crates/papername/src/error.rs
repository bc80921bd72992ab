//! Error types for the papername library.
//!
//! Every fallible operation in this crate returns [`PapernameError`]. The variants fall into
//! three groups that mirror the ways processing a single PDF can end early:
//! - The PDF could not be read ([`PapernameError::Pdf`], [`PapernameError::Path`])
//! - A metadata lookup failed ([`PapernameError::Network`], [`PapernameError::NotFound`],
//!   [`PapernameError::Api`] and the parsing variants)
//! - The rename itself failed ([`PapernameError::Path`], [`PapernameError::AlreadyExists`])
//!
//! # Examples
//!
//! ```no_run
//! use papername::{client::CrossrefClient, error::PapernameError, Config};
//!
//! # async fn example() -> Result<(), PapernameError> {
//! let client = CrossrefClient::new(&Config::default())?;
//! match client.fetch("10.1145/1327452.1327492").await {
//!   Err(PapernameError::NotFound) => println!("Crossref has no record for this DOI"),
//!   Err(PapernameError::Network(e)) => println!("Network error: {}", e),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(details) => println!("Found: {}", details.title),
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Error type alias used for the [`papername`](crate) crate.
pub type Result<T> = core::result::Result<T, PapernameError>;

/// Errors that can occur while identifying, looking up, or renaming a paper.
#[derive(Error, Debug)]
pub enum PapernameError {
  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable
  /// - The request times out
  /// - TLS errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The identifier is well formed but the remote registry has no record of it.
  ///
  /// Crossref answers unknown DOIs with a 404, and arXiv answers unknown IDs with a feed that
  /// contains no `entry`.
  #[error("Paper not found")]
  NotFound,

  /// A metadata API answered with something other than a usable response.
  ///
  /// The string carries the status or a short description for debugging.
  #[error("API error: {0}")]
  Api(String),

  /// A Crossref response body was not valid JSON for a works record.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// An arXiv response body was not a valid Atom feed.
  #[error(transparent)]
  Xml(#[from] quick_xml::DeError),

  /// PDF parsing errors from the lopdf library.
  ///
  /// Common causes are malformed or truncated files and encrypted documents.
  #[error(transparent)]
  Pdf(#[from] lopdf::Error),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - Reading the PDF or the configuration file fails
  /// - The rename is refused by the operating system
  /// - Permission errors occur
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The target file name is already taken by another file in the same directory.
  #[error("Refusing to overwrite existing file {}", .0.display())]
  AlreadyExists(PathBuf),

  /// An endpoint URL could not be built from the configured base URL.
  #[error(transparent)]
  InvalidUrl(#[from] url::ParseError),

  /// The configuration file is not valid TOML for [`Config`](crate::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration is unusable for another reason.
  #[error("{0}")]
  Config(String),
}
