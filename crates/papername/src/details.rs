//! The metadata record a lookup produces and a rename consumes.

use super::*;

/// Placeholder used when a record lists no authors.
pub const SURNAME_NOT_FOUND: &str = "Surname Not Found";
/// Placeholder used when a record has no title.
pub const TITLE_NOT_FOUND: &str = "Title Not Found";
/// Placeholder used when a Crossref record names no container.
pub const JOURNAL_NOT_FOUND: &str = "Journal Name Not Found";
/// Journal tag used in file names for papers that only exist as arXiv preprints.
pub const ARXIV_JOURNAL: &str = "arXiv";

/// Bibliographic details of one paper, as far as file naming is concerned.
///
/// Missing remote fields are replaced by the placeholder constants of this module rather than
/// failing the lookup.
///
/// # Examples
///
/// ```
/// use papername::PublicationDetails;
///
/// let details = PublicationDetails {
///   year:                 "2020".to_string(),
///   last_author:          "Smith".to_string(),
///   title:                "Deep Learning".to_string(),
///   journal_abbreviation: Some("Nat.".to_string()),
/// };
/// assert_eq!(details.filename(), "2020_Smith_Nat._Deep Learning.pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationDetails {
  /// Publication year, `"0"` when Crossref has no date
  pub year:                 String,
  /// Surname of the last listed author
  pub last_author:          String,
  /// Title as returned by the registry
  pub title:                String,
  /// Journal abbreviation, `None` for arXiv records
  pub journal_abbreviation: Option<String>,
}

impl PublicationDetails {
  /// The journal part of the file name, `arXiv` when there is no journal.
  pub fn journal(&self) -> &str { self.journal_abbreviation.as_deref().unwrap_or(ARXIV_JOURNAL) }

  /// Builds `{year}_{last_author}_{journal}_{title}.pdf` with every part sanitized.
  pub fn filename(&self) -> String {
    format!(
      "{}_{}_{}_{}.pdf",
      format::sanitize_filename(&self.year),
      format::sanitize_filename(&self.last_author),
      format::sanitize_filename(self.journal()),
      format::sanitize_filename(&self.title),
    )
  }
}
