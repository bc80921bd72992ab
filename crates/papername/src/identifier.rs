//! Detection of paper identifiers in extracted PDF text.
//!
//! Two kinds of identifier are recognised:
//!
//! - DOIs, searched for anywhere in the document text
//! - arXiv identifiers, taken from the vertical banner arXiv stamps on the first page of every
//!   preprint, e.g. `arXiv:2301.07041v2 [cs.CR] 24 Jan 2023`
//!
//! Absence is not an error: both searches return `None` when nothing matches, and the caller
//! decides what to try next.
//!
//! # Examples
//!
//! ```
//! use papername::identifier::{extract_doi, ArxivId};
//!
//! let text = "Published as doi:10.1145/1327452.1327492 in CACM";
//! assert_eq!(extract_doi(text), Some("10.1145/1327452.1327492"));
//!
//! let banner = "arXiv:2301.07041v2  [cs.CR]  24 Jan 2023";
//! let arxiv = ArxivId::from_first_page(banner).unwrap();
//! assert_eq!(arxiv.id, "2301.07041");
//! assert_eq!(arxiv.version, 2);
//! ```

use super::*;

lazy_static! {
  /// Crossref's recommended pattern for modern DOIs.
  static ref DOI: Regex = Regex::new(r"\b10\.\d{4,9}/[-._;()/:A-Za-z0-9]+").unwrap();
  /// The arXiv banner: `arXiv:<id>v<version> [<category>] <day> <month> <year>`.
  static ref ARXIV_BANNER: Regex =
    Regex::new(r"arXiv:(\d+\.\d+)v(\d+)\s+\[(\S+)\]\s+\d+\s\w+\s(\d+)").unwrap();
}

/// An identifier found in a document, tagged with the registry that can resolve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
  /// A Digital Object Identifier, resolved through Crossref
  Doi(String),
  /// An arXiv identifier, resolved through the arXiv query API
  Arxiv(ArxivId),
}

impl Display for Identifier {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Identifier::Doi(doi) => write!(f, "DOI {doi}"),
      Identifier::Arxiv(arxiv) => write!(f, "arXiv {}", arxiv.id),
    }
  }
}

/// An arXiv identifier parsed from the first-page banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArxivId {
  /// The identifier without its version suffix, e.g. `2301.07041`
  pub id:       String,
  /// The version number that followed the `v`
  pub version:  u32,
  /// The primary category in brackets, e.g. `cs.CR`
  pub category: String,
  /// The year printed at the end of the banner
  pub year:     String,
}

impl ArxivId {
  /// Looks for the arXiv banner in the text of a document's first page.
  ///
  /// Returns `None` when the banner is absent or incomplete, for example when the bracketed
  /// category is missing. Banners that arXiv formats differently are not recognised.
  pub fn from_first_page(text: &str) -> Option<Self> {
    let captures = ARXIV_BANNER.captures(text)?;
    let arxiv = Self {
      id:       captures[1].to_string(),
      version:  captures[2].parse().ok()?,
      category: captures[3].to_string(),
      year:     captures[4].to_string(),
    };
    trace!("Found arXiv banner for {} (v{}, {})", arxiv.id, arxiv.version, arxiv.category);
    Some(arxiv)
  }
}

/// Returns the first DOI appearing in `text`, exactly as written.
pub fn extract_doi(text: &str) -> Option<&str> { DOI.find(text).map(|m| m.as_str()) }
