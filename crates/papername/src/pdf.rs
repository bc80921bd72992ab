//! Text extraction from PDF documents.
//!
//! The text of every page is read once with [`lopdf`] and kept per page, so the identifier
//! searches can look at the whole document (DOIs) or at the first page only (arXiv banners)
//! without parsing the file twice.

use lopdf::Document;

use super::*;

/// The extracted text of one PDF, page by page.
#[derive(Debug, Default, Clone)]
pub struct PDFContent {
  /// Pages in document order; pages whose text could not be decoded are left out
  pages: Vec<PageContent>,
}

/// Text of a single page.
#[derive(Debug, Default, Clone)]
pub struct PageContent {
  /// One-based page number, as lopdf counts them
  pub page_number: u32,
  /// Decoded text of the page
  pub text:        String,
}

impl PDFContent {
  /// Loads a PDF from disk and extracts the text of all of its pages.
  ///
  /// # Errors
  ///
  /// Returns [`PapernameError::Pdf`] when the file is not a readable PDF, and
  /// [`PapernameError::Path`] when the file cannot be opened.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Extracting text from {}", path.display());
    let doc = Document::load(path)?;
    Ok(Self::from_document(&doc))
  }

  /// Extracts the text of every page of an already parsed document.
  ///
  /// A page whose content cannot be decoded is skipped with a warning instead of failing the
  /// whole document; the identifier may well sit on another page.
  pub fn from_document(doc: &Document) -> Self {
    let pages = doc
      .get_pages()
      .into_keys()
      .filter_map(|page_number| match doc.extract_text(&[page_number]) {
        Ok(text) => Some(PageContent { page_number, text }),
        Err(e) => {
          warn!("Skipping page {page_number}, text extraction failed: {e}");
          None
        },
      })
      .collect::<Vec<_>>();

    trace!("Extracted text from {} pages", pages.len());
    Self { pages }
  }

  /// All successfully extracted pages.
  pub fn pages(&self) -> &[PageContent] { &self.pages }

  /// Text of page 1, or an empty string when it could not be extracted.
  pub fn first_page(&self) -> &str {
    self.pages.iter().find(|page| page.page_number == 1).map_or("", |page| page.text.as_str())
  }

  /// Text of the whole document, pages separated by newlines.
  pub fn full_text(&self) -> String {
    self.pages.iter().map(|page| page.text.as_str()).collect::<Vec<_>>().join("\n")
  }
}
