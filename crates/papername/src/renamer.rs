//! The per-file driver: extract text, detect an identifier, look it up, rename.
//!
//! Each call to [`Renamer::process`] handles exactly one file and reports what happened as an
//! [`Outcome`]. Nothing is carried over between files, and every failure is terminal for the
//! file it happened to, never for the run.

use super::*;

/// What happened to a single file.
#[derive(Debug)]
pub enum Outcome {
  /// The file was renamed.
  Renamed {
    /// Original path
    from: PathBuf,
    /// New path
    to:   PathBuf,
  },
  /// Dry run: the file would have been renamed to `to`.
  Planned {
    /// Original path
    from: PathBuf,
    /// Path the file would get
    to:   PathBuf,
  },
  /// The file already carries the name its metadata gives it.
  Unchanged(PathBuf),
  /// Neither a DOI nor an arXiv banner was found.
  NoIdentifier(PathBuf),
  /// An identifier was found but its metadata could not be fetched.
  LookupFailed {
    /// The file being processed
    path:       PathBuf,
    /// The identifier whose lookup failed last
    identifier: Identifier,
    /// Why the lookup failed
    error:      PapernameError,
  },
  /// Metadata was found but the file could not be renamed.
  RenameFailed {
    /// The file being processed
    path:  PathBuf,
    /// Why the rename failed
    error: PapernameError,
  },
  /// The file could not be read as a PDF.
  Unreadable {
    /// The file being processed
    path:  PathBuf,
    /// Why reading failed
    error: PapernameError,
  },
}

impl Outcome {
  /// The file this outcome is about.
  pub fn path(&self) -> &Path {
    match self {
      Outcome::Renamed { from, .. } | Outcome::Planned { from, .. } => from,
      Outcome::Unchanged(path) | Outcome::NoIdentifier(path) => path,
      Outcome::LookupFailed { path, .. }
      | Outcome::RenameFailed { path, .. }
      | Outcome::Unreadable { path, .. } => path,
    }
  }

  /// Whether the file ended up (or would end up) with its standardized name.
  pub fn is_success(&self) -> bool {
    matches!(self, Outcome::Renamed { .. } | Outcome::Planned { .. } | Outcome::Unchanged(_))
  }

  /// Whether processing stopped on an error rather than for lack of an identifier.
  pub fn is_failure(&self) -> bool {
    matches!(
      self,
      Outcome::LookupFailed { .. } | Outcome::RenameFailed { .. } | Outcome::Unreadable { .. }
    )
  }
}

/// File name of `path` for messages, falling back to the full path.
fn file_name(path: &Path) -> String {
  path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

impl Display for Outcome {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Outcome::Renamed { from, to } => write!(f, "Renamed {} to {}", file_name(from), file_name(to)),
      Outcome::Planned { from, to } =>
        write!(f, "Would rename {} to {}", file_name(from), file_name(to)),
      Outcome::Unchanged(path) => write!(f, "{} is already named correctly", file_name(path)),
      Outcome::NoIdentifier(path) =>
        write!(f, "No DOI or arXiv ID found in {}. File not renamed.", file_name(path)),
      Outcome::LookupFailed { path, identifier, error } => write!(
        f,
        "Failed to fetch metadata for {identifier} found in {}: {error}. File not renamed.",
        file_name(path)
      ),
      Outcome::RenameFailed { path, error: PapernameError::AlreadyExists(target) } => write!(
        f,
        "Did not rename {}: {} already exists. File not renamed.",
        file_name(path),
        file_name(target)
      ),
      Outcome::RenameFailed { path, error } =>
        write!(f, "Failed to rename {} due to OS error: {error}", file_name(path)),
      Outcome::Unreadable { path, error } =>
        write!(f, "Failed to read {} as a PDF: {error}. File not renamed.", file_name(path)),
    }
  }
}

/// Renames PDFs after the metadata of the identifier printed in them.
///
/// # Examples
///
/// ```no_run
/// use papername::{Config, Fallback, Renamer};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default().with_fallback(Fallback::LookupFailure).with_dry_run(true);
/// let renamer = Renamer::new(config)?;
/// for path in ["a.pdf", "b.pdf"] {
///   println!("{}", renamer.process(path).await);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Renamer {
  /// Settings the renamer was built with
  config: Config,
  /// Registry clients
  client: MetadataClient,
}

impl Renamer {
  /// Creates a renamer and the registry clients it needs.
  pub fn new(config: Config) -> Result<Self> {
    let client = MetadataClient::new(&config)?;
    Ok(Self { config, client })
  }

  /// The configuration in use.
  pub fn config(&self) -> &Config { &self.config }

  /// Processes one file: reads its text once, tries the DOI path, then the arXiv path as the
  /// [`Fallback`] policy allows, and renames the file when metadata was found.
  pub async fn process(&self, path: impl AsRef<Path>) -> Outcome {
    let path = path.as_ref().to_path_buf();

    let content = match pdf::PDFContent::load(&path) {
      Ok(content) => content,
      Err(error) => return Outcome::Unreadable { path, error },
    };

    match self.resolve(&content).await {
      Resolution::Found(details) => self.apply(path, &details).await,
      Resolution::Missing => Outcome::NoIdentifier(path),
      Resolution::Failed { identifier, error } => Outcome::LookupFailed { path, identifier, error },
    }
  }

  /// Finds an identifier in `content` and fetches its metadata, honouring the fallback policy.
  async fn resolve(&self, content: &pdf::PDFContent) -> Resolution {
    let mut failure = None;

    if let Some(doi) = extract_doi(&content.full_text()) {
      let identifier = Identifier::Doi(doi.to_string());
      debug!("Found {identifier}");
      match self.client.fetch(&identifier).await {
        Ok(details) => return Resolution::Found(details),
        Err(error) => {
          warn!("Lookup of {identifier} failed: {error}");
          if self.config.fallback == Fallback::NoIdentifier {
            return Resolution::Failed { identifier, error };
          }
          failure = Some(Resolution::Failed { identifier, error });
        },
      }
    }

    if let Some(arxiv) = ArxivId::from_first_page(content.first_page()) {
      let identifier = Identifier::Arxiv(arxiv);
      debug!("Found {identifier}");
      return match self.client.fetch(&identifier).await {
        Ok(details) => Resolution::Found(details),
        Err(error) => {
          warn!("Lookup of {identifier} failed: {error}");
          Resolution::Failed { identifier, error }
        },
      };
    }

    failure.unwrap_or(Resolution::Missing)
  }

  /// Renames the file, or only reports the new name on a dry run.
  async fn apply(&self, path: PathBuf, details: &PublicationDetails) -> Outcome {
    let target = rename::target_path(&path, details);
    if target == path {
      return Outcome::Unchanged(path);
    }
    if self.config.dry_run {
      return Outcome::Planned { from: path, to: target };
    }

    match rename::rename_pdf(&path, details).await {
      Ok(to) => Outcome::Renamed { from: path, to },
      Err(error) => Outcome::RenameFailed { path, error },
    }
  }
}

/// Result of looking for and resolving an identifier.
enum Resolution {
  /// Metadata was fetched
  Found(PublicationDetails),
  /// No identifier in the document
  Missing,
  /// The last identifier tried could not be resolved
  Failed {
    /// The identifier that failed
    identifier: Identifier,
    /// Why it failed
    error:      PapernameError,
  },
}
