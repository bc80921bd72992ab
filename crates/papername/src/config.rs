//! Runtime configuration for metadata lookups and renaming.
//!
//! Every field has a default, so an empty file (or no file at all) gives a working setup that
//! talks to the public Crossref and arXiv endpoints. A configuration file is plain TOML:
//!
//! ```toml
//! crossref_url = "https://api.crossref.org"
//! arxiv_url    = "https://export.arxiv.org/api/query"
//! mailto       = "me@example.org"
//! timeout_secs = 30
//! fallback     = "lookup-failure"
//! dry_run      = false
//! ```

use std::time::Duration;

use super::*;

/// Default base URL of the Crossref REST API.
pub const CROSSREF_URL: &str = "https://api.crossref.org";

/// Default arXiv query endpoint.
pub const ARXIV_URL: &str = "https://export.arxiv.org/api/query";

/// When the arXiv path may be tried for a document.
///
/// A document can carry both a DOI and an arXiv banner. The DOI is always tried first; this
/// policy decides what happens when it does not lead anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fallback {
  /// Try arXiv only when no DOI was detected at all. A DOI that fails to resolve ends
  /// processing of that file.
  #[default]
  NoIdentifier,
  /// Also try arXiv when a detected DOI fails to resolve.
  LookupFailure,
}

/// Configuration shared by the metadata clients and the [`Renamer`](crate::Renamer).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Base URL of the Crossref API; `/works/{doi}` is appended
  pub crossref_url: String,
  /// arXiv query endpoint; `id_list` and `max_results` are appended as query parameters
  pub arxiv_url:    String,
  /// Contact address advertised in the User-Agent for Crossref's polite pool
  pub mailto:       Option<String>,
  /// Request timeout in seconds, client default when absent
  pub timeout_secs: Option<u64>,
  /// Whether a failed DOI lookup may fall back to arXiv
  pub fallback:     Fallback,
  /// Resolve metadata and report the new name without renaming anything
  pub dry_run:      bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      crossref_url: CROSSREF_URL.to_string(),
      arxiv_url:    ARXIV_URL.to_string(),
      mailto:       None,
      timeout_secs: None,
      fallback:     Fallback::default(),
      dry_run:      false,
    }
  }
}

impl Config {
  /// Location of the per-user configuration file, e.g. `~/.config/papername/config.toml`.
  ///
  /// Returns `None` on platforms without a configuration directory.
  pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("papername").join("config.toml"))
  }

  /// Parses a configuration from a TOML string.
  pub fn from_toml_str(toml_str: &str) -> Result<Self> {
    let config: Config = toml::from_str(toml_str)?;
    config.validate()?;
    Ok(config)
  }

  /// Reads a configuration file. The file must exist.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Self::from_toml_str(&content)
  }

  /// Reads the file at [`Config::default_path`] when it exists, otherwise returns the defaults.
  pub fn load_default() -> Result<Self> {
    match Self::default_path() {
      Some(path) if path.is_file() => Self::from_path(path),
      _ => Ok(Self::default()),
    }
  }

  /// Overrides the Crossref base URL.
  pub fn with_crossref_url(mut self, url: impl Into<String>) -> Self {
    self.crossref_url = url.into();
    self
  }

  /// Overrides the arXiv query endpoint.
  pub fn with_arxiv_url(mut self, url: impl Into<String>) -> Self {
    self.arxiv_url = url.into();
    self
  }

  /// Sets the contact address sent to Crossref.
  pub fn with_mailto(mut self, mailto: impl Into<String>) -> Self {
    self.mailto = Some(mailto.into());
    self
  }

  /// Sets the fallback policy.
  pub fn with_fallback(mut self, fallback: Fallback) -> Self {
    self.fallback = fallback;
    self
  }

  /// Enables or disables dry runs.
  pub fn with_dry_run(mut self, dry_run: bool) -> Self {
    self.dry_run = dry_run;
    self
  }

  /// The configured request timeout, if any.
  pub fn timeout(&self) -> Option<Duration> { self.timeout_secs.map(Duration::from_secs) }

  /// User-Agent sent with every request.
  pub fn user_agent(&self) -> String {
    let base = concat!("papername/", env!("CARGO_PKG_VERSION"));
    match &self.mailto {
      Some(mailto) => format!("{base} (mailto:{mailto})"),
      None => base.to_string(),
    }
  }

  /// Checks the values serde cannot check on its own.
  fn validate(&self) -> Result<()> {
    if self.timeout_secs == Some(0) {
      return Err(PapernameError::Config("timeout_secs must be greater than zero".to_string()));
    }
    for endpoint in [&self.crossref_url, &self.arxiv_url] {
      url::Url::parse(endpoint)?;
    }
    Ok(())
  }
}
