//! Clients for the registries that resolve paper identifiers.
//!
//! - [`CrossrefClient`] resolves DOIs through the Crossref works API
//! - [`ArxivClient`] resolves arXiv identifiers through the arXiv Atom query API
//! - [`MetadataClient`] bundles both and dispatches on the [`Identifier`] kind
//!
//! All clients share one `reqwest` client built from the [`Config`], so the User-Agent and
//! timeout settings apply to every request.
//!
//! # Examples
//!
//! ```no_run
//! use papername::{client::MetadataClient, identifier::Identifier, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MetadataClient::new(&Config::default())?;
//! let details = client.fetch(&Identifier::Doi("10.1145/1327452.1327492".into())).await?;
//! println!("{}", details.filename());
//! # Ok(())
//! # }
//! ```

use reqwest::StatusCode;

use super::*;
use crate::{config::Config, details::*};

pub mod arxiv;
pub mod crossref;

pub use arxiv::ArxivClient;
pub use crossref::CrossrefClient;

/// Builds the HTTP client shared by all registry clients.
pub fn http_client(config: &Config) -> Result<reqwest::Client> {
  let mut builder = reqwest::Client::builder().user_agent(config.user_agent());
  if let Some(timeout) = config.timeout() {
    builder = builder.timeout(timeout);
  }
  Ok(builder.build()?)
}

/// Resolves any [`Identifier`] with the client for its registry.
#[derive(Debug, Clone)]
pub struct MetadataClient {
  /// Client for DOIs
  crossref: CrossrefClient,
  /// Client for arXiv identifiers
  arxiv:    ArxivClient,
}

impl MetadataClient {
  /// Creates both registry clients from one configuration.
  pub fn new(config: &Config) -> Result<Self> {
    let client = http_client(config)?;
    Ok(Self {
      crossref: CrossrefClient::with_client(client.clone(), &config.crossref_url)?,
      arxiv:    ArxivClient::with_client(client, &config.arxiv_url)?,
    })
  }

  /// Fetches the publication details for `identifier` from its registry.
  ///
  /// # Errors
  ///
  /// - [`PapernameError::NotFound`] when the registry has no record
  /// - [`PapernameError::Api`] for any other unsuccessful response
  /// - [`PapernameError::Network`] when the request cannot be made
  /// - [`PapernameError::Json`] or [`PapernameError::Xml`] when the response cannot be parsed
  pub async fn fetch(&self, identifier: &Identifier) -> Result<PublicationDetails> {
    match identifier {
      Identifier::Doi(doi) => self.crossref.fetch(doi).await,
      Identifier::Arxiv(arxiv) => self.arxiv.fetch(&arxiv.id).await,
    }
  }
}

/// Turns an unsuccessful status into the matching error.
fn check_status(registry: &str, status: StatusCode) -> Result<()> {
  match status {
    status if status.is_success() => Ok(()),
    StatusCode::NOT_FOUND => Err(PapernameError::NotFound),
    status => Err(PapernameError::Api(format!("{registry} returned {status}"))),
  }
}
