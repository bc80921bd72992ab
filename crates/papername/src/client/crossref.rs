//! Client for resolving DOIs through the Crossref works API.
//!
//! `GET {crossref_url}/works/{doi}` answers with a JSON envelope whose `message` holds the work
//! record. Only the fields needed for naming are read; see [`parse_work`] for how absent fields
//! are filled in.

use url::Url;

use super::*;

/// Crossref works response envelope.
#[derive(Debug, Deserialize)]
struct WorksResponse {
  /// The work record itself
  message: Work,
}

/// The subset of a Crossref work record used for naming.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct Work {
  /// Contributors in the order the publisher lists them
  author:                Vec<Contributor>,
  /// Date of the print issue
  published_print:       Option<PartialDate>,
  /// Date of online publication
  published_online:      Option<PartialDate>,
  /// Title variants, the first being the main title
  title:                 Vec<String>,
  /// Abbreviated journal names
  short_container_title: Vec<String>,
  /// Full journal names
  container_title:       Vec<String>,
}

/// A Crossref contributor. Organisations carry a `name` instead of a `family` name.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Contributor {
  /// Family name of a person
  family: Option<String>,
  /// Name of an organisation
  name:   Option<String>,
}

/// Crossref's partial date: `{"date-parts": [[year, month, day]]}` with trailing parts optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct PartialDate {
  /// Date parts, outer list has a single element in practice
  date_parts: Vec<Vec<Option<i64>>>,
}

impl PartialDate {
  /// The year part, when present.
  fn year(&self) -> Option<i64> { self.date_parts.first()?.first().copied().flatten() }
}

/// Client for the Crossref works API.
#[derive(Debug, Clone)]
pub struct CrossrefClient {
  /// Shared HTTP client
  client:   reqwest::Client,
  /// Base URL, e.g. `https://api.crossref.org`
  base_url: String,
}

impl CrossrefClient {
  /// Creates a client with its own HTTP client built from `config`.
  pub fn new(config: &Config) -> Result<Self> {
    Self::with_client(http_client(config)?, &config.crossref_url)
  }

  /// Creates a client on top of an existing HTTP client.
  pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
    Url::parse(base_url)?;
    Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
  }

  /// The works endpoint for `doi`.
  pub fn works_url(&self, doi: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{}/works/{}", self.base_url, doi))?)
  }

  /// Fetches and parses the work record for `doi`.
  ///
  /// # Errors
  ///
  /// Returns [`PapernameError::NotFound`] when Crossref does not know the DOI and
  /// [`PapernameError::Api`] for any other unsuccessful status.
  pub async fn fetch(&self, doi: &str) -> Result<PublicationDetails> {
    let url = self.works_url(doi)?;
    debug!("Fetching from Crossref via: {url}");

    let response = self.client.get(url).send().await?;
    check_status("Crossref", response.status())?;
    let data = response.bytes().await?;

    trace!("Crossref response: {}", String::from_utf8_lossy(&data));
    parse_work(&data)
  }
}

/// Parses a Crossref works response into [`PublicationDetails`].
///
/// - `last_author`: family name of the last author, falling back to an organisation name, then
///   to [`SURNAME_NOT_FOUND`]
/// - `year`: from `published-print`, else `published-online`, else `0`
/// - `title`: first title, else [`TITLE_NOT_FOUND`]
/// - `journal_abbreviation`: first short container title, else first container title, else
///   [`JOURNAL_NOT_FOUND`]
pub fn parse_work(data: &[u8]) -> Result<PublicationDetails> {
  let WorksResponse { message: work } = serde_json::from_slice(data)?;

  let last_author = work
    .author
    .last()
    .and_then(|author| author.family.as_ref().or(author.name.as_ref()))
    .map_or_else(|| SURNAME_NOT_FOUND.to_string(), |name| name.trim().to_string());

  let year = work
    .published_print
    .as_ref()
    .or(work.published_online.as_ref())
    .and_then(PartialDate::year)
    .unwrap_or(0);

  let title = work.title.into_iter().next().unwrap_or_else(|| TITLE_NOT_FOUND.to_string());

  let journal = work
    .short_container_title
    .into_iter()
    .next()
    .or_else(|| work.container_title.into_iter().next())
    .unwrap_or_else(|| JOURNAL_NOT_FOUND.to_string());

  Ok(PublicationDetails {
    year: year.to_string(),
    last_author,
    title,
    journal_abbreviation: Some(journal),
  })
}
