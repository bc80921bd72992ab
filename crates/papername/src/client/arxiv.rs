//! Client for resolving arXiv identifiers through the arXiv query API.
//!
//! The API (`https://export.arxiv.org/api/query?id_list=...`) answers with an Atom feed holding
//! one `entry` per requested identifier. Unknown identifiers produce an empty feed, malformed ones
//! an entry whose `id` points at the API's error documentation.

use quick_xml::de::from_str;
use url::Url;

use super::*;

/// Internal representation of the arXiv API's Atom feed response.
#[derive(Debug, Deserialize)]
struct Feed {
  /// A `Feed` from arXiv may contain multiple `Entry`s
  #[serde(rename = "entry", default)]
  entries: Vec<Entry>,
}

/// Internal representation of a paper entry from arXiv's API response.
#[derive(Debug, Deserialize)]
struct Entry {
  /// arXiv URL of the paper, or of the error description for a failed query
  #[serde(default)]
  id:      String,
  /// Timestamp of the latest version, e.g. `2021-05-01T00:00:00Z`
  #[serde(default)]
  updated: String,
  /// Paper title (may contain line breaks)
  #[serde(default)]
  title:   String,
  /// Abstract, or the error message for a failed query
  #[serde(default)]
  summary: String,
  /// List of paper authors
  #[serde(rename = "author", default)]
  authors: Vec<Author>,
}

/// Internal representation of an author from arXiv's API response.
#[derive(Debug, Deserialize)]
struct Author {
  /// Author's full name
  name: String,
}

/// Client for interacting with the arXiv API.
#[derive(Debug, Clone)]
pub struct ArxivClient {
  /// Shared HTTP client
  client:   reqwest::Client,
  /// Query endpoint, e.g. `https://export.arxiv.org/api/query`
  endpoint: Url,
}

impl ArxivClient {
  /// Creates a client with its own HTTP client built from `config`.
  pub fn new(config: &Config) -> Result<Self> {
    Self::with_client(http_client(config)?, &config.arxiv_url)
  }

  /// Creates a client on top of an existing HTTP client.
  pub fn with_client(client: reqwest::Client, endpoint: &str) -> Result<Self> {
    Ok(Self { client, endpoint: Url::parse(endpoint)? })
  }

  /// The query URL for a single identifier.
  pub fn query_url(&self, identifier: &str) -> Url {
    let mut url = self.endpoint.clone();
    url.query_pairs_mut().append_pair("id_list", identifier).append_pair("max_results", "1");
    url
  }

  /// Fetches paper metadata from arXiv using its identifier (without version suffix).
  ///
  /// # Errors
  ///
  /// This function will return an error if:
  /// - The network request fails
  /// - The API response cannot be parsed
  /// - The feed contains no entry ([`PapernameError::NotFound`])
  /// - The API reports a malformed identifier ([`PapernameError::Api`])
  pub async fn fetch(&self, identifier: &str) -> Result<PublicationDetails> {
    let url = self.query_url(identifier);
    debug!("Fetching from arXiv via: {url}");

    let response = self.client.get(url).send().await?;
    check_status("arXiv", response.status())?;
    let data = response.text().await?;

    trace!("arXiv response: {data}");
    parse_feed(&data)
  }
}

/// Parses an arXiv Atom feed into [`PublicationDetails`] for its first entry.
///
/// - `year`: first four characters of `updated`
/// - `title`: verbatim
/// - `last_author`: last word of the last author's name, else [`SURNAME_NOT_FOUND`]
/// - `journal_abbreviation`: always `None`
pub fn parse_feed(xml: &str) -> Result<PublicationDetails> {
  let feed: Feed = from_str(xml)?;
  let entry = feed.entries.into_iter().next().ok_or(PapernameError::NotFound)?;

  if entry.id.contains("/api/errors") {
    return Err(PapernameError::Api(format!("arXiv rejected the query: {}", entry.summary.trim())));
  }

  let year = entry.updated.trim().chars().take(4).collect();
  let title = if entry.title.trim().is_empty() { TITLE_NOT_FOUND.to_string() } else { entry.title };
  let last_author = entry
    .authors
    .last()
    .and_then(|author| author.name.split_whitespace().last())
    .unwrap_or(SURNAME_NOT_FOUND)
    .to_string();

  Ok(PublicationDetails { year, last_author, title, journal_abbreviation: None })
}
