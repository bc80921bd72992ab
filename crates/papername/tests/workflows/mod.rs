use serde_json::json;
use wiremock::{
  matchers::{header_regex, method, path, query_param},
  Mock, ResponseTemplate,
};

use super::*;

mod arxiv;
mod crossref;

/// A Crossref works response for the paper used throughout these tests.
fn crossref_work() -> serde_json::Value {
  json!({
    "status": "ok",
    "message-type": "work",
    "message": {
      "DOI": "10.1000/xyz123",
      "author": [
        {"given": "Ada", "family": "Jones", "sequence": "first"},
        {"given": "Bob", "family": "Smith", "sequence": "additional"}
      ],
      "published-print": {"date-parts": [[2020, 6]]},
      "title": ["Deep Learning"],
      "short-container-title": ["Nat."],
      "container-title": ["Nature"]
    }
  })
}

/// An arXiv feed with a single entry.
fn arxiv_feed() -> String {
  r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: id_list=2301.07041</title>
  <updated>2024-01-01T00:00:00-05:00</updated>
  <entry>
    <id>http://arxiv.org/abs/2301.07041v2</id>
    <updated>2023-01-24T10:00:00Z</updated>
    <published>2023-01-17T18:58:20Z</published>
    <title>Verifiable Fully Homomorphic Encryption</title>
    <summary>Fully Homomorphic Encryption (FHE) is seeing increasing real-world deployment.</summary>
    <author><name>Alexander Viand</name></author>
    <author><name>Anwar Hithnawi</name></author>
  </entry>
</feed>"#
    .to_string()
}

/// Mounts the Crossref response for `10.1000/xyz123`.
async fn mount_crossref(server: &MockServer, response: ResponseTemplate, expected: u64) {
  Mock::given(method("GET"))
    .and(path("/works/10.1000/xyz123"))
    .respond_with(response)
    .expect(expected)
    .mount(server)
    .await;
}

/// Mounts the arXiv response for `2301.07041`.
async fn mount_arxiv(server: &MockServer, response: ResponseTemplate, expected: u64) {
  Mock::given(method("GET"))
    .and(path("/api/query"))
    .and(query_param("id_list", "2301.07041"))
    .respond_with(response)
    .expect(expected)
    .mount(server)
    .await;
}

/// Text of a first page carrying both identifiers.
const BOTH_IDENTIFIERS: &[&str] = &[
  "arXiv:2301.07041v2 [cs.CR] 24 Jan 2023",
  "Verifiable Fully Homomorphic Encryption",
  "https://doi.org/10.1000/xyz123",
];

#[tokio::test]
async fn sends_contact_in_user_agent() -> TestResult<()> {
  let (server, dir, config) = setup().await;
  Mock::given(method("GET"))
    .and(path("/works/10.1000/xyz123"))
    .and(header_regex("user-agent", r"^papername/.* \(mailto:me@example\.org\)$"))
    .respond_with(ResponseTemplate::new(200).set_body_json(crossref_work()))
    .expect(1)
    .mount(&server)
    .await;

  let pdf = write_pdf(dir.path(), "paper.pdf", &["doi:10.1000/xyz123"])?;
  let renamer = Renamer::new(config.with_mailto("me@example.org"))?;

  assert!(renamer.process(&pdf).await.is_success());
  Ok(())
}

#[tokio::test]
async fn processes_files_independently() -> TestResult<()> {
  let (server, dir, config) = setup().await;
  mount_crossref(&server, ResponseTemplate::new(200).set_body_json(crossref_work()), 1).await;
  mount_arxiv(&server, ResponseTemplate::new(200).set_body_string(arxiv_feed()), 1).await;

  let files = [
    write_pdf(dir.path(), "a.pdf", &["Received 2020", "doi 10.1000/xyz123"])?,
    write_pdf(dir.path(), "b.pdf", &["arXiv:2301.07041v2 [cs.CR] 24 Jan 2023"])?,
    write_pdf(dir.path(), "c.pdf", &["Lecture notes"])?,
  ];

  let renamer = Renamer::new(config)?;
  let mut outcomes = Vec::new();
  for file in &files {
    outcomes.push(renamer.process(file).await);
  }

  assert!(matches!(outcomes[0], Outcome::Renamed { .. }));
  assert!(matches!(outcomes[1], Outcome::Renamed { .. }));
  assert!(matches!(outcomes[2], Outcome::NoIdentifier(_)));
  assert!(dir.path().join("2020_Smith_Nat._Deep Learning.pdf").exists());
  assert!(dir.path().join("2023_Hithnawi_arXiv_Verifiable Fully Homomorphic Encryption.pdf").exists());
  assert!(files[2].exists());
  Ok(())
}
