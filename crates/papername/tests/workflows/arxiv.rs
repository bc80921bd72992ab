use super::*;

#[tokio::test]
async fn renames_pdf_from_arxiv_banner() -> TestResult<()> {
  let (server, dir, config) = setup().await;
  mount_arxiv(&server, ResponseTemplate::new(200).set_body_string(arxiv_feed()), 1).await;

  let pdf = write_pdf(dir.path(), "2301.07041v2.pdf", &[
    "arXiv:2301.07041v2  [cs.CR]  24 Jan 2023",
    "Verifiable Fully Homomorphic Encryption",
  ])?;
  let outcome = Renamer::new(config)?.process(&pdf).await;

  let expected = dir.path().join("2023_Hithnawi_arXiv_Verifiable Fully Homomorphic Encryption.pdf");
  assert!(matches!(&outcome, Outcome::Renamed { to, .. } if to == &expected), "{outcome:?}");
  assert!(expected.exists());
  Ok(())
}

#[tokio::test]
async fn empty_feed_is_lookup_failure() -> TestResult<()> {
  let (server, dir, config) = setup().await;
  let empty = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"><title>ArXiv Query</title></feed>"#;
  mount_arxiv(&server, ResponseTemplate::new(200).set_body_string(empty), 1).await;

  let pdf = write_pdf(dir.path(), "paper.pdf", &["arXiv:2301.07041v1 [cs.CR] 17 Jan 2023"])?;
  let outcome = Renamer::new(config)?.process(&pdf).await;

  assert!(matches!(
    outcome,
    Outcome::LookupFailed { identifier: Identifier::Arxiv(_), error: PapernameError::NotFound, .. }
  ));
  assert!(pdf.exists());
  Ok(())
}

#[tokio::test]
async fn bare_arxiv_reference_is_not_an_identifier() -> TestResult<()> {
  let (server, dir, config) = setup().await;
  mount_arxiv(&server, ResponseTemplate::new(200).set_body_string(arxiv_feed()), 0).await;

  let pdf = write_pdf(dir.path(), "paper.pdf", &[
    "Verifiable Fully Homomorphic Encryption",
    "as discussed in arXiv:2301.07041",
  ])?;
  let outcome = Renamer::new(config)?.process(&pdf).await;

  assert!(matches!(outcome, Outcome::NoIdentifier(_)));
  Ok(())
}
