use super::*;

#[tokio::test]
async fn renames_pdf_from_doi() -> TestResult<()> {
  let (server, dir, config) = setup().await;
  mount_crossref(&server, ResponseTemplate::new(200).set_body_json(crossref_work()), 1).await;

  let pdf = write_pdf(dir.path(), "download.pdf", &["Deep Learning", "doi:10.1000/xyz123"])?;
  let outcome = Renamer::new(config)?.process(&pdf).await;

  let expected = dir.path().join("2020_Smith_Nat._Deep Learning.pdf");
  match &outcome {
    Outcome::Renamed { from, to } => {
      assert_eq!(from, &pdf);
      assert_eq!(to, &expected);
    },
    other => panic!("unexpected outcome: {other:?}"),
  }
  assert_eq!(outcome.to_string(), "Renamed download.pdf to 2020_Smith_Nat._Deep Learning.pdf");
  assert!(expected.exists());
  assert!(!pdf.exists());
  Ok(())
}

#[tokio::test]
async fn unresolvable_doi_does_not_fall_back_by_default() -> TestResult<()> {
  let (server, dir, config) = setup().await;
  mount_crossref(&server, ResponseTemplate::new(404).set_body_string("Resource not found."), 1)
    .await;
  mount_arxiv(&server, ResponseTemplate::new(200).set_body_string(arxiv_feed()), 0).await;

  let pdf = write_pdf(dir.path(), "preprint.pdf", BOTH_IDENTIFIERS)?;
  let outcome = Renamer::new(config)?.process(&pdf).await;

  match &outcome {
    Outcome::LookupFailed { identifier: Identifier::Doi(doi), error: PapernameError::NotFound, .. } =>
      assert_eq!(doi, "10.1000/xyz123"),
    other => panic!("unexpected outcome: {other:?}"),
  }
  assert!(outcome.to_string().ends_with("File not renamed."));
  assert!(pdf.exists());
  Ok(())
}

#[tokio::test]
async fn unresolvable_doi_falls_back_to_arxiv_when_allowed() -> TestResult<()> {
  let (server, dir, config) = setup().await;
  mount_crossref(&server, ResponseTemplate::new(404), 1).await;
  mount_arxiv(&server, ResponseTemplate::new(200).set_body_string(arxiv_feed()), 1).await;

  let pdf = write_pdf(dir.path(), "preprint.pdf", BOTH_IDENTIFIERS)?;
  let renamer = Renamer::new(config.with_fallback(Fallback::LookupFailure))?;
  let outcome = renamer.process(&pdf).await;

  assert!(matches!(outcome, Outcome::Renamed { .. }), "unexpected outcome: {outcome:?}");
  assert!(dir
    .path()
    .join("2023_Hithnawi_arXiv_Verifiable Fully Homomorphic Encryption.pdf")
    .exists());
  Ok(())
}

#[tokio::test]
async fn server_error_is_reported() -> TestResult<()> {
  let (server, dir, config) = setup().await;
  mount_crossref(&server, ResponseTemplate::new(500), 1).await;

  let pdf = write_pdf(dir.path(), "paper.pdf", &["doi:10.1000/xyz123"])?;
  let outcome = Renamer::new(config)?.process(&pdf).await;

  match outcome {
    Outcome::LookupFailed { error: PapernameError::Api(message), .. } =>
      assert!(message.contains("500")),
    other => panic!("unexpected outcome: {other:?}"),
  }
  assert!(pdf.exists());
  Ok(())
}

#[tokio::test]
async fn dry_run_leaves_file_in_place() -> TestResult<()> {
  let (server, dir, config) = setup().await;
  mount_crossref(&server, ResponseTemplate::new(200).set_body_json(crossref_work()), 1).await;

  let pdf = write_pdf(dir.path(), "paper.pdf", &["doi:10.1000/xyz123"])?;
  let outcome = Renamer::new(config.with_dry_run(true))?.process(&pdf).await;

  match &outcome {
    Outcome::Planned { to, .. } =>
      assert_eq!(to, &dir.path().join("2020_Smith_Nat._Deep Learning.pdf")),
    other => panic!("unexpected outcome: {other:?}"),
  }
  assert!(pdf.exists());
  assert!(!dir.path().join("2020_Smith_Nat._Deep Learning.pdf").exists());
  Ok(())
}

#[tokio::test]
async fn name_collision_keeps_original() -> TestResult<()> {
  let (server, dir, config) = setup().await;
  mount_crossref(&server, ResponseTemplate::new(200).set_body_json(crossref_work()), 1).await;

  let taken = dir.path().join("2020_Smith_Nat._Deep Learning.pdf");
  std::fs::write(&taken, b"someone else")?;
  let pdf = write_pdf(dir.path(), "paper.pdf", &["doi:10.1000/xyz123"])?;
  let outcome = Renamer::new(config)?.process(&pdf).await;

  assert!(matches!(outcome, Outcome::RenameFailed { error: PapernameError::AlreadyExists(_), .. }));
  assert_eq!(
    outcome.to_string(),
    "Did not rename paper.pdf: 2020_Smith_Nat._Deep Learning.pdf already exists. File not renamed."
  );
  assert!(pdf.exists());
  assert_eq!(std::fs::read(&taken)?, b"someone else");
  Ok(())
}
