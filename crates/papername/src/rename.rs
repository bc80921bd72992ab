//! Moving a PDF to its new name inside the same directory.

use super::*;

/// Where a rename would put `path`, given the resolved details.
pub fn target_path(path: &Path, details: &PublicationDetails) -> PathBuf {
  path.with_file_name(details.filename())
}

/// Renames `path` to the file name built from `details` and returns the new path.
///
/// The file stays in its directory. An existing file at the target is never overwritten.
///
/// # Errors
///
/// - [`PapernameError::AlreadyExists`] when another file already has the target name
/// - [`PapernameError::Path`] when the operating system refuses the rename
///
/// In both cases the original file is left untouched.
///
/// A target that resolves to the file itself, as after a case-only change on a case-insensitive
/// filesystem, is not a collision. The existence check and the rename are separate steps, so a
/// file created at the target in between is replaced.
pub async fn rename_pdf(path: &Path, details: &PublicationDetails) -> Result<PathBuf> {
  let target = target_path(path, details);
  if target == path {
    return Ok(target);
  }
  if tokio::fs::try_exists(&target).await? && !same_file(path, &target).await? {
    return Err(PapernameError::AlreadyExists(target));
  }

  tokio::fs::rename(path, &target).await?;
  info!("Renamed {} to {}", path.display(), target.display());
  Ok(target)
}

/// Whether two existing paths resolve to the same file.
async fn same_file(a: &Path, b: &Path) -> Result<bool> {
  Ok(tokio::fs::canonicalize(a).await? == tokio::fs::canonicalize(b).await?)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn details() -> PublicationDetails {
    PublicationDetails {
      year:                 "2020".to_string(),
      last_author:          "Smith".to_string(),
      title:                "Deep: Learning?".to_string(),
      journal_abbreviation: Some("Nat.".to_string()),
    }
  }

  #[traced_test]
  #[tokio::test]
  async fn renames_within_directory() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("download (3).pdf");
    std::fs::write(&original, b"%PDF-1.5").unwrap();

    let renamed = rename_pdf(&original, &details()).await.unwrap();

    assert_eq!(renamed, dir.path().join("2020_Smith_Nat._Deep Learning.pdf"));
    assert!(renamed.exists());
    assert!(!original.exists());
    assert!(logs_contain("Renamed"));
  }

  #[tokio::test]
  async fn refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("a.pdf");
    let taken = dir.path().join("2020_Smith_Nat._Deep Learning.pdf");
    std::fs::write(&original, b"original").unwrap();
    std::fs::write(&taken, b"taken").unwrap();

    let result = rename_pdf(&original, &details()).await;

    assert!(matches!(result, Err(PapernameError::AlreadyExists(path)) if path == taken));
    assert_eq!(std::fs::read(&original).unwrap(), b"original");
    assert_eq!(std::fs::read(&taken).unwrap(), b"taken");
  }

  #[tokio::test]
  async fn already_named_file_is_left_alone() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("2020_Smith_Nat._Deep Learning.pdf");
    std::fs::write(&original, b"%PDF-1.5").unwrap();

    assert_eq!(rename_pdf(&original, &details()).await.unwrap(), original);
    assert!(original.exists());
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn target_resolving_to_source_is_not_a_collision() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("a.pdf");
    let target = dir.path().join("2020_Smith_Nat._Deep Learning.pdf");
    std::fs::write(&original, b"%PDF-1.5").unwrap();
    std::os::unix::fs::symlink(&original, &target).unwrap();

    let renamed = rename_pdf(&original, &details()).await.unwrap();

    assert_eq!(renamed, target);
    assert!(!original.exists());
    assert!(!std::fs::symlink_metadata(&target).unwrap().file_type().is_symlink());
    assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.5");
  }

  #[tokio::test]
  async fn missing_source_is_io_error() {
    let dir = tempdir().unwrap();
    let result = rename_pdf(&dir.path().join("gone.pdf"), &details()).await;
    assert!(matches!(result, Err(PapernameError::Path(_))));
  }
}
