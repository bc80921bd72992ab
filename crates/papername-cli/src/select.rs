//! Choosing which files to process.
//!
//! Paths on the command line may be plain paths or glob patterns. Without any, the PDFs in the
//! working directory are offered in an interactive multi-select prompt.

use super::*;

/// Whether `path` has a `.pdf` extension, in any case.
pub fn is_pdf(path: &Path) -> bool {
  path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Whether an argument should be expanded as a glob pattern rather than taken literally.
///
/// An existing path is always literal, so files like `Smith [2020].pdf` can be named directly.
fn is_pattern(arg: &str) -> bool { arg.contains(['*', '?', '[']) && !Path::new(arg).exists() }

/// Expands command line arguments into the list of PDFs to process.
///
/// Literal paths are kept even when they do not exist, so the failure is reported per file.
/// Files without a `.pdf` extension are skipped with a warning, duplicates are dropped, and the
/// order of the arguments is preserved.
pub fn expand_paths<I: UserInteraction>(interaction: &I, args: &[String]) -> Result<Vec<PathBuf>> {
  let mut paths = Vec::new();
  for arg in args {
    let matches = if is_pattern(arg) {
      let mut matches = Vec::new();
      for entry in glob::glob(arg)? {
        match entry {
          Ok(path) => matches.push(path),
          Err(e) => warn!("Skipping unreadable match of {arg}: {e}"),
        }
      }
      if matches.is_empty() {
        interaction.reply(ResponseContent::Warning(&format!("No files match {arg}")))?;
      }
      matches
    } else {
      vec![PathBuf::from(arg)]
    };

    for path in matches {
      if !is_pdf(&path) {
        interaction
          .reply(ResponseContent::Warning(&format!("Skipping {}: not a PDF", path.display())))?;
      } else if !paths.contains(&path) {
        paths.push(path);
      }
    }
  }
  Ok(paths)
}

/// PDFs directly inside `dir`, sorted by name.
pub fn pdfs_in(dir: &Path) -> Result<Vec<PathBuf>> {
  let mut pdfs = Vec::new();
  for entry in std::fs::read_dir(dir)? {
    let path = entry?.path();
    if path.is_file() && is_pdf(&path) {
      pdfs.push(path);
    }
  }
  pdfs.sort();
  Ok(pdfs)
}

/// Resolves the files to process: the expanded arguments, or an interactive choice among the
/// PDFs of `dir` when there are no arguments.
pub fn select_pdfs<I: UserInteraction>(
  interaction: &I,
  args: &[String],
  dir: &Path,
) -> Result<Vec<PathBuf>> {
  if !args.is_empty() {
    return expand_paths(interaction, args);
  }

  let candidates = pdfs_in(dir)?;
  if candidates.is_empty() {
    return Err(PapernameCliError::Selection(format!(
      "No PDF files given and none found in {}",
      dir.display()
    )));
  }
  debug!("Offering {} PDFs from {}", candidates.len(), dir.display());
  interaction.select(&candidates)
}
