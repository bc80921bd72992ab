//! File name sanitization.

use super::*;

/// Characters that are illegal in file names on at least one major platform, plus the control
/// whitespace that tends to sneak into titles from PDF text and XML feeds.
pub const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*', '\n', '\r', '\t'];

lazy_static! {
  /// Any run of whitespace.
  static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Makes a string safe to use as (part of) a file name.
///
/// Removes [`INVALID_CHARS`], collapses every remaining run of whitespace into a single space
/// and trims the result.
///
/// # Examples
///
/// ```
/// use papername::format::sanitize_filename;
///
/// assert_eq!(sanitize_filename("A:B/C*D"), "ABCD");
/// assert_eq!(sanitize_filename("Title   with   spaces"), "Title with spaces");
/// ```
pub fn sanitize_filename(name: &str) -> String {
  let stripped: String = name.chars().filter(|c| !INVALID_CHARS.contains(c)).collect();
  WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}
