//! Small PDFs built in memory, for tests in this crate and in crates enabling `test-util`.

use lopdf::{
  content::{Content, Operation},
  dictionary, Document, Object, Stream,
};

use super::*;

/// Builds a PDF with one page per entry of `pages`, each page showing the given lines.
///
/// Every line is its own text object, so extracted lines come out newline separated.
pub fn sample_pdf(pages: &[&[&str]]) -> Result<Document> {
  let mut doc = Document::with_version("1.5");
  let pages_id = doc.new_object_id();
  let font_id = doc.add_object(dictionary! {
    "Type" => "Font",
    "Subtype" => "Type1",
    "BaseFont" => "Helvetica",
    "Encoding" => "WinAnsiEncoding",
  });
  let resources_id = doc.add_object(dictionary! {
    "Font" => dictionary! { "F1" => font_id },
  });

  let mut kids: Vec<Object> = Vec::new();
  for lines in pages {
    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
      let y = 720 - 14 * i as i64;
      operations.extend([
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![72.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(*line)]),
        Operation::new("ET", vec![]),
      ]);
    }

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
      "Type" => "Page",
      "Parent" => pages_id,
      "Contents" => content_id,
      "Resources" => resources_id,
      "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    kids.push(page_id.into());
  }

  let count = kids.len() as i64;
  doc.objects.insert(
    pages_id,
    Object::Dictionary(dictionary! {
      "Type" => "Pages",
      "Kids" => kids,
      "Count" => count,
    }),
  );
  let catalog_id = doc.add_object(dictionary! {
    "Type" => "Catalog",
    "Pages" => pages_id,
  });
  doc.trailer.set("Root", catalog_id);
  Ok(doc)
}

/// Writes a single-page PDF showing `lines` into `dir` under `name` and returns its path.
pub fn write_pdf(dir: &Path, name: &str, lines: &[&str]) -> Result<PathBuf> {
  let path = dir.join(name);
  sample_pdf(&[lines])?.save(&path)?;
  Ok(path)
}
