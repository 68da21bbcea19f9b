//! Text extraction: uploaded bytes → plain unicode text.
//!
//! Dispatch is by file extension, re-derived here instead of trusting the
//! upstream validator. Fully deterministic, no I/O.

use thiserror::Error;
use tracing::warn;

use crate::ingest::validation::file_extension;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported document format: .{0}")]
    UnsupportedFormat(String),

    #[error("Could not read the uploaded document: {0}")]
    Corrupt(String),
}

/// Extracts plain text from the raw bytes of a PDF, DOC/DOCX, or plain-text
/// upload. "Parsed but blank" is not a failure here; emptiness is the
/// pipeline's validation concern.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    match file_extension(filename).as_str() {
        "pdf" => extract_pdf(bytes),
        // Word's pre-2007 binary .doc container is not a zip archive; it
        // fails the docx parse below and surfaces as Corrupt.
        "doc" | "docx" => extract_docx(bytes),
        "txt" => extract_txt(bytes),
        other => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}

/// Concatenates the extracted text of every page in page order, pages
/// separated by a newline. A page that yields no text contributes an empty
/// slot; only a container that cannot be opened fails the document.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| ExtractError::Corrupt(format!("invalid PDF: {e}")))?;

    let mut pages = Vec::new();
    for (page_number, _) in doc.get_pages() {
        match doc.extract_text(&[page_number]) {
            Ok(text) => pages.push(text),
            Err(e) => {
                warn!("No extractable text on PDF page {page_number}: {e}");
                pages.push(String::new());
            }
        }
    }

    Ok(pages.join("\n"))
}

/// Concatenates the run text of every paragraph in document order, one
/// paragraph per line.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = docx_rs::read_docx(bytes)
        .map_err(|e| ExtractError::Corrupt(format!("invalid Word document: {e}")))?;

    let mut text = String::new();
    for child in doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(t) = child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    Ok(text)
}

fn extract_txt(bytes: &[u8]) -> Result<String, ExtractError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| ExtractError::Corrupt(format!("text file is not valid UTF-8: {e}")))
}

/// Builds a minimal one-page PDF whose content stream draws `text`.
/// Shared fixture for extractor, pipeline, and handler tests.
#[cfg(test)]
pub(crate) fn one_page_pdf(text: &str) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
