//! Text extraction from uploaded resume documents.
//!
//! Extraction failures are split two ways: an unreadable document is a
//! step-level `AppError::Extraction`; a readable document with no text in it
//! (image-only scans, blank pages) yields a readable placeholder string that
//! the rest of the pipeline treats as valid, degraded input.

use crate::errors::AppError;

/// Sentinel returned for documents that contain no extractable text.
/// Downstream prompts receive it verbatim — it reads sensibly to the model.
pub const NO_TEXT_PLACEHOLDER: &str = "[No extractable text found in this document]";

/// Extracts plain text from an uploaded document.
///
/// PDFs (by extension or `%PDF` magic) go through `pdf-extract` in memory;
/// everything else is treated as UTF-8 text with lossy decoding.
pub fn extract_document_text(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    let text = if is_pdf(file_name, bytes) {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            AppError::Extraction(format!("Failed to extract text from '{file_name}': {e}"))
        })?
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(NO_TEXT_PLACEHOLDER.to_string());
    }
    Ok(trimmed.to_string())
}

fn is_pdf(file_name: &str, bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF") || file_name.to_lowercase().ends_with(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_document_text("resume.txt", b"Jane Doe\nRust Engineer").unwrap();
        assert_eq!(text, "Jane Doe\nRust Engineer");
    }

    #[test]
    fn test_empty_document_yields_placeholder() {
        let text = extract_document_text("resume.txt", b"   \n\t ").unwrap();
        assert_eq!(text, NO_TEXT_PLACEHOLDER);
    }

    #[test]
    fn test_corrupt_pdf_is_an_extraction_error() {
        let result = extract_document_text("resume.pdf", b"%PDF-1.7 not actually a pdf");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_pdf_detected_by_magic_despite_extension() {
        // A PDF uploaded with a .txt name must still go through the PDF path.
        let result = extract_document_text("resume.txt", b"%PDF-1.4 garbage body");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let text = extract_document_text("resume.txt", &[0x4a, 0x61, 0xff, 0x6e, 0x65]).unwrap();
        assert!(text.contains("Ja"));
    }
}
