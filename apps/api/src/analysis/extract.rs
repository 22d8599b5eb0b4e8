//! Resume extraction: reduces an uploaded document to a `ResumeRecord`.
//!
//! Supports PDF (via pdf-extract) and plain text. The candidate's name is not
//! inferred; the e-mail is the first address-shaped token in the text.

use std::sync::OnceLock;

use bytes::Bytes;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::models::resume::{ResumeRecord, UNKNOWN_EMAIL, UNKNOWN_NAME};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported resume format (content type {content_type:?}, file {file_name:?})")]
    UnsupportedFormat {
        content_type: Option<String>,
        file_name: Option<String>,
    },

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Resume text is not valid UTF-8")]
    InvalidUtf8,

    #[error("Resume contains no extractable text")]
    Empty,
}

/// A file received on the `file` multipart field.
#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DocumentKind {
    Pdf,
    PlainText,
}

pub async fn extract_resume(upload: UploadedResume) -> Result<ResumeRecord, ExtractionError> {
    let kind = detect_kind(&upload).ok_or_else(|| ExtractionError::UnsupportedFormat {
        content_type: upload.content_type.clone(),
        file_name: upload.file_name.clone(),
    })?;

    let text = match kind {
        DocumentKind::Pdf => extract_pdf_text(upload.data).await?,
        DocumentKind::PlainText => {
            String::from_utf8(upload.data.to_vec()).map_err(|_| ExtractionError::InvalidUtf8)?
        }
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }

    let email = find_email(&text).unwrap_or_else(|| UNKNOWN_EMAIL.to_string());
    debug!("Extracted {} chars of resume text ({kind:?})", text.len());

    Ok(ResumeRecord::new(UNKNOWN_NAME, email, text))
}

fn detect_kind(upload: &UploadedResume) -> Option<DocumentKind> {
    let content_type = upload
        .content_type
        .as_deref()
        .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_ascii_lowercase());
    let extension = upload
        .file_name
        .as_deref()
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match (content_type.as_deref(), extension.as_deref()) {
        (Some("application/pdf"), _) | (_, Some("pdf")) => Some(DocumentKind::Pdf),
        (Some(ct), _) if ct.starts_with("text/") => Some(DocumentKind::PlainText),
        (_, Some("txt" | "text" | "md")) => Some(DocumentKind::PlainText),
        _ => None,
    }
}

/// pdf-extract is CPU-bound and can panic on malformed input, so it runs on
/// the blocking pool where a panic surfaces as a join error.
async fn extract_pdf_text(data: Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| ExtractionError::Pdf(format!("extractor aborted: {e}")))?
    .map_err(ExtractionError::Pdf)
}

fn find_email(text: &str) -> Option<String> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+")
            .expect("e-mail pattern is valid")
    });
    re.find(text).map(|m| m.as_str().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(file_name: &str, content_type: &str, data: &'static [u8]) -> UploadedResume {
        UploadedResume {
            file_name: Some(file_name.to_string()),
            content_type: Some(content_type.to_string()),
            data: Bytes::from_static(data),
        }
    }

    #[tokio::test]
    async fn test_plain_text_resume_is_read_whole() {
        let text = "Jane Doe\nContact: <jane.doe+jobs@example.co.uk>\nRust, Go, SQL";
        let resume = extract_resume(upload("cv.txt", "text/plain; charset=utf-8", text.as_bytes()))
            .await
            .unwrap();

        assert_eq!(resume.raw_text, text);
        assert_eq!(resume.name, "Unknown");
        assert_eq!(resume.email, "jane.doe+jobs@example.co.uk");
    }

    #[tokio::test]
    async fn test_missing_email_uses_placeholder() {
        let resume = extract_resume(upload("cv.md", "application/octet-stream", b"# Skills\nRust"))
            .await
            .unwrap();
        assert_eq!(resume.email, "N/A");
    }

    #[tokio::test]
    async fn test_unsupported_format_is_rejected() {
        let err = extract_resume(upload(
            "cv.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            b"PK\x03\x04",
        ))
        .await
        .unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let err = extract_resume(upload("cv.txt", "text/plain", b"  \n\t "))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Empty));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_rejected() {
        let err = extract_resume(upload("cv.txt", "text/plain", b"\xff\xfe\xfd"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidUtf8));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_reports_extraction_error() {
        let err = extract_resume(upload("cv.pdf", "application/pdf", b"not really a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[test]
    fn test_detects_pdf_by_extension_when_content_type_is_generic() {
        let kind = detect_kind(&upload("Resume.PDF", "application/octet-stream", b""));
        assert_eq!(kind, Some(DocumentKind::Pdf));
    }

    #[test]
    fn test_email_detection_rejects_lookalikes() {
        assert_eq!(find_email("@handle and user@localhost"), None);
        assert_eq!(
            find_email("reach me at mailto:dev@corp.io."),
            Some("dev@corp.io".to_string())
        );
    }

    #[test]
    fn test_email_glued_to_label_or_separator_is_found() {
        assert_eq!(
            find_email("Email:jane@example.com"),
            Some("jane@example.com".to_string())
        );
        assert_eq!(
            find_email("jane@example.com|+1-555-0100"),
            Some("jane@example.com".to_string())
        );
        assert_eq!(
            find_email("Phone: 555-0100 • E-mail:j.doe@mail.example.org • Lisbon"),
            Some("j.doe@mail.example.org".to_string())
        );
    }
}
