use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Result, bail};
use thiserror::Error;
use tracing::{debug, warn};

use super::patterns::BenchmarkPatterns;

const SECTION_DIVIDER: &str = "Overview";

/// The source document could not be turned into text at all.
#[derive(Debug, Error)]
#[error("failed to convert {path} to text: {message}")]
pub struct ConversionError {
    pub path: String,
    pub message: String,
}

impl ConversionError {
    fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocumentParts {
    pub(crate) toc: String,
    pub(crate) body: String,
}

pub(crate) fn load_document_text(path: &Path) -> Result<String, ConversionError> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        return convert_pdf_with_pdftotext(path);
    }

    let raw = fs::read(path).map_err(|error| ConversionError::new(path, error.to_string()))?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

fn convert_pdf_with_pdftotext(path: &Path) -> Result<String, ConversionError> {
    let output = Command::new("pdftotext")
        .arg("-q")
        .arg("-nopgbrk")
        .arg("-enc")
        .arg("UTF-8")
        .arg("-eol")
        .arg("unix")
        .arg(path)
        .arg("-")
        .output()
        .map_err(|error| {
            ConversionError::new(
                path,
                format!("failed to execute pdftotext (is poppler-utils installed?): {error}"),
            )
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ConversionError::new(
            path,
            format!("pdftotext returned non-zero exit status: {}", stderr.trim()),
        ));
    }

    let text = String::from_utf8_lossy(&output.stdout).replace('\u{0000}', "");
    if text.trim().is_empty() {
        return Err(ConversionError::new(path, "pdftotext produced no text"));
    }

    debug!(path = %path.display(), chars = text.len(), "converted pdf to text");
    Ok(text)
}

pub(crate) fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

pub(crate) fn cut_page_markers(text: &str, patterns: &BenchmarkPatterns) -> String {
    patterns.page_marker.replace_all(text, "").into_owned()
}

pub(crate) fn split_document(raw: &str, patterns: &BenchmarkPatterns) -> Result<DocumentParts> {
    let content = cut_page_markers(&normalize_line_endings(raw), patterns);

    let occurrences = content.matches(SECTION_DIVIDER).count();
    if occurrences < 2 {
        bail!(
            "expected \"{SECTION_DIVIDER}\" to introduce both the table of contents and the body, found {occurrences} occurrence(s)"
        );
    }
    if occurrences > 2 {
        warn!(
            occurrences,
            "section divider appears more than twice; body starts after the second occurrence"
        );
    }

    let mut parts = content.splitn(3, SECTION_DIVIDER).skip(1);
    let toc = parts.next().unwrap_or_default().to_string();
    let body = parts.next().unwrap_or_default().to_string();

    Ok(DocumentParts { toc, body })
}
