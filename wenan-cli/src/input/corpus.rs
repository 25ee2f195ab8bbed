//! Template corpus intake
//!
//! The corpus ships as plain UTF-8 text with one paragraph per non-empty
//! line; extracting that text from its original document format is an
//! out-of-band step. Length filtering and categorization happen in the
//! core, not here.

use super::FileReader;
use anyhow::Result;
use std::path::Path;

/// Read corpus paragraphs from a text file
pub fn read_corpus(path: &Path) -> Result<Vec<String>> {
    let content = FileReader::read_text(path)?;
    Ok(extract_paragraphs(&content))
}

/// Extract non-empty, trimmed paragraphs from raw corpus text
pub fn extract_paragraphs(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
