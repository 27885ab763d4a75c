//! Line filtering and literal extraction.
//!
//! Extraction is textual, not lexical: a line is a candidate when it holds at
//! least two `"` characters, and the literal taken from it is the greedy span
//! from the first `"` to the last `"` on that line, quotes included.

use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::Config;

/// A whole line containing at least one quoted span. `R` keeps `.` off `\r`.
static LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?mR)^.*".*".*"#).unwrap());

/// Greedy quoted span; not aware of escapes or literal boundaries.
static LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"".*""#).unwrap());

/// The quoted empty string, which is never reported.
const EMPTY_LITERAL: &str = r#""""#;

/// Literals extracted from one source file.
///
/// `literals` is never empty: files without literals produce no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExtractionResult {
    /// Last path segment of the source file, used as the report header.
    pub file_name: String,
    /// Literals in extraction order, duplicates retained.
    pub literals: Vec<String>,
}

/// Select the lines of `text` that contain a quoted span and no noise marker.
pub fn select_lines<'a>(text: &'a str, noise_markers: &[String]) -> Vec<&'a str> {
    LINE_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|line| !is_noise_line(line, noise_markers))
        .collect()
}

/// Case-sensitive substring denylist check.
pub fn is_noise_line(line: &str, noise_markers: &[String]) -> bool {
    noise_markers
        .iter()
        .any(|marker| line.contains(marker.as_str()))
}

/// Extract the literals of one already-selected line.
pub fn extract_literals(line: &str) -> Vec<String> {
    LITERAL_REGEX
        .find_iter(line)
        .map(|m| m.as_str().trim())
        .filter(|literal| should_include_literal(literal))
        .map(str::to_string)
        .collect()
}

fn should_include_literal(literal: &str) -> bool {
    !literal.is_empty() && literal != EMPTY_LITERAL
}

/// Run line selection and literal extraction over the contents of one file.
///
/// Returns `None` when no literal survives the filters.
pub fn extract_from_text(
    file_name: &str,
    text: &str,
    config: &Config,
) -> Option<FileExtractionResult> {
    let literals: Vec<String> = select_lines(text, &config.line_noise_markers)
        .into_iter()
        .flat_map(extract_literals)
        .collect();

    if literals.is_empty() {
        return None;
    }

    Some(FileExtractionResult {
        file_name: file_name.to_string(),
        literals,
    })
}

/// Read a source file and extract its literals.
///
/// Fails when the file cannot be read or is not valid UTF-8.
pub fn extract_file(path: &Path, config: &Config) -> Result<Option<FileExtractionResult>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read file {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(extract_from_text(&file_name, &text, config))
}
