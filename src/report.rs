//! Report serialization.
//!
//! The report is plain text for human review. Each file gets a block:
//!
//! ```text
//! // LoginView.swift
//! "Sign in"
//! "Forgot password?"
//! ```
//!
//! Blocks are separated by one blank line, in the order the files were visited.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::extract::FileExtractionResult;

/// Prefix of the header line that opens each file block.
pub const HEADER_PREFIX: &str = "// ";

/// Render the report text for `results`.
///
/// An empty result set renders as an empty string; otherwise the text ends
/// with a single newline.
pub fn serialize(results: &[FileExtractionResult]) -> String {
    results
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the report text into a custom writer.
pub fn serialize_to<W: Write>(results: &[FileExtractionResult], writer: &mut W) -> io::Result<()> {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writer.write_all(render_block(result).as_bytes())?;
    }
    Ok(())
}

/// Header line followed by one line per literal, newline-terminated.
fn render_block(result: &FileExtractionResult) -> String {
    let mut block = format!("{}{}\n", HEADER_PREFIX, result.file_name);
    for literal in &result.literals {
        block.push_str(literal);
        block.push('\n');
    }
    block
}

/// Write the report to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_report(results: &[FileExtractionResult], path: &Path) -> Result<()> {
    let context = || format!("Error serializing results to {}", path.display());
    let file = File::create(path).with_context(context)?;
    let mut writer = BufWriter::new(file);
    serialize_to(results, &mut writer).with_context(context)?;
    writer.flush().with_context(context)
}
