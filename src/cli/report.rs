//! Console output for the CLI.
//!
//! Kept out of the library modules so the pipeline can run without printing.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::scanner::{ScanResult, SkippedPath};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print one warning per path that could not be listed or read.
///
/// The reason already names the failing path.
pub fn print_skipped(skipped: &[SkippedPath]) {
    print_skipped_to(skipped, &mut io::stdout().lock());
}

/// Print skipped-path warnings to a custom writer.
pub fn print_skipped_to<W: Write>(skipped: &[SkippedPath], writer: &mut W) {
    for entry in skipped {
        let _ = writeln!(
            writer,
            "{} {}",
            "warning:".bold().yellow(),
            entry.reason
        );
    }
}

/// Print the summary line after the report was written.
pub fn print_success(scan: &ScanResult, output: &Path) {
    print_success_to(scan, output, &mut io::stdout().lock());
}

/// Print the summary line to a custom writer.
pub fn print_success_to<W: Write>(scan: &ScanResult, output: &Path, writer: &mut W) {
    let literals = scan.literal_count();
    let files = scan.results.len();
    let scanned = scan.files_scanned;
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} of {} {} into {}",
            literals,
            if literals == 1 { "literal" } else { "literals" },
            files,
            scanned,
            if scanned == 1 { "file" } else { "files" },
            output.display()
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}
