//! Strings Extractor - string literal extraction for localization review
//!
//! Walks a source tree, picks out quoted string literals line by line and
//! writes a plain-text report grouping them by originating file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, console output)
//! - `config`: Source-file suffix and block lists
//! - `scanner`: Tree walking and path exclusion
//! - `extract`: Line filtering and literal extraction
//! - `report`: Report serialization and writing

pub mod cli;
pub mod config;
pub mod extract;
pub mod report;
pub mod scanner;
