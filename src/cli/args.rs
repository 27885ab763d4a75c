//! CLI argument definitions using clap.
//!
//! The tool takes exactly two positionals: the input path and the report path.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Source file or directory to extract string literals from
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Report file to write (overwritten if it exists)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Input and output paths of a complete invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Arguments {
    /// Return both paths, or print help to stdout and return None.
    pub fn paths_or_help(self) -> Option<Paths> {
        match (self.input, self.output) {
            (Some(input), Some(output)) => Some(Paths { input, output }),
            _ => {
                Self::command().print_help().ok();
                None
            }
        }
    }
}
