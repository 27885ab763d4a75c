use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Block lists and source-file suffix consulted by the extraction pipeline.
///
/// The defaults describe a Swift/UIKit code base. Every field can be
/// overridden independently when the config is deserialized from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Suffix a file name must end with to be extracted.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// A path segment containing any of these is skipped.
    #[serde(default = "default_block_substrings")]
    pub block_substrings: Vec<String>,
    /// A path segment equal to any of these is skipped.
    #[serde(default = "default_block_exact_names")]
    pub block_exact_names: Vec<String>,
    /// A candidate line containing any of these is dropped (case-sensitive).
    #[serde(default = "default_line_noise_markers")]
    pub line_noise_markers: Vec<String>,
}

fn default_extension() -> String {
    ".swift".to_string()
}

fn default_block_substrings() -> Vec<String> {
    ["API", "GMS", "Tests", "Analytics"]
        .map(String::from)
        .to_vec()
}

fn default_block_exact_names() -> Vec<String> {
    ["AppEnvironment.swift", "Vendor"].map(String::from).to_vec()
}

fn default_line_noise_markers() -> Vec<String> {
    [
        "#imageLiteral",
        "#colorLiteral",
        "init(coder:) has not been implemented",
        "UIImage(named:",
        "UIColor(named:",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            block_substrings: default_block_substrings(),
            block_exact_names: default_block_exact_names(),
            line_noise_markers: default_line_noise_markers(),
        }
    }
}

impl Config {
    /// Parse a JSON config document and validate it.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(content).context("Failed to parse extractor config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// An empty extension would match every file, and an empty block
    /// substring would exclude every entry.
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            anyhow::bail!("'extension' must not be empty");
        }
        if self.block_substrings.iter().any(String::is_empty) {
            anyhow::bail!("'blockSubstrings' must not contain an empty string");
        }
        if self.line_noise_markers.iter().any(String::is_empty) {
            anyhow::bail!("'lineNoiseMarkers' must not contain an empty string");
        }
        Ok(())
    }

    /// Whether `name` (a single path segment) names a source file.
    pub fn is_source_file(&self, name: &str) -> bool {
        name.ends_with(&self.extension)
    }
}
