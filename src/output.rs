//! Crawl output formats.

use crate::error::{Error, Result};
use crate::result::CrawlOutput;

/// How a finished crawl is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty JSON written to `dist/{target}.json`.
    #[default]
    Json,
    /// YAML written to `dist/{target}.yml`.
    Yaml,
    /// Compact JSON on stdout.
    Console,
}

impl OutputFormat {
    /// Parse a format name, case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "console" => Some(Self::Console),
            _ => None,
        }
    }

    /// File the output is written to, or `None` for stdout.
    #[must_use]
    pub fn file_name(self, target: &str) -> Option<String> {
        let target = target.trim();
        match self {
            Self::Json => Some(format!("{target}.json")),
            Self::Yaml => Some(format!("{target}.yml")),
            Self::Console => None,
        }
    }

    /// Serialize `output` in this format.
    pub fn render(self, output: &CrawlOutput) -> Result<String> {
        match self {
            Self::Json => serde_json::to_string_pretty(output).map_err(|e| Error::OutputError(e.to_string())),
            Self::Yaml => serde_yaml::to_string(output).map_err(|e| Error::OutputError(e.to_string())),
            Self::Console => serde_json::to_string(output).map_err(|e| Error::OutputError(e.to_string())),
        }
    }
}
