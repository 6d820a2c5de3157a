use std::path::PathBuf;

use serde::Deserialize;

use crate::document::ProcessOptions;
use crate::toc::TocOptions;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub toc: TocOptions,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the refreshed document goes.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct OutputConfig {
    /// Edit the file in place instead of printing it (default: false)
    #[serde(default)]
    pub in_place: bool,
    /// Extension of a backup copy made before overwriting
    #[serde(default)]
    pub suffix: Option<String>,
    /// Fail on documents without level 2-6 headings (default: false)
    #[serde(default)]
    pub require_headings: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// Config file the values came from; `None` when running on defaults
    pub source: Option<PathBuf>,
    pub toc: TocOptions,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    pub fn process_options(&self) -> ProcessOptions {
        ProcessOptions {
            toc: self.toc.clone(),
            in_place: self.output.in_place,
            suffix: self.output.suffix.clone(),
            require_headings: self.output.require_headings,
        }
    }
}
