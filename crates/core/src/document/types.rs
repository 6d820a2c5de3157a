use std::path::PathBuf;

use thiserror::Error;

use crate::toc::TocOptions;

/// How a document file is processed
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    pub toc: TocOptions,
    /// Write the result back to the file instead of the output sink
    pub in_place: bool,
    /// Extension of a backup copy made before overwriting; implies `in_place`
    pub suffix: Option<String>,
    /// Fail when the document has no level 2-6 headings
    pub require_headings: bool,
}

impl ProcessOptions {
    pub fn writes_in_place(&self) -> bool {
        self.in_place || self.backup_suffix().is_some()
    }

    /// Suffix for the backup copy, ignoring an empty one
    pub fn backup_suffix(&self) -> Option<&str> {
        self.suffix.as_deref().filter(|s| !s.is_empty())
    }
}

/// Result of processing a document file
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub path: PathBuf,
    /// Number of entries in the generated table of contents
    pub entries: usize,
    /// The file was overwritten
    pub written: bool,
    /// Where the original was copied before overwriting
    pub backup: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("no such file or no access: {0}")]
    FileNotAccessible(PathBuf),

    #[error("expected file but found directory or special file: {0}")]
    NotARegularFile(PathBuf),

    #[error("no headings level 2-6 found in {0}")]
    NoHeadingsFound(PathBuf),

    #[error("failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create backup {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
