//! Reading a Markdown file, refreshing its table of contents and
//! writing the result back or to an output sink.

mod types;

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

pub use types::*;

use crate::toc::TocSynthesizer;

/// Insert or refresh the table of contents of the file at `path`.
///
/// In place, the original is first copied to `<path>.<suffix>` when a
/// suffix is set, then overwritten. Otherwise the new content goes to `out`
/// and the file is left untouched. No file is modified when an error is
/// returned before the write.
pub fn process_file<W: Write>(
    path: &Path,
    options: &ProcessOptions,
    out: &mut W,
) -> Result<ProcessOutcome, DocumentError> {
    check_target(path)?;

    let original = fs::read_to_string(path)
        .map_err(|e| DocumentError::Read { path: path.to_path_buf(), source: e })?;

    let synthesis = TocSynthesizer::synthesize_with_report(&original, &options.toc);

    if !synthesis.has_toc() {
        if options.require_headings {
            return Err(DocumentError::NoHeadingsFound(path.to_path_buf()));
        }
        warn!(path = %path.display(), "no headings level 2-6 found");
    }

    let mut outcome = ProcessOutcome {
        path: path.to_path_buf(),
        entries: synthesis.entries.len(),
        written: false,
        backup: None,
    };

    if !options.writes_in_place() {
        out.write_all(synthesis.content.as_bytes()).map_err(DocumentError::Output)?;
        out.flush().map_err(DocumentError::Output)?;
        return Ok(outcome);
    }

    if let Some(suffix) = options.backup_suffix() {
        let backup = backup_path(path, suffix);
        fs::copy(path, &backup)
            .map_err(|e| DocumentError::Backup { path: backup.clone(), source: e })?;
        info!(backup = %backup.display(), "backed up original");
        outcome.backup = Some(backup);
    }

    fs::write(path, &synthesis.content)
        .map_err(|e| DocumentError::Write { path: path.to_path_buf(), source: e })?;
    info!(path = %path.display(), entries = outcome.entries, "updated table of contents");
    outcome.written = true;

    Ok(outcome)
}

/// `<path>.<suffix>`, keeping any existing extension.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

fn check_target(path: &Path) -> Result<(), DocumentError> {
    let metadata = fs::metadata(path)
        .map_err(|_| DocumentError::FileNotAccessible(path.to_path_buf()))?;

    if !metadata.is_file() {
        return Err(DocumentError::NotARegularFile(path.to_path_buf()));
    }
    if metadata.permissions().readonly() {
        return Err(DocumentError::FileNotAccessible(path.to_path_buf()));
    }

    // mode bits miss ownership and ACLs; open for writing without truncating
    fs::OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|_| DocumentError::FileNotAccessible(path.to_path_buf()))?;

    Ok(())
}
