//! Non-fatal report failures

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A failure of one report side effect.
///
/// None of these abort a report run; they are collected into
/// [`ReportOutcome::warnings`](crate::report::ReportOutcome::warnings).
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create output directory {path:?}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to create {path:?}: {source}")]
    CreateFile { path: PathBuf, source: io::Error },

    #[error("failed to write {path:?}: {source}")]
    WriteFile { path: PathBuf, source: io::Error },

    #[error("failed to flush {path:?}: {source}")]
    FlushFile { path: PathBuf, source: io::Error },

    #[error("badge request failed: {0}")]
    BadgeRequest(#[from] reqwest::Error),

    #[error("badge endpoint returned HTTP {0}")]
    BadgeStatus(u16),

    #[error("failed to read badge body: {0}")]
    BadgeBody(#[source] reqwest::Error),

    #[error("failed to read document {path:?}: {source}")]
    ReadDocument { path: PathBuf, source: io::Error },

    #[error("document {path:?} has no proxy list markers")]
    MarkersMissing { path: PathBuf },

    #[error("failed to write document {path:?}: {source}")]
    WriteDocument { path: PathBuf, source: io::Error },
}
