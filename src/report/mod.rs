//! Report generation
//!
//! A report run turns a [`ProxyStore`](crate::store::ProxyStore) into:
//! - one list file per protocol
//! - a total-count badge
//! - a refreshed summary section in the README

pub mod badge;
pub mod document;
pub mod summary;
pub mod writer;

pub use badge::{BadgeSource, HttpBadgeSource};
pub use document::{replace_between, BEGIN_MARKER, END_MARKER};
pub use summary::{render_block, update_summary, SummaryOutcome};
pub use writer::{write_protocol_files, ListOutcome, ReportWriter};

use crate::error::ReportError;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Everything a report run produced, plus what went wrong along the way
#[derive(Debug, Default)]
pub struct ReportOutcome {
    /// Records per protocol, keyed by raw protocol name
    pub counters: BTreeMap<String, usize>,
    /// Sum of `counters`, as shown in the badge and README
    pub total: usize,
    /// List files created, in protocol order
    pub files: Vec<PathBuf>,
    pub badge_written: bool,
    pub document_updated: bool,
    /// Non-fatal failures, in the order they happened
    pub warnings: Vec<ReportError>,
}

impl ReportOutcome {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
