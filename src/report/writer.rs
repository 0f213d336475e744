//! Per-protocol list files and the full report run

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::report::badge::{BadgeSource, HttpBadgeSource};
use crate::report::summary::update_summary;
use crate::report::ReportOutcome;
use crate::store::ProxyStore;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of writing the list files
#[derive(Debug, Default)]
pub struct ListOutcome {
    /// Records per protocol, keyed by raw protocol name
    pub counters: BTreeMap<String, usize>,
    /// List files that were created, in protocol order
    pub files: Vec<PathBuf>,
    pub warnings: Vec<ReportError>,
}

/// An open list file; `writer` is dropped after the first failed write
struct ListFile {
    path: PathBuf,
    created: bool,
    writer: Option<BufWriter<File>>,
}

impl ListFile {
    fn create(path: PathBuf, warnings: &mut Vec<ReportError>) -> Self {
        match File::create(&path) {
            Ok(file) => Self {
                path,
                created: true,
                writer: Some(BufWriter::new(file)),
            },
            Err(source) => {
                warnings.push(ReportError::CreateFile {
                    path: path.clone(),
                    source,
                });
                Self {
                    path,
                    created: false,
                    writer: None,
                }
            }
        }
    }

    fn finish(mut self) -> Result<(), ReportError> {
        let Some(mut writer) = self.writer.take() else {
            return Ok(());
        };
        writer
            .flush()
            .and_then(|()| writer.get_ref().sync_all())
            .map_err(|source| ReportError::FlushFile {
                path: self.path,
                source,
            })
    }
}

/// Write one `<protocol>.<ext>` file per protocol present in `store`.
///
/// Records are visited in fingerprint order, so each file's lines are in
/// ascending fingerprint order. Existing files are truncated. Counters count
/// every record in the store, including ones whose line could not be written.
pub fn write_protocol_files(config: &ReportConfig, store: &ProxyStore) -> ListOutcome {
    let mut outcome = ListOutcome::default();

    if let Err(source) = fs::create_dir_all(&config.output_dir) {
        outcome.warnings.push(ReportError::CreateDir {
            path: config.output_dir.clone(),
            source,
        });
    }

    let mut files: BTreeMap<String, ListFile> = BTreeMap::new();
    for (_, proxy) in store.snapshot() {
        let protocol = proxy.protocol();
        *outcome.counters.entry(protocol.to_string()).or_insert(0) += 1;

        let file = files
            .entry(protocol.to_string())
            .or_insert_with(|| ListFile::create(config.list_path(protocol), &mut outcome.warnings));

        let failed = match file.writer.as_mut() {
            Some(writer) => writeln!(writer, "{proxy}").err(),
            None => None,
        };
        if let Some(source) = failed {
            outcome.warnings.push(ReportError::WriteFile {
                path: file.path.clone(),
                source,
            });
            file.writer = None;
        }
    }

    for (protocol, file) in files {
        let created = file.created;
        let path = file.path.clone();
        if let Err(e) = file.finish() {
            outcome.warnings.push(e);
        }
        if created {
            info!(
                protocol = %protocol,
                count = outcome.counters.get(&protocol).copied().unwrap_or(0),
                path = %path.display(),
                "list written"
            );
            outcome.files.push(path);
        }
    }

    for warning in &outcome.warnings {
        warn!("{warning}");
    }

    outcome
}

/// Runs a full report: list files, badge, and document summary
pub struct ReportWriter<B> {
    config: ReportConfig,
    badge: B,
}

impl ReportWriter<HttpBadgeSource> {
    /// Report writer fetching the badge over HTTP
    pub fn new(config: ReportConfig) -> Result<Self, ReportError> {
        let badge = HttpBadgeSource::new(config.clone())?;
        Ok(Self { config, badge })
    }
}

impl<B: BadgeSource> ReportWriter<B> {
    pub fn with_badge_source(config: ReportConfig, badge: B) -> Self {
        Self { config, badge }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// Generate every artifact from `store`, stamping the summary with the current time
    pub async fn generate(&self, store: &ProxyStore) -> ReportOutcome {
        self.generate_at(store, Utc::now()).await
    }

    /// Same as [`generate`](Self::generate) with an explicit timestamp
    pub async fn generate_at(&self, store: &ProxyStore, now: DateTime<Utc>) -> ReportOutcome {
        let lists = write_protocol_files(&self.config, store);
        let summary = update_summary(&self.config, &self.badge, &lists.counters, now).await;

        let mut warnings = lists.warnings;
        warnings.extend(summary.warnings);

        ReportOutcome {
            counters: lists.counters,
            total: summary.total,
            files: lists.files,
            badge_written: summary.badge_written,
            document_updated: summary.document_updated,
            warnings,
        }
    }
}
