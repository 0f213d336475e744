//! Badge and README summary refresh

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::report::badge::BadgeSource;
use crate::report::document::{replace_between, BEGIN_MARKER, END_MARKER};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Timestamp shown in the generated section
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// What the summary step managed to produce
#[derive(Debug, Default)]
pub struct SummaryOutcome {
    pub total: usize,
    pub badge_written: bool,
    pub document_updated: bool,
    pub warnings: Vec<ReportError>,
}

/// Render the text placed between the README markers.
///
/// Rows follow the key order of `counters`, i.e. the raw protocol names in
/// ascending order, while the protocol column shows them uppercased.
pub fn render_block(
    config: &ReportConfig,
    counters: &BTreeMap<String, usize>,
    now: DateTime<Utc>,
) -> String {
    let total: usize = counters.values().sum();

    let mut rows = String::new();
    for (protocol, count) in counters {
        // Writing into a String cannot fail
        let _ = writeln!(
            rows,
            "| {} | {} | {} |",
            protocol.to_uppercase(),
            count,
            config.download_url(protocol)
        );
    }

    format!(
        "\n\nLast Updated: {}\n\n\
         **Total Proxies: {}**\n\n\
         Click on your preferred proxy type to get the latest list. \
         These links always point to the most recently updated proxy files.\n\n\
         | Protocol | Count | Download |\n\
         |----------|-------|----------|\n\
         {}\n",
        now.format(TIMESTAMP_FORMAT),
        total,
        rows
    )
}

/// Rewrite the marked section of the document at `path` with `block`
pub fn update_document(path: &Path, block: &str) -> Result<(), ReportError> {
    let content = fs::read_to_string(path).map_err(|source| ReportError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;

    let updated = replace_between(&content, BEGIN_MARKER, END_MARKER, block).ok_or_else(|| {
        ReportError::MarkersMissing {
            path: path.to_path_buf(),
        }
    })?;

    fs::write(path, updated).map_err(|source| ReportError::WriteDocument {
        path: path.to_path_buf(),
        source,
    })
}

/// Fetch the badge and refresh the document.
///
/// The two side effects are independent: a failed badge never stops the
/// document update and neither failure is fatal.
pub async fn update_summary<B: BadgeSource>(
    config: &ReportConfig,
    badge: &B,
    counters: &BTreeMap<String, usize>,
    now: DateTime<Utc>,
) -> SummaryOutcome {
    let mut outcome = SummaryOutcome {
        total: counters.values().sum(),
        ..Default::default()
    };

    if config.fetch_badge {
        match badge.fetch(outcome.total).await {
            Ok(bytes) => {
                let path = config.badge_path();
                match fs::write(&path, bytes) {
                    Ok(()) => {
                        info!(path = %path.display(), total = outcome.total, "badge written");
                        outcome.badge_written = true;
                    }
                    Err(source) => outcome.warnings.push(ReportError::WriteFile { path, source }),
                }
            }
            Err(e) => outcome.warnings.push(e),
        }
    } else {
        debug!("badge fetch disabled");
    }

    let document = config.document_path();
    let block = render_block(config, counters, now);
    match update_document(&document, &block) {
        Ok(()) => {
            info!(path = %document.display(), "document summary updated");
            outcome.document_updated = true;
        }
        Err(e) => outcome.warnings.push(e),
    }

    for warning in &outcome.warnings {
        warn!("{warning}");
    }

    outcome
}
