//! Proxy List - deduplicated per-protocol proxy lists
//!
//! Collects proxy records into a fingerprint-keyed store and writes one list
//! file per protocol, a total-count badge, and a README summary table.

pub mod config;
pub mod error;
pub mod proxy;
pub mod report;
pub mod store;

pub use config::ReportConfig;
pub use error::ReportError;
pub use proxy::*;
pub use report::{ReportOutcome, ReportWriter};
pub use store::ProxyStore;

/// Application result type
pub type Result<T> = anyhow::Result<T>;
