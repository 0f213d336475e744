//! In-memory record store keyed by proxy fingerprint

use crate::proxy::Proxy;
use std::collections::BTreeMap;
use tracing::debug;

/// Deduplicating proxy store.
///
/// Entries are keyed by [`Proxy::fingerprint`]; inserting a record whose
/// fingerprint is already present replaces the earlier one. Iteration is in
/// ascending fingerprint order. Mutation needs `&mut self`, so a report
/// reading a `&ProxyStore` always sees a consistent snapshot.
#[derive(Debug, Clone, Default)]
pub struct ProxyStore {
    entries: BTreeMap<String, Proxy>,
}

impl ProxyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any record with the same identity.
    /// Returns the record it replaced, if any.
    pub fn insert(&mut self, proxy: Proxy) -> Option<Proxy> {
        let fingerprint = proxy.fingerprint();
        let replaced = self.entries.insert(fingerprint, proxy);
        if let Some(old) = &replaced {
            debug!(proxy = %old, "replaced duplicate proxy");
        }
        replaced
    }

    /// All entries as `(fingerprint, record)` pairs in fingerprint order
    pub fn snapshot(&self) -> impl Iterator<Item = (&str, &Proxy)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a record by fingerprint
    pub fn get(&self, fingerprint: &str) -> Option<&Proxy> {
        self.entries.get(fingerprint)
    }

    /// Number of distinct records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<Proxy> for ProxyStore {
    fn extend<I: IntoIterator<Item = Proxy>>(&mut self, iter: I) {
        for proxy in iter {
            self.insert(proxy);
        }
    }
}

impl FromIterator<Proxy> for ProxyStore {
    fn from_iter<I: IntoIterator<Item = Proxy>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
