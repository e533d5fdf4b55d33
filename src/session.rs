//! Caller-owned scan session.

use crate::error_handling::ResolveError;
use crate::record::CanonicalRecord;
use crate::resolver::IpResolver;

/// Holds the most recent successful scan.
///
/// A new successful scan replaces the held record wholesale. A failed scan
/// leaves it untouched.
#[derive(Debug, Default)]
pub struct ScanSession {
    last: Option<CanonicalRecord>,
}

impl ScanSession {
    /// An empty session; no scan has run yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one scan and keeps its record.
    ///
    /// # Errors
    ///
    /// Propagates the resolver's `ResolveError`; the previous record is kept.
    pub async fn scan(&mut self, resolver: &IpResolver) -> Result<&CanonicalRecord, ResolveError> {
        let record = resolver.resolve().await?;
        Ok(self.replace(record))
    }

    /// Stores `record` as the latest scan, dropping the previous one.
    pub fn replace(&mut self, record: CanonicalRecord) -> &CanonicalRecord {
        self.last.insert(record)
    }

    /// The latest record, if any scan has succeeded.
    pub fn last(&self) -> Option<&CanonicalRecord> {
        self.last.as_ref()
    }
}
