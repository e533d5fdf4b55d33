//! JSON export of a scan.
//!
//! A record is exported as indented JSON into a file named
//! `ip_scan_<scan_id>_<epoch_millis>.json`, so the file can be correlated with
//! the scan it came from.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;

use crate::config::EXPORT_FILE_PREFIX;
use crate::record::CanonicalRecord;

/// A written export.
#[derive(Debug, Clone)]
pub struct ExportedScan {
    /// Path of the written file
    pub path: PathBuf,
    /// The JSON text written to `path`
    pub json: String,
}

/// Serializes a record as 2-space indented JSON.
pub fn to_pretty_json(record: &CanonicalRecord) -> Result<String> {
    serde_json::to_string_pretty(record).context("Failed to serialize scan record")
}

/// File name for an export made at `epoch_millis`.
pub fn export_file_name(record: &CanonicalRecord, epoch_millis: i64) -> String {
    format!(
        "{}{}_{}.json",
        EXPORT_FILE_PREFIX, record.scan_id, epoch_millis
    )
}

/// Writes `record` into `dir` and returns the written path and JSON text.
///
/// The directory is created if it does not exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub async fn export_json(record: &CanonicalRecord, dir: &Path) -> Result<ExportedScan> {
    let json = to_pretty_json(record)?;

    tokio::fs::create_dir_all(dir)
        .await
        .context(format!("Failed to create export directory: {}", dir.display()))?;

    let path = dir.join(export_file_name(record, Utc::now().timestamp_millis()));
    tokio::fs::write(&path, &json)
        .await
        .context(format!("Failed to write export file: {}", path.display()))?;

    info!("IP data exported to {}", path.display());
    Ok(ExportedScan { path, json })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ScanStamp;

    fn record() -> CanonicalRecord {
        CanonicalRecord {
            ip: Some("8.8.8.8".to_string()),
            latitude: Some(37.4),
            ..CanonicalRecord::stamped(ScanStamp {
                timestamp: "2024-01-01T00:00:00.000Z".to_string(),
                scan_id: "SCAN-EXPORT001".to_string(),
            })
        }
    }

    #[test]
    fn test_export_file_name_pattern() {
        assert_eq!(
            export_file_name(&record(), 1_704_067_200_000),
            "ip_scan_SCAN-EXPORT001_1704067200000.json"
        );
    }

    #[test]
    fn test_pretty_json_is_indented_with_two_spaces() {
        let json = to_pretty_json(&record()).expect("record should serialize");
        assert!(json.starts_with("{\n  \"ip\": \"8.8.8.8\""));
        assert!(!json.contains("null"), "absent fields are omitted");
    }
}
