//! Canonical IP record.
//!
//! Every provider response is normalized into a [`CanonicalRecord`]. A record is
//! always stamped with the time of normalization and a fresh scan identifier.

mod scan_id;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub use scan_id::generate_scan_id;

/// Timestamp and identifier attached to every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanStamp {
    /// ISO-8601 UTC timestamp with millisecond precision
    pub timestamp: String,
    /// Scan identifier (`SCAN-` + 9 base-36 characters)
    pub scan_id: String,
}

impl ScanStamp {
    /// Stamps a scan now, with a freshly generated identifier.
    pub fn now() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            scan_id: generate_scan_id(),
        }
    }
}

/// Provider-agnostic IP information.
///
/// Absent fields are omitted when serialized and default to `None` when parsed,
/// so a record survives a JSON round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Public IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Address family, `IPv4` or `IPv6`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// City name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Region, state or province
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Continent name or code, as the provider reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    /// Latitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// IANA time zone name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// UTC offset, e.g. `-0700` or `+10:00`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
    /// Internet service provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,
    /// Autonomous system number, as text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asn: Option<String>,
    /// Postal or ZIP code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,

    // ipapi.co extras
    /// Currency code of the country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Comma-separated language tags spoken in the country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    /// Country area in square kilometres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_area: Option<f64>,
    /// Country population
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_population: Option<u64>,
    /// International calling code, e.g. `+1`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calling_code: Option<String>,

    // ipwho.is extras
    /// Whether the country is an EU member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_eu: Option<bool>,
    /// Flag emoji of the country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,

    // ip-api.com extras
    /// Organization owning the address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,

    /// When the record was normalized (RFC 3339, UTC, milliseconds)
    pub timestamp: String,
    /// Identifier of the scan that produced this record
    pub scan_id: String,
}

impl CanonicalRecord {
    /// A record carrying only the stamp; every lookup field is absent.
    pub fn stamped(stamp: ScanStamp) -> Self {
        Self {
            ip: None,
            version: None,
            city: None,
            region: None,
            country: None,
            country_code: None,
            continent: None,
            latitude: None,
            longitude: None,
            timezone: None,
            utc_offset: None,
            isp: None,
            asn: None,
            postal: None,
            currency: None,
            languages: None,
            country_area: None,
            country_population: None,
            calling_code: None,
            is_eu: None,
            flag: None,
            org: None,
            timestamp: stamp.timestamp,
            scan_id: stamp.scan_id,
        }
    }

    /// Latitude and longitude, when both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Embeddable map link centred on the record's coordinates.
    pub fn map_url(&self) -> Option<String> {
        self.coordinates()
            .map(|(lat, lon)| crate::presentation::map_url(lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> ScanStamp {
        ScanStamp {
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            scan_id: "SCAN-ABC123XYZ".to_string(),
        }
    }

    #[test]
    fn test_stamp_now_is_populated() {
        let stamp = ScanStamp::now();
        assert!(!stamp.timestamp.is_empty());
        assert!(stamp.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp.timestamp).is_ok());
        assert!(stamp.scan_id.starts_with("SCAN-"));
    }

    #[test]
    fn test_stamped_record_serializes_only_stamp() {
        let record = CanonicalRecord::stamped(stamp());
        let value = serde_json::to_value(&record).expect("record should serialize");
        let object = value.as_object().expect("record is a JSON object");
        assert_eq!(object.len(), 2);
        assert_eq!(object["scan_id"], "SCAN-ABC123XYZ");
        assert_eq!(object["timestamp"], "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_json_round_trip_keeps_coordinates_exact() {
        let record = CanonicalRecord {
            ip: Some("8.8.8.8".to_string()),
            latitude: Some(37.405_99),
            longitude: Some(-122.078_514_999_999_99),
            country_area: Some(9_629_091.0),
            country_population: Some(327_167_434),
            is_eu: Some(false),
            ..CanonicalRecord::stamped(stamp())
        };
        let json = serde_json::to_string(&record).expect("record should serialize");
        let parsed: CanonicalRecord = serde_json::from_str(&json).expect("record should parse");
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_coordinates_require_both_axes() {
        let mut record = CanonicalRecord::stamped(stamp());
        record.latitude = Some(10.0);
        assert!(record.coordinates().is_none());
        assert!(record.map_url().is_none());

        record.longitude = Some(20.0);
        assert_eq!(record.coordinates(), Some((10.0, 20.0)));
        assert!(record.map_url().is_some());
    }
}
