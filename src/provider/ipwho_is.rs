//! `ipwho.is` response schema.

use serde::Deserialize;

use super::de::{opt_bool, opt_object, opt_string_or_number};
use super::ProviderFailure;
use crate::record::{CanonicalRecord, ScanStamp};

#[derive(Debug, Deserialize)]
pub(super) struct IpWhoIsResponse {
    ip: Option<String>,
    #[serde(default, deserialize_with = "opt_bool")]
    success: Option<bool>,
    message: Option<String>,
    #[serde(rename = "type")]
    ip_type: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    continent: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default, deserialize_with = "opt_bool")]
    is_eu: Option<bool>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    postal: Option<String>,
    #[serde(default, deserialize_with = "opt_object")]
    timezone: Option<Timezone>,
    #[serde(default, deserialize_with = "opt_object")]
    connection: Option<Connection>,
    #[serde(default, deserialize_with = "opt_object")]
    flag: Option<Flag>,
}

#[derive(Debug, Deserialize)]
struct Timezone {
    id: Option<String>,
    utc: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Connection {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    asn: Option<String>,
    isp: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Flag {
    emoji: Option<String>,
}

impl IpWhoIsResponse {
    pub(super) fn into_record(self, stamp: ScanStamp) -> Result<CanonicalRecord, ProviderFailure> {
        if self.success == Some(false) {
            return Err(ProviderFailure::Rejected(
                self.message.unwrap_or_else(|| "success=false".to_string()),
            ));
        }
        let ip = self.ip.ok_or(ProviderFailure::MissingField("ip"))?;

        let (timezone, utc_offset) = match self.timezone {
            Some(tz) => (tz.id, tz.utc),
            None => (None, None),
        };
        let (isp, asn) = match self.connection {
            Some(conn) => (conn.isp, conn.asn),
            None => (None, None),
        };

        Ok(CanonicalRecord {
            ip: Some(ip),
            version: self.ip_type,
            city: self.city,
            region: self.region,
            country: self.country,
            country_code: self.country_code,
            continent: self.continent,
            latitude: self.latitude,
            longitude: self.longitude,
            timezone,
            utc_offset,
            isp,
            asn,
            postal: self.postal,
            is_eu: self.is_eu,
            flag: self.flag.and_then(|f| f.emoji),
            ..CanonicalRecord::stamped(stamp)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::Provider;
    use super::*;
    use serde_json::json;

    fn stamp() -> ScanStamp {
        ScanStamp {
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            scan_id: "SCAN-IPWHOIS01".to_string(),
        }
    }

    #[test]
    fn test_nested_fields_are_flattened() {
        let raw = json!({
            "ip": "8.8.4.4",
            "success": true,
            "type": "IPv4",
            "continent": "North America",
            "country": "United States",
            "country_code": "US",
            "region": "California",
            "city": "Mountain View",
            "latitude": 37.3860517,
            "longitude": -122.0838511,
            "is_eu": false,
            "postal": "94039",
            "flag": {"img": "https://cdn.ipwhois.io/flags/us.svg", "emoji": "🇺🇸"},
            "connection": {"asn": 15169, "org": "Google LLC", "isp": "Google LLC", "domain": "google.com"},
            "timezone": {"id": "America/Los_Angeles", "abbr": "PDT", "utc": "-07:00"}
        });
        let record = Provider::IpWhoIs
            .normalize(raw, stamp())
            .expect("body should normalize");

        assert_eq!(record.ip.as_deref(), Some("8.8.4.4"));
        assert_eq!(record.version.as_deref(), Some("IPv4"));
        assert_eq!(record.continent.as_deref(), Some("North America"));
        assert_eq!(record.country.as_deref(), Some("United States"));
        assert_eq!(record.region.as_deref(), Some("California"));
        assert_eq!(record.latitude, Some(37.3860517));
        assert_eq!(record.longitude, Some(-122.0838511));
        assert_eq!(record.timezone.as_deref(), Some("America/Los_Angeles"));
        assert_eq!(record.utc_offset.as_deref(), Some("-07:00"));
        assert_eq!(record.isp.as_deref(), Some("Google LLC"));
        assert_eq!(record.asn.as_deref(), Some("15169"));
        assert_eq!(record.postal.as_deref(), Some("94039"));
        assert_eq!(record.is_eu, Some(false));
        assert_eq!(record.flag.as_deref(), Some("🇺🇸"));
        assert!(record.org.is_none());
    }

    #[test]
    fn test_absent_nested_parents_yield_absent_fields() {
        let raw = json!({"ip": "1.1.1.1", "type": "IPv4", "country": "Australia"});
        let record = Provider::IpWhoIs
            .normalize(raw, stamp())
            .expect("missing nested objects are not an error");

        assert_eq!(record.country.as_deref(), Some("Australia"));
        assert!(record.timezone.is_none());
        assert!(record.utc_offset.is_none());
        assert!(record.isp.is_none());
        assert!(record.asn.is_none());
        assert!(record.flag.is_none());
    }

    #[test]
    fn test_null_nested_parent_yields_absent_fields() {
        let raw = json!({"ip": "1.1.1.1", "connection": null, "flag": {}});
        let record = Provider::IpWhoIs
            .normalize(raw, stamp())
            .expect("null nested objects are not an error");
        assert!(record.isp.is_none());
        assert!(record.flag.is_none());
    }

    #[test]
    fn test_unsuccessful_body_is_rejected() {
        let raw = json!({"ip": "999.1.1.1", "success": false, "message": "Invalid IP address"});
        let err = Provider::IpWhoIs
            .normalize(raw, stamp())
            .expect_err("success=false must not produce a record");
        assert!(matches!(err, ProviderFailure::Rejected(ref m) if m == "Invalid IP address"));
    }

    #[test]
    fn test_non_object_nested_parents_yield_absent_fields() {
        let raw = json!({
            "ip": "1.1.1.1",
            "country": "Australia",
            "timezone": "UTC",
            "connection": [],
            "flag": 7,
            "is_eu": "no"
        });
        let record = Provider::IpWhoIs
            .normalize(raw, stamp())
            .expect("wrong-typed nested parents are not an error");

        assert_eq!(record.ip.as_deref(), Some("1.1.1.1"));
        assert_eq!(record.country.as_deref(), Some("Australia"));
        assert!(record.timezone.is_none());
        assert!(record.utc_offset.is_none());
        assert!(record.isp.is_none());
        assert!(record.asn.is_none());
        assert!(record.flag.is_none());
        assert!(record.is_eu.is_none());
    }
}
