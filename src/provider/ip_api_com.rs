//! `ip-api.com` response schema.

use serde::Deserialize;

use super::de::opt_string_or_number;
use super::ProviderFailure;
use crate::record::{CanonicalRecord, ScanStamp};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IpApiComResponse {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    status: Option<String>,
    message: Option<String>,
    query: Option<String>,
    city: Option<String>,
    region_name: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
    org: Option<String>,
    #[serde(rename = "as")]
    as_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    zip: Option<String>,
}

impl IpApiComResponse {
    pub(super) fn into_record(self, stamp: ScanStamp) -> Result<CanonicalRecord, ProviderFailure> {
        if self.status.as_deref() == Some("fail") {
            return Err(ProviderFailure::Rejected(
                self.message.unwrap_or_else(|| "status=fail".to_string()),
            ));
        }
        let ip = self.query.ok_or(ProviderFailure::MissingField("query"))?;

        Ok(CanonicalRecord {
            ip: Some(ip),
            // ip-api.com does not report the address family
            version: Some("IPv4".to_string()),
            city: self.city,
            region: self.region_name,
            country: self.country,
            country_code: self.country_code,
            latitude: self.lat,
            longitude: self.lon,
            timezone: self.timezone,
            isp: self.isp,
            asn: self.as_name,
            postal: self.zip,
            org: self.org,
            ..CanonicalRecord::stamped(stamp)
        })
    }
}
