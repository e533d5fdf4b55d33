//! `ipapi.co` response schema.

use serde::Deserialize;

use super::de::{opt_bool, opt_string_or_number, opt_whole_number};
use super::ProviderFailure;
use crate::record::{CanonicalRecord, ScanStamp};

#[derive(Debug, Deserialize)]
pub(super) struct IpApiCoResponse {
    ip: Option<String>,
    version: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country_name: Option<String>,
    country_code: Option<String>,
    continent_code: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<String>,
    utc_offset: Option<String>,
    org: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    asn: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    postal: Option<String>,
    currency: Option<String>,
    languages: Option<String>,
    country_area: Option<f64>,
    #[serde(default, deserialize_with = "opt_whole_number")]
    country_population: Option<u64>,
    country_calling_code: Option<String>,

    // Set on rate limiting and invalid lookups, with HTTP 200
    #[serde(default, deserialize_with = "opt_bool")]
    error: Option<bool>,
    reason: Option<String>,
}

impl IpApiCoResponse {
    pub(super) fn into_record(self, stamp: ScanStamp) -> Result<CanonicalRecord, ProviderFailure> {
        if self.error == Some(true) {
            return Err(ProviderFailure::Rejected(
                self.reason.unwrap_or_else(|| "error flag set".to_string()),
            ));
        }
        let ip = self.ip.ok_or(ProviderFailure::MissingField("ip"))?;

        Ok(CanonicalRecord {
            ip: Some(ip),
            version: Some(
                self.version
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| "IPv4".to_string()),
            ),
            city: self.city,
            region: self.region,
            country: self.country_name,
            country_code: self.country_code,
            continent: self.continent_code,
            latitude: self.latitude,
            longitude: self.longitude,
            timezone: self.timezone,
            utc_offset: self.utc_offset,
            isp: self.org,
            asn: self.asn,
            postal: self.postal,
            currency: self.currency,
            languages: self.languages,
            country_area: self.country_area,
            country_population: self.country_population,
            calling_code: self.country_calling_code,
            ..CanonicalRecord::stamped(stamp)
        })
    }
}
