//! Geolocation providers and response normalization.
//!
//! Each supported API is a [`Provider`] variant with its own typed response
//! schema. The provider of an endpoint is decided once, when the
//! [`SourceEndpoint`] is built, and its parser turns the raw JSON body into a
//! [`CanonicalRecord`].
//!
//! Schemas are fully optional: a missing field or a missing nested object
//! (`timezone`, `connection`, `flag`) yields an absent canonical field, never an
//! error.

mod de;
mod ip_api_com;
mod ipapi_co;
mod ipwho_is;

use log::debug;
use serde_json::Value;
use strum_macros::Display;
use thiserror::Error;
use url::Url;

use crate::error_handling::InitializationError;
use crate::record::{CanonicalRecord, ScanStamp};

/// Known geolocation APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Provider {
    /// `ipapi.co`
    #[strum(serialize = "ipapi.co")]
    IpApiCo,
    /// `ipwho.is`
    #[strum(serialize = "ipwho.is")]
    IpWhoIs,
    /// `ip-api.com`
    #[strum(serialize = "ip-api.com")]
    IpApiCom,
    /// Any other endpoint; normalizes to a stamp-only record.
    #[strum(serialize = "unknown")]
    Unknown,
}

/// Why a successful HTTP response could not become a record.
#[derive(Error, Debug)]
pub enum ProviderFailure {
    /// Body does not match the provider's schema.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Required field missing from an otherwise valid body.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// The provider reported a failed lookup in the body.
    #[error("{0}")]
    Rejected(String),
}

impl Provider {
    /// Picks the provider whose host name appears in `url`.
    pub fn detect(url: &str) -> Provider {
        if url.contains("ipapi.co") {
            Provider::IpApiCo
        } else if url.contains("ipwho.is") {
            Provider::IpWhoIs
        } else if url.contains("ip-api.com") {
            Provider::IpApiCom
        } else {
            Provider::Unknown
        }
    }

    /// Maps a raw response body onto the canonical record.
    ///
    /// # Errors
    ///
    /// Returns `ProviderFailure` when the body does not decode, lacks the IP
    /// field, or carries the provider's own failure marker.
    pub fn normalize(
        self,
        raw: Value,
        stamp: ScanStamp,
    ) -> Result<CanonicalRecord, ProviderFailure> {
        match self {
            Provider::IpApiCo => {
                serde_json::from_value::<ipapi_co::IpApiCoResponse>(raw)?.into_record(stamp)
            }
            Provider::IpWhoIs => {
                serde_json::from_value::<ipwho_is::IpWhoIsResponse>(raw)?.into_record(stamp)
            }
            Provider::IpApiCom => {
                serde_json::from_value::<ip_api_com::IpApiComResponse>(raw)?.into_record(stamp)
            }
            Provider::Unknown => {
                debug!("No field mapping for unknown provider; record carries stamp only");
                Ok(CanonicalRecord::stamped(stamp))
            }
        }
    }
}

/// One configured geolocation data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEndpoint {
    url: Url,
    provider: Provider,
}

impl SourceEndpoint {
    /// Parses `url` and detects its provider.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::EndpointError` if `url` is not a valid URL.
    pub fn parse(url: &str) -> Result<Self, InitializationError> {
        let parsed = Url::parse(url).map_err(|source| InitializationError::EndpointError {
            url: url.to_string(),
            source,
        })?;
        let provider = Provider::detect(parsed.as_str());
        Ok(Self {
            url: parsed,
            provider,
        })
    }

    /// Endpoint with an explicitly chosen provider, for mirrors and proxies whose
    /// host does not reveal the API behind them.
    pub fn with_provider(url: Url, provider: Provider) -> Self {
        Self { url, provider }
    }

    /// Endpoint URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Provider chosen when the endpoint was built.
    pub fn provider(&self) -> Provider {
        self.provider
    }
}

impl std::fmt::Display for SourceEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.url, self.provider)
    }
}

/// Normalizes a body received from `endpoint`, stamping it now.
pub fn normalize(
    endpoint: &SourceEndpoint,
    raw: Value,
) -> Result<CanonicalRecord, ProviderFailure> {
    endpoint.provider().normalize(raw, ScanStamp::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stamp() -> ScanStamp {
        ScanStamp {
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            scan_id: "SCAN-TEST00001".to_string(),
        }
    }

    #[test]
    fn test_detect_known_hosts() {
        assert_eq!(Provider::detect("https://ipapi.co/json/"), Provider::IpApiCo);
        assert_eq!(Provider::detect("https://ipwho.is/"), Provider::IpWhoIs);
        assert_eq!(
            Provider::detect("http://ip-api.com/json/"),
            Provider::IpApiCom
        );
        assert_eq!(
            Provider::detect("https://example.com/geo"),
            Provider::Unknown
        );
    }

    #[test]
    fn test_endpoint_parse_detects_provider_once() {
        let endpoint = SourceEndpoint::parse("https://ipwho.is/").expect("valid url");
        assert_eq!(endpoint.provider(), Provider::IpWhoIs);
        assert_eq!(endpoint.url().as_str(), "https://ipwho.is/");
        assert_eq!(endpoint.to_string(), "https://ipwho.is/ (ipwho.is)");
    }

    #[test]
    fn test_endpoint_parse_rejects_garbage() {
        let err = SourceEndpoint::parse("::not a url::").expect_err("invalid url");
        assert!(err.to_string().contains("::not a url::"));
    }

    #[test]
    fn test_with_provider_overrides_detection() {
        let url = Url::parse("http://127.0.0.1:8080/b/").expect("valid url");
        let endpoint = SourceEndpoint::with_provider(url, Provider::IpWhoIs);
        assert_eq!(endpoint.provider(), Provider::IpWhoIs);
    }

    #[test]
    fn test_unknown_provider_yields_stamp_only() {
        let record = Provider::Unknown
            .normalize(json!({"ip": "1.2.3.4", "city": "Nowhere"}), stamp())
            .expect("unknown provider never fails");
        assert_eq!(record, CanonicalRecord::stamped(stamp()));
    }

    #[test]
    fn test_non_object_body_is_decode_failure() {
        let err = Provider::IpApiCo
            .normalize(json!("rate limited"), stamp())
            .expect_err("string body is not a provider document");
        assert!(matches!(err, ProviderFailure::Decode(_)));
    }
}
