// Shared test helpers: provider fixtures and resolvers pointed at mock servers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use ip_recon::{IpResolver, Provider, SourceEndpoint};
use serde_json::{json, Value};
use url::Url;
use wiremock::MockServer;

/// Representative ipapi.co body.
#[allow(dead_code)]
pub fn ipapi_co_fixture() -> Value {
    json!({
        "ip": "8.8.8.8",
        "version": "IPv4",
        "city": "Mountain View",
        "region": "California",
        "country_name": "United States",
        "country_code": "US",
        "continent_code": "NA",
        "latitude": 37.4,
        "longitude": -122.1,
        "timezone": "America/Los_Angeles",
        "utc_offset": "-0700",
        "org": "Google LLC",
        "asn": "AS15169",
        "postal": "94043",
        "currency": "USD",
        "languages": "en-US,es-US,haw,fr",
        "country_area": 9629091.0,
        "country_population": 327167434,
        "country_calling_code": "+1"
    })
}

/// Representative ipwho.is body.
#[allow(dead_code)]
pub fn ipwho_is_fixture() -> Value {
    json!({
        "ip": "1.1.1.1",
        "success": true,
        "type": "IPv4",
        "continent": "Oceania",
        "country": "Australia",
        "country_code": "AU",
        "region": "Queensland",
        "city": "South Brisbane",
        "latitude": -27.4766,
        "longitude": 153.0166,
        "is_eu": false,
        "postal": "4101",
        "flag": {"emoji": "🇦🇺"},
        "connection": {"asn": 13335, "isp": "Cloudflare, Inc."},
        "timezone": {"id": "Australia/Brisbane", "utc": "+10:00"}
    })
}

/// Representative ip-api.com body.
#[allow(dead_code)]
pub fn ip_api_com_fixture() -> Value {
    json!({
        "status": "success",
        "query": "9.9.9.9",
        "country": "Switzerland",
        "countryCode": "CH",
        "regionName": "Zurich",
        "city": "Zurich",
        "zip": "8001",
        "lat": 47.3769,
        "lon": 8.5417,
        "timezone": "Europe/Zurich",
        "isp": "Quad9",
        "org": "Quad9",
        "as": "AS19281 Quad9"
    })
}

/// Endpoint on `server` at `path`, with an explicit provider.
#[allow(dead_code)]
pub fn endpoint(server: &MockServer, path: &str, provider: Provider) -> SourceEndpoint {
    let url = Url::parse(&format!("{}{}", server.uri(), path)).expect("mock server url");
    SourceEndpoint::with_provider(url, provider)
}

/// Resolver over `endpoints` with a plain client.
#[allow(dead_code)]
pub fn resolver(endpoints: Vec<SourceEndpoint>) -> IpResolver {
    IpResolver::new(Arc::new(reqwest::Client::new()), endpoints)
}
