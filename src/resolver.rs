//! Sequential fallback resolution.
//!
//! The resolver walks its endpoints in order, one request at a time, and returns
//! the normalized record of the first endpoint that answers. A failed endpoint is
//! logged and skipped; only exhaustion of the whole list is an error.

use std::sync::Arc;

use log::{error, info, warn};
use serde_json::Value;

use crate::error_handling::{categorize_endpoint_error, EndpointError, ResolveError};
use crate::provider::{self, ProviderFailure, SourceEndpoint};
use crate::record::CanonicalRecord;

/// Outcome of a successful resolution, with the attempts that preceded it.
#[derive(Debug)]
pub struct Resolution {
    /// Normalized record from the answering endpoint
    pub record: CanonicalRecord,
    /// Endpoint that answered
    pub endpoint: SourceEndpoint,
    /// Failed attempts before the answering endpoint, in order
    pub failures: Vec<EndpointError>,
}

/// Looks up the caller's public IP through an ordered list of endpoints.
#[derive(Debug, Clone)]
pub struct IpResolver {
    client: Arc<reqwest::Client>,
    endpoints: Vec<SourceEndpoint>,
}

impl IpResolver {
    /// Creates a resolver. Endpoint order is fallback priority.
    pub fn new(client: Arc<reqwest::Client>, endpoints: Vec<SourceEndpoint>) -> Self {
        Self { client, endpoints }
    }

    /// Resolves the public IP record.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::AllSourcesFailed` when every endpoint failed, or
    /// `ResolveError::NoEndpoints` when none is configured.
    pub async fn resolve(&self) -> Result<CanonicalRecord, ResolveError> {
        self.resolve_detailed().await.map(|resolution| resolution.record)
    }

    /// Like [`IpResolver::resolve`], but also reports which endpoint answered and
    /// which attempts failed before it.
    pub async fn resolve_detailed(&self) -> Result<Resolution, ResolveError> {
        if self.endpoints.is_empty() {
            return Err(ResolveError::NoEndpoints);
        }

        info!(
            "Initiating IP lookup across {} endpoint(s)",
            self.endpoints.len()
        );

        let mut failures = Vec::new();
        for endpoint in &self.endpoints {
            match self.fetch(endpoint).await {
                Ok(record) => {
                    info!(
                        "IP data acquired from {} (scan {})",
                        endpoint, record.scan_id
                    );
                    return Ok(Resolution {
                        record,
                        endpoint: endpoint.clone(),
                        failures,
                    });
                }
                Err(e) => {
                    warn!("[{}] {}", categorize_endpoint_error(&e), e);
                    failures.push(e);
                }
            }
        }

        error!("All {} IP API endpoints failed", failures.len());
        Err(ResolveError::AllSourcesFailed {
            attempts: failures.len(),
            failures,
        })
    }

    /// One attempt: request, status check, JSON decode, normalization.
    async fn fetch(&self, endpoint: &SourceEndpoint) -> Result<CanonicalRecord, EndpointError> {
        let url = endpoint.url().as_str();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| EndpointError::Unreachable {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EndpointError::Status {
                url: url.to_string(),
                status,
            });
        }

        let raw: Value = response.json().await.map_err(|e| EndpointError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        provider::normalize(endpoint, raw).map_err(|failure| match failure {
            ProviderFailure::Rejected(reason) => EndpointError::Rejected {
                url: url.to_string(),
                provider: endpoint.provider(),
                reason,
            },
            other => EndpointError::Decode {
                url: url.to_string(),
                message: other.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_endpoint_list_is_an_error() {
        let resolver = IpResolver::new(Arc::new(reqwest::Client::new()), Vec::new());
        let err = resolver.resolve().await.expect_err("no endpoints to try");
        assert!(matches!(err, ResolveError::NoEndpoints));
    }

    #[tokio::test]
    async fn test_unreachable_endpoints_exhaust() {
        // Port 1 on loopback refuses connections immediately
        let endpoints = vec![
            SourceEndpoint::parse("http://127.0.0.1:1/json/").expect("valid url"),
            SourceEndpoint::parse("http://127.0.0.1:1/other/").expect("valid url"),
        ];
        let resolver = IpResolver::new(Arc::new(reqwest::Client::new()), endpoints);

        match resolver.resolve().await {
            Err(ResolveError::AllSourcesFailed { attempts, failures }) => {
                assert_eq!(attempts, 2);
                assert!(failures
                    .iter()
                    .all(|f| matches!(f, EndpointError::Unreachable { .. })));
                assert_eq!(failures[1].url(), "http://127.0.0.1:1/other/");
            }
            other => panic!("expected AllSourcesFailed, got {:?}", other),
        }
    }
}
