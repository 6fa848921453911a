//! Amazon Route53 Provider

mod error;
mod http;
mod provider;
mod sign;
/// Route53 API-specific XML response types.
pub(crate) mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::Credentials;

/// Route53 API host (global endpoint).
pub(crate) const ROUTE53_HOST: &str = "route53.amazonaws.com";
/// Route53 REST API version prefix.
pub(crate) const API_VERSION: &str = "2013-04-01";
/// Route53 is signed against `us-east-1` regardless of where the caller runs.
pub(crate) const SIGNING_REGION: &str = "us-east-1";
/// SigV4 service name.
pub(crate) const SIGNING_SERVICE: &str = "route53";
/// Maximum page size of `ListHostedZones`.
pub(crate) const MAX_ZONES_PAGE_SIZE: u32 = 100;
/// Maximum page size of `ListResourceRecordSets`.
pub(crate) const MAX_RECORDS_PAGE_SIZE: u32 = 300;

/// Amazon Route53 provider implementation.
///
/// Authenticates with AWS Signature Version 4.
///
/// # Construction
///
/// ```rust,no_run
/// use zone_sync_provider::{Credentials, Route53Provider};
///
/// let provider = Route53Provider::new(Credentials::new(
///     "your-access-key-id",
///     "your-secret-access-key",
/// ))?;
/// # Ok::<(), zone_sync_provider::ProviderError>(())
/// ```
pub struct Route53Provider {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) max_retries: u32,
}

/// Builder for [`Route53Provider`] with configurable retry behavior.
pub struct Route53ProviderBuilder {
    credentials: Credentials,
    max_retries: u32,
}

impl Route53ProviderBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            max_retries: 2,
        }
    }

    /// Set the maximum number of automatic retries for transient errors (default: 2).
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the [`Route53Provider`] instance.
    pub fn build(self) -> Result<Route53Provider> {
        Ok(Route53Provider {
            client: create_http_client("route53")?,
            credentials: self.credentials,
            max_retries: self.max_retries,
        })
    }
}

impl Route53Provider {
    /// Creates a new Route53 provider with default settings (2 retries).
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(credentials: Credentials) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(credentials)
    }
}

/// Strip the `/hostedzone/` prefix Route53 puts on zone ids.
pub(crate) fn bare_zone_id(zone_id: &str) -> &str {
    zone_id
        .trim()
        .trim_start_matches("/hostedzone/")
        .trim_start_matches("hostedzone/")
        .trim_matches('/')
}
