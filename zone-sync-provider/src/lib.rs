//! # zone-sync-provider
//!
//! A read-only client for Amazon Route53: hosted zone metadata, hosted zone
//! listings and resource record set listings.
//!
//! ## Authentication
//!
//! Requests are signed with AWS Signature Version 4. Credentials come from a
//! [`CredentialSource`]: either explicit keys, or the default chain
//! (`AWS_ACCESS_KEY_ID`/`AWS_SECRET_ACCESS_KEY`, then the shared credentials
//! file and `AWS_PROFILE`).
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use zone_sync_provider::{create_provider, resource_record_sets, CredentialSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(CredentialSource::DefaultChain)?;
//!
//!     let zone = provider.get_hosted_zone("Z123EXAMPLE").await?;
//!     println!("{} ({} records)", zone.name, zone.record_count.unwrap_or(0));
//!
//!     let mut sets = resource_record_sets(provider.as_ref(), &zone.id);
//!     while let Some(set) = sets.try_next().await? {
//!         println!("{} {}", set.name, set.record_type);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError).
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried with
//! exponential backoff before they surface.

mod credentials;
mod error;
mod factory;
mod http_client;
mod pagination;
mod providers;
mod traits;
mod types;
mod utils;

pub use credentials::resolve_credentials;
pub use error::{ProviderError, Result};
pub use factory::create_provider;
pub use pagination::{hosted_zones, paginate, resource_record_sets};
pub use providers::common::normalize_domain_name;
pub use providers::{Route53Provider, Route53ProviderBuilder};
pub use traits::DnsProvider;
pub use types::{
    AliasTarget, CredentialSource, Credentials, HostedZone, Page, RecordSetCursor, ResourceRecord,
    ResourceRecordSet,
};
