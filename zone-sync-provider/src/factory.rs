//! Provider factory.

use std::sync::Arc;

use crate::credentials::resolve_credentials;
use crate::error::Result;
use crate::providers::Route53Provider;
use crate::traits::DnsProvider;
use crate::types::CredentialSource;

/// Creates a [`DnsProvider`] from a credential source.
///
/// [`CredentialSource::DefaultChain`] is resolved here, once, so a missing
/// credential is reported before any request is sent.
///
/// # Examples
///
/// ```rust,no_run
/// use zone_sync_provider::{create_provider, CredentialSource};
///
/// let provider = create_provider(CredentialSource::DefaultChain).unwrap();
/// ```
pub fn create_provider(source: CredentialSource) -> Result<Arc<dyn DnsProvider>> {
    let credentials = resolve_credentials(source)?;
    Ok(Arc::new(Route53Provider::new(credentials)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Credentials;

    #[test]
    fn explicit_source_builds_route53_provider() {
        let provider =
            create_provider(CredentialSource::Explicit(Credentials::new("AKID", "secret")))
                .unwrap();
        assert_eq!(provider.id(), "route53");
    }
}
