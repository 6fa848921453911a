//! Route53 `DnsProvider` trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{HostedZone, Page, RecordSetCursor, ResourceRecordSet};

use super::sign::uri_encode;
use super::types::{GetHostedZoneResponse, ListHostedZonesResponse, ListResourceRecordSetsResponse};
use super::{
    API_VERSION, MAX_RECORDS_PAGE_SIZE, MAX_ZONES_PAGE_SIZE, Route53Provider, bare_zone_id,
};

impl Route53Provider {
    /// Normalize and validate a caller-supplied hosted zone id.
    fn checked_zone_id<'a>(&self, zone_id: &'a str) -> Result<&'a str> {
        let id = bare_zone_id(zone_id);
        if id.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "HostedZoneId".to_string(),
                detail: "hosted zone id is empty".to_string(),
            });
        }
        Ok(id)
    }

    fn zone_path(zone_id: &str) -> String {
        format!("/{API_VERSION}/hostedzone/{}", uri_encode(zone_id))
    }
}

#[async_trait]
impl DnsProvider for Route53Provider {
    fn id(&self) -> &'static str {
        "route53"
    }

    async fn get_hosted_zone(&self, zone_id: &str) -> Result<HostedZone> {
        let zone_id = self.checked_zone_id(zone_id)?;
        let response: GetHostedZoneResponse = self
            .get(&Self::zone_path(zone_id), &[], ErrorContext::zone(zone_id))
            .await?;

        Ok(response.hosted_zone.into())
    }

    async fn list_hosted_zones(&self, marker: Option<&str>) -> Result<Page<HostedZone, String>> {
        let max_items = MAX_ZONES_PAGE_SIZE.to_string();
        let mut params = vec![("maxitems", max_items.as_str())];
        if let Some(marker) = marker {
            params.push(("marker", marker));
        }

        let path = format!("/{API_VERSION}/hostedzone");
        let ctx = ErrorContext {
            param: Some("marker".to_string()),
            ..Default::default()
        };
        let response: ListHostedZonesResponse = self.get(&path, &params, ctx).await?;

        let next = if response.is_truncated {
            response.next_marker
        } else {
            None
        };

        Ok(Page {
            items: response
                .hosted_zones
                .items
                .into_iter()
                .map(Into::into)
                .collect(),
            next,
        })
    }

    async fn list_resource_record_sets(
        &self,
        zone_id: &str,
        start: Option<&RecordSetCursor>,
    ) -> Result<Page<ResourceRecordSet, RecordSetCursor>> {
        let zone_id = self.checked_zone_id(zone_id)?;
        let max_items = MAX_RECORDS_PAGE_SIZE.to_string();

        let mut params = vec![("maxitems", max_items.as_str())];
        if let Some(cursor) = start {
            params.push(("name", cursor.name.as_str()));
            if let Some(record_type) = &cursor.record_type {
                params.push(("type", record_type.as_str()));
            }
            if let Some(identifier) = &cursor.identifier {
                params.push(("identifier", identifier.as_str()));
            }
        }

        let path = format!("{}/rrset", Self::zone_path(zone_id));
        let response: ListResourceRecordSetsResponse = self
            .get(&path, &params, ErrorContext::zone(zone_id))
            .await?;

        // Route53 only reports the next position on truncated listings
        let next = if response.is_truncated {
            response.next_record_name.map(|name| RecordSetCursor {
                name,
                record_type: response.next_record_type,
                identifier: response.next_record_identifier,
            })
        } else {
            None
        };

        log::debug!(
            "[route53] zone {zone_id}: {} record sets, more: {}",
            response.resource_record_sets.items.len(),
            next.is_some()
        );

        Ok(Page {
            items: response
                .resource_record_sets
                .items
                .into_iter()
                .map(Into::into)
                .collect(),
            next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Credentials;

    #[test]
    fn zone_path_is_versioned() {
        assert_eq!(
            Route53Provider::zone_path("Z123"),
            "/2013-04-01/hostedzone/Z123"
        );
    }

    #[tokio::test]
    async fn empty_zone_id_is_rejected_before_any_request() {
        let provider = Route53Provider::new(Credentials::new("AKID", "secret")).unwrap();
        let result = provider.get_hosted_zone("/hostedzone/").await;
        assert!(
            matches!(&result, Err(ProviderError::InvalidParameter { param, .. }) if param == "HostedZoneId"),
            "unexpected result: {result:?}"
        );
    }
}
