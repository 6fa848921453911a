//! Zone query service: fetches Route53 record sets and renders them.

use std::sync::Arc;

use futures::TryStreamExt;
use zone_sync_provider::{
    DnsProvider, ProviderError, ResourceRecordSet, hosted_zones, resource_record_sets,
};

use crate::error::{CoreError, CoreResult};
use crate::filter::{DomainFilter, RecordTypeFilter};
use crate::render::render_record_sets;

/// Zone 查询服务
pub struct ZoneService {
    provider: Arc<dyn DnsProvider>,
}

impl ZoneService {
    #[must_use]
    pub fn new(provider: Arc<dyn DnsProvider>) -> Self {
        Self { provider }
    }

    /// Name of the hosted zone, trailing dot included. Used as the parse origin.
    pub async fn zone_origin(&self, zone_id: &str) -> CoreResult<String> {
        let zone = self
            .provider
            .get_hosted_zone(zone_id)
            .await
            .map_err(|e| zone_error(zone_id, e))?;
        log::debug!("Hosted zone {zone_id} is {}", zone.name);
        Ok(zone.name)
    }

    /// Render one hosted zone. The zone is validated before any record set is listed.
    pub async fn render_zone(&self, zone_id: &str, filter: &RecordTypeFilter) -> CoreResult<String> {
        self.zone_origin(zone_id).await?;
        let sets = self.record_sets(zone_id).await?;
        render_record_sets(&sets, filter)
    }

    /// Render every hosted zone accepted by `domains` into one combined block.
    pub async fn render_all_zones(
        &self,
        domains: &DomainFilter,
        filter: &RecordTypeFilter,
    ) -> CoreResult<String> {
        let mut out = String::new();
        let mut zones = hosted_zones(self.provider.as_ref());

        while let Some(zone) = zones.try_next().await? {
            if !domains.matches(&zone.name) {
                log::debug!("Skipping zone {} ({})", zone.name, zone.id);
                continue;
            }
            log::info!("Rendering zone {} ({})", zone.name, zone.id);
            let sets = self.record_sets(&zone.id).await?;
            out.push_str(&render_record_sets(&sets, filter)?);
        }

        Ok(out)
    }

    /// Drain the lazy record set listing of one zone.
    async fn record_sets(&self, zone_id: &str) -> CoreResult<Vec<ResourceRecordSet>> {
        let sets: Vec<ResourceRecordSet> = resource_record_sets(self.provider.as_ref(), zone_id)
            .try_collect()
            .await
            .map_err(|e| zone_error(zone_id, e))?;
        log::debug!("Fetched {} record sets for {zone_id}", sets.len());
        Ok(sets)
    }
}

/// A malformed or unknown hosted zone id both mean the zone doesn't exist.
fn zone_error(zone_id: &str, err: ProviderError) -> CoreError {
    match err {
        ProviderError::ZoneNotFound { .. } | ProviderError::InvalidParameter { .. } => {
            CoreError::ZoneNotFound {
                zone_id: zone_id.to_string(),
            }
        }
        other => CoreError::Provider(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockProvider, a_record, alias_record, service_with, shapeless_record};

    #[tokio::test]
    async fn renders_single_zone() {
        let (svc, _) = service_with(MockProvider::new(100).with_zone(
            "Z123",
            "example.com.",
            vec![a_record("www.example.com.", 300, &["1.2.3.4"])],
        ));

        let out = svc
            .render_zone("Z123", &RecordTypeFilter::default())
            .await
            .unwrap();
        assert_eq!(out, "www.example.com.\t300\tIN\tA\t1.2.3.4\n");
    }

    #[tokio::test]
    async fn validates_zone_before_listing() {
        let (svc, provider) = service_with(MockProvider::new(100).with_zone(
            "Z123",
            "example.com.",
            vec![a_record("www.example.com.", 300, &["1.2.3.4"])],
        ));

        svc.render_zone("Z123", &RecordTypeFilter::default())
            .await
            .unwrap();
        let calls = provider.calls();
        assert_eq!(calls[0], "get_hosted_zone Z123");
        assert!(calls[1].starts_with("list_resource_record_sets Z123"));
    }

    #[tokio::test]
    async fn unknown_zone_is_zone_not_found() {
        let (svc, provider) = service_with(MockProvider::new(100));

        let err = svc
            .render_zone("ZMISSING", &RecordTypeFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ZoneNotFound { ref zone_id } if zone_id == "ZMISSING"));
        assert_eq!(provider.calls().len(), 1);

        let err = svc.zone_origin("ZMISSING").await.unwrap_err();
        assert!(matches!(err, CoreError::ZoneNotFound { .. }));
    }

    #[tokio::test]
    async fn zone_origin_returns_zone_name() {
        let (svc, _) =
            service_with(MockProvider::new(100).with_zone("Z123", "example.com.", Vec::new()));
        assert_eq!(svc.zone_origin("Z123").await.unwrap(), "example.com.");
    }

    #[tokio::test]
    async fn drains_every_page_in_order() {
        let sets = (1..=7)
            .map(|i| {
                let address = format!("10.0.0.{i}");
                a_record(&format!("h{i}.example.com."), 60, &[address.as_str()])
            })
            .collect();
        let (svc, provider) =
            service_with(MockProvider::new(3).with_zone("Z123", "example.com.", sets));

        let out = svc
            .render_zone("Z123", &RecordTypeFilter::default())
            .await
            .unwrap();
        let owners: Vec<_> = out.lines().map(|l| l.split('\t').next().unwrap()).collect();
        assert_eq!(owners.len(), 7);
        assert_eq!(owners[0], "h1.example.com.");
        assert_eq!(owners[6], "h7.example.com.");

        let listings = provider
            .calls()
            .iter()
            .filter(|c| c.starts_with("list_resource_record_sets"))
            .count();
        assert_eq!(listings, 3);
    }

    #[tokio::test]
    async fn shapeless_record_aborts_render() {
        let (svc, _) = service_with(MockProvider::new(100).with_zone(
            "Z123",
            "example.com.",
            vec![
                a_record("www.example.com.", 300, &["1.2.3.4"]),
                shapeless_record("bad.example.com."),
            ],
        ));

        let err = svc
            .render_zone("Z123", &RecordTypeFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownRecordType { .. }));
    }

    fn two_zones() -> MockProvider {
        MockProvider::new(1)
            .with_zone(
                "ZA",
                "Example.COM.",
                vec![alias_record("example.com.", "lb.example.com.")],
            )
            .with_zone(
                "ZB",
                "other.org.",
                vec![a_record("www.other.org.", 300, &["5.6.7.8"])],
            )
    }

    #[tokio::test]
    async fn all_zones_without_filter() {
        let (svc, _) = service_with(two_zones());

        let out = svc
            .render_all_zones(&DomainFilter::default(), &RecordTypeFilter::default())
            .await
            .unwrap();
        assert_eq!(
            out,
            "example.com.\t300\tIN\tA\tlb.example.com.\t; ALIAS\nwww.other.org.\t300\tIN\tA\t5.6.7.8\n"
        );
    }

    #[tokio::test]
    async fn all_zones_filtered_by_domain() {
        let (svc, provider) = service_with(two_zones());

        let out = svc
            .render_all_zones(&DomainFilter::new(["example.com"]), &RecordTypeFilter::default())
            .await
            .unwrap();
        assert_eq!(out, "example.com.\t300\tIN\tA\tlb.example.com.\t; ALIAS\n");
        assert!(
            !provider
                .calls()
                .iter()
                .any(|c| c.starts_with("list_resource_record_sets ZB"))
        );
    }

    #[tokio::test]
    async fn all_zones_abort_on_shapeless_record() {
        let (svc, _) = service_with(
            two_zones().with_zone("ZC", "broken.net.", vec![shapeless_record("x.broken.net.")]),
        );

        let err = svc
            .render_all_zones(&DomainFilter::default(), &RecordTypeFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownRecordType { .. }));
    }
}
