//! 测试辅助模块
//!
//! 提供内存中的 mock Provider 和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use zone_sync_provider::{
    AliasTarget, DnsProvider, HostedZone, Page, ProviderError, RecordSetCursor, ResourceRecord,
    ResourceRecordSet, Result,
};

use crate::services::ZoneService;

// ===== MockProvider =====

/// In-memory Route53 stand-in. Listings are served in pages of `page_size`.
pub struct MockProvider {
    zones: Vec<HostedZone>,
    records: HashMap<String, Vec<ResourceRecordSet>>,
    page_size: usize,
    /// 记录每次调用，便于断言调用顺序
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new(page_size: usize) -> Self {
        Self {
            zones: Vec::new(),
            records: HashMap::new(),
            page_size: page_size.max(1),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_zone(mut self, id: &str, name: &str, records: Vec<ResourceRecordSet>) -> Self {
        self.zones.push(HostedZone {
            id: id.to_string(),
            name: name.to_string(),
            record_count: Some(records.len() as u64),
            private_zone: false,
            comment: None,
        });
        self.records.insert(id.to_string(), records);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn zone_not_found(zone_id: &str) -> ProviderError {
        ProviderError::ZoneNotFound {
            provider: "mock".to_string(),
            zone_id: zone_id.to_string(),
            raw_message: Some("No hosted zone found with ID".to_string()),
        }
    }
}

#[async_trait]
impl DnsProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn get_hosted_zone(&self, zone_id: &str) -> Result<HostedZone> {
        self.record(format!("get_hosted_zone {zone_id}"));
        self.zones
            .iter()
            .find(|z| z.id == zone_id)
            .cloned()
            .ok_or_else(|| Self::zone_not_found(zone_id))
    }

    async fn list_hosted_zones(&self, marker: Option<&str>) -> Result<Page<HostedZone, String>> {
        self.record(format!("list_hosted_zones {marker:?}"));
        let start = marker.map_or(0, |m| {
            self.zones.iter().position(|z| z.id == m).unwrap_or(self.zones.len())
        });
        let end = (start + self.page_size).min(self.zones.len());
        Ok(Page {
            items: self.zones[start..end].to_vec(),
            next: self.zones.get(end).map(|z| z.id.clone()),
        })
    }

    async fn list_resource_record_sets(
        &self,
        zone_id: &str,
        start: Option<&RecordSetCursor>,
    ) -> Result<Page<ResourceRecordSet, RecordSetCursor>> {
        self.record(format!(
            "list_resource_record_sets {zone_id} {:?}",
            start.map(|c| c.name.as_str())
        ));
        let sets = self
            .records
            .get(zone_id)
            .ok_or_else(|| Self::zone_not_found(zone_id))?;
        let from = start.map_or(0, |c| {
            sets.iter()
                .position(|s| s.name == c.name && Some(&s.record_type) == c.record_type.as_ref())
                .unwrap_or(sets.len())
        });
        let end = (from + self.page_size).min(sets.len());
        Ok(Page {
            items: sets[from..end].to_vec(),
            next: sets.get(end).map(|s| RecordSetCursor {
                name: s.name.clone(),
                record_type: Some(s.record_type.clone()),
                identifier: None,
            }),
        })
    }
}

// ===== 工厂方法 =====

pub fn a_record(name: &str, ttl: u32, values: &[&str]) -> ResourceRecordSet {
    ResourceRecordSet {
        name: name.to_string(),
        record_type: "A".to_string(),
        ttl: Some(ttl),
        set_identifier: None,
        resource_records: values
            .iter()
            .map(|v| ResourceRecord {
                value: (*v).to_string(),
            })
            .collect(),
        alias_target: None,
    }
}

pub fn alias_record(name: &str, target: &str) -> ResourceRecordSet {
    ResourceRecordSet {
        name: name.to_string(),
        record_type: "A".to_string(),
        ttl: None,
        set_identifier: None,
        resource_records: Vec::new(),
        alias_target: Some(AliasTarget {
            hosted_zone_id: "Z35SXDOTRQ7X7K".to_string(),
            dns_name: target.to_string(),
            evaluate_target_health: false,
        }),
    }
}

pub fn shapeless_record(name: &str) -> ResourceRecordSet {
    ResourceRecordSet {
        name: name.to_string(),
        record_type: "A".to_string(),
        ttl: Some(300),
        set_identifier: None,
        resource_records: Vec::new(),
        alias_target: None,
    }
}

pub fn service_with(provider: MockProvider) -> (ZoneService, Arc<MockProvider>) {
    let provider = Arc::new(provider);
    (ZoneService::new(provider.clone()), provider)
}
