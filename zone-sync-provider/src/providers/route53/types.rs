//! Route53 XML response types
//!
//! Only the elements this crate reads are modeled; unknown elements
//! (`DelegationSet`, `Weight`, `GeoLocation`, ...) are skipped by the decoder.

use serde::Deserialize;

use crate::types::{AliasTarget, HostedZone, ResourceRecord, ResourceRecordSet};

use super::bare_zone_id;

// ============ Hosted zones ============

/// Response payload for `GetHostedZone`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetHostedZoneResponse {
    pub hosted_zone: XmlHostedZone,
}

/// Response payload for `ListHostedZones`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHostedZonesResponse {
    #[serde(default)]
    pub hosted_zones: HostedZoneList,
    pub is_truncated: bool,
    pub next_marker: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HostedZoneList {
    #[serde(rename = "HostedZone", default)]
    pub items: Vec<XmlHostedZone>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlHostedZone {
    pub id: String,
    pub name: String,
    pub config: Option<XmlHostedZoneConfig>,
    pub resource_record_set_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlHostedZoneConfig {
    pub comment: Option<String>,
    pub private_zone: Option<bool>,
}

impl From<XmlHostedZone> for HostedZone {
    fn from(zone: XmlHostedZone) -> Self {
        let (comment, private_zone) = zone
            .config
            .map(|c| (c.comment.filter(|s| !s.is_empty()), c.private_zone))
            .unwrap_or_default();

        Self {
            id: bare_zone_id(&zone.id).to_string(),
            name: zone.name,
            record_count: zone.resource_record_set_count,
            private_zone: private_zone.unwrap_or(false),
            comment,
        }
    }
}

// ============ Record sets ============

/// Response payload for `ListResourceRecordSets`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResourceRecordSetsResponse {
    #[serde(default)]
    pub resource_record_sets: RecordSetList,
    pub is_truncated: bool,
    pub next_record_name: Option<String>,
    pub next_record_type: Option<String>,
    pub next_record_identifier: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordSetList {
    #[serde(rename = "ResourceRecordSet", default)]
    pub items: Vec<XmlResourceRecordSet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlResourceRecordSet {
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "TTL")]
    pub ttl: Option<u32>,
    pub set_identifier: Option<String>,
    #[serde(default)]
    pub resource_records: ResourceRecordList,
    pub alias_target: Option<XmlAliasTarget>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceRecordList {
    #[serde(rename = "ResourceRecord", default)]
    pub items: Vec<XmlResourceRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlResourceRecord {
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlAliasTarget {
    pub hosted_zone_id: String,
    #[serde(rename = "DNSName")]
    pub dns_name: String,
    #[serde(default)]
    pub evaluate_target_health: bool,
}

impl From<XmlResourceRecordSet> for ResourceRecordSet {
    fn from(set: XmlResourceRecordSet) -> Self {
        Self {
            name: set.name,
            record_type: set.record_type,
            ttl: set.ttl,
            set_identifier: set.set_identifier,
            resource_records: set
                .resource_records
                .items
                .into_iter()
                .map(|r| ResourceRecord { value: r.value })
                .collect(),
            alias_target: set.alias_target.map(|a| AliasTarget {
                hosted_zone_id: a.hosted_zone_id,
                dns_name: a.dns_name,
                evaluate_target_health: a.evaluate_target_health,
            }),
        }
    }
}

// ============ Errors ============

/// Error payload returned by the Route53 API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    pub code: Option<String>,
    pub message: Option<String>,
}
