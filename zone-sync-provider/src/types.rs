use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// One page of a provider listing.
///
/// `next` carries the cursor for the following page and is `None` once the
/// listing is exhausted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T, C> {
    /// Items on this page, in provider order.
    pub items: Vec<T>,
    /// Cursor for the next page.
    pub next: Option<C>,
}

impl<T, C> Page<T, C> {
    /// A page with no continuation.
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }
}

/// Continuation cursor for `ListResourceRecordSets`.
///
/// Route53 resumes a record set listing at a (name, type, set identifier)
/// triple rather than an opaque token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetCursor {
    /// `NextRecordName` from the previous page.
    pub name: String,
    /// `NextRecordType` from the previous page.
    pub record_type: Option<String>,
    /// `NextRecordIdentifier` from the previous page (weighted/latency sets only).
    pub identifier: Option<String>,
}

// ============ Hosted zones ============

/// A hosted zone visible to the configured credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Bare zone id (`Z123...`), without the `/hostedzone/` prefix.
    pub id: String,
    /// Fully-qualified zone name with trailing dot.
    pub name: String,
    /// Number of record sets in the zone, when reported.
    pub record_count: Option<u64>,
    /// Whether this is a private (VPC) zone.
    pub private_zone: bool,
    /// Free-form comment attached to the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

// ============ Record sets ============

/// A single literal value of a record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Record value in zone-file presentation format.
    pub value: String,
}

/// Target of an alias record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasTarget {
    /// Hosted zone of the alias target.
    pub hosted_zone_id: String,
    /// DNS name the alias points at.
    pub dns_name: String,
    /// Whether Route53 evaluates the target's health.
    pub evaluate_target_health: bool,
}

/// One resource record set as stored by Route53.
///
/// Exactly one of `resource_records` (non-empty) and `alias_target` is
/// expected to be present; consumers treat anything else as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecordSet {
    /// Fully-qualified owner name with trailing dot.
    pub name: String,
    /// Record type (`A`, `AAAA`, `CNAME`, `TXT`, ...).
    pub record_type: String,
    /// TTL in seconds. Absent on alias record sets.
    pub ttl: Option<u32>,
    /// Set identifier for weighted, latency, failover and geolocation sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,
    /// Literal values.
    pub resource_records: Vec<ResourceRecord>,
    /// Alias target, for alias record sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<AliasTarget>,
}

// ============ Credentials ============

/// AWS access key credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Access key id (`AKIA...` / `ASIA...`).
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Session token for temporary credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl Credentials {
    /// Long-term credentials without a session token.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Attach a session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

// The secret never reaches logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Where a provider should take its credentials from.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Use exactly these credentials.
    Explicit(Credentials),
    /// Resolve through environment variables, then the shared credentials file.
    DefaultChain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_hides_secret() {
        let creds = Credentials::new("AKIDEXAMPLE", "super-secret").with_session_token("tok");
        let printed = format!("{creds:?}");
        assert!(printed.contains("AKIDEXAMPLE"));
        assert!(!printed.contains("super-secret"));
        assert!(!printed.contains("tok\""));
    }

    #[test]
    fn last_page_has_no_cursor() {
        let page: Page<u8, String> = Page::last(vec![1, 2]);
        assert_eq!(page.items, vec![1, 2]);
        assert!(page.next.is_none());
    }
}
