//! Allow-list filters for record types and zone names.

use std::collections::HashSet;

use zone_sync_provider::normalize_domain_name;

/// Record types to keep when rendering. Case-insensitive; empty keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTypeFilter {
    types: HashSet<String>,
}

impl RecordTypeFilter {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            types: types
                .into_iter()
                .map(|t| t.as_ref().trim().to_ascii_uppercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn matches(&self, record_type: &str) -> bool {
        self.types.is_empty() || self.types.contains(&record_type.to_ascii_uppercase())
    }
}

/// Zone names to keep in all-zones mode.
///
/// Names are compared lower-cased with the trailing dot stripped, so
/// `example.com` matches `EXAMPLE.COM.`. Empty keeps every zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainFilter {
    names: HashSet<String>,
}

impl DomainFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| normalize_domain_name(n.as_ref().trim()))
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn matches(&self, zone_name: &str) -> bool {
        self.names.is_empty() || self.names.contains(&normalize_domain_name(zone_name))
    }
}
