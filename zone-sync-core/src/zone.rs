//! Zone block parsing and comparison.
//!
//! Ordinary lines go through the `domain` zonefile scanner with the hosted
//! zone name as origin. Lines tagged `; ALIAS` are Route53 pseudo-records whose
//! data is a target name rather than address data. Each one is swapped for a
//! private-use placeholder record that keeps its owner, TTL and class, so
//! blank-owner lines after it still inherit its owner. Type and target are read
//! field by field and put back when the placeholder comes out of the scanner.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use domain::base::Record;
use domain::base::name::{FlattenInto, Name};
use domain::rdata::ZoneRecordData;
use domain::zonefile::inplace::{Entry, Zonefile};

use crate::error::{CoreError, CoreResult};
use crate::filter::RecordTypeFilter;
use crate::render::ALIAS_MARKER;

type FlatRecord = Record<Name<Bytes>, ZoneRecordData<Bytes, Name<Bytes>>>;

/// Private-use record type standing in for an alias line while scanning.
const ALIAS_PLACEHOLDER_TYPE: u16 = 65534;

/// Types whose data is domain names plus numbers. Their data is lower-cased.
const NAME_DATA_TYPES: &[&str] = &["CNAME", "DNAME", "MX", "NS", "PTR", "SOA", "SRV"];

/// One record of a parsed zone block.
///
/// `owner` is absolute and lower-cased so entries from different sources compare
/// equal. Name-valued `data` (CNAME, MX, NS and the like) is lower-cased too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneEntry {
    pub owner: String,
    pub ttl: u32,
    pub class: String,
    pub record_type: String,
    pub data: String,
    pub alias: bool,
}

impl fmt::Display for ZoneEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.owner, self.ttl, self.class, self.record_type, self.data
        )?;
        if self.alias {
            write!(f, "\t{ALIAS_MARKER}")?;
        }
        Ok(())
    }
}

/// A zone block parsed against its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedZone {
    pub origin: String,
    /// Records and alias entries in block order.
    pub entries: Vec<ZoneEntry>,
}

impl ParsedZone {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries whose type `filter` does not keep.
    pub fn retain_types(&mut self, filter: &RecordTypeFilter) {
        self.entries.retain(|e| filter.matches(&e.record_type));
    }
}

/// Parse a zone block. Relative names resolve against `origin`; owners are
/// not required to sit below it.
pub fn parse_zone(text: &str, origin: &str) -> CoreResult<ParsedZone> {
    let origin = absolute(origin);
    let origin_name = Name::<Bytes>::from_str(&origin).map_err(|e| CoreError::ZoneParse {
        detail: format!("invalid origin '{origin}': {e}"),
    })?;

    let mut records = String::with_capacity(text.len());
    let mut aliases = VecDeque::new();
    for line in text.split_inclusive('\n') {
        if is_alias_line(line) {
            let (placeholder, alias) = split_alias_line(line)?;
            records.push_str(&placeholder);
            aliases.push_back(alias);
        } else {
            records.push_str(line);
        }
    }
    if !records.is_empty() && !records.ends_with('\n') {
        records.push('\n');
    }

    let mut zonefile = Zonefile::new();
    zonefile.extend_from_slice(records.as_bytes());
    zonefile.set_origin(origin_name);

    let mut entries = Vec::new();
    for entry in zonefile {
        let entry = entry.map_err(|e| CoreError::ZoneParse {
            detail: e.to_string(),
        })?;
        match entry {
            Entry::Record(record) => {
                let record: FlatRecord = record.flatten_into();
                if record.rtype().to_int() != ALIAS_PLACEHOLDER_TYPE {
                    entries.push(scanned_entry(&record));
                    continue;
                }
                let alias = aliases.pop_front().ok_or_else(|| CoreError::ZoneParse {
                    detail: format!("TYPE{ALIAS_PLACEHOLDER_TYPE} is reserved for alias lines"),
                })?;
                entries.push(alias_entry(&record, &alias, &origin));
            }
            Entry::Include { path, .. } => {
                return Err(CoreError::ZoneParse {
                    detail: format!("$INCLUDE {path} is not allowed in a managed block"),
                });
            }
        }
    }

    log::debug!("Parsed {} entries for origin {origin}", entries.len());
    Ok(ParsedZone { origin, entries })
}

fn scanned_entry(record: &FlatRecord) -> ZoneEntry {
    let record_type = record.rtype().to_string();
    let mut data = record.data().to_string();
    if NAME_DATA_TYPES.contains(&record_type.as_str()) {
        data.make_ascii_lowercase();
    }

    ZoneEntry {
        owner: absolute(&record.owner().to_string()),
        ttl: record.ttl().as_secs(),
        class: record.class().to_string(),
        record_type,
        data,
        alias: false,
    }
}

fn alias_entry(placeholder: &FlatRecord, alias: &AliasLine, origin: &str) -> ZoneEntry {
    ZoneEntry {
        record_type: alias.record_type.to_ascii_uppercase(),
        data: qualify(&alias.target, origin),
        alias: true,
        ..scanned_entry(placeholder)
    }
}

/// The part of an alias line the scanner cannot read.
#[derive(Debug)]
struct AliasLine {
    record_type: String,
    target: String,
}

fn is_alias_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.starts_with(';') && trimmed.ends_with(ALIAS_MARKER)
}

/// `owner ttl class type target ; ALIAS` becomes `owner ttl class TYPE65534 \# 0`.
/// The owner may be left blank, as on any other line.
fn split_alias_line(line: &str) -> CoreResult<(String, AliasLine)> {
    let malformed = || CoreError::ZoneParse {
        detail: format!("malformed alias line: {}", line.trim()),
    };

    let body = line.trim_end().trim_end_matches(ALIAS_MARKER).trim_end();
    let fields: Vec<&str> = body.split_whitespace().collect();
    let expected = if body.starts_with(char::is_whitespace) { 4 } else { 5 };
    let [.., record_type, target] = fields.as_slice() else {
        return Err(malformed());
    };
    if fields.len() != expected {
        return Err(malformed());
    }

    let prefix = body
        .strip_suffix(target)
        .map(str::trim_end)
        .and_then(|rest| rest.strip_suffix(record_type))
        .ok_or_else(malformed)?;

    Ok((
        format!("{prefix} TYPE{ALIAS_PLACEHOLDER_TYPE} \\# 0\n"),
        AliasLine {
            record_type: (*record_type).to_string(),
            target: (*target).to_string(),
        },
    ))
}

/// Resolve `name` against `origin` the way the scanner does.
fn qualify(name: &str, origin: &str) -> String {
    if name == "@" {
        origin.to_string()
    } else if name.ends_with('.') {
        absolute(name)
    } else {
        absolute(&format!("{name}.{origin}"))
    }
}

/// Lower-case, single trailing dot.
fn absolute(name: &str) -> String {
    let trimmed = name.trim().trim_matches('.');
    if trimmed.is_empty() {
        ".".to_string()
    } else {
        format!("{}.", trimmed.to_lowercase())
    }
}

/// Entries present on only one side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneDiff {
    pub local_only: Vec<ZoneEntry>,
    pub remote_only: Vec<ZoneEntry>,
}

impl ZoneDiff {
    pub fn between(local: &ParsedZone, remote: &ParsedZone) -> Self {
        let local_set: BTreeSet<&ZoneEntry> = local.entries.iter().collect();
        let remote_set: BTreeSet<&ZoneEntry> = remote.entries.iter().collect();

        Self {
            local_only: local_set
                .difference(&remote_set)
                .map(|e| (*e).clone())
                .collect(),
            remote_only: remote_set
                .difference(&local_set)
                .map(|e| (*e).clone())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.local_only.is_empty() && self.remote_only.is_empty()
    }
}

impl fmt::Display for ZoneDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.local_only {
            writeln!(f, "- {entry}")?;
        }
        for entry in &self.remote_only {
            writeln!(f, "+ {entry}")?;
        }
        Ok(())
    }
}
