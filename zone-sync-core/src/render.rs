//! Rendering of Route53 record sets as zone file lines.

use std::fmt::Write;

use zone_sync_provider::ResourceRecordSet;

use crate::error::{CoreError, CoreResult};
use crate::filter::RecordTypeFilter;

/// TTL written for alias record sets, which carry none of their own.
pub const ALIAS_TTL: u32 = 300;
/// Trailing comment that tags an alias line.
pub const ALIAS_MARKER: &str = "; ALIAS";

/// Render record sets in input order, one tab-separated line per value.
///
/// Record sets whose type the filter rejects are skipped. A record set with
/// neither values nor an alias target fails the whole render.
pub fn render_record_sets<'a, I>(sets: I, filter: &RecordTypeFilter) -> CoreResult<String>
where
    I: IntoIterator<Item = &'a ResourceRecordSet>,
{
    let mut out = String::new();
    for set in sets {
        if !filter.matches(&set.record_type) {
            log::trace!("Skipping {} {} (filtered)", set.name, set.record_type);
            continue;
        }
        render_record_set(set, &mut out)?;
    }
    Ok(out)
}

fn render_record_set(set: &ResourceRecordSet, out: &mut String) -> CoreResult<()> {
    if !set.resource_records.is_empty() {
        // 无 TTL 的值记录按别名记录的 300 处理
        let ttl = set.ttl.unwrap_or(ALIAS_TTL);
        for record in &set.resource_records {
            let _ = writeln!(
                out,
                "{}\t{ttl}\tIN\t{}\t{}",
                set.name, set.record_type, record.value
            );
        }
        Ok(())
    } else if let Some(alias) = &set.alias_target {
        let _ = writeln!(
            out,
            "{}\t{ALIAS_TTL}\tIN\t{}\t{}\t{ALIAS_MARKER}",
            set.name, set.record_type, alias.dns_name
        );
        Ok(())
    } else {
        Err(CoreError::UnknownRecordType {
            record: format!("{set:?}"),
        })
    }
}
