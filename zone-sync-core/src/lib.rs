//! zone-sync Core Library
//!
//! Everything between the Route53 client and the command line:
//! - settings from `zone.json` / `zone.ini`
//! - managed block extraction from the local zone file
//! - rendering of record sets as zone file lines
//! - zone queries (one hosted zone, or all of them filtered by domain)
//! - zone block parsing and comparison

pub mod config;
pub mod error;
pub mod filter;
pub mod managed_block;
pub mod render;
pub mod services;
pub mod zone;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::Settings;
pub use error::{CoreError, CoreResult};
pub use filter::{DomainFilter, RecordTypeFilter};
pub use managed_block::{extract_managed_block, read_managed_block};
pub use render::render_record_sets;
pub use services::ZoneService;
pub use zone::{ParsedZone, ZoneDiff, ZoneEntry, parse_zone};
