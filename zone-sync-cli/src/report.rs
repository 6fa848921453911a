//! Stdout formatting. Only zone text goes to stdout; logs go to stderr.

use std::io::{self, Write};

use zone_sync_core::{CoreError, ZoneDiff};

const SEPARATOR_UNIT: &str = "- ";
const SEPARATOR_REPEAT: usize = 20;

pub const ZONE_NOT_FOUND_MESSAGE: &str = "requested zone doesn't exist";

/// A zone block followed by one blank line.
pub fn write_block(out: &mut impl Write, block: &str) -> io::Result<()> {
    writeln!(out, "{block}")
}

pub fn write_separator(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", SEPARATOR_UNIT.repeat(SEPARATOR_REPEAT))
}

pub fn write_diff(out: &mut impl Write, diff: &ZoneDiff) -> io::Result<()> {
    write!(out, "{diff}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Where a failed run reports, and what it prints. Every failure exits with 1.
///
/// A missing hosted zone is reported on stdout with a fixed message; anything
/// else goes to stderr with its cause chain.
pub fn failure_output(err: &anyhow::Error) -> (Stream, String) {
    match err.downcast_ref::<CoreError>() {
        Some(CoreError::ZoneNotFound { .. }) => {
            (Stream::Stdout, ZONE_NOT_FOUND_MESSAGE.to_string())
        }
        _ => (Stream::Stderr, format!("zone-sync: {err:#}")),
    }
}
