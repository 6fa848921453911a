//! Extraction of the managed block from a local zone file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

pub const BEGIN_MARKER: &str = "; BEGIN ROUTE53 MANAGED BLOCK";
pub const END_MARKER: &str = "; END ROUTE53 MANAGED BLOCK";

/// Return the lines strictly between the BEGIN and END markers, terminators included.
///
/// Without a BEGIN marker the block is empty. Without an END marker the block
/// runs to the end of the text.
pub fn extract_managed_block(text: &str) -> String {
    let mut block = String::new();
    let mut inside = false;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();
        if inside {
            if trimmed == END_MARKER {
                break;
            }
            block.push_str(line);
        } else if trimmed == BEGIN_MARKER {
            inside = true;
        }
    }

    block
}

/// Read `path` and extract its managed block.
pub fn read_managed_block(path: &Path) -> CoreResult<String> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            CoreError::ZoneFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let block = extract_managed_block(&text);
    log::debug!(
        "Managed block of {}: {} lines",
        path.display(),
        block.lines().count()
    );
    Ok(block)
}
