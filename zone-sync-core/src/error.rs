//! Unified error type definition

use std::path::PathBuf;

use thiserror::Error;

// Re-export library error type
pub use zone_sync_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Neither `zone.json` nor `zone.ini` exists in the configuration directory
    #[error("no zone.json or zone.ini found in {}", dir.display())]
    ConfigurationMissing { dir: PathBuf },

    /// Configuration file exists but cannot be parsed
    #[error("invalid configuration {}: {detail}", path.display())]
    ConfigurationInvalid { path: PathBuf, detail: String },

    /// Local zone file missing
    #[error("zone file not found: {}", path.display())]
    ZoneFileNotFound { path: PathBuf },

    /// Other I/O failure while reading a local file
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Hosted zone id does not resolve
    #[error("requested zone doesn't exist: {zone_id}")]
    ZoneNotFound { zone_id: String },

    /// Record set with neither values nor an alias target
    #[error("Unknown record type: {record}")]
    UnknownRecordType { record: String },

    /// Zone block could not be parsed
    #[error("zone parse error: {detail}")]
    ZoneParse { detail: String },

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigurationMissing { .. }
            | Self::ConfigurationInvalid { .. }
            | Self::ZoneFileNotFound { .. }
            | Self::ZoneNotFound { .. } => true,
            Self::Provider(e) => e.is_expected(),
            Self::Io { .. } | Self::UnknownRecordType { .. } | Self::ZoneParse { .. } => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
