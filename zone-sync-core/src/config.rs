//! Settings loading from `zone.json` or `zone.ini`.

use std::fs;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};
use serde::{Deserialize, Deserializer};
use zone_sync_provider::{CredentialSource, Credentials};

use crate::error::{CoreError, CoreResult};
use crate::filter::RecordTypeFilter;

pub const JSON_CONFIG_FILE: &str = "zone.json";
pub const INI_CONFIG_FILE: &str = "zone.ini";
pub const ZONE_FILE_NAME: &str = "zone.txt";
const DEFAULT_ZONE_DIR: &str = "./";

/// Operational settings, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub aws_access_key_id: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub aws_secret_access_key: Option<String>,
    /// Directory holding `zone.txt`
    #[serde(default, deserialize_with = "non_empty_string")]
    pub zone_file_path: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub hosted_zone_id: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub filter_record_types: Vec<String>,
}

impl Settings {
    /// Load settings from `dir`. `zone.json` wins over `zone.ini`; the two are never merged.
    pub fn load(dir: &Path) -> CoreResult<Self> {
        let json_path = dir.join(JSON_CONFIG_FILE);
        if json_path.is_file() {
            log::debug!("Loading settings from {}", json_path.display());
            return Self::from_json(&read_config(&json_path)?, &json_path);
        }

        let ini_path = dir.join(INI_CONFIG_FILE);
        if ini_path.is_file() {
            log::debug!("Loading settings from {}", ini_path.display());
            return Self::from_ini(&read_config(&ini_path)?, &ini_path);
        }

        Err(CoreError::ConfigurationMissing {
            dir: dir.to_path_buf(),
        })
    }

    /// Parse `zone.json` content. `path` is only used in error messages.
    pub fn from_json(text: &str, path: &Path) -> CoreResult<Self> {
        serde_json::from_str(text).map_err(|e| CoreError::ConfigurationInvalid {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    /// Parse `zone.ini` content.
    ///
    /// Keys are looked up in the general section first, then in every named
    /// section in file order; the first occurrence wins. Key names are
    /// case-insensitive and `filter_record_types` is comma-separated.
    pub fn from_ini(text: &str, path: &Path) -> CoreResult<Self> {
        let option = ParseOption {
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(text, option).map_err(|e| {
            CoreError::ConfigurationInvalid {
                path: path.to_path_buf(),
                detail: e.to_string(),
            }
        })?;

        let lookup = |key: &str| ini_value(&ini, key);

        Ok(Self {
            aws_access_key_id: lookup("aws_access_key_id"),
            aws_secret_access_key: lookup("aws_secret_access_key"),
            zone_file_path: lookup("zone_file_path"),
            hosted_zone_id: lookup("hosted_zone_id"),
            filter_record_types: lookup("filter_record_types")
                .map(|list| split_list(&list))
                .unwrap_or_default(),
        })
    }

    /// Explicit credentials, only when both the key id and the secret are set.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.aws_access_key_id, &self.aws_secret_access_key) {
            (Some(id), Some(secret)) => Some(Credentials::new(id, secret)),
            _ => None,
        }
    }

    pub fn credential_source(&self) -> CredentialSource {
        self.credentials()
            .map_or(CredentialSource::DefaultChain, CredentialSource::Explicit)
    }

    /// Path of the local zone file: `zone_file_path` (or `./`) joined with `zone.txt`.
    pub fn zone_file(&self) -> PathBuf {
        Path::new(self.zone_file_path.as_deref().unwrap_or(DEFAULT_ZONE_DIR)).join(ZONE_FILE_NAME)
    }

    pub fn record_type_filter(&self) -> RecordTypeFilter {
        RecordTypeFilter::new(&self.filter_record_types)
    }
}

fn read_config(path: &Path) -> CoreResult<String> {
    fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ini_value(ini: &Ini, key: &str) -> Option<String> {
    let general = ini.section(None::<String>).into_iter();
    let named = ini
        .iter()
        .filter(|(name, _)| name.is_some())
        .map(|(_, props)| props);

    general
        .chain(named)
        .find_map(|props| {
            props
                .iter()
                .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
                .map(|(_, v)| v.trim().to_string())
        })
        .filter(|v| !v.is_empty())
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .into_iter()
        .filter(|t| !t.trim().is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const JSON: &str = r#"{
        "aws_access_key_id": "AKIDJSON",
        "aws_secret_access_key": "json-secret",
        "zone_file_path": "/srv/dns/",
        "hosted_zone_id": "Z123",
        "filter_record_types": ["A", "TXT"],
        "comment": "ignored"
    }"#;

    const INI: &str = "\
[route53]
aws_access_key_id = AKIDJSON
aws_secret_access_key = json-secret

[zone]
zone_file_path = /srv/dns/
hosted_zone_id = Z123
filter_record_types = A, TXT
";

    #[test]
    fn json_wins_when_both_exist() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(JSON_CONFIG_FILE), r#"{"hosted_zone_id": "ZJSON"}"#).unwrap();
        fs::write(dir.path().join(INI_CONFIG_FILE), "hosted_zone_id = ZINI\n").unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.hosted_zone_id.as_deref(), Some("ZJSON"));
    }

    #[test]
    fn falls_back_to_ini() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(INI_CONFIG_FILE), INI).unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.hosted_zone_id.as_deref(), Some("Z123"));
    }

    #[test]
    fn missing_configuration_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = Settings::load(dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::ConfigurationMissing { .. }));
    }

    #[test]
    fn json_and_ini_produce_identical_settings() {
        let path = Path::new("zone");
        let from_json = Settings::from_json(JSON, path).unwrap();
        let from_ini = Settings::from_ini(INI, path).unwrap();
        assert_eq!(from_json, from_ini);
        assert_eq!(from_json.filter_record_types, vec!["A", "TXT"]);
    }

    #[test]
    fn malformed_json_is_invalid() {
        let err = Settings::from_json("{ not json", Path::new("zone.json")).unwrap_err();
        assert!(matches!(err, CoreError::ConfigurationInvalid { .. }));
    }

    #[test]
    fn empty_and_null_values_are_absent() {
        let settings = Settings::from_json(
            r#"{"aws_access_key_id": "", "aws_secret_access_key": null, "filter_record_types": null}"#,
            Path::new("zone.json"),
        )
        .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn ini_general_section_wins_and_keys_ignore_case() {
        let settings = Settings::from_ini(
            "HOSTED_ZONE_ID = ZGENERAL\n[a]\nhosted_zone_id = ZA\n[b]\nzone_file_path = first\n[c]\nzone_file_path = second\n",
            Path::new("zone.ini"),
        )
        .unwrap();
        assert_eq!(settings.hosted_zone_id.as_deref(), Some("ZGENERAL"));
        assert_eq!(settings.zone_file_path.as_deref(), Some("first"));
    }

    #[test]
    fn credentials_need_both_halves() {
        let mut settings = Settings {
            aws_access_key_id: Some("AKID".to_string()),
            ..Settings::default()
        };
        assert!(settings.credentials().is_none());
        assert!(matches!(
            settings.credential_source(),
            CredentialSource::DefaultChain
        ));

        settings.aws_secret_access_key = Some("secret".to_string());
        let creds = settings.credentials().unwrap();
        assert_eq!(creds.access_key_id, "AKID");
        assert!(matches!(
            settings.credential_source(),
            CredentialSource::Explicit(_)
        ));
    }

    #[test]
    fn zone_file_path_joins_with_separator() {
        let mut settings = Settings::default();
        assert_eq!(settings.zone_file(), Path::new("./zone.txt"));

        settings.zone_file_path = Some("/srv/dns".to_string());
        assert_eq!(settings.zone_file(), Path::new("/srv/dns/zone.txt"));

        settings.zone_file_path = Some("/srv/dns/".to_string());
        assert_eq!(settings.zone_file(), Path::new("/srv/dns/zone.txt"));
    }

    #[test]
    fn record_type_filter_from_settings() {
        let settings = Settings::from_json(JSON, Path::new("zone.json")).unwrap();
        let filter = settings.record_type_filter();
        assert!(filter.matches("a"));
        assert!(!filter.matches("MX"));
    }
}
