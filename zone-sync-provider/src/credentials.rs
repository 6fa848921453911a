//! Credential resolution.
//!
//! Explicit credentials are used as given. The default chain mirrors the AWS
//! SDKs' first two steps: environment variables, then the shared credentials
//! file.

use std::path::{Path, PathBuf};

use ini::Ini;

use crate::error::{ProviderError, Result};
use crate::types::{CredentialSource, Credentials};

const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
const ENV_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
const ENV_PROFILE: &str = "AWS_PROFILE";
const ENV_SHARED_CREDENTIALS_FILE: &str = "AWS_SHARED_CREDENTIALS_FILE";
const DEFAULT_PROFILE: &str = "default";

/// Resolve a [`CredentialSource`] into concrete credentials.
pub fn resolve_credentials(source: CredentialSource) -> Result<Credentials> {
    match source {
        CredentialSource::Explicit(credentials) => Ok(credentials),
        CredentialSource::DefaultChain => default_chain(|key| std::env::var(key).ok()),
    }
}

/// Walk the default chain using `env` to look up environment variables.
pub(crate) fn default_chain(env: impl Fn(&str) -> Option<String>) -> Result<Credentials> {
    if let Some(credentials) = from_env(&env) {
        log::debug!("[route53] Using credentials from environment");
        return Ok(credentials);
    }

    let profile = non_empty(env(ENV_PROFILE)).unwrap_or_else(|| DEFAULT_PROFILE.to_string());
    let path = non_empty(env(ENV_SHARED_CREDENTIALS_FILE))
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".aws").join("credentials")));

    if let Some(path) = path.filter(|p| p.exists()) {
        if let Some(credentials) = from_profile_file(&path, &profile)? {
            log::debug!(
                "[route53] Using profile '{profile}' from {}",
                path.display()
            );
            return Ok(credentials);
        }
        log::debug!("[route53] Profile '{profile}' not found in {}", path.display());
    }

    Err(ProviderError::InvalidCredentials {
        provider: "route53".to_string(),
        raw_message: Some(format!(
            "no credentials in config, {ENV_ACCESS_KEY_ID}/{ENV_SECRET_ACCESS_KEY} or shared credentials profile '{profile}'"
        )),
    })
}

fn from_env(env: &impl Fn(&str) -> Option<String>) -> Option<Credentials> {
    let access_key_id = non_empty(env(ENV_ACCESS_KEY_ID))?;
    let secret_access_key = non_empty(env(ENV_SECRET_ACCESS_KEY))?;
    let mut credentials = Credentials::new(access_key_id, secret_access_key);
    if let Some(token) = non_empty(env(ENV_SESSION_TOKEN)) {
        credentials = credentials.with_session_token(token);
    }
    Some(credentials)
}

/// Read one profile from an AWS shared credentials file.
///
/// Returns `Ok(None)` when the profile is missing or incomplete.
pub(crate) fn from_profile_file(path: &Path, profile: &str) -> Result<Option<Credentials>> {
    let ini = Ini::load_from_file(path).map_err(|e| ProviderError::InvalidCredentials {
        provider: "route53".to_string(),
        raw_message: Some(format!("cannot read {}: {e}", path.display())),
    })?;

    let Some(section) = ini.section(Some(profile)) else {
        return Ok(None);
    };

    let value = |key: &str| non_empty(section.get(key).map(str::to_string));
    let (Some(access_key_id), Some(secret_access_key)) =
        (value("aws_access_key_id"), value("aws_secret_access_key"))
    else {
        return Ok(None);
    };

    let mut credentials = Credentials::new(access_key_id, secret_access_key);
    if let Some(token) = value("aws_session_token") {
        credentials = credentials.with_session_token(token);
    }
    Ok(Some(credentials))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
