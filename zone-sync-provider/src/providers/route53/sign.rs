//! AWS Signature Version 4
//!
//! Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/reference_sigv-create-signed-request.html>

use std::fmt::Write;

use crate::providers::common::{hmac_sha256, sha256_hex};
use crate::types::Credentials;
use crate::utils::log_sanitizer::{mask_key, redact, truncate_for_log};

use super::{Route53Provider, SIGNING_REGION, SIGNING_SERVICE};

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Credential scope of one signature.
pub(crate) struct Scope<'a> {
    /// `YYYYMMDD`, the first eight characters of `x-amz-date`.
    pub date: &'a str,
    pub region: &'a str,
    pub service: &'a str,
}

impl Scope<'_> {
    fn to_scope_string(&self) -> String {
        format!(
            "{}/{}/{}/aws4_request",
            self.date, self.region, self.service
        )
    }
}

/// Percent-encode per RFC 3986, leaving only unreserved characters.
pub(crate) fn uri_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Encode and sort query parameters into the canonical query string.
///
/// The same string is used in the request URL so that signed and sent queries agree.
pub(crate) fn canonical_query(params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (uri_encode(k), uri_encode(v)))
        .collect();
    encoded.sort();
    encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the canonical request and the signed header list.
pub(crate) fn canonical_request(
    method: &str,
    uri: &str,
    query: &str,
    headers: &[(String, String)],
    payload: &str,
) -> (String, String) {
    let canonical_uri = if uri.is_empty() { "/" } else { uri };

    let mut sorted_headers: Vec<(String, &str)> = headers
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.trim()))
        .collect();
    sorted_headers.sort_by(|a, b| a.0.cmp(&b.0));

    let canonical_headers = sorted_headers
        .iter()
        .fold(String::new(), |mut acc, (k, v)| {
            let _ = writeln!(acc, "{k}:{v}");
            acc
        });

    let signed_headers = sorted_headers
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";");

    let hashed_payload = sha256_hex(payload.as_bytes());

    (
        format!(
            "{method}\n{canonical_uri}\n{query}\n{canonical_headers}\n{signed_headers}\n{hashed_payload}"
        ),
        signed_headers,
    )
}

/// Derive the per-day signing key.
pub(crate) fn signing_key(secret_access_key: &str, scope: &Scope<'_>) -> Vec<u8> {
    let k_date = hmac_sha256(
        format!("AWS4{secret_access_key}").as_bytes(),
        scope.date.as_bytes(),
    );
    let k_region = hmac_sha256(&k_date, scope.region.as_bytes());
    let k_service = hmac_sha256(&k_region, scope.service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

/// Produce the `Authorization` header value.
#[allow(clippy::too_many_arguments)]
pub(crate) fn authorization(
    credentials: &Credentials,
    scope: &Scope<'_>,
    amz_date: &str,
    method: &str,
    uri: &str,
    query: &str,
    headers: &[(String, String)],
    payload: &str,
) -> String {
    let (canonical, signed_headers) = canonical_request(method, uri, query, headers, payload);
    log::debug!(
        "CanonicalRequest:\n{}",
        truncate_for_log(&redact(&canonical, credentials.session_token.as_deref()))
    );

    let credential_scope = scope.to_scope_string();
    let string_to_sign = format!(
        "{ALGORITHM}\n{amz_date}\n{credential_scope}\n{}",
        sha256_hex(canonical.as_bytes())
    );
    log::debug!(
        "StringToSign ({}):\n{string_to_sign}",
        mask_key(&credentials.access_key_id)
    );

    let signature = hex::encode(hmac_sha256(
        &signing_key(&credentials.secret_access_key, scope),
        string_to_sign.as_bytes(),
    ));

    format!(
        "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={signed_headers}, Signature={signature}",
        credentials.access_key_id
    )
}

impl Route53Provider {
    /// Sign a Route53 request. `headers` must already contain `host` and `x-amz-date`.
    pub(crate) fn sign(
        &self,
        method: &str,
        uri: &str,
        query: &str,
        headers: &[(String, String)],
        payload: &str,
        amz_date: &str,
    ) -> String {
        let scope = Scope {
            date: amz_date.get(..8).unwrap_or(amz_date),
            region: SIGNING_REGION,
            service: SIGNING_SERVICE,
        };
        authorization(
            &self.credentials,
            &scope,
            amz_date,
            method,
            uri,
            query,
            headers,
            payload,
        )
    }
}
