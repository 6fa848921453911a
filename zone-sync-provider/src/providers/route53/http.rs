//! Route53 HTTP 请求方法

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::sign::canonical_query;
use super::types::ErrorResponse;
use super::{ROUTE53_HOST, Route53Provider};

impl Route53Provider {
    /// 统一处理 Route53 响应错误
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        if let Ok(error) = quick_xml::de::from_str::<ErrorResponse>(response_text) {
            return Err(self.map_error(
                RawApiError::with_code(
                    error.error.code.unwrap_or_default(),
                    error.error.message.unwrap_or_default(),
                ),
                ctx,
            ));
        }

        // 无法解析的错误体，按 HTTP 状态码回退
        match status {
            401 | 403 => Err(ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(format!("HTTP {status}")),
            }),
            404 if ctx.zone_id.is_some() => Err(ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone_id: ctx.zone_id.unwrap_or_default(),
                raw_message: None,
            }),
            _ => Err(self.unknown_error(RawApiError::new(format!(
                "HTTP {status}: {}",
                truncate_for_log(response_text)
            )))),
        }
    }

    /// Signed `GET` against the Route53 API, decoding the XML body into `T`.
    ///
    /// `path` must already be percent-encoded.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        ctx: ErrorContext,
    ) -> Result<T> {
        let amz_date = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let query = canonical_query(params);

        let mut headers = vec![
            ("host".to_string(), ROUTE53_HOST.to_string()),
            ("x-amz-date".to_string(), amz_date.clone()),
        ];
        if let Some(token) = &self.credentials.session_token {
            headers.push(("x-amz-security-token".to_string(), token.clone()));
        }

        let authorization = self.sign("GET", path, &query, &headers, "", &amz_date);

        let url = if query.is_empty() {
            format!("https://{ROUTE53_HOST}{path}")
        } else {
            format!("https://{ROUTE53_HOST}{path}?{query}")
        };

        let request = headers
            .iter()
            .fold(self.client.get(&url), |req, (name, value)| {
                req.header(name.as_str(), value.as_str())
            })
            .header("Authorization", authorization);

        let (status, response_text) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "GET",
            &url,
            self.max_retries,
        )
        .await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_xml(&response_text, self.provider_name())
    }
}
