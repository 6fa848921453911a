//! Route53 错误映射
//!
//! 参考: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
//!
//! - **认证错误**：InvalidClientTokenId, SignatureDoesNotMatch, ExpiredToken,
//!   IncompleteSignature, MissingAuthenticationToken, UnrecognizedClientException
//! - **权限拒绝**：AccessDenied, AccessDeniedException
//! - **托管区域不存在**：NoSuchHostedZone
//! - **频率限制**：Throttling, ThrottlingException, PriorRequestNotComplete
//! - **参数错误**：InvalidInput, InvalidPaginationToken, InvalidParameterValue
//!
//! 写操作相关错误码（InvalidChangeBatch 等）不会出现在只读调用中，fallback 到 Unknown。

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Provider;

impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        "route53"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 认证错误 ============
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "ExpiredToken"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "UnrecognizedClientException",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 权限拒绝 ============
            Some("AccessDenied" | "AccessDeniedException") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 托管区域不存在 ============
            Some("NoSuchHostedZone") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone_id: context.zone_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 频率限制 ============
            Some("Throttling" | "ThrottlingException" | "PriorRequestNotComplete") => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ 参数错误 ============
            Some("InvalidInput" | "InvalidPaginationToken" | "InvalidParameterValue") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: context
                        .param
                        .or(context.zone_id.map(|_| "HostedZoneId".to_string()))
                        .unwrap_or_default(),
                    detail: raw.message,
                }
            }

            _ => self.unknown_error(raw),
        }
    }
}
