use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{HostedZone, Page, RecordSetCursor, ResourceRecordSet};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码，如 `NoSuchHostedZone`
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 托管区域 ID（用于 `ZoneNotFound`）
    pub zone_id: Option<String>,
    /// 请求参数名（用于 `InvalidParameter`）
    pub param: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone_id: &str) -> Self {
        Self {
            zone_id: Some(zone_id.to_string()),
            param: None,
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Read-only DNS hosting provider.
///
/// Each listing method returns a single page; use
/// [`hosted_zones`](crate::hosted_zones) and
/// [`resource_record_sets`](crate::resource_record_sets) to drain them lazily.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Fetch zone metadata. Fails with [`ProviderError::ZoneNotFound`] for an unknown id.
    async fn get_hosted_zone(&self, zone_id: &str) -> Result<HostedZone>;

    /// List one page of hosted zones, starting at `marker` (`None` for the first page).
    async fn list_hosted_zones(&self, marker: Option<&str>) -> Result<Page<HostedZone, String>>;

    /// List one page of record sets of a zone, starting at `start` (`None` for the first page).
    async fn list_resource_record_sets(
        &self,
        zone_id: &str,
        start: Option<&RecordSetCursor>,
    ) -> Result<Page<ResourceRecordSet, RecordSetCursor>>;
}
