//! 通用 API 响应模型
//!
//! 错误统一返回 `{ "error": ..., "isRateLimit": true }` 格式

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 错误响应结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// 面向用户的错误信息
    pub error: String,
    /// 是否为上游限流（仅在为 true 时输出）
    #[serde(
        rename = "isRateLimit",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_rate_limit: bool,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            is_rate_limit: false,
        }
    }

    pub fn rate_limited(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            is_rate_limit: true,
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// 响应时间戳（RFC 3339 格式）
    pub timestamp: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
