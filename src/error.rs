//! 行情代理错误类型
//!
//! 每个变体对应一个 HTTP 状态码，由 `ResponseError` 统一转换为 JSON 响应

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorBody;

pub const SYMBOL_REQUIRED: &str = "Stock symbol is required";
pub const UPSTREAM_FAILURE: &str = "Failed to fetch stock data. Please try again later.";
pub const RATE_LIMIT_REACHED: &str =
    "Daily API call limit reached (25 requests per day). Please try again tomorrow or use a different API key.";

#[derive(Debug, Error)]
pub enum QuoteError {
    /// 缺少股票代码
    #[error("{}", SYMBOL_REQUIRED)]
    InvalidRequest,

    /// 上游每日调用额度已用尽
    #[error("{}", RATE_LIMIT_REACHED)]
    RateLimited,

    /// 上游没有该代码的数据
    #[error("No data found for symbol \"{0}\". Please check if the symbol is correct.")]
    NotFound(String),

    /// 网络错误、非 2xx 状态或无法解析的报文；原因只写日志
    #[error("{}", UPSTREAM_FAILURE)]
    UpstreamUnavailable(#[source] anyhow::Error),
}

impl QuoteError {
    pub fn upstream<E: Into<anyhow::Error>>(err: E) -> Self {
        QuoteError::UpstreamUnavailable(err.into())
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            QuoteError::RateLimited => ErrorBody::rate_limited(self.to_string()),
            _ => ErrorBody::new(self.to_string()),
        }
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        QuoteError::upstream(err)
    }
}

impl ResponseError for QuoteError {
    fn status_code(&self) -> StatusCode {
        match self {
            QuoteError::InvalidRequest => StatusCode::BAD_REQUEST,
            QuoteError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            QuoteError::NotFound(_) => StatusCode::NOT_FOUND,
            QuoteError::UpstreamUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}
