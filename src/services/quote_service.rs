//! 行情代理服务
//!
//! 对接 Alpha Vantage GLOBAL_QUOTE 接口: {base_url}/query?function=GLOBAL_QUOTE
//!
//! 上游的限流和无数据都以 HTTP 200 返回，需要按报文内容区分：
//! 1. `Note` / `Information` 字段包含 "API rate limit" -> 限流
//! 2. `Global Quote` 缺失或为空对象 -> 代码无效
//! 3. 其余情况原样透传
//!
//! 限流检查必须先于数据检查，上游可能同时返回空数据和限流提示。

use std::time::Duration;

use anyhow::anyhow;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::QuoteError;

const GLOBAL_QUOTE_FUNCTION: &str = "GLOBAL_QUOTE";
const GLOBAL_QUOTE_KEY: &str = "Global Quote";
const RATE_LIMIT_PHRASE: &str = "api rate limit";
/// 上游用于限流提示的字段
const NOTICE_FIELDS: [&str; 2] = ["Note", "Information"];

/// 行情代理服务
///
/// 无状态，内部的 `Client` 在各 worker 间共享连接池
pub struct QuoteService {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl QuoteService {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        let endpoint = Url::parse(&format!("{}/query", config.base_url.trim_end_matches('/')))?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    /// 获取单只股票行情，成功时返回上游原始报文
    pub async fn get_global_quote(&self, symbol: &str) -> Result<Value, QuoteError> {
        log::debug!("请求上游行情: symbol={}", symbol);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("function", GLOBAL_QUOTE_FUNCTION),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::upstream(anyhow!("上游返回状态码 {}", status)));
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body).map_err(|e| {
            let snippet: String = body.chars().take(200).collect();
            QuoteError::upstream(anyhow!("解析上游报文失败: {} | body: {}", e, snippet))
        })?;

        classify_payload(symbol, payload)
    }
}

/// 按优先级判定上游报文
pub fn classify_payload(symbol: &str, payload: Value) -> Result<Value, QuoteError> {
    if is_rate_limit_notice(&payload) {
        log::warn!("上游限流: symbol={}", symbol);
        return Err(QuoteError::RateLimited);
    }

    let has_quote = payload
        .get(GLOBAL_QUOTE_KEY)
        .and_then(Value::as_object)
        .is_some_and(|quote| !quote.is_empty());

    if !has_quote {
        log::warn!("上游无数据: symbol={}", symbol);
        return Err(QuoteError::NotFound(symbol.to_string()));
    }

    Ok(payload)
}

fn is_rate_limit_notice(payload: &Value) -> bool {
    NOTICE_FIELDS.iter().any(|field| {
        payload
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|text| text.to_lowercase().contains(RATE_LIMIT_PHRASE))
    })
}
