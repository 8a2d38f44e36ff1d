//! 行情数据模型
//!
//! 字段命名沿用 Alpha Vantage GLOBAL_QUOTE 的原始键名，数值均为字符串

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// 行情查询参数
#[derive(Debug, Default)]
pub struct QuoteQuery {
    /// 股票代码（不区分大小写），保留调用方的原始输入
    pub symbol: Option<String>,
}

impl QuoteQuery {
    /// 从查询字符串解析，重复的 symbol 只取第一个
    pub fn from_query_string(query: &str) -> Self {
        let symbol = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| *key == "symbol")
            .map(|(_, value)| value.into_owned());
        Self { symbol }
    }

    /// 返回非空白的代码，内容不做修改
    pub fn symbol(&self) -> Option<&str> {
        self.symbol
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

/// 单只股票的行情快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    pub symbol: String,
    #[serde(rename = "02. open")]
    pub open: String,
    #[serde(rename = "03. high")]
    pub high: String,
    #[serde(rename = "04. low")]
    pub low: String,
    #[serde(rename = "05. price")]
    pub price: String,
    #[serde(rename = "06. volume")]
    pub volume: String,
    #[serde(rename = "07. latest trading day")]
    pub latest_trading_day: String,
    #[serde(rename = "08. previous close")]
    pub previous_close: String,
    #[serde(rename = "09. change")]
    pub change: String,
    #[serde(rename = "10. change percent")]
    pub change_percent: String,
}

/// 代理成功时返回的报文（即上游原始报文）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotePayload {
    #[serde(rename = "Global Quote")]
    pub global_quote: GlobalQuote,
}
