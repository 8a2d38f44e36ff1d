//! 行情页面
//!
//! 页面生命周期：Loading -> Error | Loaded。
//! 每个页面实例只调用一次行情代理，没有重试和轮询。

pub mod format;
pub mod render;

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::UPSTREAM_FAILURE;
use crate::models::{ErrorBody, GlobalQuote, QuotePayload};

/// 页面状态
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// 请求进行中
    Loading,
    /// 代理返回非 2xx，或请求本身失败（status 为 500）
    Error { status: u16, body: ErrorBody },
    /// 代理返回 200
    Loaded(GlobalQuote),
}

/// 行情代理客户端
pub struct ProxyClient {
    client: Client,
    endpoint: Url,
}

impl ProxyClient {
    /// `proxy_url` 为行情代理根地址，如 http://127.0.0.1:8080
    pub fn new(proxy_url: &str, upstream: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(upstream.timeout_secs))
            .connect_timeout(Duration::from_secs(upstream.connect_timeout_secs))
            .build()?;
        let endpoint = Url::parse(&format!("{}/quote", proxy_url.trim_end_matches('/')))?;

        Ok(Self { client, endpoint })
    }

    /// 调用代理并得到最终状态，不会返回 Loading
    pub async fn fetch(&self, symbol: &str) -> ViewState {
        match self.request(symbol).await {
            Ok(state) => state,
            Err(e) => {
                log::error!("调用行情代理失败: symbol={}, error={:#}", symbol, e);
                ViewState::Error {
                    status: 500,
                    body: ErrorBody::new(UPSTREAM_FAILURE),
                }
            }
        }
    }

    async fn request(&self, symbol: &str) -> anyhow::Result<ViewState> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("symbol", symbol)])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let payload: QuotePayload = response.json().await?;
            Ok(ViewState::Loaded(payload.global_quote))
        } else {
            let body: ErrorBody = response.json().await?;
            Ok(ViewState::Error {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// 单只股票的行情页面
pub struct QuoteView {
    symbol: String,
    state: ViewState,
}

impl QuoteView {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// 加载行情；已离开 Loading 的页面不会再次请求
    pub async fn load(&mut self, proxy: &ProxyClient) {
        if self.state != ViewState::Loading {
            return;
        }
        self.state = proxy.fetch(&self.symbol).await;
    }

    /// 页面对应的 HTTP 状态码
    pub fn status(&self) -> u16 {
        match &self.state {
            ViewState::Loading | ViewState::Loaded(_) => 200,
            ViewState::Error { status, .. } => *status,
        }
    }

    pub fn render(&self) -> String {
        let symbol = self.symbol.as_str();
        match &self.state {
            ViewState::Loading => render::render_loading(symbol),
            ViewState::Error { body, .. } => render::render_error(symbol, body),
            ViewState::Loaded(quote) => render::render_quote(symbol, quote),
        }
    }
}
