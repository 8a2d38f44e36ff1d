//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置，环境变量可覆盖关键字段

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// 上游行情接口配置（Alpha Vantage）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// 接口根地址，测试时指向模拟服务
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API Key（为空时上游会自然返回错误）
    #[serde(default)]
    pub api_key: String,
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// 行情页面配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    /// 行情代理地址（为空则使用本机监听端口）
    #[serde(default)]
    pub proxy_url: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_base_url() -> String { "https://www.alphavantage.co".to_string() }
fn default_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值，最后应用环境变量覆盖
    pub fn load() -> Self {
        let mut config = Self::load_file().unwrap_or_else(|| {
            log::info!("使用默认配置");
            Self::default()
        });
        config.apply_overrides(|name| env::var(name).ok());

        if config.upstream.api_key.is_empty() {
            log::warn!("未设置 ALPHA_VANTAGE_API_KEY，上游请求将会失败");
        }
        config
    }

    fn load_file() -> Option<Self> {
        let config_paths = ["config.json", "config/config.json"];

        for path in config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        log::info!("从 {} 加载配置成功", path);
                        return Some(config);
                    }
                    Err(e) => {
                        log::warn!("加载配置文件 {} 失败: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// 应用环境变量覆盖
    ///
    /// `lookup` 抽象了环境变量读取，便于测试
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("ALPHA_VANTAGE_API_KEY").filter(|v| !v.is_empty()) {
            self.upstream.api_key = key;
        }
        if let Some(url) = lookup("QUOTE_BASE_URL").filter(|v| !v.is_empty()) {
            self.upstream.base_url = url;
        }
        if let Some(port) = lookup("PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => log::warn!("忽略无效的 PORT 环境变量: {}", port),
            }
        }
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 行情页面调用的代理地址
    pub fn proxy_url(&self) -> String {
        if self.view.proxy_url.is_empty() {
            format!("http://127.0.0.1:{}", self.server.port)
        } else {
            self.view.proxy_url.trim_end_matches('/').to_string()
        }
    }
}
