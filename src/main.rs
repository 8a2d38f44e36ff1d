//! 股票行情查询服务
//!
//! 提供行情代理接口和行情页面
//! 数据来源：Alpha Vantage GLOBAL_QUOTE

mod config;     // 配置加载
mod error;      // 错误类型
mod handlers;   // HTTP 请求处理器
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务
mod view;       // 行情页面

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::config::AppConfig;
use crate::services::QuoteService;
use crate::view::ProxyClient;

/// 应用程序入口
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统，默认日志级别为 info，可通过 RUST_LOG 调整
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::load();

    let quote_service = web::Data::new(QuoteService::new(&config.upstream)?);
    let proxy_client = web::Data::new(ProxyClient::new(&config.proxy_url(), &config.upstream)?);

    log::info!("启动行情查询服务: {}", config.bind_addr());

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(quote_service.clone())
            .app_data(proxy_client.clone())
            .configure(handlers::config)  // 配置路由
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(config.bind_addr())?.run().await?;
    Ok(())
}
