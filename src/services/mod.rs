//! 业务逻辑服务模块
//!
//! 封装数据获取和处理逻辑

pub mod quote_service;    // 行情代理服务

pub use quote_service::QuoteService;
