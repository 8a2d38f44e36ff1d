//! 首页
//!
//! - GET / - 代码输入框和热门股票
//! - GET /stock?symbol=<S> - 表单提交，跳转到 /stock/{symbol}

use actix_web::{http::header, web, HttpRequest, HttpResponse};
use url::Url;

use crate::models::QuoteQuery;
use crate::view::render;

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render::render_search())
}

/// 表单提交的代码统一转为大写，空代码回到首页
pub async fn search(req: HttpRequest) -> HttpResponse {
    let query = QuoteQuery::from_query_string(req.query_string());
    let location = query
        .symbol()
        .and_then(|symbol| stock_path(&symbol.trim().to_uppercase()))
        .unwrap_or_else(|| "/".to_string());

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 生成行情页面路径，代码作为单个路径段编码
fn stock_path(symbol: &str) -> Option<String> {
    let mut url = Url::parse("http://localhost/stock").ok()?;
    url.path_segments_mut().ok()?.push(symbol);
    Some(url.path().to_string())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/stock", web::get().to(search));
}
