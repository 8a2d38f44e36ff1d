//! 行情页面接口
//!
//! GET /stock/{symbol}：通过行情代理获取数据并渲染 HTML

use actix_web::{http::StatusCode, web, HttpResponse};

use crate::view::{ProxyClient, QuoteView};

pub async fn stock_page(
    proxy: web::Data<ProxyClient>,
    path: web::Path<String>,
) -> HttpResponse {
    let mut view = QuoteView::new(path.into_inner());
    view.load(&proxy).await;

    let status = StatusCode::from_u16(view.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(view.render())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/stock/{symbol}", web::get().to(stock_page));
}
