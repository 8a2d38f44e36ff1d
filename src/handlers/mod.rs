pub mod quote;
pub mod search;
pub mod stock_page;
pub mod health;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::config)
        .configure(search::config)
        .configure(quote::config)
        .configure(stock_page::config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    /// 行情页面的返回链接指向首页，首页必须可访问
    #[actix_web::test]
    async fn test_back_to_search_target_is_routed() {
        let app = test::init_service(App::new().configure(config)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
