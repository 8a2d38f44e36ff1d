//! 行情代理接口
//!
//! GET /quote?symbol=<S>
//!
//! | 情况 | 状态码 |
//! |---|---|
//! | 缺少 symbol | 400 |
//! | 上游限流 | 429 |
//! | 无数据 | 404 |
//! | 上游失败 | 500 |
//! | 成功 | 200，原样返回上游报文 |

use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::QuoteError;
use crate::models::QuoteQuery;
use crate::services::QuoteService;

pub async fn get_quote(
    service: web::Data<QuoteService>,
    req: HttpRequest,
) -> Result<HttpResponse, QuoteError> {
    // 重复的 symbol 取第一个值，任何查询串都返回 JSON
    let query = QuoteQuery::from_query_string(req.query_string());
    let symbol = query.symbol().ok_or(QuoteError::InvalidRequest)?;

    match service.get_global_quote(symbol).await {
        Ok(payload) => Ok(HttpResponse::Ok().json(payload)),
        Err(e) => {
            if let QuoteError::UpstreamUnavailable(cause) = &e {
                log::error!("获取行情失败: symbol={}, error={:#}", symbol, cause);
            }
            Err(e)
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/quote", web::get().to(get_quote));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;
    use crate::error::{RATE_LIMIT_REACHED, SYMBOL_REQUIRED, UPSTREAM_FAILURE};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn quote_json() -> Value {
        json!({
            "Global Quote": {
                "01. symbol": "MSFT",
                "02. open": "410.0000",
                "03. high": "415.5000",
                "04. low": "409.1000",
                "05. price": "414.7400",
                "06. volume": "18234567",
                "07. latest trading day": "2024-05-10",
                "08. previous close": "412.3200",
                "09. change": "2.4200",
                "10. change percent": "0.5869%"
            }
        })
    }

    fn service_for(base_url: String) -> web::Data<QuoteService> {
        let config = UpstreamConfig {
            base_url,
            api_key: "test-key".to_string(),
            ..UpstreamConfig::default()
        };
        web::Data::new(QuoteService::new(&config).unwrap())
    }

    /// 调用接口并返回状态码和 JSON 报文
    async fn call(service: web::Data<QuoteService>, uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(App::new().app_data(service).configure(config)).await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_missing_symbol_never_calls_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(quote_json()))
            .expect(0)
            .mount(&server)
            .await;

        for uri in ["/quote", "/quote?symbol=", "/quote?symbol=%20%20"] {
            let (status, body) = call(service_for(server.uri()), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
            assert_eq!(body, json!({ "error": SYMBOL_REQUIRED }));
        }
    }

    #[actix_web::test]
    async fn test_duplicate_symbol_uses_first_value() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("symbol", "AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(quote_json()))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) =
            call(service_for(server.uri()), "/quote?symbol=AAPL&symbol=MSFT").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, quote_json());
    }

    #[actix_web::test]
    async fn test_not_found_echoes_symbol_as_given() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("symbol", "zzzz "))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Global Quote": {} })))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = call(service_for(server.uri()), "/quote?symbol=zzzz%20").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"],
            "No data found for symbol \"zzzz \". Please check if the symbol is correct."
        );
    }

    #[actix_web::test]
    async fn test_valid_quote_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("symbol", "MSFT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(quote_json()))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = call(service_for(server.uri()), "/quote?symbol=MSFT").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, quote_json());
    }

    #[actix_web::test]
    async fn test_rate_limit_notice_returns_429() {
        let server = MockServer::start().await;
        let mut payload = quote_json();
        payload["Note"] = json!(
            "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day."
        );
        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload))
            .mount(&server)
            .await;

        let (status, body) = call(service_for(server.uri()), "/quote?symbol=MSFT").await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body, json!({ "error": RATE_LIMIT_REACHED, "isRateLimit": true }));
    }

    #[actix_web::test]
    async fn test_empty_quote_returns_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Global Quote": {} })))
            .mount(&server)
            .await;

        let (status, body) = call(service_for(server.uri()), "/quote?symbol=ZZZZ").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({
                "error": "No data found for symbol \"ZZZZ\". Please check if the symbol is correct."
            })
        );
    }

    #[actix_web::test]
    async fn test_upstream_error_status_returns_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let (status, body) = call(service_for(server.uri()), "/quote?symbol=MSFT").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": UPSTREAM_FAILURE }));
    }

    #[actix_web::test]
    async fn test_unreachable_upstream_returns_500() {
        let (status, body) =
            call(service_for("http://127.0.0.1:1".to_string()), "/quote?symbol=MSFT").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": UPSTREAM_FAILURE }));
    }
}
