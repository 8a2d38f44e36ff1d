//! 行情页面 HTML 渲染
//!
//! 仅输出语义化 HTML，颜色通过 positive / negative 两个样式类区分

use quick_xml::escape::escape;

use crate::models::{ErrorBody, GlobalQuote};

use super::format::{format_money, format_volume, sign_of};

const STYLE: &str = ".positive { color: #16a34a; } .negative { color: #dc2626; }";
const BACK_TO_SEARCH: &str = r#"<a class="back" href="/">&larr; Back to Search</a>"#;
const API_KEY_URL: &str = "https://www.alphavantage.co/support/#api-key";

/// 首页的热门股票
const POPULAR_TICKERS: [&str; 6] = ["AAPL", "MSFT", "GOOGL", "AMZN", "META", "TSLA"];

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

/// 首页：代码输入框和热门股票
pub fn render_search() -> String {
    let tickers = POPULAR_TICKERS
        .iter()
        .map(|ticker| format!("<li><a href=\"/stock/{0}\">{0}</a></li>", ticker))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        concat!(
            "<main>\n<h1>Stock Market Tracker</h1>\n",
            "<form action=\"/stock\" method=\"get\">\n",
            "<input type=\"text\" name=\"symbol\" placeholder=\"Enter stock symbol (e.g., AAPL)\" required>\n",
            "<button type=\"submit\">Search</button>\n",
            "</form>\n",
            "<section class=\"popular\">\n<h2>Popular Stocks</h2>\n<ul>\n{}\n</ul>\n</section>\n",
            "</main>"
        ),
        tickers
    );
    page("Stock Market Tracker", &body)
}

pub fn render_loading(symbol: &str) -> String {
    page(symbol, r#"<main><div class="loading">Loading...</div></main>"#)
}

pub fn render_error(symbol: &str, error: &ErrorBody) -> String {
    let guidance = if error.is_rate_limit {
        format!(
            concat!(
                "<div class=\"guidance\">\n",
                "<p>The free API tier is limited to 25 requests per day.</p>\n",
                "<p>Options:</p>\n",
                "<ul>\n",
                "<li>Try again tomorrow when the limit resets</li>\n",
                "<li>Get a new API key from <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Alpha Vantage</a></li>\n",
                "<li>Upgrade to a premium plan to remove the limit</li>\n",
                "</ul>\n",
                "</div>"
            ),
            API_KEY_URL
        )
    } else {
        "<p class=\"hint\">Please check if the symbol is correct and try again.</p>".to_string()
    };

    let body = format!(
        "<main>\n<div class=\"error\">{}</div>\n{}\n{}\n</main>",
        escape(&error.error),
        guidance,
        BACK_TO_SEARCH
    );
    page(symbol, &body)
}

pub fn render_quote(symbol: &str, quote: &GlobalQuote) -> String {
    let change_class = sign_of(&quote.change).css_class();
    let percent_class = sign_of(&quote.change_percent).css_class();

    let current = [
        row("Price", &format_money(&quote.price), None),
        row("Change", &format_money(&quote.change), Some(change_class)),
        row("Change Percent", &quote.change_percent, Some(percent_class)),
        row("Volume", &format_volume(&quote.volume), None),
        row("Latest Trading Day", &quote.latest_trading_day, None),
    ]
    .join("\n");

    let range = [
        row("Open", &format_money(&quote.open), None),
        row("High", &format_money(&quote.high), None),
        row("Low", &format_money(&quote.low), None),
        row("Previous Close", &format_money(&quote.previous_close), None),
    ]
    .join("\n");

    let body = format!(
        concat!(
            "<main>\n{}\n",
            "<h1>{} Stock Information</h1>\n",
            "<section class=\"current-quote\">\n<h2>Current Quote</h2>\n<dl>\n{}\n</dl>\n</section>\n",
            "<section class=\"trading-range\">\n<h2>Trading Range</h2>\n<dl>\n{}\n</dl>\n</section>\n",
            "</main>"
        ),
        BACK_TO_SEARCH,
        escape(symbol),
        current,
        range
    );
    page(&format!("{} Stock Information", symbol), &body)
}

fn row(label: &str, value: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(
            "<dt>{}:</dt><dd class=\"{}\">{}</dd>",
            label,
            class,
            escape(value)
        ),
        None => format!("<dt>{}:</dt><dd>{}</dd>", label, escape(value)),
    }
}
