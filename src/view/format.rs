//! 行情数值格式化
//!
//! 上游数值均为字符串，无法解析时原样显示

/// 涨跌方向，决定显示颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn css_class(self) -> &'static str {
        match self {
            Sign::Positive => "positive",
            Sign::Negative => "negative",
        }
    }
}

/// 解析数值，允许带百分号
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// 按数值符号判定方向，0 视为上涨
pub fn sign_of(raw: &str) -> Sign {
    match parse_number(raw) {
        Some(v) if v < 0.0 => Sign::Negative,
        _ => Sign::Positive,
    }
}

/// 金额保留两位小数，负号放在货币符号前：-$2.50
///
/// 先舍入再判断符号，-0.001 显示为 $0.00
pub fn format_money(raw: &str) -> String {
    match parse_number(raw) {
        Some(v) => {
            let cents = (v * 100.0).round();
            let sign = if cents < 0.0 { "-" } else { "" };
            format!("{}${:.2}", sign, cents.abs() / 100.0)
        }
        None => raw.to_string(),
    }
}

/// 成交量按千分位分组：1234567 -> 1,234,567
pub fn format_volume(raw: &str) -> String {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| parse_number(trimmed).map(|v| v.trunc() as i64));

    match value {
        Some(v) => group_thousands(v),
        None => raw.to_string(),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
