use serde::{Deserialize, Serialize};

/// # Summary
/// 单根 K 线，页面渲染时一次性嵌入，之后只读。
///
/// # Invariants
/// - 序列按时间先后排列，不去重。
/// - 均线字段由后端在 K 线页面附带，缺失或为 null 时为 None。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    // 周期时间 (后端格式化后的字符串)
    pub time: String,
    // 开盘价
    pub open: f64,
    // 最高价
    pub high: f64,
    // 最低价
    pub low: f64,
    // 收盘价
    pub close: f64,
    // 成交量
    pub volume: f64,
    // 成交额
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ma5: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ma10: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ma20: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ma60: Option<f64>,
}

impl Bar {
    /// 仅含 OHLCV 的 K 线。
    pub fn ohlcv(time: impl Into<String>, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time: time.into(),
            open,
            high,
            low,
            close,
            volume,
            amount: None,
            ma5: None,
            ma10: None,
            ma20: None,
            ma60: None,
        }
    }
}

/// # Summary
/// 最新实时行情快照，每次轮询整体替换，不在客户端持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// # Summary
/// `/api/realtime/{code}` 的响应体。
///
/// # Invariants
/// - 只要出现 `error` 字段即视为业务错误，优先于行情字段。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteReply {
    // 后端明确报告的业务错误 (例如未知代码)
    DomainError { error: String },
    // 正常行情
    Quote(Quote),
}

/// # Summary
/// `/update/{code}` 的响应体，表示后端数据刷新已完成。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateReply {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_reply_prefers_error_field() {
        let reply: QuoteReply =
            serde_json::from_str(r#"{"error":"股票代码不存在","close":1.0}"#).unwrap();
        assert_eq!(
            reply,
            QuoteReply::DomainError {
                error: "股票代码不存在".to_string()
            }
        );
    }

    #[test]
    fn test_quote_reply_decodes_quote() {
        let reply: QuoteReply = serde_json::from_str(
            r#"{"time":"2024-05-06 15:00:00","open":10.0,"high":11.0,"low":9.5,"close":10.8,"volume":1234567}"#,
        )
        .unwrap();
        assert_eq!(
            reply,
            QuoteReply::Quote(Quote {
                time: "2024-05-06 15:00:00".to_string(),
                open: 10.0,
                high: 11.0,
                low: 9.5,
                close: 10.8,
                volume: 1_234_567.0,
            })
        );
    }

    #[test]
    fn test_bar_accepts_kline_payload_extras() {
        let bars: Vec<Bar> = serde_json::from_str(
            r#"[{"time":"t0","open":1,"high":2,"low":0.5,"close":1.5,"volume":10,
                 "amount":15.5,"ma5":null,"ma10":1.2,"macd":0.01}]"#,
        )
        .unwrap();
        assert_eq!(bars[0].amount, Some(15.5));
        assert_eq!(bars[0].ma5, None);
        assert_eq!(bars[0].ma10, Some(1.2));
    }
}
