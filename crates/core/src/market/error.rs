use thiserror::Error;

/// # Summary
/// 后端通讯错误枚举，只覆盖传输层与解析层问题。
///
/// # Invariants
/// - 业务错误 (`{ error }`) 不属于此枚举，见 `QuoteReply::DomainError`。
/// - 超时与其他网络错误不做区分，统一归入 `Network`。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    // 网络层错误，包含底层 HTTP 客户端错误信息
    #[error("Network error: {0}")]
    Network(String),
    // 非 2xx 响应
    #[error("HTTP status {0}")]
    Status(u16),
    // 响应体不是预期的 JSON
    #[error("Parse error: {0}")]
    Parse(String),
}
