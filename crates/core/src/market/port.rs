use crate::market::entity::{QuoteReply, UpdateReply};
use crate::market::error::FeedError;
use async_trait::async_trait;

/// # Summary
/// 外部后端的行为契约，只暴露页面用到的两个接口。
///
/// # Invariants
/// - 实现者不做重试，失败直接返回 `FeedError`，由调用方决定是否下个周期自愈。
#[async_trait]
pub trait MarketBackend: Send + Sync {
    /// # Summary
    /// 获取指定证券的最新实时行情。
    ///
    /// # Arguments
    /// * `code`: 证券代码 (例如 `sh000001`)。
    ///
    /// # Returns
    /// 成功返回行情或业务错误，传输失败返回 FeedError。
    async fn fetch_realtime(&self, code: &str) -> Result<QuoteReply, FeedError>;

    /// # Summary
    /// 触发后端刷新指定证券的数据。
    ///
    /// # Arguments
    /// * `code`: 证券代码。
    ///
    /// # Returns
    /// 成功返回后端提示消息。
    async fn request_update(&self, code: &str) -> Result<UpdateReply, FeedError>;
}
