use kboard_core::market::error::FeedError;
use kboard_core::market::port::MarketBackend;
use kboard_core::page::port::{Browser, UpdateButton};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 请求进行中时按钮上的文字
pub const BUSY_LABEL: &str = "更新中...";

/// 一次手动更新的结果。
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    // 后端刷新完成，已提示并刷新页面
    Refreshed(String),
    // 请求失败，按钮已恢复，页面未刷新
    Failed(FeedError),
    // 按钮没有携带证券代码，未发请求
    MissingCode,
    // 按钮仍处于禁用状态 (上一次请求未结束)，点击被忽略
    Busy,
}

/// # Summary
/// 手动"更新数据"动作。
///
/// # Invariants
/// - 每次点击最多发出一次 `/update/{code}` 请求，代码取自被点击的按钮。
/// - 请求进行中按钮保持禁用，期间的重复点击不发请求。
/// - 无论成功失败，请求结束后按钮都恢复原文字与可用状态。
pub struct UpdateAction {
    backend: Arc<dyn MarketBackend>,
    browser: Arc<dyn Browser>,
}

impl UpdateAction {
    pub fn new(backend: Arc<dyn MarketBackend>, browser: Arc<dyn Browser>) -> Self {
        Self { backend, browser }
    }

    /// # Summary
    /// 处理更新按钮的点击。
    ///
    /// # Logic
    /// 1. 按钮已禁用时直接忽略。
    /// 2. 阻止默认导航。
    /// 3. 禁用按钮并显示忙碌文字。
    /// 4. 请求后端刷新该按钮的证券代码。
    /// 5. 恢复按钮原文字与可用状态。
    /// 6. 成功时提示后端消息并刷新页面；失败只记日志。
    pub async fn on_click(&self, button: &dyn UpdateButton) -> UpdateOutcome {
        if button.is_disabled() {
            debug!("Ignoring click on a disabled update button");
            return UpdateOutcome::Busy;
        }
        button.prevent_default();

        let Some(code) = button.code() else {
            warn!("Update button clicked without a stock code");
            return UpdateOutcome::MissingCode;
        };

        let original_label = button.label();
        button.set_label(BUSY_LABEL);
        button.set_disabled(true);

        let result = self.backend.request_update(&code).await;

        button.set_label(&original_label);
        button.set_disabled(false);

        match result {
            Ok(reply) => {
                info!("Data update for {} finished: {}", code, reply.message);
                self.browser.alert(&reply.message);
                self.browser.reload();
                UpdateOutcome::Refreshed(reply.message)
            }
            Err(e) => {
                warn!("Data update for {} failed: {}", code, e);
                UpdateOutcome::Failed(e)
            }
        }
    }
}
