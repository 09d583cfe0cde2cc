use crate::common::Tone;

/// # Summary
/// 实时行情区域中的展示字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteField {
    Price,
    Open,
    High,
    Low,
    Volume,
    Time,
    Change,
}

/// # Summary
/// 实时行情展示区域契约，替代按元素 ID 查找页面节点。
///
/// # Invariants
/// - 实现必须是 `Send + Sync`，轮询任务在后台协程中调用。
/// - 所有方法都是同步的纯展示副作用，不允许阻塞。
pub trait QuoteView: Send + Sync {
    /// 写入某个字段的展示文本。
    fn set_field(&self, field: QuoteField, text: &str);

    /// 按涨跌色调为价格字段着色。
    fn set_price_tone(&self, tone: Tone);

    /// 在错误区域展示后端报告的业务错误。
    fn show_error(&self, message: &str);
}
