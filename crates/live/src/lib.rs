//! # `kboard-live` - 实时行情轮询
//!
//! 启动后立即拉取一次实时行情，之后按固定周期重复；
//! 结果写入注入的 `QuoteView`，停止后不再发起请求也不再应用在途响应。

pub mod poller;
pub mod token;
