//! # `kboard-core` - 领域核心
//!
//! 定义 K 线看板客户端的实体、错误类型与端口 (Trait)。
//! 所有具体实现 (HTTP 后端、图表后端、页面控件) 都位于外层 crate，
//! 通过 `Arc<dyn Trait>` 在 `crates/app` 中注入。

pub mod common;
pub mod config;

pub mod market {
    pub mod entity;
    pub mod error;
    pub mod port;
}

pub mod chart {
    pub mod entity;
    pub mod error;
    pub mod port;
}

pub mod view {
    pub mod port;
}

pub mod page {
    pub mod port;
}

#[cfg(feature = "test-utils")]
pub mod testing;
