//! # `kboard-feed` - 后端 HTTP 适配器
//!
//! 通过 `reqwest` 实现 `MarketBackend`，访问实时行情与数据刷新两个接口。

pub mod http;
