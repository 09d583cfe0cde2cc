//! # `kboard-page` - 页面交互胶水
//!
//! 页面加载时根据存在的标记元素决定启动实时轮询、绘制 K 线，
//! 并绑定下拉框自动提交、手动更新按钮与导航高亮。

pub mod binding;
pub mod controller;
pub mod nav;
pub mod update;
